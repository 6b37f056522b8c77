//! Atlas tiler: turns a destination rectangle and an atlas sprite into
//! textured quads.
//!
//! `stretch` maps the sprite onto the destination once.  `repeat` tiles
//! the sprite at its native size.  Each axis is cut into spans
//! independently (a leading partial, whole tiles, a trailing partial) and
//! the quads are the cartesian product of the row and column spans.
//!
//! ```text
//!   phase.x
//!   ├──┤
//!   ┌──┬──────┬──────┬───┐
//!   │LT│  T   │  T   │TR │   leading partials sample the far edge
//!   ├──┼──────┼──────┼───┤   of the sprite, trailing partials the
//!   │L │ full │ full │ R │   near edge, so the pattern stays
//!   ├──┼──────┼──────┼───┤   continuous across every seam
//!   │LB│  B   │  B   │BR │
//!   └──┴──────┴──────┴───┘
//! ```

use guide_core::{AtlasRegion, AtlasSize, Rectangle};

use crate::vertex::TexturedQuad;

// ───────────────────────────────────────────────────────────────────
// Spans
// ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanKind {
    /// Partial tile before the first tile boundary.
    Leading,
    Full,
    /// Partial tile after the last tile boundary.
    Trailing,
}

/// One run along an axis of the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSpan {
    /// Offset from the destination origin.
    pub offset: i32,
    pub len: i32,
    /// Offset into the sprite where sampling starts.
    pub src_offset: i32,
    pub kind: SpanKind,
}

/// Cut an axis of `extent` pixels into spans of a `tile` sized sprite whose
/// boundaries sit `phase` pixels past the origin (modulo the tile).
///
/// A `tile` of zero or less yields no spans; [`AtlasRegion`] never has one.
pub fn tile_spans(extent: i32, tile: i32, phase: i32) -> Vec<TileSpan> {
    let mut spans = Vec::new();
    if extent <= 0 || tile <= 0 {
        return spans;
    }
    let lead = phase.rem_euclid(tile);

    // The whole axis lies before the first boundary.
    if lead >= extent {
        spans.push(TileSpan {
            offset: 0,
            len: extent,
            src_offset: tile - lead,
            kind: SpanKind::Leading,
        });
        return spans;
    }

    if lead > 0 {
        spans.push(TileSpan {
            offset: 0,
            len: lead,
            src_offset: tile - lead,
            kind: SpanKind::Leading,
        });
    }
    let full = (extent - lead) / tile;
    let trailing = (extent - lead) % tile;
    spans.extend((0..full).map(|i| TileSpan {
        offset: lead + i * tile,
        len: tile,
        src_offset: 0,
        kind: SpanKind::Full,
    }));
    if trailing > 0 {
        spans.push(TileSpan {
            offset: lead + full * tile,
            len: trailing,
            src_offset: 0,
            kind: SpanKind::Trailing,
        });
    }
    spans
}

// ───────────────────────────────────────────────────────────────────
// AtlasTiler
// ───────────────────────────────────────────────────────────────────

/// Emits quads sampling one atlas texture.
#[derive(Clone, Copy, Debug, Default)]
pub struct AtlasTiler {
    pub atlas: AtlasSize,
}

impl AtlasTiler {
    pub fn new(atlas: AtlasSize) -> Self {
        Self { atlas }
    }

    /// Stretch `src` over `dest`.  Nothing is emitted for an empty `dest`.
    pub fn stretch(&self, dest: &Rectangle, src: &AtlasRegion, z: f32) -> Option<TexturedQuad> {
        if dest.is_empty() {
            return None;
        }
        Some(TexturedQuad::from_pixels(
            dest,
            z,
            [src.x0(), src.y0(), src.x1(), src.y1()],
            &self.atlas,
        ))
    }

    /// Tile `src` across `dest` at its native size.
    pub fn repeat(&self, dest: &Rectangle, src: &AtlasRegion, z: f32, phase: (i32, i32)) -> Vec<TexturedQuad> {
        let mut out = Vec::new();
        self.repeat_into(dest, src, z, phase, &mut out);
        out
    }

    /// [`repeat`](Self::repeat) appending to an existing batch.  Quads are
    /// emitted row by row, top to bottom and left to right.
    pub fn repeat_into(
        &self,
        dest: &Rectangle,
        src: &AtlasRegion,
        z: f32,
        phase: (i32, i32),
        out: &mut Vec<TexturedQuad>,
    ) {
        let columns = tile_spans(dest.width(), src.width(), phase.0);
        let rows = tile_spans(dest.height(), src.height(), phase.1);
        out.reserve(columns.len() * rows.len());

        for row in &rows {
            let v0 = src.y0() + row.src_offset;
            for column in &columns {
                let u0 = src.x0() + column.src_offset;
                let cell = Rectangle::new(
                    dest.x0 + column.offset,
                    dest.y0 + row.offset,
                    column.len,
                    row.len,
                );
                out.push(TexturedQuad::from_pixels(
                    &cell,
                    z,
                    [u0, v0, u0 + column.len, v0 + row.len],
                    &self.atlas,
                ));
            }
        }
    }

    /// Draw the part of an image occupying `body` that falls inside
    /// `visible`.  UVs are relative to the image itself, not the atlas.
    pub fn clip_to_visible(&self, body: &Rectangle, visible: &Rectangle, z: f32) -> Option<TexturedQuad> {
        let shown = body.overlap(visible);
        if shown.is_empty() {
            return None;
        }
        let (w, h) = (body.width() as f32, body.height() as f32);
        Some(TexturedQuad::with_uv(
            &shown,
            z,
            [
                (shown.x0 - body.x0) as f32 / w,
                (shown.y0 - body.y0) as f32 / h,
                (shown.x1() - body.x0) as f32 / w,
                (shown.y1() - body.y0) as f32 / h,
            ],
        ))
    }
}

// ===================================================================
// Tests
// ===================================================================
