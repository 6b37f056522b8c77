//! Texture atlas model.
//!
//! The guidebook draws every piece of chrome from one texture sheet.  A
//! sprite on that sheet is an [`AtlasRegion`] in pixel space; the
//! [`AtlasSize`] converts pixel coordinates into normalized UVs.
//! Border art is described by a [`NineSlice`]: an outer region and an
//! inner region whose difference gives four corners and four edges.

use serde::{Deserialize, Serialize};

use crate::error::GuideError;

/// Identifier of a texture bound by the host before a batch is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TextureId(pub u32);

impl TextureId {
    /// The guidebook chrome sheet.
    pub const GUIDE_BOOK: TextureId = TextureId(0);
}

// ───────────────────────────────────────────────────────────────────
// AtlasSize
// ───────────────────────────────────────────────────────────────────

/// Pixel dimensions of an atlas texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for AtlasSize {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
        }
    }
}

impl AtlasSize {
    /// Multiplier mapping a pixel column to a U coordinate.
    #[inline(always)]
    pub fn u_scale(&self) -> f32 {
        1.0 / self.width as f32
    }

    /// Multiplier mapping a pixel row to a V coordinate.
    #[inline(always)]
    pub fn v_scale(&self) -> f32 {
        1.0 / self.height as f32
    }

    /// Check that `region` fits on this sheet.
    pub fn check(&self, region: &AtlasRegion) -> Result<(), GuideError> {
        let fits = region.x0 >= 0
            && region.y0 >= 0
            && region.x1() as i64 <= self.width as i64
            && region.y1() as i64 <= self.height as i64;
        if fits {
            Ok(())
        } else {
            Err(GuideError::RegionOutsideAtlas {
                x0: region.x0,
                y0: region.y0,
                width: region.width,
                height: region.height,
                atlas_width: self.width,
                atlas_height: self.height,
            })
        }
    }
}

// ───────────────────────────────────────────────────────────────────
// AtlasRegion
// ───────────────────────────────────────────────────────────────────

/// A sprite on the atlas, in pixels.  Always has a positive size, so
/// tiling arithmetic can take remainders modulo its width and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AtlasRegion {
    x0: i32,
    y0: i32,
    width: i32,
    height: i32,
}

impl AtlasRegion {
    pub fn new(x0: i32, y0: i32, width: i32, height: i32) -> Result<Self, GuideError> {
        if width <= 0 || height <= 0 {
            return Err(GuideError::InvalidAtlasRegion { width, height });
        }
        Ok(Self::sized(x0, y0, width, height))
    }

    /// Caller guarantees a positive size.
    const fn sized(x0: i32, y0: i32, width: i32, height: i32) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
        }
    }

    #[inline(always)]
    pub fn x0(&self) -> i32 {
        self.x0
    }

    #[inline(always)]
    pub fn y0(&self) -> i32 {
        self.y0
    }

    #[inline(always)]
    pub fn x1(&self) -> i32 {
        self.x0 + self.width
    }

    #[inline(always)]
    pub fn y1(&self) -> i32 {
        self.y0 + self.height
    }

    #[inline(always)]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The same sprite shifted on the sheet, e.g. to pick a state row.
    #[inline]
    pub fn offset(self, du: i32, dv: i32) -> Self {
        Self::sized(self.x0 + du, self.y0 + dv, self.width, self.height)
    }

    fn contains_strictly(&self, inner: &AtlasRegion) -> bool {
        inner.x0 > self.x0 && inner.y0 > self.y0 && inner.x1() < self.x1() && inner.y1() < self.y1()
    }
}

// ───────────────────────────────────────────────────────────────────
// NineSlice
// ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Emission order used by the panel compositor.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Emission order used by the panel compositor.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// Border art cut from an outer region around an inner region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NineSlice {
    outer: AtlasRegion,
    inner: AtlasRegion,
}

impl NineSlice {
    pub fn new(outer: AtlasRegion, inner: AtlasRegion) -> Result<Self, GuideError> {
        if !outer.contains_strictly(&inner) {
            return Err(GuideError::InvalidNineSlice);
        }
        Ok(Self { outer, inner })
    }

    /// Nine-slice with a uniform border of `thickness` pixels.
    pub fn uniform(outer: AtlasRegion, thickness: i32) -> Result<Self, GuideError> {
        let inner = AtlasRegion::new(
            outer.x0 + thickness,
            outer.y0 + thickness,
            outer.width - 2 * thickness,
            outer.height - 2 * thickness,
        )?;
        Self::new(outer, inner)
    }

    pub fn outer(&self) -> AtlasRegion {
        self.outer
    }

    pub fn inner(&self) -> AtlasRegion {
        self.inner
    }

    /// Shift both regions on the sheet.
    pub fn offset(self, du: i32, dv: i32) -> Self {
        Self {
            outer: self.outer.offset(du, dv),
            inner: self.inner.offset(du, dv),
        }
    }

    pub fn corner(&self, corner: Corner) -> AtlasRegion {
        let (o, i) = (&self.outer, &self.inner);
        let (u0, u1) = match corner {
            Corner::TopLeft | Corner::BottomLeft => (o.x0, i.x0),
            Corner::TopRight | Corner::BottomRight => (i.x1(), o.x1()),
        };
        let (v0, v1) = match corner {
            Corner::TopLeft | Corner::TopRight => (o.y0, i.y0),
            Corner::BottomLeft | Corner::BottomRight => (i.y1(), o.y1()),
        };
        AtlasRegion::sized(u0, v0, u1 - u0, v1 - v0)
    }

    pub fn edge(&self, edge: Edge) -> AtlasRegion {
        let (o, i) = (&self.outer, &self.inner);
        let (u0, v0, u1, v1) = match edge {
            Edge::Top => (i.x0, o.y0, i.x1(), i.y0),
            Edge::Bottom => (i.x0, i.y1(), i.x1(), o.y1()),
            Edge::Left => (o.x0, i.y0, i.x0, i.y1()),
            Edge::Right => (i.x1(), i.y0, o.x1(), i.y1()),
        };
        AtlasRegion::sized(u0, v0, u1 - u0, v1 - v0)
    }
}

// ───────────────────────────────────────────────────────────────────
// GuideAtlas: the chrome sheet
// ───────────────────────────────────────────────────────────────────

/// Sprite locations on the guidebook texture sheet.
#[derive(Clone, Debug)]
pub struct GuideAtlas {
    pub texture: TextureId,
    pub size: AtlasSize,
    /// Book frame, 16px border plus 6px shadow.
    pub frame: NineSlice,
    /// Paper pattern tiled behind the page.
    pub background: AtlasRegion,
    pub slider_separator: AtlasRegion,
    /// Button fill; further state rows follow below it.
    pub button_background: AtlasRegion,
    /// Button border; further state rows follow below it.
    pub button_border: NineSlice,
    pub tooltip: NineSlice,
    pub home_icon: AtlasRegion,
    /// Add-bookmark icon; further state columns follow to its right.
    pub add_bookmark_icon: AtlasRegion,
}

impl GuideAtlas {
    pub fn new(size: AtlasSize) -> Result<Self, GuideError> {
        let frame_outer = AtlasRegion::new(0, 0, 64, 64)?;
        let button_border = AtlasRegion::new(0, 64, 16, 16)?;
        let tooltip = NineSlice::new(AtlasRegion::new(112, 32, 16, 16)?, AtlasRegion::new(116, 36, 8, 8)?)?;
        let atlas = Self {
            texture: TextureId::GUIDE_BOOK,
            size,
            frame: NineSlice::uniform(frame_outer, 22)?,
            background: AtlasRegion::new(64, 0, 32, 32)?,
            slider_separator: AtlasRegion::new(96, 33, 16, 30)?,
            button_background: AtlasRegion::new(64, 32, 32, 32)?,
            button_border: NineSlice::uniform(button_border, 2)?,
            tooltip,
            home_icon: AtlasRegion::new(128, 0, 16, 16)?,
            add_bookmark_icon: AtlasRegion::new(192, 0, 16, 16)?,
        };
        for region in [
            atlas.frame.outer(),
            atlas.background,
            atlas.slider_separator,
            atlas.button_background,
            atlas.button_border.outer(),
            atlas.tooltip.outer(),
            atlas.home_icon,
            atlas.add_bookmark_icon,
        ] {
            size.check(&region)?;
        }
        Ok(atlas)
    }
}

// ===================================================================
// Tests
// ===================================================================
