//! Panel compositor: nine-slice panels assembled from atlas sprites.
//!
//! Every panel is a background fill over the inner rectangle followed by
//! four corners and four edges.  Border art is always stretched, since it
//! is authored at its final pixel size; the background is either tiled or
//! stretched depending on the panel's [`Fill`].

use guide_core::{z, AtlasRegion, Corner, Edge, GuideAtlas, GuideConfig, NineSlice, Rectangle};
use guide_text::TextMetrics;

use crate::frame::{TextCommand, NO_TINT};
use crate::tiler::AtlasTiler;
use crate::vertex::TexturedQuad;

/// The book frame split by layer: paper at [`z::BACKGROUND`], border art
/// at [`z::FRAME`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameQuads {
    pub background: Vec<TexturedQuad>,
    pub border: Vec<TexturedQuad>,
}

/// Padding between a tooltip's border and its text box.
const TOOLTIP_PADDING: i32 = 4;

// ───────────────────────────────────────────────────────────────────
// Panel description
// ───────────────────────────────────────────────────────────────────

/// How a panel's background covers its inner rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    /// Tile at native size, boundaries offset by `phase`.
    Repeat { phase: (i32, i32) },
    Stretch,
}

/// Sprites a panel is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelStyle {
    pub border: NineSlice,
    pub background: AtlasRegion,
    pub fill: Fill,
}

/// Screen placement of a panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderedPanel {
    pub outer: Rectangle,
    /// Side length of the corner pieces; edges are this thick.
    pub corner: i32,
    /// Distance from the outer edge to the background.
    pub background_inset: i32,
    pub z_background: f32,
    pub z_frame: f32,
}

impl BorderedPanel {
    pub fn background_rect(&self) -> Rectangle {
        self.outer.inset(self.background_inset)
    }

    pub fn corner_rect(&self, corner: Corner) -> Rectangle {
        let (o, c) = (&self.outer, self.corner);
        let x0 = match corner {
            Corner::TopLeft | Corner::BottomLeft => o.x0,
            Corner::TopRight | Corner::BottomRight => o.x1() - c,
        };
        let y0 = match corner {
            Corner::TopLeft | Corner::TopRight => o.y0,
            Corner::BottomLeft | Corner::BottomRight => o.y1() - c,
        };
        Rectangle::new(x0, y0, c, c)
    }

    /// Edge pieces span the outer rectangle minus both corners.
    pub fn edge_rect(&self, edge: Edge) -> Rectangle {
        let (o, c) = (&self.outer, self.corner);
        match edge {
            Edge::Top => Rectangle::from_corners(o.x0 + c, o.y0, o.x1() - c, o.y0 + c),
            Edge::Bottom => Rectangle::from_corners(o.x0 + c, o.y1() - c, o.x1() - c, o.y1()),
            Edge::Left => Rectangle::from_corners(o.x0, o.y0 + c, o.x0 + c, o.y1() - c),
            Edge::Right => Rectangle::from_corners(o.x1() - c, o.y0 + c, o.x1(), o.y1() - c),
        }
    }
}

// ───────────────────────────────────────────────────────────────────
// Button state
// ───────────────────────────────────────────────────────────────────

/// Which row of button art to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileState {
    Normal,
    Hovered,
    Disabled,
}

/// Indexed by `[enabled][hovered]`.  A disabled tile ignores hover.
const TILE_STATES: [[TileState; 2]; 2] = [
    [TileState::Disabled, TileState::Disabled],
    [TileState::Normal, TileState::Hovered],
];

impl TileState {
    pub fn from_flags(enabled: bool, hovered: bool) -> Self {
        TILE_STATES[enabled as usize][hovered as usize]
    }

    /// Art row on the atlas, counted in sprite heights below the first.
    pub fn row(self) -> i32 {
        match self {
            TileState::Normal => 0,
            TileState::Hovered => 1,
            TileState::Disabled => 2,
        }
    }
}

// ───────────────────────────────────────────────────────────────────
// Tooltip
// ───────────────────────────────────────────────────────────────────

/// A laid-out tooltip: its chrome and its text.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLayout {
    pub outer: Rectangle,
    pub inner: Rectangle,
    pub quads: Vec<TexturedQuad>,
    pub text: TextCommand,
}

/// Outer and inner rectangles of a tooltip centred on `x` with its top at
/// `y`, kept inside `[0, screen_width)` horizontally.
///
/// The right edge is fixed first and the left edge last, so a tooltip
/// wider than the screen is flush with the left edge.
pub fn tooltip_bounds(text_width: i32, line_height: i32, x: i32, y: i32, screen_width: i32) -> (Rectangle, Rectangle) {
    let width = text_width + 2 * TOOLTIP_PADDING;
    let height = line_height;
    let mut outer = Rectangle::new(
        x - width / 2 - TOOLTIP_PADDING,
        y,
        width + 2 * TOOLTIP_PADDING,
        height + 2 * TOOLTIP_PADDING,
    );
    if outer.x1() > screen_width {
        log::trace!("Tooltip overflows right edge by {}px", outer.x1() - screen_width);
        outer = outer.translate(screen_width - outer.x1(), 0);
    }
    if outer.x0 < 0 {
        log::trace!("Tooltip overflows left edge by {}px", -outer.x0);
        outer = outer.translate(-outer.x0, 0);
    }
    let inner = Rectangle::new(outer.x0 + TOOLTIP_PADDING, outer.y0 + TOOLTIP_PADDING, width, height);
    (outer, inner)
}

// ───────────────────────────────────────────────────────────────────
// Solid primitives
// ───────────────────────────────────────────────────────────────────

/// Line from `x0` to `x1` growing `thickness` pixels down from `y`.
pub fn horizontal_line(x0: i32, x1: i32, y: i32, thickness: i32) -> Rectangle {
    Rectangle::from_corners(x0, y, x1, y + thickness)
}

/// Line from `y0` to `y1` growing `thickness` pixels right of `x`.
pub fn vertical_line(x: i32, y0: i32, y1: i32, thickness: i32) -> Rectangle {
    Rectangle::from_corners(x, y0, x + thickness, y1)
}

/// One-pixel frame just outside `rect`: top, bottom, left, right.
pub fn outline(rect: &Rectangle) -> [Rectangle; 4] {
    [
        horizontal_line(rect.x0 - 1, rect.x1(), rect.y0 - 1, 1),
        horizontal_line(rect.x0, rect.x1() + 1, rect.y1(), 1),
        vertical_line(rect.x0 - 1, rect.y0, rect.y1() + 1, 1),
        vertical_line(rect.x1(), rect.y0 - 1, rect.y1(), 1),
    ]
}

/// Small plus sign above and right of the cursor.
pub fn link_indicator(mouse_x: i32, mouse_y: i32) -> [Rectangle; 2] {
    [
        vertical_line(mouse_x + 3, mouse_y - 5, mouse_y - 2, 1),
        horizontal_line(mouse_x + 2, mouse_x + 5, mouse_y - 4, 1),
    ]
}

// ───────────────────────────────────────────────────────────────────
// PanelCompositor
// ───────────────────────────────────────────────────────────────────

/// Builds the guidebook chrome from the atlas sheet.
#[derive(Clone, Debug)]
pub struct PanelCompositor {
    pub tiler: AtlasTiler,
    pub atlas: GuideAtlas,
}

impl PanelCompositor {
    pub fn new(atlas: GuideAtlas) -> Self {
        Self {
            tiler: AtlasTiler::new(atlas.size),
            atlas,
        }
    }

    /// Background, then corners (TL, TR, BL, BR), then edges (top,
    /// bottom, left, right).
    pub fn bordered_panel(&self, panel: &BorderedPanel, style: &PanelStyle, out: &mut Vec<TexturedQuad>) {
        self.panel_background(panel, style, out);
        self.panel_border(panel, style, out);
    }

    /// Only the background fill of a panel.
    pub fn panel_background(&self, panel: &BorderedPanel, style: &PanelStyle, out: &mut Vec<TexturedQuad>) {
        let background = panel.background_rect();
        match style.fill {
            Fill::Repeat { phase } => {
                self.tiler
                    .repeat_into(&background, &style.background, panel.z_background, phase, out);
            }
            Fill::Stretch => {
                out.extend(self.tiler.stretch(&background, &style.background, panel.z_background));
            }
        }
    }

    /// Only the corners and edges of a panel.
    pub fn panel_border(&self, panel: &BorderedPanel, style: &PanelStyle, out: &mut Vec<TexturedQuad>) {
        for corner in Corner::ALL {
            out.extend(
                self.tiler
                    .stretch(&panel.corner_rect(corner), &style.border.corner(corner), panel.z_frame),
            );
        }
        for edge in Edge::ALL {
            out.extend(
                self.tiler
                    .stretch(&panel.edge_rect(edge), &style.border.edge(edge), panel.z_frame),
            );
        }
    }

    /// The book frame around `outer` with the paper background inside.
    /// The two parts are kept apart so page text can be painted between
    /// them.
    pub fn frame(&self, outer: &Rectangle, config: &GuideConfig) -> FrameQuads {
        let panel = BorderedPanel {
            outer: *outer,
            corner: config.frame_corner(),
            background_inset: config.border_thickness,
            z_background: z::BACKGROUND,
            z_frame: z::FRAME,
        };
        let style = PanelStyle {
            border: self.atlas.frame,
            background: self.atlas.background,
            fill: Fill::Repeat {
                phase: config.background_phase,
            },
        };
        let mut quads = FrameQuads::default();
        self.panel_background(&panel, &style, &mut quads.background);
        self.panel_border(&panel, &style, &mut quads.border);
        quads
    }

    /// A button or tab tile.  `state` selects the art row for both the
    /// background and the border.
    pub fn tile(&self, rect: &Rectangle, z: f32, state: TileState, phase: (i32, i32), border: i32) -> Vec<TexturedQuad> {
        let row = state.row();
        let background = self.atlas.button_background;
        let slice = self.atlas.button_border;
        let style = PanelStyle {
            border: slice.offset(0, row * slice.outer().height()),
            background: background.offset(0, row * background.height()),
            fill: Fill::Repeat { phase },
        };
        let panel = BorderedPanel {
            outer: *rect,
            corner: border,
            background_inset: border,
            z_background: z,
            z_frame: z,
        };
        let mut out = Vec::new();
        self.bordered_panel(&panel, &style, &mut out);
        out
    }

    /// A sprite stretched over `rect`, e.g. a button icon.
    pub fn icon(&self, rect: &Rectangle, region: &AtlasRegion, z: f32) -> Option<TexturedQuad> {
        self.tiler.stretch(rect, region, z)
    }

    /// A boxed string centred on `x` below `y`.
    pub fn tooltip(
        &self,
        text: &str,
        x: i32,
        y: i32,
        screen_width: i32,
        metrics: &mut dyn TextMetrics,
    ) -> TooltipLayout {
        let (outer, inner) = tooltip_bounds(metrics.text_width(text), metrics.line_height(), x, y, screen_width);
        let panel = BorderedPanel {
            outer,
            corner: TOOLTIP_PADDING,
            background_inset: TOOLTIP_PADDING,
            z_background: z::TOOLTIP,
            z_frame: z::TOOLTIP,
        };
        let style = PanelStyle {
            border: self.atlas.tooltip,
            background: self.atlas.tooltip.inner(),
            fill: Fill::Stretch,
        };
        let mut quads = Vec::new();
        self.bordered_panel(&panel, &style, &mut quads);
        TooltipLayout {
            outer,
            inner,
            quads,
            text: TextCommand::plain(text, inner.x0 + TOOLTIP_PADDING, inner.y0 + 1, z::TOOLTIP, NO_TINT),
        }
    }

    /// The bar between page and slider: a one pixel cap above `area`, the
    /// stretched body, and a one pixel cap below.
    pub fn slider_separator(&self, area: &Rectangle) -> Vec<TexturedQuad> {
        if area.is_empty() {
            return Vec::new();
        }
        let src = &self.atlas.slider_separator;
        let size = &self.tiler.atlas;
        let (x0, x1) = (area.x0, area.x1());
        let (u0, u1) = (src.x0(), src.x1());
        vec![
            TexturedQuad::from_pixels(
                &Rectangle::from_corners(x0, area.y0 - 1, x1, area.y0),
                z::FRAME,
                [u0, src.y0() - 1, u1, src.y0()],
                size,
            ),
            TexturedQuad::from_pixels(area, z::FRAME, [u0, src.y0(), u1, src.y1()], size),
            TexturedQuad::from_pixels(
                &Rectangle::from_corners(x0, area.y1(), x1, area.y1() + 1),
                z::FRAME,
                [u0, src.y1(), u1, src.y1() + 1],
                size,
            ),
        ]
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use guide_core::AtlasSize;
    use guide_text::FixedMetrics;

    fn compositor() -> PanelCompositor {
        PanelCompositor::new(GuideAtlas::new(AtlasSize::default()).unwrap())
    }

    fn uv_pixels(q: &TexturedQuad) -> (i32, i32, i32, i32) {
        let px = |v: f32| (v * 256.0).round() as i32;
        (px(q.u0), px(q.v0), px(q.u1), px(q.v1))
    }

    #[test]
    fn test_tile_state_table() {
        assert_eq!(TileState::from_flags(true, false), TileState::Normal);
        assert_eq!(TileState::from_flags(true, true), TileState::Hovered);
        assert_eq!(TileState::from_flags(false, false), TileState::Disabled);
        // Disabled wins over hover.
        assert_eq!(TileState::from_flags(false, true), TileState::Disabled);
        assert_eq!(TileState::Disabled.row(), 2);
    }

    #[test]
    fn test_frame_order_and_corners() {
        let c = compositor();
        let outer = Rectangle::new(100, 75, 600, 450);
        let quads = c.frame(&outer, &GuideConfig::default());
        let (background, chrome) = (&quads.background, &quads.border);
        assert!(!background.is_empty());
        assert_eq!(chrome.len(), 8);
        assert!(background.iter().all(|q| q.z == z::BACKGROUND));
        assert!(chrome.iter().all(|q| q.z == z::FRAME));

        // Top-left corner: 22px of art at the outer corner.
        assert_eq!(chrome[0].rect(), Rectangle::new(100, 75, 22, 22));
        assert_eq!(uv_pixels(&chrome[0]), (0, 0, 22, 22));
        // Bottom-right corner.
        assert_eq!(chrome[3].rect(), Rectangle::new(678, 503, 22, 22));
        assert_eq!(uv_pixels(&chrome[3]), (42, 42, 64, 64));
        // Top edge spans between the corners.
        assert_eq!(chrome[4].rect(), Rectangle::from_corners(122, 75, 678, 97));
        assert_eq!(uv_pixels(&chrome[4]), (22, 0, 42, 22));
        // Right edge.
        assert_eq!(chrome[7].rect(), Rectangle::from_corners(678, 97, 700, 503));
    }

    #[test]
    fn test_frame_background_covers_inner() {
        let c = compositor();
        let outer = Rectangle::new(0, 0, 300, 200);
        let quads = c.frame(&outer, &GuideConfig::default());
        let background = &quads.background;
        let area: i64 = background.iter().map(|q| q.rect().area()).sum();
        assert_eq!(area, outer.inset(16).area());
        // Phase (7, 8): first quad is a 7x8 corner partial.
        assert_eq!(background[0].rect(), Rectangle::new(16, 16, 7, 8));
        assert_eq!(uv_pixels(&background[0]), (89, 24, 96, 32));
    }

    #[test]
    fn test_tile_hovered_row() {
        let c = compositor();
        let quads = c.tile(&Rectangle::new(10, 10, 24, 24), z::TITLE_BUTTONS, TileState::Hovered, (0, 0), 2);
        let chrome = &quads[quads.len() - 8..];
        // Border art one 16px row down.
        assert_eq!(uv_pixels(&chrome[0]), (0, 80, 2, 82));
        assert_eq!(chrome[0].rect(), Rectangle::new(10, 10, 2, 2));
        // Background one 32px row down.
        for q in &quads[..quads.len() - 8] {
            let (_, v0, _, v1) = uv_pixels(q);
            assert!(v0 >= 64 && v1 <= 96);
        }
        assert!(quads.iter().all(|q| q.z == z::TITLE_BUTTONS));
    }

    #[test]
    fn test_tile_disabled_row() {
        let c = compositor();
        let quads = c.tile(&Rectangle::new(0, 0, 16, 16), 1.0, TileState::Disabled, (0, 0), 2);
        let chrome = &quads[quads.len() - 8..];
        assert_eq!(uv_pixels(&chrome[0]), (0, 96, 2, 98));
    }

    #[test]
    fn test_tooltip_bounds_natural() {
        let (outer, inner) = tooltip_bounds(18, 12, 100, 50, 400);
        assert_eq!(outer, Rectangle::new(83, 50, 34, 20));
        assert_eq!(inner, Rectangle::new(87, 54, 26, 12));
    }

    #[test]
    fn test_tooltip_shifted_left_by_overflow() {
        let (outer, _) = tooltip_bounds(18, 12, 95, 0, 100);
        // Natural x1 is 112: shifted left by exactly 12.
        assert_eq!(outer.x0, 66);
        assert_eq!(outer.x1(), 100);
    }

    #[test]
    fn test_tooltip_shifted_right_at_left_edge() {
        let (outer, _) = tooltip_bounds(18, 12, 5, 0, 100);
        assert_eq!(outer.x0, 0);
    }

    #[test]
    fn test_tooltip_wider_than_screen_is_left_flush() {
        let (outer, _) = tooltip_bounds(18, 12, 10, 0, 20);
        assert_eq!(outer.x0, 0);
        assert!(outer.x1() > 20);
    }

    #[test]
    fn test_tooltip_layout() {
        let c = compositor();
        let mut metrics = FixedMetrics::default();
        let tooltip = c.tooltip("abc", 100, 50, 400, &mut metrics);
        assert_eq!(tooltip.quads.len(), 9);
        assert_eq!(tooltip.quads[0].rect(), tooltip.inner);
        assert_eq!(uv_pixels(&tooltip.quads[0]), (116, 36, 124, 44));
        assert_eq!((tooltip.text.x, tooltip.text.y), (91, 55));
        assert_eq!(tooltip.text.z, z::TOOLTIP);
    }

    #[test]
    fn test_slider_separator_caps() {
        let c = compositor();
        let quads = c.slider_separator(&Rectangle::new(500, 100, 17, 300));
        assert_eq!(quads.len(), 3);
        assert_eq!(quads[0].rect(), Rectangle::new(500, 99, 17, 1));
        assert_eq!(uv_pixels(&quads[0]), (96, 32, 112, 33));
        assert_eq!(uv_pixels(&quads[1]), (96, 33, 112, 63));
        assert_eq!(quads[2].rect(), Rectangle::new(500, 400, 17, 1));
        assert_eq!(uv_pixels(&quads[2]), (96, 63, 112, 64));
    }

    #[test]
    fn test_outline_surrounds_rect() {
        let [top, bottom, left, right] = outline(&Rectangle::new(10, 10, 20, 20));
        assert_eq!(top, Rectangle::from_corners(9, 9, 30, 10));
        assert_eq!(bottom, Rectangle::from_corners(10, 30, 31, 31));
        assert_eq!(left, Rectangle::from_corners(9, 10, 10, 31));
        assert_eq!(right, Rectangle::from_corners(30, 9, 31, 30));
    }

    #[test]
    fn test_link_indicator_is_plus() {
        let [vertical, horizontal] = link_indicator(100, 100);
        assert_eq!(vertical, Rectangle::new(103, 95, 1, 3));
        assert_eq!(horizontal, Rectangle::new(102, 96, 3, 1));
        assert!(vertical.intersects(&horizontal));
    }
}
