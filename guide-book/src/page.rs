//! Per-page state kept for the whole session.

use serde::Serialize;

use guide_core::Rgb;
use guide_text::{flow_paragraphs, parse_paragraphs, FlowLayout, Paragraph, TextMetrics};

use crate::source::PageDocument;

// ───────────────────────────────────────────────────────────────────
// TabColor
// ───────────────────────────────────────────────────────────────────

/// Bookmark tab tint, one of the sixteen dye colours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TabColor {
    #[default]
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl TabColor {
    pub const ALL: [TabColor; 16] = [
        TabColor::White,
        TabColor::Orange,
        TabColor::Magenta,
        TabColor::LightBlue,
        TabColor::Yellow,
        TabColor::Lime,
        TabColor::Pink,
        TabColor::Gray,
        TabColor::LightGray,
        TabColor::Cyan,
        TabColor::Purple,
        TabColor::Blue,
        TabColor::Brown,
        TabColor::Green,
        TabColor::Red,
        TabColor::Black,
    ];

    pub fn rgb(self) -> Rgb {
        match self {
            TabColor::White => 0xF9FFFE,
            TabColor::Orange => 0xF9801D,
            TabColor::Magenta => 0xC74EBD,
            TabColor::LightBlue => 0x3AB3DA,
            TabColor::Yellow => 0xFED83D,
            TabColor::Lime => 0x80C71F,
            TabColor::Pink => 0xF38BAA,
            TabColor::Gray => 0x474F52,
            TabColor::LightGray => 0x9D9D97,
            TabColor::Cyan => 0x169C9C,
            TabColor::Purple => 0x8932B8,
            TabColor::Blue => 0x3C44AA,
            TabColor::Brown => 0x835432,
            TabColor::Green => 0x5E7C16,
            TabColor::Red => 0xB02E26,
            TabColor::Black => 0x1D1D21,
        }
    }

    /// Next colour in dye order, wrapping; `inverted` steps backwards.
    pub fn cycle(self, inverted: bool) -> Self {
        let len = Self::ALL.len();
        let index = self as usize;
        let next = if inverted { (index + len - 1) % len } else { (index + 1) % len };
        Self::ALL[next]
    }
}

// ───────────────────────────────────────────────────────────────────
// DrawablePage
// ───────────────────────────────────────────────────────────────────

/// Parsed page text and its most recent flow.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DrawablePage {
    paragraphs: Vec<Paragraph>,
    layout: FlowLayout,
    #[serde(skip)]
    flowed_width: Option<i32>,
}

impl DrawablePage {
    pub fn parse(markdown: &str) -> Self {
        Self {
            paragraphs: parse_paragraphs(markdown),
            ..Self::default()
        }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn layout(&self) -> &FlowLayout {
        &self.layout
    }

    /// Content height of the last flow; zero before the first one.
    pub fn height(&self) -> i32 {
        self.layout.height
    }

    /// Re-flow into a column `width` pixels wide.  Does nothing when the
    /// page was already flowed at that width.
    pub fn reflow(&mut self, width: i32, metrics: &mut dyn TextMetrics) {
        if self.flowed_width == Some(width) {
            return;
        }
        self.layout = flow_paragraphs(&self.paragraphs, width, metrics);
        self.flowed_width = Some(width);
        log::trace!(
            "Flowed {} paragraphs into {} lines, {}px tall",
            self.paragraphs.len(),
            self.layout.lines.len(),
            self.layout.height
        );
    }
}

// ───────────────────────────────────────────────────────────────────
// SavedPage
// ───────────────────────────────────────────────────────────────────

/// Everything remembered about a visited page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SavedPage {
    path: String,
    pub title: String,
    pub color: TabColor,
    progress: f32,
    scroll_offset: i32,
    pub drawable: DrawablePage,
}

impl SavedPage {
    /// A fresh entry.  A missing document gives an empty page titled by
    /// its path.
    pub fn new(path: impl Into<String>, document: Option<PageDocument>) -> Self {
        let path = path.into();
        let (title, drawable) = match document {
            Some(doc) => (doc.title.unwrap_or_else(|| path.clone()), DrawablePage::parse(&doc.markdown)),
            None => (path.clone(), DrawablePage::default()),
        };
        Self {
            path,
            title,
            color: TabColor::default(),
            progress: 0.0,
            scroll_offset: 0,
            drawable,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether `path` names this page.  Bookmarks compare by path.
    pub fn is_same_page(&self, path: &str) -> bool {
        self.path == path
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Clamped to `[0, 1]`; NaN resets to the top.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Pixels the content can scroll within a view `visible_height` tall.
    pub fn scroll_range(&self, visible_height: i32) -> i32 {
        (self.drawable.height() - visible_height).max(0)
    }

    /// Recompute the pixel offset from the progress.
    pub fn update_scroll(&mut self, visible_height: i32) {
        self.scroll_offset = (self.progress * self.scroll_range(visible_height) as f32).round() as i32;
    }

    pub fn cycle_color(&mut self, inverted: bool) {
        self.color = self.color.cycle(inverted);
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use guide_text::FixedMetrics;

    #[test]
    fn test_color_cycle_wraps() {
        assert_eq!(TabColor::White.cycle(false), TabColor::Orange);
        assert_eq!(TabColor::Black.cycle(false), TabColor::White);
        assert_eq!(TabColor::White.cycle(true), TabColor::Black);
        let mut color = TabColor::Cyan;
        for _ in 0..16 {
            color = color.cycle(false);
        }
        assert_eq!(color, TabColor::Cyan);
    }

    #[test]
    fn test_color_order_matches_all() {
        for (i, color) in TabColor::ALL.iter().enumerate() {
            assert_eq!(*color as usize, i);
        }
    }

    #[test]
    fn test_missing_document_is_empty_page() {
        let page = SavedPage::new("/nowhere.md", None);
        assert_eq!(page.title, "/nowhere.md");
        assert!(page.drawable.paragraphs().is_empty());
        assert_eq!(page.progress(), 0.0);
    }

    #[test]
    fn test_title_falls_back_to_path() {
        let doc = PageDocument {
            title: None,
            markdown: "text".into(),
        };
        assert_eq!(SavedPage::new("/p.md", Some(doc)).title, "/p.md");
    }

    #[test]
    fn test_same_page_by_path() {
        let page = SavedPage::new("/a.md", None);
        assert!(page.is_same_page("/a.md"));
        assert!(!page.is_same_page("/b.md"));
    }

    #[test]
    fn test_progress_clamped() {
        let mut page = SavedPage::new("/a.md", None);
        page.set_progress(1.5);
        assert_eq!(page.progress(), 1.0);
        page.set_progress(-0.2);
        assert_eq!(page.progress(), 0.0);
        page.set_progress(f32::NAN);
        assert_eq!(page.progress(), 0.0);
    }

    #[test]
    fn test_scroll_offset_from_progress() {
        let markdown = (0..20).map(|i| format!("line {i}\n\n")).collect::<String>();
        let mut page = SavedPage::new("/long.md", Some(PageDocument::from_markdown(markdown)));
        let mut metrics = FixedMetrics::default();
        page.drawable.reflow(200, &mut metrics);
        // 20 lines of 12px plus 19 gaps of 6px.
        assert_eq!(page.drawable.height(), 354);
        page.set_progress(0.5);
        page.update_scroll(100);
        assert_eq!(page.scroll_offset(), 127);
        page.update_scroll(1000);
        assert_eq!(page.scroll_offset(), 0);
    }

    #[test]
    fn test_reflow_skips_same_width() {
        let mut page = DrawablePage::parse("one two three four");
        let mut metrics = FixedMetrics::default();
        page.reflow(1000, &mut metrics);
        assert_eq!(page.layout().lines.len(), 1);
        page.reflow(40, &mut metrics);
        assert_eq!(page.layout().lines.len(), 4);
    }
}
