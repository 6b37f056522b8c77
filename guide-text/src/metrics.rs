//! Text measurement capability.
//!
//! The host owns font rendering; the guidebook only needs to know how
//! wide a string is and how tall a line is.  [`FixedMetrics`] models a
//! fixed-cell bitmap font, [`CosmicMetrics`] shapes text with
//! `cosmic-text` for proportional fonts.

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};

/// Measures strings in screen pixels.
pub trait TextMetrics {
    /// Advance width of `text` on one line.
    fn text_width(&mut self, text: &str) -> i32;

    /// Height of one line of text.
    fn line_height(&self) -> i32;
}

impl<T: TextMetrics + ?Sized> TextMetrics for Box<T> {
    fn text_width(&mut self, text: &str) -> i32 {
        (**self).text_width(text)
    }

    fn line_height(&self) -> i32 {
        (**self).line_height()
    }
}

// ── Fixed cell font ─────────────────────────────────────────────────

/// Every character advances by the same width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedMetrics {
    pub advance: i32,
    pub line_height: i32,
}

impl Default for FixedMetrics {
    /// 6×12 cells, the size of the terminus font the guidebook ships with.
    fn default() -> Self {
        Self {
            advance: 6,
            line_height: 12,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn text_width(&mut self, text: &str) -> i32 {
        text.chars().count() as i32 * self.advance
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }
}

// ── Shaped font ─────────────────────────────────────────────────────

/// Measures with `cosmic-text` shaping against system fonts.
pub struct CosmicMetrics {
    font_system: FontSystem,
    metrics: Metrics,
    family: Family<'static>,
}

impl CosmicMetrics {
    pub fn new(font_size: f32, line_height: f32) -> Self {
        let font_system = FontSystem::new();
        log::debug!("Text metrics using {} font faces", font_system.db().len());
        Self {
            font_system,
            metrics: Metrics::new(font_size, line_height),
            family: Family::Monospace,
        }
    }
}

impl TextMetrics for CosmicMetrics {
    fn text_width(&mut self, text: &str) -> i32 {
        if text.is_empty() {
            return 0;
        }
        let mut buffer = Buffer::new(&mut self.font_system, self.metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(
            &mut self.font_system,
            text,
            Attrs::new().family(self.family),
            Shaping::Advanced,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);

        let width = buffer
            .layout_runs()
            .flat_map(|run| run.glyphs.iter().map(|g| g.x + g.w))
            .fold(0.0f32, f32::max);
        width.ceil() as i32
    }

    fn line_height(&self) -> i32 {
        self.metrics.line_height.ceil() as i32
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_counts_chars() {
        let mut m = FixedMetrics::default();
        assert_eq!(m.text_width(""), 0);
        assert_eq!(m.text_width("abc"), 18);
        // Multi-byte characters still take one cell.
        assert_eq!(m.text_width("äöü"), 18);
        assert_eq!(m.line_height(), 12);
    }

    #[test]
    fn test_boxed_metrics_delegate() {
        let mut m: Box<dyn TextMetrics> = Box::new(FixedMetrics::default());
        assert_eq!(m.text_width("abcd"), 24);
        assert_eq!(m.line_height(), 12);
    }

    #[test]
    fn test_cosmic_empty_is_zero() {
        let mut m = CosmicMetrics::new(12.0, 14.0);
        assert_eq!(m.text_width(""), 0);
        assert_eq!(m.line_height(), 14);
    }

    #[test]
    fn test_cosmic_longer_text_is_wider() {
        let mut m = CosmicMetrics::new(12.0, 14.0);
        let short = m.text_width("ab");
        let long = m.text_width("abcdefgh");
        assert!(short >= 0);
        assert!(long >= short);
    }
}
