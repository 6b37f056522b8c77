//! Greedy word-wrap of parsed paragraphs into positioned lines.
//!
//! Coordinates are relative to the top-left of the page column; the
//! caller translates them into the visible area and applies scrolling.

use serde::Serialize;

use crate::markdown::Paragraph;
use crate::metrics::TextMetrics;

/// One laid-out line of text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlowLine {
    pub text: String,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Glyph scale; headers are drawn larger.
    pub scale: f32,
    pub header_level: Option<usize>,
}

/// The flowed page: its lines and total height.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FlowLayout {
    pub lines: Vec<FlowLine>,
    pub height: i32,
}

/// Glyph scale for a header of `level`: 2.0 for `#`, shrinking by a
/// quarter per level down to 1.0.
pub fn header_scale(level: usize) -> f32 {
    (2.0 - 0.25 * level.saturating_sub(1) as f32).max(1.0)
}

fn scaled(width: i32, scale: f32) -> i32 {
    (width as f32 * scale).ceil() as i32
}

/// Wrap `paragraphs` into lines no wider than `width` pixels.
///
/// A word wider than the column is put on a line of its own and allowed
/// to overflow.  Paragraphs are separated by half a line of space.  Line
/// widths are summed from word and space widths, so each word is measured
/// once.
pub fn flow_paragraphs(paragraphs: &[Paragraph], width: i32, metrics: &mut dyn TextMetrics) -> FlowLayout {
    let gap = metrics.line_height() / 2;
    let space = metrics.text_width(" ");
    let mut layout = FlowLayout::default();
    let mut y = 0;

    for (index, paragraph) in paragraphs.iter().enumerate() {
        if index > 0 {
            y += gap;
        }
        let level = paragraph.header_level();
        let scale = level.map_or(1.0, header_scale);
        let line_height = scaled(metrics.line_height(), scale);

        let mut current = String::new();
        // Unscaled width of `current`.
        let mut current_width = 0;
        for element in paragraph.elements() {
            let word = element.text();
            let word_width = metrics.text_width(word);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
                continue;
            }
            let candidate_width = current_width + space + word_width;
            if scaled(candidate_width, scale) > width {
                layout.lines.push(FlowLine {
                    text: std::mem::take(&mut current),
                    y,
                    width: scaled(current_width, scale),
                    height: line_height,
                    scale,
                    header_level: level,
                });
                y += line_height;
                if scaled(word_width, scale) > width {
                    log::trace!("Word {word:?} overflows a {width}px column");
                }
                current.push_str(word);
                current_width = word_width;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width = candidate_width;
            }
        }
        // Empty headers still take up a line.
        if !current.is_empty() || level.is_some() {
            layout.lines.push(FlowLine {
                text: current,
                y,
                width: scaled(current_width, scale),
                height: line_height,
                scale,
                header_level: level,
            });
            y += line_height;
        }
    }

    layout.height = y;
    layout
}

// ===================================================================
// Tests
// ===================================================================
