//! Per-frame render buffer.
//!
//! The guidebook never talks to the GPU itself.  Every frame it fills a
//! [`Frame`] with draw commands in paint order; the host binds the named
//! texture, uploads the quads and issues one draw call per command.

use serde::Serialize;

use guide_core::{Rectangle, Rgb, TextureId};

use crate::vertex::TexturedQuad;

/// White: no tint.
pub const NO_TINT: Rgb = 0xFFFFFF;

/// A string for the host text renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextCommand {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub z: f32,
    pub color: Rgb,
    pub shadow: bool,
    pub scale: f32,
}

impl TextCommand {
    /// Unscaled text without a shadow.
    pub fn plain(text: impl Into<String>, x: i32, y: i32, z: f32, color: Rgb) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            z,
            color,
            shadow: false,
            scale: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Quads sampling one texture, multiplied by `tint`.
    Textured {
        texture: TextureId,
        tint: Rgb,
        quads: Vec<TexturedQuad>,
    },
    /// Untextured rectangles filled with `color`.
    Solid { color: Rgb, z: f32, rects: Vec<Rectangle> },
    Text(TextCommand),
}

/// Frame statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FrameStats {
    /// Textured quads across all batches.
    pub quad_count: u32,
    /// Solid rectangles across all batches.
    pub solid_count: u32,
    pub text_count: u32,
    /// One per command.
    pub draw_calls: u32,
}

/// Ordered draw commands for one frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Frame {
    commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append textured quads.  They join the previous batch when it uses
    /// the same texture and tint; an empty batch is dropped.
    pub fn push_textured(&mut self, texture: TextureId, tint: Rgb, quads: impl IntoIterator<Item = TexturedQuad>) {
        let mut quads = quads.into_iter().peekable();
        if quads.peek().is_none() {
            return;
        }
        if let Some(DrawCommand::Textured {
            texture: last_texture,
            tint: last_tint,
            quads: batch,
        }) = self.commands.last_mut()
        {
            if *last_texture == texture && *last_tint == tint {
                batch.extend(quads);
                return;
            }
        }
        self.commands.push(DrawCommand::Textured {
            texture,
            tint,
            quads: quads.collect(),
        });
    }

    /// Append solid rectangles, merging with a previous batch of the same
    /// colour and z.  Empty rectangles are skipped.
    pub fn push_solid(&mut self, color: Rgb, z: f32, rects: impl IntoIterator<Item = Rectangle>) {
        let mut rects = rects.into_iter().filter(|r| !r.is_empty()).peekable();
        if rects.peek().is_none() {
            return;
        }
        if let Some(DrawCommand::Solid {
            color: last_color,
            z: last_z,
            rects: batch,
        }) = self.commands.last_mut()
        {
            if *last_color == color && *last_z == z {
                batch.extend(rects);
                return;
            }
        }
        self.commands.push(DrawCommand::Solid {
            color,
            z,
            rects: rects.collect(),
        });
    }

    /// Append a string.  Empty strings are skipped.
    pub fn push_text(&mut self, text: TextCommand) {
        if !text.text.is_empty() {
            self.commands.push(DrawCommand::Text(text));
        }
    }

    pub fn stats(&self) -> FrameStats {
        let mut stats = FrameStats {
            draw_calls: self.commands.len() as u32,
            ..FrameStats::default()
        };
        for command in &self.commands {
            match command {
                DrawCommand::Textured { quads, .. } => stats.quad_count += quads.len() as u32,
                DrawCommand::Solid { rects, .. } => stats.solid_count += rects.len() as u32,
                DrawCommand::Text(_) => stats.text_count += 1,
            }
        }
        stats
    }

    /// All textured quads in paint order, regardless of texture.
    pub fn quads(&self) -> impl Iterator<Item = &TexturedQuad> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Textured { quads, .. } => Some(quads),
                _ => None,
            })
            .flatten()
    }

    /// All text commands in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextCommand> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(x: i32) -> TexturedQuad {
        TexturedQuad::with_uv(&Rectangle::new(x, 0, 4, 4), 0.0, [0.0, 0.0, 1.0, 1.0])
    }

    #[test]
    fn test_same_texture_and_tint_merge() {
        let mut frame = Frame::new();
        frame.push_textured(TextureId::GUIDE_BOOK, NO_TINT, [quad(0)]);
        frame.push_textured(TextureId::GUIDE_BOOK, NO_TINT, [quad(4), quad(8)]);
        assert_eq!(frame.commands().len(), 1);
        assert_eq!(frame.stats().quad_count, 3);
    }

    #[test]
    fn test_tint_change_splits_batch() {
        let mut frame = Frame::new();
        frame.push_textured(TextureId::GUIDE_BOOK, NO_TINT, [quad(0)]);
        frame.push_textured(TextureId::GUIDE_BOOK, 0xFF0000, [quad(4)]);
        frame.push_textured(TextureId(7), 0xFF0000, [quad(8)]);
        assert_eq!(frame.stats().draw_calls, 3);
    }

    #[test]
    fn test_text_between_batches_splits() {
        let mut frame = Frame::new();
        frame.push_textured(TextureId::GUIDE_BOOK, NO_TINT, [quad(0)]);
        frame.push_text(TextCommand::plain("hi", 0, 0, 5.0, NO_TINT));
        frame.push_textured(TextureId::GUIDE_BOOK, NO_TINT, [quad(4)]);
        let stats = frame.stats();
        assert_eq!(stats.draw_calls, 3);
        assert_eq!(stats.text_count, 1);
        assert_eq!(frame.quads().count(), 2);
        assert_eq!(frame.texts().next().map(|t| t.text.as_str()), Some("hi"));
    }

    #[test]
    fn test_empty_pushes_ignored() {
        let mut frame = Frame::new();
        frame.push_textured(TextureId::GUIDE_BOOK, NO_TINT, Vec::new());
        frame.push_solid(NO_TINT, 1.0, [Rectangle::new(0, 0, 0, 5)]);
        frame.push_text(TextCommand::plain("", 0, 0, 0.0, NO_TINT));
        assert!(frame.is_empty());
        assert_eq!(frame.stats(), FrameStats::default());
    }

    #[test]
    fn test_solid_merge_requires_same_z() {
        let mut frame = Frame::new();
        frame.push_solid(0xFFFFFF, 20.0, [Rectangle::new(0, 0, 1, 3)]);
        frame.push_solid(0xFFFFFF, 20.0, [Rectangle::new(0, 0, 3, 1)]);
        frame.push_solid(0xFFFFFF, 5.0, [Rectangle::new(0, 0, 3, 1)]);
        assert_eq!(frame.commands().len(), 2);
        assert_eq!(frame.stats().solid_count, 3);
    }

    #[test]
    fn test_frame_serializes_tagged() {
        let mut frame = Frame::new();
        frame.push_text(TextCommand::plain("title", 1, 2, 15.0, 0xFFFFFF));
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains(r#""kind":"text""#));
        assert!(json.contains(r#""text":"title""#));
    }
}
