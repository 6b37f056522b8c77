//! Draw-command geometry for textured quads.
//!
//! A [`TexturedQuad`] is a purely descriptive rectangle plus the atlas
//! UVs to sample.  It derives `bytemuck::Pod` so a host can upload a
//! batch straight into an instance buffer, or expand each quad into four
//! [`TexVertex`]es for a quad-list pipeline.

use bytemuck::{Pod, Zeroable};
use serde::Serialize;
use wgpu::{BufferAddress, VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use guide_core::{AtlasSize, Rectangle};

// ───────────────────────────────────────────────────────────────────
// TexturedQuad (instance data)
// ───────────────────────────────────────────────────────────────────

/// One textured rectangle in screen space.
///
/// 48 bytes per quad.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize)]
pub struct TexturedQuad {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    /// Ordering hint, not depth-tested.
    pub z: f32,
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
    /// Padding for 16-byte alignment.
    #[serde(skip)]
    pub _pad: [f32; 3],
}

impl TexturedQuad {
    /// Map the atlas pixel rectangle `(u0, v0)–(u1, v1)` onto `dest`.
    pub fn from_pixels(dest: &Rectangle, z: f32, uv: [i32; 4], atlas: &AtlasSize) -> Self {
        let (su, sv) = (atlas.u_scale(), atlas.v_scale());
        Self {
            x0: dest.x0 as f32,
            y0: dest.y0 as f32,
            x1: dest.x1() as f32,
            y1: dest.y1() as f32,
            z,
            u0: uv[0] as f32 * su,
            v0: uv[1] as f32 * sv,
            u1: uv[2] as f32 * su,
            v1: uv[3] as f32 * sv,
            _pad: [0.0; 3],
        }
    }

    /// Quad with already-normalized UVs.
    pub fn with_uv(dest: &Rectangle, z: f32, uv: [f32; 4]) -> Self {
        Self {
            x0: dest.x0 as f32,
            y0: dest.y0 as f32,
            x1: dest.x1() as f32,
            y1: dest.y1() as f32,
            z,
            u0: uv[0],
            v0: uv[1],
            u1: uv[2],
            v1: uv[3],
            _pad: [0.0; 3],
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Screen rectangle covered by this quad.
    pub fn rect(&self) -> Rectangle {
        Rectangle::from_corners(self.x0 as i32, self.y0 as i32, self.x1 as i32, self.y1 as i32)
    }

    /// Four vertices in quad-list order: bottom-left, bottom-right,
    /// top-right, top-left.
    pub fn vertices(&self) -> [TexVertex; 4] {
        [
            TexVertex { position: [self.x0, self.y1, self.z], uv: [self.u0, self.v1] },
            TexVertex { position: [self.x1, self.y1, self.z], uv: [self.u1, self.v1] },
            TexVertex { position: [self.x1, self.y0, self.z], uv: [self.u1, self.v0] },
            TexVertex { position: [self.x0, self.y0, self.z], uv: [self.u0, self.v0] },
        ]
    }

    pub fn layout() -> VertexBufferLayout<'static> {
        static ATTRS: &[VertexAttribute] = &[
            // location(0) = x0, y0, x1, y1
            VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: VertexFormat::Float32x4,
            },
            // location(1) = z
            VertexAttribute {
                offset: 16,
                shader_location: 1,
                format: VertexFormat::Float32,
            },
            // location(2) = u0, v0, u1, v1
            VertexAttribute {
                offset: 20,
                shader_location: 2,
                format: VertexFormat::Float32x4,
            },
        ];
        VertexBufferLayout {
            array_stride: std::mem::size_of::<TexturedQuad>() as BufferAddress,
            step_mode: VertexStepMode::Instance,
            attributes: ATTRS,
        }
    }
}

// ───────────────────────────────────────────────────────────────────
// TexVertex
// ───────────────────────────────────────────────────────────────────

/// Position + texture coordinate, the per-vertex form of a quad.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TexVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl TexVertex {
    pub fn layout() -> VertexBufferLayout<'static> {
        static ATTRS: &[VertexAttribute] = &[
            VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: VertexFormat::Float32x3,
            },
            VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: VertexFormat::Float32x2,
            },
        ];
        VertexBufferLayout {
            array_stride: std::mem::size_of::<TexVertex>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: ATTRS,
        }
    }
}

// ===================================================================
// Tests
// ===================================================================
