//! # guide-render
//!
//! Draw-command generation for the guidebook chrome.  Nothing here
//! touches the GPU; the output is plain data a host can upload.
//!
//! ## Architecture
//!
//! ```text
//!  Rectangle + AtlasRegion (guide-core)
//!       │
//!       ▼
//!  AtlasTiler::stretch / repeat      ◀─── one sprite → quads
//!       │
//!       ▼
//!  PanelCompositor                   ◀─── frame, button tiles, tooltip
//!       │
//!       ▼
//!  Frame                             ◀─── batched draw commands
//! ```
//!
//! ## Crate modules
//!
//! - [`vertex`]: `TexturedQuad` instance data and its `wgpu` layout
//! - [`tiler`]: stretch / repeat / clip of a single sprite
//! - [`panel`]: nine-slice panels and solid primitives
//! - [`frame`]: the per-frame command buffer

pub mod frame;
pub mod panel;
pub mod tiler;
pub mod vertex;

pub use frame::{DrawCommand, Frame, FrameStats, TextCommand, NO_TINT};
pub use panel::{BorderedPanel, Fill, FrameQuads, PanelCompositor, PanelStyle, TileState, TooltipLayout};
pub use tiler::{tile_spans, AtlasTiler, SpanKind, TileSpan};
pub use vertex::{TexVertex, TexturedQuad};
