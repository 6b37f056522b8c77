//! # guide-core
//!
//! Shared foundation of the guidebook screen: screen-space geometry, the
//! texture atlas model, configuration and errors.
//!
//! - [`geom`]: [`Rectangle`] value type
//! - [`atlas`]: atlas regions, nine-slices and the chrome sheet layout
//! - [`config`]: [`GuideConfig`] with JSON loading
//! - [`error`]: [`GuideError`]

pub mod atlas;
pub mod config;
pub mod error;
pub mod geom;

pub use atlas::{AtlasRegion, AtlasSize, Corner, Edge, GuideAtlas, NineSlice, TextureId};
pub use config::GuideConfig;
pub use error::GuideError;
pub use geom::Rectangle;

/// Draw ordering hints.  Higher values are drawn in front; the host does
/// not depth-test, so these only order batches.
pub mod z {
    pub const TOOLTIP: f32 = 20.0;
    pub const TITLE_BUTTONS: f32 = 15.0;
    pub const FRAME: f32 = 10.0;
    pub const TEXT: f32 = 5.0;
    pub const BACKGROUND: f32 = 0.0;
}

/// Packed `0xRRGGBB` colour, the format the host text renderer takes.
pub type Rgb = u32;
