use thiserror::Error;

/// Errors raised while building the static inputs of the guidebook
/// (atlas regions, configuration).  Drawing and parsing never fail.
#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Atlas region must have a positive size, got {width}x{height}")]
    InvalidAtlasRegion { width: i32, height: i32 },
    #[error("Atlas region ({x0}, {y0}, {width}x{height}) lies outside the {atlas_width}x{atlas_height} atlas")]
    RegionOutsideAtlas {
        x0: i32,
        y0: i32,
        width: i32,
        height: i32,
        atlas_width: u32,
        atlas_height: u32,
    },
    #[error("Nine-slice inner region must lie strictly inside the outer region")]
    InvalidNineSlice,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
