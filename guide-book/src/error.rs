use thiserror::Error;

use guide_core::GuideError;

#[derive(Error, Debug)]
pub enum BookError {
    #[error(transparent)]
    Guide(#[from] GuideError),
    #[error("Failed to read pages from {path}: {source}")]
    PageSource {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
