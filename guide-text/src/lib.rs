//! # guide-text
//!
//! Page text for the guidebook: parsing raw page source into paragraphs
//! and flowing them into lines of a given width.
//!
//! ## Architecture
//!
//! ```text
//! raw page source
//!     │
//!     ▼
//! parse_paragraphs() ──► Vec<Paragraph>
//!     │
//!     ▼
//! flow_paragraphs(width, &mut dyn TextMetrics) ──► FlowLayout { lines, height }
//! ```
//!
//! - **`markdown`**: header / text paragraph segmenter.
//! - **`metrics`**: the host's text measuring capability.
//! - **`flow`**: greedy word wrap.

pub mod flow;
pub mod markdown;
pub mod metrics;

pub use flow::{flow_paragraphs, FlowLayout, FlowLine};
pub use markdown::{parse_paragraphs, split_to_inline_elements, InlineElement, Paragraph};
pub use metrics::{CosmicMetrics, FixedMetrics, TextMetrics};
