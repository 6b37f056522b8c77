//! # guide-book
//!
//! The guidebook screen: which page is open, how far it is scrolled,
//! which pages are bookmarked, and what to draw this frame.
//!
//! ## Architecture
//!
//! ```text
//!  host input ──► GuideBook::mouse_clicked / drag_slider / set_page
//!                     │
//!                     ▼
//!          page cache (FxHashMap<path, SavedPage>)
//!          bookmarks (tabs + tab buttons)
//!          ViewportLayout (from screen size)
//!          TextMetrics (reflow on page switch and resize)
//!                     │
//!                     ▼
//!  GuideBook::render(mouse, tick) ──► Frame (guide-render)
//! ```
//!
//! - [`book`]: the controller
//! - [`page`]: `SavedPage`, `DrawablePage`, `TabColor`
//! - [`bookmarks`]: tab data and buttons
//! - [`viewport`]: rectangles derived from the screen size
//! - [`slider`]: scrollbar thumb geometry
//! - [`source`]: `PageSource` and the in-memory implementation
//! - [`input`]: mouse buttons, modifiers, widgets

pub mod book;
pub mod bookmarks;
pub mod error;
pub mod input;
pub mod page;
pub mod slider;
pub mod source;
pub mod viewport;

pub use book::GuideBook;
pub use bookmarks::{Bookmarks, Tab, TabButton};
pub use error::BookError;
pub use input::{Modifiers, MouseButton, Widget};
pub use page::{DrawablePage, SavedPage, TabColor};
pub use source::{MemoryPages, PageDocument, PageSource};
pub use viewport::ViewportLayout;
