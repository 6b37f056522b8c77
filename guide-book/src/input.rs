//! Input vocabulary shared with the host event loop.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
    };
    pub const CTRL_SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: true,
    };
}

/// A clickable part of the book.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Widget {
    Slider,
    Home,
    AddBookmark,
    /// Bookmark tab by index.
    Tab(usize),
}
