//! Bookmark tabs.
//!
//! Tab data and tab buttons live in two lists that always have the same
//! length; index `i` of one belongs to index `i` of the other.  Tabs hold
//! only the page path: whether a tab is active and which colour it has
//! are looked up from the book when it is drawn.

use serde::Serialize;

/// What a bookmark points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub page: String,
}

/// Where a bookmark is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TabButton {
    pub x: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Bookmarks {
    tabs: Vec<Tab>,
    buttons: Vec<TabButton>,
    max_tabs: usize,
}

impl Bookmarks {
    pub fn new(max_tabs: usize) -> Self {
        Self {
            tabs: Vec::new(),
            buttons: Vec::new(),
            max_tabs,
        }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tabs.len() >= self.max_tabs
    }

    pub fn max_tabs(&self) -> usize {
        self.max_tabs
    }

    pub fn position(&self, page: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.page == page)
    }

    pub fn contains(&self, page: &str) -> bool {
        self.position(page).is_some()
    }

    pub fn get(&self, index: usize) -> Option<(&Tab, &TabButton)> {
        Some((self.tabs.get(index)?, self.buttons.get(index)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tab, &TabButton)> {
        self.tabs.iter().zip(&self.buttons)
    }

    /// Add a tab for `page`.  Returns false when one already points at it
    /// or the strip is full.
    pub fn add(&mut self, page: &str) -> bool {
        if self.contains(page) || self.is_full() {
            return false;
        }
        self.tabs.push(Tab { page: page.to_owned() });
        self.buttons.push(TabButton { x: 0 });
        log::debug!("Bookmarked {page} ({}/{})", self.tabs.len(), self.max_tabs);
        true
    }

    /// Remove the tab pointing at `page`, returning its former index.
    pub fn remove(&mut self, page: &str) -> Option<usize> {
        let index = self.position(page)?;
        self.tabs.remove(index);
        self.buttons.remove(index);
        log::debug!("Removed bookmark {page} at {index}");
        Some(index)
    }

    /// Place the buttons right to left, `x_of(i)` giving tab `i`'s x.
    pub fn layout(&mut self, x_of: impl Fn(usize) -> i32) {
        for (index, button) in self.buttons.iter_mut().enumerate() {
            button.x = x_of(index);
        }
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lock_step(b: &Bookmarks) {
        assert_eq!(b.tabs.len(), b.buttons.len());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut b = Bookmarks::new(10);
        assert!(b.add("/a.md"));
        assert!(!b.add("/a.md"));
        assert_eq!(b.len(), 1);
        assert_lock_step(&b);
    }

    #[test]
    fn test_add_respects_cap() {
        let mut b = Bookmarks::new(2);
        assert!(b.add("/a.md"));
        assert!(b.add("/b.md"));
        assert!(b.is_full());
        assert!(!b.add("/c.md"));
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_remove_keeps_indices_aligned() {
        let mut b = Bookmarks::new(10);
        for page in ["/a.md", "/b.md", "/c.md"] {
            b.add(page);
        }
        b.layout(|i| 100 - 10 * i as i32);
        assert_eq!(b.remove("/b.md"), Some(1));
        assert_lock_step(&b);
        assert_eq!(b.position("/c.md"), Some(1));
        // Buttons keep their stale x until the next layout.
        b.layout(|i| 100 - 10 * i as i32);
        let xs: Vec<_> = b.iter().map(|(_, button)| button.x).collect();
        assert_eq!(xs, vec![100, 90]);
    }

    #[test]
    fn test_remove_missing() {
        let mut b = Bookmarks::new(10);
        b.add("/a.md");
        assert_eq!(b.remove("/z.md"), None);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_mixed_sequence_lock_step() {
        let mut b = Bookmarks::new(3);
        let ops = [
            ("+", "/a"), ("+", "/b"), ("-", "/a"), ("+", "/c"), ("+", "/d"),
            ("+", "/e"), ("-", "/c"), ("-", "/c"), ("+", "/a"),
        ];
        for (op, page) in ops {
            match op {
                "+" => {
                    b.add(page);
                }
                _ => {
                    b.remove(page);
                }
            }
            assert_lock_step(&b);
            assert!(b.len() <= 3);
        }
        let pages: Vec<_> = b.iter().map(|(tab, _)| tab.page.as_str()).collect();
        assert_eq!(pages, vec!["/b", "/d", "/a"]);
    }
}
