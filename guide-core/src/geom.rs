//! Screen-space rectangles.
//!
//! All layout in the guidebook is expressed in integer screen pixels with
//! the origin at the top-left and Y growing downward.  `Rectangle` is a
//! plain value type: every operation returns a fresh copy, so layout code
//! never shares scratch storage between owners.

use serde::Serialize;

// ───────────────────────────────────────────────────────────────────
// Rectangle
// ───────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle stored as origin + size.
///
/// Width and height are never negative; constructors clamp them to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rectangle {
    pub x0: i32,
    pub y0: i32,
    width: i32,
    height: i32,
}

impl Rectangle {
    /// Create from origin + size.  Negative sizes are clamped to zero.
    #[inline]
    pub fn new(x0: i32, y0: i32, width: i32, height: i32) -> Self {
        Self {
            x0,
            y0,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Create from two corners.  A far corner before the near one yields
    /// an empty rectangle anchored at the near corner.
    #[inline]
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    #[inline(always)]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Right edge (exclusive).
    #[inline(always)]
    pub fn x1(&self) -> i32 {
        self.x0 + self.width
    }

    /// Bottom edge (exclusive).
    #[inline(always)]
    pub fn y1(&self) -> i32 {
        self.y0 + self.height
    }

    #[inline]
    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Same size, new origin.
    #[inline]
    pub fn with_position(self, x0: i32, y0: i32) -> Self {
        Self { x0, y0, ..self }
    }

    /// Same origin, new size.
    #[inline]
    pub fn with_size(self, width: i32, height: i32) -> Self {
        Self::new(self.x0, self.y0, width, height)
    }

    #[inline]
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x0: self.x0 + dx,
            y0: self.y0 + dy,
            ..self
        }
    }

    /// Shrink by `amount` on every side.  Shrinking past the centre leaves
    /// an empty rectangle.
    #[inline]
    pub fn inset(self, amount: i32) -> Self {
        Self::new(
            self.x0 + amount,
            self.y0 + amount,
            self.width - 2 * amount,
            self.height - 2 * amount,
        )
    }

    /// Intersection of two rectangles.  Disjoint inputs produce an empty
    /// rectangle clamped to the overlap origin.
    pub fn overlap(&self, other: &Rectangle) -> Rectangle {
        let x0 = self.x0.max(other.x0);
        let y0 = self.y0.max(other.y0);
        let x1 = self.x1().min(other.x1());
        let y1 = self.y1().min(other.y1());
        Rectangle::from_corners(x0, y0, x1, y1)
    }

    /// True when the two rectangles share a non-empty area.
    #[inline]
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !self.overlap(other).is_empty()
    }

    /// Point test: left/top edges inclusive, right/bottom exclusive.
    #[inline(always)]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x0 && px < self.x1() && py >= self.y0 && py < self.y1()
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_size_clamped() {
        let r = Rectangle::new(5, 5, -10, 3);
        assert_eq!(r.width(), 0);
        assert_eq!(r.height(), 3);
        assert!(r.is_empty());
    }

    #[test]
    fn test_derived_edges() {
        let r = Rectangle::new(10, 20, 30, 40);
        assert_eq!(r.x1(), 40);
        assert_eq!(r.y1(), 60);
        assert_eq!(r.area(), 1200);
    }

    #[test]
    fn test_from_corners_reversed_is_empty() {
        let r = Rectangle::from_corners(10, 10, 5, 20);
        assert_eq!(r.x0, 10);
        assert_eq!(r.width(), 0);
        assert_eq!(r.height(), 10);
    }

    #[test]
    fn test_with_position_keeps_size() {
        let r = Rectangle::new(1, 2, 3, 4).with_position(-7, 9);
        assert_eq!(r, Rectangle::new(-7, 9, 3, 4));
    }

    #[test]
    fn test_with_size_keeps_origin() {
        let r = Rectangle::new(5, -6, 3, 4).with_size(20, 30);
        assert_eq!((r.x0, r.y0, r.width(), r.height()), (5, -6, 20, 30));
        // Negative sizes clamp like `new`.
        let r = Rectangle::new(5, -6, 3, 4).with_size(-2, 8);
        assert_eq!((r.x0, r.y0, r.width(), r.height()), (5, -6, 0, 8));
        assert!(r.is_empty());
    }

    #[test]
    fn test_translate() {
        let r = Rectangle::new(0, 0, 10, 10).translate(-3, 4);
        assert_eq!((r.x0, r.y0, r.x1(), r.y1()), (-3, 4, 7, 14));
    }

    #[test]
    fn test_inset() {
        let r = Rectangle::new(0, 0, 100, 50).inset(16);
        assert_eq!(r, Rectangle::new(16, 16, 68, 18));
        assert!(Rectangle::new(0, 0, 10, 10).inset(6).is_empty());
    }

    #[test]
    fn test_overlap_partial() {
        let a = Rectangle::new(0, 0, 10, 10);
        let b = Rectangle::new(5, -5, 10, 10);
        assert_eq!(a.overlap(&b), Rectangle::new(5, 0, 5, 5));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_overlap_disjoint_is_empty() {
        let a = Rectangle::new(0, 0, 10, 10);
        let b = Rectangle::new(20, 20, 5, 5);
        let o = a.overlap(&b);
        assert!(o.is_empty());
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_touching_rectangles_do_not_intersect() {
        let a = Rectangle::new(0, 0, 10, 10);
        let b = Rectangle::new(10, 0, 10, 10);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains_edges() {
        let r = Rectangle::new(0, 0, 10, 10);
        assert!(r.contains(0, 0));
        assert!(r.contains(9, 9));
        assert!(!r.contains(10, 5));
        assert!(!r.contains(5, 10));
        assert!(!r.contains(-1, 5));
    }
}
