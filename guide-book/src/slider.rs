//! Scrollbar thumb geometry.

use guide_core::Rectangle;

/// The thumb on `rail` for a scroll `progress` in `[0, 1]`.
pub fn thumb_rect(rail: &Rectangle, thumb_height: i32, progress: f32) -> Rectangle {
    let travel = (rail.height() - thumb_height).max(0);
    let y = rail.y0 + (progress.clamp(0.0, 1.0) * travel as f32).round() as i32;
    Rectangle::new(rail.x0, y, rail.width(), thumb_height.min(rail.height()))
}

/// Progress that centres the thumb on `mouse_y`, clamped to `[0, 1]`.
pub fn progress_at(rail: &Rectangle, thumb_height: i32, mouse_y: i32) -> f32 {
    let travel = rail.height() - thumb_height;
    if travel <= 0 {
        return 0.0;
    }
    let top = mouse_y - rail.y0 - thumb_height / 2;
    (top as f32 / travel as f32).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rail() -> Rectangle {
        Rectangle::new(672, 91, 12, 418)
    }

    #[test]
    fn test_thumb_ends() {
        assert_eq!(thumb_rect(&rail(), 15, 0.0), Rectangle::new(672, 91, 12, 15));
        assert_eq!(thumb_rect(&rail(), 15, 1.0).y1(), rail().y1());
        assert_eq!(thumb_rect(&rail(), 15, 7.0), thumb_rect(&rail(), 15, 1.0));
    }

    #[test]
    fn test_progress_at_inverts_thumb() {
        let thumb = thumb_rect(&rail(), 15, 0.5);
        let progress = progress_at(&rail(), 15, thumb.y0 + 7);
        assert!((progress - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_progress_clamped_outside_rail() {
        assert_eq!(progress_at(&rail(), 15, 0), 0.0);
        assert_eq!(progress_at(&rail(), 15, 10_000), 1.0);
    }

    #[test]
    fn test_short_rail() {
        let rail = Rectangle::new(0, 0, 12, 10);
        assert_eq!(progress_at(&rail, 15, 5), 0.0);
        assert_eq!(thumb_rect(&rail, 15, 0.5), Rectangle::new(0, 0, 12, 10));
    }
}
