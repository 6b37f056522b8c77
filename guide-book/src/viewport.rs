//! Screen layout of the book, derived from the screen size.
//!
//! ```text
//!                             [+][tab][tab][home]
//!   ┌───────────────────────────────────────────┐  ◀ outer (6/8 of screen)
//!   │ ┌───────────────────────────────┬──┬───┐  │  ◀ inner (outer − border)
//!   │ │  visible area                 │▒▒│ ▓ │  │
//!   │ │                               │▒▒│   │  │  ▒ slider separator
//!   │ │                               │▒▒│   │  │  ▓ slider rail
//!   │ └───────────────────────────────┴──┴───┘  │
//!   └───────────────────────────────────────────┘
//! ```

use serde::Serialize;

use guide_core::{GuideConfig, Rectangle};

/// Distance between the right edge of the frame and the first tab.
const TAB_STRIP_MARGIN: i32 = 2;
/// Side of the add-bookmark button.
const ADD_BUTTON_SIZE: i32 = 16;
/// Gap between the add-bookmark button and the first free tab slot.
const ADD_BUTTON_MARGIN: i32 = 20;
/// How far the add-bookmark button rises above the frame.
const ADD_BUTTON_RISE: i32 = 18;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ViewportLayout {
    pub screen_width: i32,
    pub screen_height: i32,
    pub outer: Rectangle,
    pub inner: Rectangle,
    pub slider_separator: Rectangle,
    pub slider_rail: Rectangle,
    pub visible_area: Rectangle,
    pub home_button: Rectangle,
    /// X of the first (rightmost) tab; later tabs sit one tab width left.
    pub tab_origin_x: i32,
    tab_width: i32,
    tab_height: i32,
    full_tab_height: i32,
}

impl ViewportLayout {
    pub fn compute(screen_width: i32, screen_height: i32, config: &GuideConfig) -> Self {
        let outer = Rectangle::new(
            screen_width / 8,
            screen_height / 8,
            screen_width * 6 / 8,
            screen_height * 6 / 8,
        );
        let inner = outer.inset(config.border_thickness);
        let shadow = config.shadow_thickness;
        let separator = config.separator_thickness;
        let slider = config.slider_width;

        let slider_separator = Rectangle::new(
            inner.x1() - slider - separator - shadow,
            inner.y0,
            2 * shadow + separator,
            inner.height(),
        );
        let slider_rail = Rectangle::new(inner.x1() - slider, inner.y0, slider, inner.height());
        let visible_area = Rectangle::new(
            inner.x0 + shadow,
            inner.y0,
            inner.width() - 2 * shadow - slider - separator,
            inner.height(),
        );
        let home_button = Rectangle::new(
            outer.x1() - config.tab_width,
            outer.y0 - config.tab_height,
            config.tab_width,
            config.full_tab_height,
        );

        Self {
            screen_width,
            screen_height,
            outer,
            inner,
            slider_separator,
            slider_rail,
            visible_area,
            home_button,
            tab_origin_x: outer.x1() - TAB_STRIP_MARGIN - 2 * config.tab_width,
            tab_width: config.tab_width,
            tab_height: config.tab_height,
            full_tab_height: config.full_tab_height,
        }
    }

    /// X of the tab at `index`, counted from the right.
    pub fn tab_x(&self, index: usize) -> i32 {
        self.tab_origin_x - index as i32 * self.tab_width
    }

    /// Tab rising from the top of the frame; the active tab stands taller.
    pub fn tab_rect(&self, x: i32, active: bool) -> Rectangle {
        let height = if active { self.full_tab_height } else { self.tab_height };
        Rectangle::new(x, self.outer.y0 - height, self.tab_width, height)
    }

    /// The add-bookmark button sits in the next free tab slot.
    pub fn add_bookmark_button(&self, tab_count: usize) -> Rectangle {
        Rectangle::new(
            self.outer.x1() - ADD_BUTTON_MARGIN - self.tab_width - tab_count as i32 * self.tab_width,
            self.outer.y0 - ADD_BUTTON_RISE,
            ADD_BUTTON_SIZE,
            ADD_BUTTON_SIZE,
        )
    }
}

// ===================================================================
// Tests
// ===================================================================
