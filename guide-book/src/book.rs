//! The guidebook screen controller.
//!
//! Owns every piece of mutable state of the screen: the page cache, the
//! active page, the bookmark strip and the viewport layout, plus the
//! host's text metrics so page content can be reflowed as soon as the
//! page or the screen changes.  The host forwards input to it between
//! frames and calls [`GuideBook::render`] once per frame.

use rustc_hash::FxHashMap;

use guide_core::{z, GuideAtlas, GuideConfig, Rectangle, Rgb};
use guide_render::panel::{link_indicator, outline};
use guide_render::{Frame, PanelCompositor, TextCommand, TileState, NO_TINT};
use guide_text::TextMetrics;

use crate::bookmarks::Bookmarks;
use crate::error::BookError;
use crate::input::{Modifiers, MouseButton, Widget};
use crate::page::SavedPage;
use crate::slider;
use crate::source::PageSource;
use crate::viewport::ViewportLayout;

const TITLE_COLOR: Rgb = 0xFFFFFF;
const PAGE_TEXT_COLOR: Rgb = 0xFFFFFF;
const LINK_INDICATOR_COLOR: Rgb = 0xFFFFFF;
const WIREFRAME_COLOR: Rgb = 0xFF0000;
/// Title baseline below the top of the frame.
const TITLE_OFFSET: i32 = 4;

fn load_page(source: &impl PageSource, path: &str) -> SavedPage {
    let document = source.load(path);
    if document.is_none() {
        log::warn!("No source for page {path}, showing it empty");
    }
    SavedPage::new(path, document)
}

pub struct GuideBook<S, M> {
    config: GuideConfig,
    compositor: PanelCompositor,
    source: S,
    /// Visited pages other than the active one, kept for the session.
    pages: FxHashMap<String, SavedPage>,
    active: SavedPage,
    bookmarks: Bookmarks,
    layout: ViewportLayout,
    metrics: M,
}

impl<S: PageSource, M: TextMetrics> GuideBook<S, M> {
    /// Open the book on the main menu page.
    pub fn new(
        config: GuideConfig,
        source: S,
        metrics: M,
        screen_width: i32,
        screen_height: i32,
    ) -> Result<Self, BookError> {
        config.validate()?;
        let compositor = PanelCompositor::new(GuideAtlas::new(config.atlas)?);
        let active = load_page(&source, &config.main_menu);
        let mut book = Self {
            bookmarks: Bookmarks::new(config.max_tabs),
            layout: ViewportLayout::default(),
            config,
            compositor,
            source,
            pages: FxHashMap::default(),
            active,
            metrics,
        };
        book.resize(screen_width, screen_height);
        Ok(book)
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    pub fn layout(&self) -> &ViewportLayout {
        &self.layout
    }

    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    pub fn active_page(&self) -> &SavedPage {
        &self.active
    }

    /// A cached page, active or not.
    pub fn page(&self, path: &str) -> Option<&SavedPage> {
        if self.active.path() == path {
            Some(&self.active)
        } else {
            self.pages.get(path)
        }
    }

    /// Number of pages visited this session.
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    // ── Pages and scrolling ─────────────────────────────────────────

    /// Make `path` the active page, loading it on first visit.
    pub fn set_page(&mut self, path: &str) {
        if self.active.path() != path {
            let next = self
                .pages
                .remove(path)
                .unwrap_or_else(|| load_page(&self.source, path));
            let previous = std::mem::replace(&mut self.active, next);
            self.pages.insert(previous.path().to_owned(), previous);
            log::debug!("Switched to page {path} ({} cached)", self.page_count());
        }
        self.refresh_active();
    }

    pub fn set_scroll_progress(&mut self, progress: f32) {
        self.active.set_progress(progress);
        self.refresh_active();
    }

    /// Flow the active page into the visible column and derive its scroll
    /// offset.  Reflowing is skipped while the column width is unchanged.
    fn refresh_active(&mut self) {
        let visible = self.layout.visible_area;
        self.active.drawable.reflow(visible.width(), &mut self.metrics);
        self.active.update_scroll(visible.height());
    }

    /// Recompute every derived rectangle for a new screen size.
    pub fn resize(&mut self, screen_width: i32, screen_height: i32) {
        self.layout = ViewportLayout::compute(screen_width, screen_height, &self.config);
        self.relayout_tabs();
        self.refresh_active();
        log::debug!("Guide book resized to {screen_width}x{screen_height}");
    }

    fn relayout_tabs(&mut self) {
        let layout = self.layout;
        self.bookmarks.layout(|index| layout.tab_x(index));
    }

    // ── Bookmarks ───────────────────────────────────────────────────

    /// Bookmark `path`.  No-op when a tab already points at it or the
    /// strip is full.
    pub fn add_bookmark(&mut self, path: &str) -> bool {
        if !self.bookmarks.add(path) {
            return false;
        }
        if self.page(path).is_none() {
            let page = load_page(&self.source, path);
            self.pages.insert(path.to_owned(), page);
        }
        self.relayout_tabs();
        true
    }

    pub fn remove_bookmark(&mut self, path: &str) -> bool {
        let removed = self.bookmarks.remove(path).is_some();
        if removed {
            self.relayout_tabs();
        }
        removed
    }

    /// Screen rectangle of tab `index`, taller when its page is active.
    pub fn tab_rect(&self, index: usize) -> Option<Rectangle> {
        let (tab, button) = self.bookmarks.get(index)?;
        Some(self.layout.tab_rect(button.x, self.active.is_same_page(&tab.page)))
    }

    /// Left click opens an inactive tab's page.  Right click on the active
    /// tab cycles its colour (backwards with shift) or, with ctrl+shift,
    /// removes it.
    pub fn click_tab(&mut self, index: usize, button: MouseButton, modifiers: Modifiers) -> bool {
        let Some((tab, _)) = self.bookmarks.get(index) else {
            return false;
        };
        let page = tab.page.clone();
        let is_active = self.active.is_same_page(&page);
        match button {
            MouseButton::Left if !is_active => {
                self.set_page(&page);
                true
            }
            MouseButton::Right if is_active => {
                if modifiers.ctrl && modifiers.shift {
                    self.remove_bookmark(&page)
                } else {
                    self.active.cycle_color(modifiers.shift);
                    true
                }
            }
            _ => false,
        }
    }

    // ── Button state ────────────────────────────────────────────────

    pub fn home_visible(&self) -> bool {
        self.active.path() != self.config.main_menu
    }

    pub fn add_bookmark_visible(&self) -> bool {
        self.home_visible() && !self.bookmarks.is_full()
    }

    pub fn add_bookmark_enabled(&self) -> bool {
        !self.bookmarks.contains(self.active.path())
    }

    pub fn slider_enabled(&self) -> bool {
        self.active.drawable.height() > self.layout.visible_area.height()
    }

    // ── Input ───────────────────────────────────────────────────────

    /// The enabled widget under the cursor.  Tabs are on top.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<Widget> {
        if let Some(index) = (0..self.bookmarks.len())
            .find(|&index| self.tab_rect(index).is_some_and(|rect| rect.contains(x, y)))
        {
            return Some(Widget::Tab(index));
        }
        if self.home_visible() && self.layout.home_button.contains(x, y) {
            return Some(Widget::Home);
        }
        if self.add_bookmark_visible()
            && self.add_bookmark_enabled()
            && self.layout.add_bookmark_button(self.bookmarks.len()).contains(x, y)
        {
            return Some(Widget::AddBookmark);
        }
        if self.slider_enabled() && self.layout.slider_rail.contains(x, y) {
            return Some(Widget::Slider);
        }
        None
    }

    /// Dispatch a click.  Returns whether a widget handled it.
    pub fn mouse_clicked(&mut self, x: i32, y: i32, button: MouseButton, modifiers: Modifiers) -> bool {
        let Some(widget) = self.hit_test(x, y) else {
            return false;
        };
        match (widget, button) {
            (Widget::Tab(index), _) => self.click_tab(index, button, modifiers),
            (Widget::Home, MouseButton::Left) => {
                let main_menu = self.config.main_menu.clone();
                self.set_page(&main_menu);
                true
            }
            (Widget::AddBookmark, MouseButton::Left) => {
                let path = self.active.path().to_owned();
                self.add_bookmark(&path)
            }
            (Widget::Slider, MouseButton::Left) => self.drag_slider(y),
            _ => false,
        }
    }

    /// Move the slider thumb to the cursor.
    pub fn drag_slider(&mut self, mouse_y: i32) -> bool {
        if !self.slider_enabled() {
            return false;
        }
        let progress = slider::progress_at(&self.layout.slider_rail, self.config.slider_height, mouse_y);
        self.set_scroll_progress(progress);
        true
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Build this frame's draw commands.
    ///
    /// Commands come out back to front: paper, page text, frame border,
    /// buttons and tabs, title, then the tooltip layer.
    pub fn render(&mut self, mouse_x: i32, mouse_y: i32, partial_tick: f32) -> Frame {
        let layout = self.layout;
        self.refresh_active();

        let hovered = self.hit_test(mouse_x, mouse_y);
        let texture = self.compositor.atlas.texture;
        let border = self.config.tile_border;
        let mut frame = Frame::new();

        let book_frame = self.compositor.frame(&layout.outer, &self.config);
        frame.push_textured(texture, NO_TINT, book_frame.background);
        self.push_page_text(&mut frame);
        frame.push_textured(texture, NO_TINT, book_frame.border);
        frame.push_textured(texture, NO_TINT, self.compositor.slider_separator(&layout.slider_separator));

        let thumb = slider::thumb_rect(&layout.slider_rail, self.config.slider_height, self.active.progress());
        let state = TileState::from_flags(self.slider_enabled(), hovered == Some(Widget::Slider));
        frame.push_textured(
            texture,
            NO_TINT,
            self.compositor.tile(&thumb, z::TITLE_BUTTONS, state, (0, 0), border),
        );

        if self.home_visible() {
            let rect = layout.home_button;
            let state = TileState::from_flags(true, hovered == Some(Widget::Home));
            let mut quads = self.compositor.tile(&rect, z::TITLE_BUTTONS, state, (0, 0), border);
            let icon = self.compositor.atlas.home_icon;
            let icon_rect = Rectangle::new(
                rect.x0 + (rect.width() - icon.width()) / 2,
                rect.y0 + (self.config.tab_height - icon.height()) / 2,
                icon.width(),
                icon.height(),
            );
            quads.extend(self.compositor.icon(&icon_rect, &icon, z::TITLE_BUTTONS));
            frame.push_textured(texture, NO_TINT, quads);
        }

        if self.add_bookmark_visible() {
            let rect = layout.add_bookmark_button(self.bookmarks.len());
            let state = TileState::from_flags(self.add_bookmark_enabled(), hovered == Some(Widget::AddBookmark));
            let icon = self.compositor.atlas.add_bookmark_icon;
            let icon = icon.offset(state.row() * icon.width(), 0);
            frame.push_textured(texture, NO_TINT, self.compositor.icon(&rect, &icon, z::TITLE_BUTTONS));
        }

        for (index, (tab, button)) in self.bookmarks.iter().enumerate() {
            let color = self.page(&tab.page).map(|page| page.color).unwrap_or_default();
            let rect = layout.tab_rect(button.x, self.active.is_same_page(&tab.page));
            let state = TileState::from_flags(true, hovered == Some(Widget::Tab(index)));
            frame.push_textured(
                texture,
                color.rgb(),
                self.compositor.tile(&rect, z::TITLE_BUTTONS, state, (0, 0), border),
            );
        }

        let title_width = self.metrics.text_width(&self.active.title);
        frame.push_text(TextCommand {
            text: self.active.title.clone(),
            x: layout.screen_width / 2 - title_width / 2,
            y: layout.outer.y0 + TITLE_OFFSET,
            z: z::TITLE_BUTTONS,
            color: TITLE_COLOR,
            shadow: true,
            scale: 1.0,
        });

        if let Some(Widget::Tab(index)) = hovered {
            if let Some((tab, _)) = self.bookmarks.get(index) {
                let label = self
                    .page(&tab.page)
                    .map_or(tab.page.as_str(), |page| page.title.as_str())
                    .to_owned();
                let below_cursor = mouse_y + self.metrics.line_height();
                let tooltip = self.compositor.tooltip(
                    &label,
                    mouse_x,
                    below_cursor,
                    layout.screen_width,
                    &mut self.metrics,
                );
                frame.push_textured(texture, NO_TINT, tooltip.quads);
                frame.push_text(tooltip.text);
                if !self.active.is_same_page(&tab.page) {
                    frame.push_solid(LINK_INDICATOR_COLOR, z::TOOLTIP, link_indicator(mouse_x, mouse_y));
                }
            }
        }

        if self.config.debug_wireframe {
            frame.push_solid(WIREFRAME_COLOR, z::TOOLTIP, outline(&layout.visible_area));
        }

        let stats = frame.stats();
        log::trace!(
            "Frame at tick {partial_tick:.2}: {} quads, {} texts, {} draw calls",
            stats.quad_count,
            stats.text_count,
            stats.draw_calls
        );
        frame
    }

    /// Lines of the active page that show through the visible area.
    fn push_page_text(&self, frame: &mut Frame) {
        let visible = self.layout.visible_area;
        let offset = self.active.scroll_offset();
        for line in &self.active.drawable.layout().lines {
            let y = visible.y0 + line.y - offset;
            let bounds = Rectangle::new(visible.x0, y, line.width.max(1), line.height);
            if !bounds.intersects(&visible) {
                continue;
            }
            frame.push_text(TextCommand {
                text: line.text.clone(),
                x: visible.x0,
                y,
                z: z::TEXT,
                color: PAGE_TEXT_COLOR,
                shadow: false,
                scale: line.scale,
            });
        }
    }
}

// ===================================================================
// Tests
// ===================================================================
