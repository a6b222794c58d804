//! HeadlessPlatform: an in-memory [`Platform`] for tests.
//!
//! Windows, fonts and textures live in maps. Cursor position, wheel, events,
//! focus and DPI are scripted per window from test code. Text metrics are
//! monospace: every char is half the font size wide and one font size tall.

use std::collections::{BTreeMap, HashMap};

use crate::geometry::{Rect, Vec2};
use crate::platform::{Event, FontId, Platform, TextureId, WindowId, WindowStatus};

#[derive(Debug, Clone)]
struct HeadlessWindow {
    title: String,
    rect: Rect,
    status: WindowStatus,
    parent: Option<WindowId>,
    dpi: f32,
    cursor: Vec2,
    delta: Vec2,
    wheel: Vec2,
    events: HashMap<Event, u32>,
}

/// A scriptable in-memory platform.
///
/// # Examples
///
/// ```
/// use xui::geometry::{Rect, Vec2};
/// use xui::platform::{Event, Platform};
/// use xui::testing::HeadlessPlatform;
///
/// let mut platform = HeadlessPlatform::new();
/// let w = platform.create_window("main", Rect::new(0.0, 0.0, 100.0, 100.0), None);
/// platform.set_cursor(w, Vec2::new(10.0, 20.0));
/// platform.press(w, Event::MouseLeft);
/// assert_eq!(platform.get_event(w, Event::MouseLeft), 1);
/// ```
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    windows: BTreeMap<WindowId, HeadlessWindow>,
    fonts: BTreeMap<FontId, f32>,
    textures: BTreeMap<TextureId, Vec2>,
    texture_sizes: HashMap<String, Vec2>,
    next_window: u32,
    next_font: u32,
    next_texture: u32,
    clipboard: String,
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessPlatform {
    /// Window and texture ids start at 1 so the zero id never names a live
    /// resource. Font ids start at 0.
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            fonts: BTreeMap::new(),
            textures: BTreeMap::new(),
            texture_sizes: HashMap::new(),
            next_window: 1,
            next_font: 0,
            next_texture: 1,
            clipboard: String::new(),
        }
    }

    // ── Scripting ────────────────────────────────────────────────────

    /// Move the pointer to `pos` (window-local). The delta reported for
    /// the window becomes the distance moved.
    pub fn set_cursor(&mut self, window: WindowId, pos: Vec2) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.delta = pos - w.cursor;
            w.cursor = pos;
        }
    }

    /// Report `wheel` as this frame's wheel movement.
    pub fn scroll(&mut self, window: WindowId, wheel: Vec2) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.wheel = wheel;
        }
    }

    /// Start firing `event` (increments its counter).
    pub fn press(&mut self, window: WindowId, event: Event) {
        if let Some(w) = self.windows.get_mut(&window) {
            *w.events.entry(event).or_insert(0) += 1;
        }
    }

    /// Stop firing `event`.
    pub fn release(&mut self, window: WindowId, event: Event) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.events.remove(&event);
        }
    }

    /// Give or take input focus (`Event::WindowActive`).
    pub fn set_focus(&mut self, window: WindowId, focused: bool) {
        if focused {
            self.press(window, Event::WindowActive);
        } else {
            self.release(window, Event::WindowActive);
        }
    }

    pub fn set_dpi_scale(&mut self, window: WindowId, dpi: f32) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.dpi = dpi;
        }
    }

    /// Size reported for textures later created from `url`.
    pub fn set_texture_size(&mut self, url: &str, size: Vec2) {
        self.texture_sizes.insert(url.to_string(), size);
    }

    /// Clear per-frame deltas and wheel movement on every window.
    pub fn tick(&mut self) {
        for w in self.windows.values_mut() {
            w.delta = Vec2::ZERO;
            w.wheel = Vec2::ZERO;
        }
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn has_window(&self, window: WindowId) -> bool {
        self.windows.contains_key(&window)
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }
}

impl Platform for HeadlessPlatform {
    fn create_window(&mut self, title: &str, rect: Rect, parent: Option<WindowId>) -> WindowId {
        let id = WindowId(self.next_window);
        self.next_window += 1;
        self.windows.insert(
            id,
            HeadlessWindow {
                title: title.to_string(),
                rect,
                status: WindowStatus::Show,
                parent,
                dpi: 1.0,
                cursor: Vec2::new(-1.0, -1.0),
                delta: Vec2::ZERO,
                wheel: Vec2::ZERO,
                events: HashMap::new(),
            },
        );
        id
    }

    fn remove_window(&mut self, window: WindowId) {
        self.windows.remove(&window);
    }

    fn window_rect(&self, window: WindowId) -> Rect {
        self.windows.get(&window).map(|w| w.rect).unwrap_or(Rect::EMPTY)
    }

    fn set_window_rect(&mut self, window: WindowId, rect: Rect) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.rect = rect;
        }
    }

    fn window_status(&self, window: WindowId) -> WindowStatus {
        self.windows.get(&window).map(|w| w.status).unwrap_or(WindowStatus::Hide)
    }

    fn set_window_status(&mut self, window: WindowId, status: WindowStatus) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.status = status;
        }
    }

    fn window_title(&self, window: WindowId) -> String {
        self.windows.get(&window).map(|w| w.title.clone()).unwrap_or_default()
    }

    fn set_window_title(&mut self, window: WindowId, title: &str) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.title = title.to_string();
        }
    }

    fn window_parent(&self, window: WindowId) -> Option<WindowId> {
        self.windows.get(&window).and_then(|w| w.parent)
    }

    fn set_window_parent(&mut self, window: WindowId, parent: Option<WindowId>) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.parent = parent;
        }
    }

    fn dpi_scale(&self, window: WindowId) -> f32 {
        self.windows.get(&window).map(|w| w.dpi).unwrap_or(1.0)
    }

    fn create_font(&mut self, _family: &str, size: f32) -> FontId {
        let id = FontId(self.next_font);
        self.next_font += 1;
        self.fonts.insert(id, size);
        id
    }

    fn remove_font(&mut self, font: FontId) {
        self.fonts.remove(&font);
    }

    fn text_size(&self, font: FontId, text: &str) -> Vec2 {
        match self.fonts.get(&font) {
            Some(&size) => Vec2::new(text.chars().count() as f32 * size * 0.5, size),
            None => Vec2::ZERO,
        }
    }

    fn create_texture(&mut self, url: &str) -> TextureId {
        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        let size = self.texture_sizes.get(url).copied().unwrap_or(Vec2::ZERO);
        self.textures.insert(id, size);
        id
    }

    fn remove_texture(&mut self, texture: TextureId) {
        self.textures.remove(&texture);
    }

    fn texture_size(&self, texture: TextureId) -> Vec2 {
        self.textures.get(&texture).copied().unwrap_or(Vec2::ZERO)
    }

    fn cursor_pos(&self, window: WindowId) -> Vec2 {
        self.windows.get(&window).map(|w| w.cursor).unwrap_or(Vec2::new(-1.0, -1.0))
    }

    fn cursor_delta(&self, window: WindowId) -> Vec2 {
        self.windows.get(&window).map(|w| w.delta).unwrap_or(Vec2::ZERO)
    }

    fn cursor_wheel(&self, window: WindowId) -> Vec2 {
        self.windows.get(&window).map(|w| w.wheel).unwrap_or(Vec2::ZERO)
    }

    fn get_event(&self, window: WindowId, event: Event) -> u32 {
        self.windows
            .get(&window)
            .and_then(|w| w.events.get(&event).copied())
            .unwrap_or(0)
    }

    fn clipboard(&self) -> String {
        self.clipboard.clone()
    }

    fn set_clipboard(&mut self, text: &str) {
        self.clipboard = text.to_string();
    }
}
