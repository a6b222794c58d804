//! Platform collaborator: windows, fonts, textures and input queries.
//!
//! The context never talks to a windowing system directly. Everything it
//! needs from the outside world goes through [`Platform`], which a backend
//! implements (see [`crate::testing::HeadlessPlatform`] for an in-memory one).
//! Invalid ids are the platform's problem: it should answer with empty/zero
//! results rather than panic.

use std::fmt;

use crate::geometry::{Rect, Vec2};

// ---------------------------------------------------------------------------
// Ids
// ---------------------------------------------------------------------------

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

id_type!(
    /// A platform window.
    WindowId,
    "w"
);
id_type!(
    /// A loaded font.
    FontId,
    "f"
);
id_type!(
    /// A loaded texture.
    TextureId,
    "t"
);

// ---------------------------------------------------------------------------
// Event / WindowStatus
// ---------------------------------------------------------------------------

/// A named discrete input event.
///
/// [`Platform::get_event`] returns a counter for it: non-zero means the event
/// is firing (button held, key down, window focused) this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The window has input focus.
    WindowActive,
    MouseLeft,
    MouseRight,
    MouseMiddle,
    KeyEnter,
    KeyEscape,
    KeyTab,
    KeySpace,
}

impl Event {
    /// Stable name, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Event::WindowActive => "window-active",
            Event::MouseLeft => "mouse-left",
            Event::MouseRight => "mouse-right",
            Event::MouseMiddle => "mouse-middle",
            Event::KeyEnter => "key-enter",
            Event::KeyEscape => "key-escape",
            Event::KeyTab => "key-tab",
            Event::KeySpace => "key-space",
        }
    }
}

/// Window show state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowStatus {
    #[default]
    Show,
    Hide,
    Minimize,
    Maximize,
    Restore,
}

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Services the immediate-mode context consumes. All calls are synchronous.
pub trait Platform {
    // ── Windows ──────────────────────────────────────────────────────

    /// Create a window with a screen-space rect.
    fn create_window(&mut self, title: &str, rect: Rect, parent: Option<WindowId>) -> WindowId;
    /// Destroy a window.
    fn remove_window(&mut self, window: WindowId);
    /// Screen-space rect of the window.
    fn window_rect(&self, window: WindowId) -> Rect;
    fn set_window_rect(&mut self, window: WindowId, rect: Rect);
    fn window_status(&self, window: WindowId) -> WindowStatus;
    fn set_window_status(&mut self, window: WindowId, status: WindowStatus);
    fn window_title(&self, window: WindowId) -> String;
    fn set_window_title(&mut self, window: WindowId, title: &str);
    fn window_parent(&self, window: WindowId) -> Option<WindowId>;
    fn set_window_parent(&mut self, window: WindowId, parent: Option<WindowId>);

    /// DPI scale factor of the window's monitor.
    fn dpi_scale(&self, _window: WindowId) -> f32 {
        1.0
    }

    // ── Fonts ────────────────────────────────────────────────────────

    fn create_font(&mut self, family: &str, size: f32) -> FontId;
    fn remove_font(&mut self, font: FontId);
    /// Size of `text` laid out on one line.
    fn text_size(&self, font: FontId, text: &str) -> Vec2;

    // ── Textures ─────────────────────────────────────────────────────

    fn create_texture(&mut self, url: &str) -> TextureId;
    fn remove_texture(&mut self, texture: TextureId);
    fn texture_size(&self, texture: TextureId) -> Vec2;

    // ── Input ────────────────────────────────────────────────────────

    /// Pointer position in window-local coordinates.
    fn cursor_pos(&self, window: WindowId) -> Vec2;
    /// Pointer movement since the previous frame, in screen units.
    fn cursor_delta(&self, window: WindowId) -> Vec2;
    /// Wheel movement since the previous frame.
    fn cursor_wheel(&self, window: WindowId) -> Vec2;
    /// Counter for a discrete event; zero when it is not firing.
    fn get_event(&self, window: WindowId, event: Event) -> u32;

    // ── Clipboard ────────────────────────────────────────────────────

    fn clipboard(&self) -> String;
    fn set_clipboard(&mut self, text: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_with_prefix() {
        assert_eq!(WindowId(3).to_string(), "w3");
        assert_eq!(FontId(0).to_string(), "f0");
        assert_eq!(TextureId(12).to_string(), "t12");
    }

    #[test]
    fn window_ids_order_numerically() {
        let mut ids = vec![WindowId(3), WindowId(1), WindowId(2)];
        ids.sort();
        assert_eq!(ids, vec![WindowId(1), WindowId(2), WindowId(3)]);
    }
}
