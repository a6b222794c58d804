//! Window chrome: background, title bar with move handle, close/maximize/
//! minimize boxes and a resize grip.
//!
//! ```text
//! +--------------------------------------+
//! | title (move handle)        [_][o][x] |
//! +--------------------------------------+
//! |                                      |
//! |  client viewport                     |
//! |                                   // |
//! +--------------------------------------+
//! ```

use crate::context::Context;
use crate::context::Status;
use crate::geometry::{Color, Rect, Vec2, Vec4};
use crate::platform::{Platform, WindowId, WindowStatus};
use crate::style::Stroke;

bitflags::bitflags! {
    /// Controls which parts of the window chrome exist.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        const NO_BACKGROUND = 1 << 0;
        const NO_TITLE_BAR  = 1 << 1;
        const NO_MOVE       = 1 << 2;
        const NO_RESIZE     = 1 << 3;
        const NO_CLOSE      = 1 << 4;
        const NO_MAXIMIZE   = 1 << 5;
        const NO_MINIMIZE   = 1 << 6;
        const NO_BOXES      = Self::NO_CLOSE.bits() | Self::NO_MAXIMIZE.bits() | Self::NO_MINIMIZE.bits();
    }
}

/// State carried from `begin_window` to `end_window`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChromeFrame {
    window: WindowId,
    flags: WindowFlags,
    visible: bool,
    closing: bool,
}

/// Title bar boxes, right to left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowBox {
    Close,
    Maximize,
    Minimize,
}

impl WindowBox {
    fn name(self) -> &'static str {
        match self {
            WindowBox::Close => "close",
            WindowBox::Maximize => "maximize",
            WindowBox::Minimize => "minimize",
        }
    }

    fn disabled_by(self) -> WindowFlags {
        match self {
            WindowBox::Close => WindowFlags::NO_CLOSE,
            WindowBox::Maximize => WindowFlags::NO_MAXIMIZE,
            WindowBox::Minimize => WindowFlags::NO_MINIMIZE,
        }
    }
}

impl<P: Platform> Context<P> {
    /// Open `window` and draw its chrome.
    ///
    /// Pushes the window, a `window` style scope, the window's control id
    /// (its display name, e.g. `w1`) and the client-area viewport. Returns
    /// whether the window is visible; [`end_window`](Self::end_window) must
    /// be called either way.
    pub fn begin_window(&mut self, window: WindowId, flags: WindowFlags) -> bool {
        let status = self.platform().window_status(window);
        let visible = !matches!(status, WindowStatus::Hide | WindowStatus::Minimize);

        self.push_window(window);
        self.push_type("window");
        self.push_id(Some(&window.to_string()));
        let frame = Rect::from_size(self.platform().window_rect(window).size());
        self.push_viewport(frame);
        self.chrome.push(ChromeFrame { window, flags, visible, closing: false });

        if !visible {
            self.push_viewport(Rect::EMPTY);
            return false;
        }

        if !flags.contains(WindowFlags::NO_BACKGROUND) {
            self.draw_frame(frame);
        }

        let mut client = frame;
        if !flags.contains(WindowFlags::NO_TITLE_BAR) {
            self.push_element("title");
            let height = self.style_length("height", 24.0);
            let (bar, rest) = frame.split_top(height);
            client = rest;
            self.draw_frame(bar);

            let boxes = [WindowBox::Close, WindowBox::Maximize, WindowBox::Minimize];
            let handle = bar.split_left(bar.w - boxes.len() as f32 * height).0;
            let title = self.platform().window_title(window);
            let padding = self.style_length("padding", 6.0);
            self.draw_style_text(&title, handle.shrink(Vec4::new(padding, 0.0, padding, 0.0)));
            self.pop_element();

            for (i, b) in boxes.into_iter().enumerate() {
                let x = bar.right() - (i + 1) as f32 * height;
                self.window_box(b, Rect::new(x, bar.y, height, height), flags);
            }

            if !flags.contains(WindowFlags::NO_MOVE) {
                self.move_handle(window, handle);
            }
        }

        self.push_viewport(client);
        true
    }

    /// Close the window opened by [`begin_window`](Self::begin_window):
    /// draw the resize grip, run the interaction release rules and pop
    /// everything `begin_window` pushed. A window whose close box fired is
    /// removed here.
    pub fn end_window(&mut self) {
        self.pop_viewport();
        let Some(frame) = self.chrome.pop() else {
            log::warn!("end_window without begin_window");
            debug_assert!(false, "end_window without begin_window");
            return;
        };

        if frame.visible && !frame.flags.contains(WindowFlags::NO_RESIZE) {
            self.resize_grip(frame.window);
        }
        self.release_interaction(frame.window);

        self.pop_viewport();
        self.pop_id();
        self.pop_type();
        self.pop_window();

        if frame.closing {
            log::debug!("closing {}", frame.window);
            self.remove_window(frame.window);
        }
    }

    fn window_box(&mut self, b: WindowBox, rect: Rect, flags: WindowFlags) {
        self.push_element(b.name());
        self.push_id(Some(b.name()));
        self.push_disable(flags.intersects(b.disabled_by()));
        self.push_viewport(rect);
        let trigger = self.config().trigger;
        let event = self.resolve_event(false, trigger);
        self.push_status(event.status);

        self.draw_frame(rect);
        let padding = self.style_length("padding", 7.0);
        let stroke = self.current_style_or("stroke", Stroke::solid(1.0, Color::WHITE));
        let stroke = Stroke { width: self.scale(stroke.width), ..stroke };
        let glyph = rect.shrink(Vec4::splat(padding));
        match b {
            WindowBox::Close => {
                self.draw_path(Some(stroke), None)
                    .move_to(Vec2::new(glyph.x, glyph.y))
                    .line_to(Vec2::new(glyph.right(), glyph.bottom()))
                    .move_to(Vec2::new(glyph.right(), glyph.y))
                    .line_to(Vec2::new(glyph.x, glyph.bottom()));
            }
            WindowBox::Maximize => {
                self.draw_path(Some(stroke), None)
                    .move_to(Vec2::new(glyph.x, glyph.y))
                    .line_to(Vec2::new(glyph.right(), glyph.y))
                    .line_to(Vec2::new(glyph.right(), glyph.bottom()))
                    .line_to(Vec2::new(glyph.x, glyph.bottom()))
                    .close();
            }
            WindowBox::Minimize => {
                let y = glyph.center().y;
                self.draw_line(Vec2::new(glyph.x, y), Vec2::new(glyph.right(), y), stroke);
            }
        }

        if event.pressed {
            let window = self.current_window();
            match b {
                WindowBox::Close => {
                    if let Some(frame) = self.chrome.last_mut() {
                        frame.closing = true;
                    }
                }
                WindowBox::Maximize => {
                    let next = match self.platform().window_status(window) {
                        WindowStatus::Maximize => WindowStatus::Restore,
                        _ => WindowStatus::Maximize,
                    };
                    log::debug!("{window}: {next:?}");
                    self.platform_mut().set_window_status(window, next);
                }
                WindowBox::Minimize => {
                    log::debug!("{window}: Minimize");
                    self.platform_mut().set_window_status(window, WindowStatus::Minimize);
                }
            }
        }

        self.pop_status();
        self.pop_viewport();
        self.pop_disable();
        self.pop_id();
        self.pop_element();
    }

    /// Title bar drag moves the window by the pointer delta.
    fn move_handle(&mut self, window: WindowId, handle: Rect) {
        self.push_id(Some("move"));
        self.push_viewport(handle);
        let trigger = self.config().trigger;
        let event = self.resolve_event(false, trigger);
        // The capture frame's delta predates the press.
        if event.status == Status::Active && !event.pressed {
            let delta = self.cursor_delta();
            if delta != Vec2::ZERO {
                let rect = self.platform().window_rect(window).translate(delta);
                self.platform_mut().set_window_rect(window, rect);
            }
        }
        self.pop_viewport();
        self.pop_id();
    }

    /// Bottom-right grip resizes the window, down to the minimum size.
    fn resize_grip(&mut self, window: WindowId) {
        self.push_element("grip");
        self.push_id(Some("grip"));
        let frame = self.current_viewport();
        let size = self.style_length("size", 12.0);
        let grip = Rect::new(frame.right() - size, frame.bottom() - size, size, size);
        self.push_viewport(grip);
        let trigger = self.config().trigger;
        let event = self.resolve_event(false, trigger);
        self.push_status(event.status);

        if event.status == Status::Active && !event.pressed {
            let delta = self.cursor_delta();
            if delta != Vec2::ZERO {
                let min = self.config().min_window_size;
                let min = Vec2::new(self.scale(min.x), self.scale(min.y));
                let rect = self.platform().window_rect(window);
                let new_size = (rect.size() + delta).max(min);
                let resized = Rect::new(rect.x, rect.y, new_size.x, new_size.y);
                self.platform_mut().set_window_rect(window, resized);
            }
        }

        let stroke = self.current_style_or("stroke", Stroke::solid(1.0, Color::BLACK));
        let stroke = Stroke { width: self.scale(stroke.width), ..stroke };
        let (r, b) = (grip.right(), grip.bottom());
        self.draw_path(Some(stroke), None)
            .move_to(Vec2::new(r, grip.y))
            .line_to(Vec2::new(grip.x, b))
            .move_to(Vec2::new(r, grip.y + size / 2.0))
            .line_to(Vec2::new(grip.x + size / 2.0, b));

        self.pop_status();
        self.pop_viewport();
        self.pop_id();
        self.pop_element();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::ContextConfig;
    use crate::draw::Element;
    use crate::platform::Event;
    use crate::testing::HeadlessPlatform;

    fn setup() -> (Context<HeadlessPlatform>, WindowId) {
        let mut ctx = Context::new(HeadlessPlatform::new(), ContextConfig::default()).unwrap();
        let w = ctx.create_window("Main", Rect::new(100.0, 100.0, 300.0, 200.0), None);
        ctx.platform_mut().set_focus(w, true);
        (ctx, w)
    }

    fn frame(ctx: &mut Context<HeadlessPlatform>, w: WindowId, flags: WindowFlags) -> Vec<Element> {
        ctx.begin();
        ctx.begin_window(w, flags);
        ctx.end_window();
        let elements = ctx.end().iter().map(|c| c.element.clone()).collect();
        ctx.platform_mut().tick();
        elements
    }

    fn click(ctx: &mut Context<HeadlessPlatform>, w: WindowId, at: Vec2) {
        ctx.platform_mut().set_cursor(w, at);
        ctx.platform_mut().press(w, Event::MouseLeft);
        frame(ctx, w, WindowFlags::empty());
        ctx.platform_mut().release(w, Event::MouseLeft);
        frame(ctx, w, WindowFlags::empty());
    }

    // Title bar is 24 high; boxes are 24x24 from the right edge:
    // close 276..300, maximize 252..276, minimize 228..252.

    #[test]
    fn chrome_draws_background_title_and_boxes() {
        let (mut ctx, w) = setup();
        let elements = frame(&mut ctx, w, WindowFlags::empty());
        let texts: Vec<&str> = elements
            .iter()
            .filter_map(|e| match e {
                Element::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Main"]);
        match &elements[0] {
            Element::Rect(r) => assert_eq!(r.rect, Rect::new(0.0, 0.0, 300.0, 200.0)),
            other => panic!("expected background, got {other:?}"),
        }
        // background, title bar, title, close X, maximize square, minimize line, grip
        assert_eq!(elements.len(), 7);
    }

    #[test]
    fn no_background_and_no_title_bar() {
        let (mut ctx, w) = setup();
        let flags = WindowFlags::NO_BACKGROUND | WindowFlags::NO_TITLE_BAR | WindowFlags::NO_RESIZE;
        assert!(frame(&mut ctx, w, flags).is_empty());
    }

    #[test]
    fn client_viewport_is_below_title() {
        let (mut ctx, w) = setup();
        ctx.begin();
        assert!(ctx.begin_window(w, WindowFlags::empty()));
        assert_eq!(ctx.current_viewport(), Rect::new(0.0, 24.0, 300.0, 176.0));
        assert_eq!(ctx.current_id(), "w1");
        ctx.end_window();
        ctx.end();
    }

    #[test]
    fn close_box_removes_window() {
        let (mut ctx, w) = setup();
        ctx.platform_mut().set_cursor(w, Vec2::new(288.0, 12.0));
        ctx.platform_mut().press(w, Event::MouseLeft);
        frame(&mut ctx, w, WindowFlags::empty());
        assert!(!ctx.platform().has_window(w));
        assert!(ctx.interaction(w).is_none());
    }

    #[test]
    fn no_close_disables_close_box() {
        let (mut ctx, w) = setup();
        ctx.platform_mut().set_cursor(w, Vec2::new(288.0, 12.0));
        ctx.platform_mut().press(w, Event::MouseLeft);
        frame(&mut ctx, w, WindowFlags::NO_CLOSE);
        assert!(ctx.platform().has_window(w));
    }

    #[test]
    fn maximize_toggles_and_minimize_hides() {
        let (mut ctx, w) = setup();
        click(&mut ctx, w, Vec2::new(264.0, 12.0));
        assert_eq!(ctx.platform().window_status(w), WindowStatus::Maximize);
        click(&mut ctx, w, Vec2::new(264.0, 12.0));
        assert_eq!(ctx.platform().window_status(w), WindowStatus::Restore);

        click(&mut ctx, w, Vec2::new(240.0, 12.0));
        assert_eq!(ctx.platform().window_status(w), WindowStatus::Minimize);
        ctx.begin();
        assert!(!ctx.begin_window(w, WindowFlags::empty()));
        ctx.end_window();
        assert!(ctx.end().is_empty());
    }

    #[test]
    fn box_fires_once_per_press() {
        let (mut ctx, w) = setup();
        ctx.platform_mut().set_cursor(w, Vec2::new(264.0, 12.0));
        ctx.platform_mut().press(w, Event::MouseLeft);
        frame(&mut ctx, w, WindowFlags::empty());
        frame(&mut ctx, w, WindowFlags::empty());
        assert_eq!(ctx.platform().window_status(w), WindowStatus::Maximize);
    }

    #[test]
    fn title_drag_moves_window() {
        let (mut ctx, w) = setup();
        ctx.platform_mut().set_cursor(w, Vec2::new(50.0, 10.0));
        ctx.platform_mut().press(w, Event::MouseLeft);
        frame(&mut ctx, w, WindowFlags::empty());
        ctx.platform_mut().set_cursor(w, Vec2::new(60.0, 5.0));
        frame(&mut ctx, w, WindowFlags::empty());
        assert_eq!(ctx.platform().window_rect(w), Rect::new(110.0, 95.0, 300.0, 200.0));
    }

    #[test]
    fn no_move_keeps_window() {
        let (mut ctx, w) = setup();
        ctx.platform_mut().set_cursor(w, Vec2::new(50.0, 10.0));
        ctx.platform_mut().press(w, Event::MouseLeft);
        frame(&mut ctx, w, WindowFlags::NO_MOVE);
        ctx.platform_mut().set_cursor(w, Vec2::new(60.0, 5.0));
        frame(&mut ctx, w, WindowFlags::NO_MOVE);
        assert_eq!(ctx.platform().window_rect(w), Rect::new(100.0, 100.0, 300.0, 200.0));
    }

    #[test]
    fn grip_resizes_with_minimum() {
        let (mut ctx, w) = setup();
        ctx.platform_mut().set_cursor(w, Vec2::new(295.0, 195.0));
        ctx.platform_mut().press(w, Event::MouseLeft);
        frame(&mut ctx, w, WindowFlags::empty());
        ctx.platform_mut().set_cursor(w, Vec2::new(315.0, 205.0));
        frame(&mut ctx, w, WindowFlags::empty());
        assert_eq!(ctx.platform().window_rect(w), Rect::new(100.0, 100.0, 320.0, 210.0));

        ctx.platform_mut().set_cursor(w, Vec2::new(-500.0, -500.0));
        frame(&mut ctx, w, WindowFlags::empty());
        assert_eq!(ctx.platform().window_rect(w), Rect::new(100.0, 100.0, 120.0, 60.0));
    }

    #[test]
    fn release_clears_capture() {
        let (mut ctx, w) = setup();
        click(&mut ctx, w, Vec2::new(50.0, 10.0));
        assert_eq!(ctx.interaction(w).and_then(|s| s.active_id()), None);
    }
}
