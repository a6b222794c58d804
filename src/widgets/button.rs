//! Clickable widgets: button, radio and check.
//!
//! Radio and check share one layout: a `size`-square box at the left edge,
//! vertically centered, with the caption to its right. The whole rect is
//! the hit area.

use crate::context::Context;
use crate::geometry::{Color, Rect, Vec2, Vec4};
use crate::platform::Platform;
use crate::style::{Filled, FromValue, Stroke};

/// Gap between a radio/check box and its caption (unscaled).
const CAPTION_GAP: f32 = 4.0;

impl<P: Platform> Context<P> {
    /// Push button. Returns `true` on the frame the press lands.
    pub fn button(&mut self, id: Option<&str>, rect: Rect, text: &str) -> bool {
        let event = self.begin_control("button", id, rect, false);
        self.draw_frame(rect);
        self.push_element("text");
        self.draw_style_text(text, rect);
        self.pop_element();
        self.end_control();
        event.pressed
    }

    /// Radio button showing `selected`. Returns `true` on the frame the
    /// press lands; the caller owns the selection.
    pub fn radio(&mut self, id: Option<&str>, rect: Rect, text: &str, selected: bool) -> bool {
        let event = self.begin_control("radio", id, rect, false);
        let (mark_box, caption) = self.box_layout(rect);
        self.draw_frame(mark_box);

        if selected {
            self.push_element("mark");
            let padding = self.style_length("padding", 3.0);
            let filled = self
                .current_style("filled")
                .and_then(Filled::from_value)
                .unwrap_or(Filled::solid(Color::BLACK));
            let radius = (mark_box.w / 2.0 - padding).max(0.0);
            self.draw_circle(mark_box.center(), radius, None, Some(filled));
            self.pop_element();
        }

        self.push_element("text");
        self.draw_style_text(text, caption);
        self.pop_element();
        self.end_control();
        event.pressed
    }

    /// Checkbox bound to `checked`. A press toggles it; returns `true` when
    /// it toggled.
    pub fn check(&mut self, id: Option<&str>, rect: Rect, text: &str, checked: &mut bool) -> bool {
        let event = self.begin_control("check", id, rect, false);
        if event.pressed {
            *checked = !*checked;
        }
        let (mark_box, caption) = self.box_layout(rect);
        self.draw_frame(mark_box);

        if *checked {
            self.push_element("mark");
            let padding = self.style_length("padding", 2.0);
            let stroke = self.current_style_or("stroke", Stroke::solid(2.0, Color::BLACK));
            let stroke = Stroke { width: self.scale(stroke.width), ..stroke };
            let glyph = mark_box.shrink(Vec4::splat(padding));
            self.draw_path(Some(stroke), None)
                .move_to(Vec2::new(glyph.x, glyph.center().y))
                .line_to(Vec2::new(glyph.x + glyph.w * 0.4, glyph.bottom()))
                .line_to(Vec2::new(glyph.right(), glyph.y));
            self.pop_element();
        }

        self.push_element("text");
        self.draw_style_text(text, caption);
        self.pop_element();
        self.end_control();
        event.pressed
    }

    /// Split `rect` into the indicator box and the caption area.
    fn box_layout(&self, rect: Rect) -> (Rect, Rect) {
        let size = self.style_length("size", 13.0);
        let mark_box = Rect::new(rect.x, rect.y + (rect.h - size) / 2.0, size, size);
        let gap = self.scale(CAPTION_GAP);
        let caption = rect.split_left(size + gap).1;
        (mark_box, caption)
    }
}
