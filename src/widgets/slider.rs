//! Value widgets laid out along a [`Direction`]: slider, progress bar and
//! scrollbar.

use super::{fraction, Direction};
use crate::context::{Context, Status};
use crate::geometry::{Color, Rect, Vec2};
use crate::platform::Platform;
use crate::style::Stroke;

/// Rect of a cursor `length` long centered on axis position `pos`,
/// spanning `rect` across the axis.
fn cursor_rect(direction: Direction, rect: Rect, pos: f32, length: f32) -> Rect {
    if direction.is_horizontal() {
        Rect::new(pos - length / 2.0, rect.y, length, rect.h)
    } else {
        Rect::new(rect.x, pos - length / 2.0, rect.w, length)
    }
}

impl<P: Platform> Context<P> {
    /// Slider over `[min, max]`. While captured, `value` follows the
    /// pointer mapped across the rect minus `inset` at each end. Returns
    /// `true` when `value` changed.
    ///
    /// Style parts: `slider-track` (`stroke`), `slider-cursor` (`size`,
    /// `filled`, `border`).
    pub fn slider(
        &mut self,
        id: Option<&str>,
        rect: Rect,
        direction: Direction,
        value: &mut f32,
        min: f32,
        max: f32,
    ) -> bool {
        let event = self.begin_control("slider", id, rect, false);
        let inset = self.style_length("inset", 5.0);

        let mut changed = false;
        if event.status == Status::Active {
            let next = direction.value_at(rect, inset, self.cursor_pos(), min, max);
            changed = next != *value;
            *value = next;
        }

        self.draw_frame(rect);

        self.push_element("track");
        let stroke = self.current_style_or("stroke", Stroke::solid(2.0, Color::rgb(192, 192, 192)));
        let stroke = Stroke { width: self.scale(stroke.width), ..stroke };
        let (near, far) = direction.span(rect, inset);
        let center = rect.center();
        let (from, to) = if direction.is_horizontal() {
            (Vec2::new(near, center.y), Vec2::new(far, center.y))
        } else {
            (Vec2::new(center.x, near), Vec2::new(center.x, far))
        };
        self.draw_line(from, to, stroke);
        self.pop_element();

        self.push_element("cursor");
        let size = self.style_length("size", 10.0);
        let pos = direction.position_of(rect, inset, *value, min, max);
        self.draw_frame(cursor_rect(direction, rect, pos, size));
        self.pop_element();

        self.end_control();
        changed
    }

    /// Progress bar filled from the direction's zero end to `value`.
    ///
    /// Style parts: `progress` (track) and `progress-bar`.
    pub fn progress(
        &mut self,
        id: Option<&str>,
        rect: Rect,
        direction: Direction,
        value: f32,
        min: f32,
        max: f32,
    ) {
        self.begin_passive("progress", id, rect);
        self.draw_frame(rect);

        let t = fraction(value, min, max);
        if t > 0.0 {
            let (w, h) = (rect.w * t, rect.h * t);
            let bar = match direction {
                Direction::LeftRight => Rect::new(rect.x, rect.y, w, rect.h),
                Direction::RightLeft => Rect::new(rect.right() - w, rect.y, w, rect.h),
                Direction::TopBottom => Rect::new(rect.x, rect.y, rect.w, h),
                Direction::BottomTop => Rect::new(rect.x, rect.bottom() - h, rect.w, h),
            };
            self.push_element("bar");
            self.draw_frame(bar);
            self.pop_element();
        }

        self.end_control();
    }

    /// Scrollbar over `[min, max]`. The cursor is `scrollbar-cursor@size`
    /// long and its center travels the rect inset by half that. Dragging
    /// moves `value` to the pointer; the wheel steps it by `step` per unit
    /// while hovered or captured, positive wheel toward the zero end.
    /// Returns `true` when `value` changed.
    pub fn scrollbar(
        &mut self,
        id: Option<&str>,
        rect: Rect,
        direction: Direction,
        value: &mut f32,
        min: f32,
        max: f32,
    ) -> bool {
        let event = self.begin_control("scrollbar", id, rect, false);
        self.push_element("cursor");
        let size = self.style_length("size", 20.0);
        self.pop_element();
        let inset = size / 2.0;

        let mut next = *value;
        if event.status == Status::Active {
            next = direction.value_at(rect, inset, self.cursor_pos(), min, max);
        }
        if matches!(event.status, Status::Hover | Status::Active) {
            let wheel = self.cursor_wheel();
            let amount = if direction.is_horizontal() { wheel.x } else { wheel.y };
            if amount != 0.0 {
                let step = self.current_style_or("step", 1.0_f32);
                let sign = match direction {
                    Direction::LeftRight | Direction::TopBottom => -1.0,
                    Direction::RightLeft | Direction::BottomTop => 1.0,
                };
                next = (next + sign * amount * step).clamp(min.min(max), max.max(min));
            }
        }
        let changed = next != *value;
        *value = next;

        self.draw_frame(rect);
        self.push_element("cursor");
        let pos = direction.position_of(rect, inset, *value, min, max);
        self.draw_frame(cursor_rect(direction, rect, pos, size));
        self.pop_element();

        self.end_control();
        changed
    }
}
