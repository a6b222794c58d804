//! Built-in widgets: window chrome, label, image, button, radio, check,
//! slider, progress, scrollbar, menu and menubar.
//!
//! Widgets are methods on [`Context`]. Each one opens a style scope named
//! after its type, enters its control id, resolves its status against its
//! rect and draws itself from the resolved style attributes. Sub-parts
//! (`text`, `mark`, `cursor`, ...) are style elements of that scope, so
//! `button-text:hover@font-color` styles a hovered button's caption.

pub mod button;
pub mod label;
pub mod menu;
pub mod slider;
pub mod window;

pub use menu::{ItemIndex, ItemModel, TreeItemModel};
pub use window::WindowFlags;

use crate::context::{Context, EventResult, Status};
use crate::geometry::{Color, Rect, Vec2};
use crate::platform::Platform;
use crate::style::names::align;
use crate::style::{Border, Filled, FromValue, StrokeStyle};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Axis and zero end of a slider, progress bar or scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    LeftRight,
    RightLeft,
    TopBottom,
    BottomTop,
}

impl Direction {
    /// Decode a `direction` flag (`left_right`, `right_left`, ...).
    pub fn from_flags(flags: u32) -> Option<Direction> {
        use crate::style::names::direction;
        match flags {
            direction::LEFT_RIGHT => Some(Direction::LeftRight),
            direction::RIGHT_LEFT => Some(Direction::RightLeft),
            direction::TOP_BOTTOM => Some(Direction::TopBottom),
            direction::BOTTOM_TOP => Some(Direction::BottomTop),
            _ => None,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LeftRight | Direction::RightLeft)
    }

    /// Coordinate of `p` along this direction's axis.
    fn along(self, p: Vec2) -> f32 {
        if self.is_horizontal() {
            p.x
        } else {
            p.y
        }
    }

    /// `(near, far)` ends of `rect` along the axis, `inset` in from each
    /// edge. `near` is where the minimum value sits.
    fn span(self, rect: Rect, inset: f32) -> (f32, f32) {
        let (lo, hi) = match self {
            Direction::LeftRight | Direction::RightLeft => (rect.x + inset, rect.right() - inset),
            Direction::TopBottom | Direction::BottomTop => (rect.y + inset, rect.bottom() - inset),
        };
        match self {
            Direction::LeftRight | Direction::TopBottom => (lo, hi),
            Direction::RightLeft | Direction::BottomTop => (hi, lo),
        }
    }

    /// Map a pointer position to a value in `[min, max]`.
    fn value_at(self, rect: Rect, inset: f32, pointer: Vec2, min: f32, max: f32) -> f32 {
        let (near, far) = self.span(rect, inset);
        if far == near {
            return min;
        }
        let t = (self.along(pointer) - near) / (far - near);
        (min + t * (max - min)).clamp(min.min(max), max.max(min))
    }

    /// Axis coordinate where `value` sits.
    fn position_of(self, rect: Rect, inset: f32, value: f32, min: f32, max: f32) -> f32 {
        let (near, far) = self.span(rect, inset);
        near + fraction(value, min, max) * (far - near)
    }
}

/// `value` as a fraction of `[min, max]`, clamped to `[0, 1]`.
fn fraction(value: f32, min: f32, max: f32) -> f32 {
    if max == min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Shared widget plumbing
// ---------------------------------------------------------------------------

impl<P: Platform> Context<P> {
    /// Enter a widget: style scope, control id and viewport, then resolve
    /// and push its status. Undo with [`end_control`](Self::end_control).
    pub(crate) fn begin_control(
        &mut self,
        type_name: &str,
        id: Option<&str>,
        rect: Rect,
        hot: bool,
    ) -> EventResult {
        self.push_type(type_name);
        self.push_id(id);
        self.push_viewport(rect);
        let trigger = self.config().trigger;
        let event = self.resolve_event(hot, trigger);
        self.push_status(event.status);
        event
    }

    /// Like [`begin_control`](Self::begin_control) for widgets that never
    /// take input: status is only disabled, hover or normal.
    pub(crate) fn begin_passive(&mut self, type_name: &str, id: Option<&str>, rect: Rect) -> Status {
        self.push_type(type_name);
        self.push_id(id);
        self.push_viewport(rect);
        let status = if self.is_disabled() {
            Status::Disabled
        } else if rect.contains(self.cursor_pos()) {
            Status::Hover
        } else {
            Status::Normal
        };
        self.push_status(status);
        status
    }

    pub(crate) fn end_control(&mut self) {
        self.pop_status();
        self.pop_viewport();
        self.pop_id();
        self.pop_type();
    }

    /// Draw the current scope's `border` and `filled` over `rect`. Parts
    /// that paint nothing are skipped.
    pub fn draw_frame(&mut self, rect: Rect) {
        let filled = self
            .current_style("filled")
            .and_then(Filled::from_value)
            .filter(Filled::is_visible);
        let border = self
            .current_style("border")
            .and_then(Border::from_value)
            .filter(|b| b.style != StrokeStyle::None && b.width > 0.0 && b.color.a > 0)
            .map(|b| Border {
                width: self.scale(b.width),
                radius: crate::geometry::Vec4::new(
                    self.scale(b.radius.x),
                    self.scale(b.radius.y),
                    self.scale(b.radius.z),
                    self.scale(b.radius.w),
                ),
                ..b
            });
        if filled.is_none() && border.is_none() {
            return;
        }
        self.draw_rect(rect, border, filled);
    }

    /// Draw `text` with the current scope's `font-color` and `text-align`.
    /// Text is vertically centered unless the alignment says otherwise.
    pub fn draw_style_text(&mut self, text: &str, rect: Rect) {
        if text.is_empty() {
            return;
        }
        let color = self.current_style_or("font-color", Color::BLACK);
        let mut flags = self.current_style_or("text-align", align::CENTER);
        if flags & align::VERTICAL == 0 {
            flags |= align::VCENTER;
        }
        self.draw_text(text, rect, color, flags);
    }

    /// Scaled numeric style attribute.
    pub(crate) fn style_length(&self, attr: &str, default: f32) -> f32 {
        self.scale(self.current_style_or(attr, default))
    }
}
