//! Style lookup through the current scope and the per-window interaction
//! state machine.

use std::fmt::Write as _;

use super::Context;
use crate::platform::{Event, Platform, WindowId};
use crate::style::{cascade_find, FromValue, Value};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Interaction status of a control, used as the style query action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Normal,
    Hover,
    Active,
    /// Has a `:drag` selector suffix but no transition produces it.
    Drag,
    Disabled,
}

impl Status {
    /// Selector suffix, including the leading `:`. Empty for `Normal`.
    pub fn suffix(self) -> &'static str {
        match self {
            Status::Normal => "",
            Status::Hover => ":hover",
            Status::Active => ":active",
            Status::Drag => ":drag",
            Status::Disabled => ":disabled",
        }
    }
}

/// Outcome of [`Context::resolve_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResult {
    pub status: Status,
    /// The control captured input on this call.
    pub pressed: bool,
}

/// Per-window interaction state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// Control holding the pointer capture and the event it captured with.
    /// An empty id holds a press that no control took until it is released.
    pub active: Option<(String, Event)>,
    /// Control holding keyboard/menu focus.
    pub hot: Option<String>,
    /// The pointer lay inside some control's viewport during this frame.
    pub over_control: bool,
}

impl InteractionState {
    /// Id of the capturing control. `None` for an uncaptured press.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|(id, _)| id.as_str()).filter(|id| !id.is_empty())
    }

    pub fn hot_id(&self) -> Option<&str> {
        self.hot.as_deref()
    }
}

impl<P: Platform> Context<P> {
    // ── Style lookup ─────────────────────────────────────────────────

    /// `{id}#{type}{-element}*{:action}` for the current scope.
    ///
    /// The `{id}#` part is omitted when no control id is pushed, and the
    /// action when the status is `Normal`.
    pub fn current_style_name(&self) -> String {
        let mut name = String::new();
        let id = self.current_id();
        if !id.is_empty() {
            name.push_str(id);
            name.push('#');
        }
        if let Some(frame) = self.styles.last() {
            name.push_str(&frame.type_name);
            for element in &frame.elements {
                let _ = write!(name, "-{element}");
            }
        }
        name.push_str(self.current_status().suffix());
        name
    }

    /// Resolve `attr` for the current scope through the sheet cascade.
    pub fn current_style(&self, attr: &str) -> Option<&Value> {
        let name = format!("{}@{attr}", self.current_style_name());
        cascade_find(&self.sheets, &name)
    }

    /// [`current_style`](Self::current_style) with typed extraction and a
    /// default for missing or mistyped values.
    pub fn current_style_or<T: FromValue>(&self, attr: &str, default: T) -> T {
        self.current_style(attr).and_then(T::from_value).unwrap_or(default)
    }

    // ── Event status ─────────────────────────────────────────────────

    /// Status of the current control for `event`. See
    /// [`resolve_event`](Self::resolve_event).
    pub fn current_event_status(&mut self, hot: bool, event: Event) -> Status {
        self.resolve_event(hot, event).status
    }

    /// Resolve the current control's status against the current window,
    /// viewport and id, in this order:
    ///
    /// 1. disabled scope: `Disabled`
    /// 2. a press is held, captured or not: `Active` if this control
    ///    captured it, else `Normal`
    /// 3. `hot` requested and this control is hot: `Active`
    /// 4. window focused, `event` firing, pointer inside: capture
    ///    (and take hot if requested), `Active`
    /// 5. pointer inside: `Hover`
    /// 6. `Normal`
    pub fn resolve_event(&mut self, hot: bool, event: Event) -> EventResult {
        let window = self.current_window();
        let inside = self.current_viewport().contains(self.platform.cursor_pos(window));
        let disabled = self.is_disabled();
        let id = self.current_id().to_string();
        let state = self.interaction.entry(window).or_default();
        state.over_control |= inside;

        if disabled {
            return EventResult { status: Status::Disabled, pressed: false };
        }

        if let Some((active, _)) = &state.active {
            let status = if *active == id { Status::Active } else { Status::Normal };
            return EventResult { status, pressed: false };
        }

        if hot && state.hot.as_deref() == Some(id.as_str()) {
            return EventResult { status: Status::Active, pressed: false };
        }

        let focused = self.platform.get_event(window, Event::WindowActive) != 0;
        let firing = self.platform.get_event(window, event) != 0;

        if focused && firing && inside {
            log::trace!("{window}: '{id}' captured {}", event.as_str());
            let state = self.interaction.entry(window).or_default();
            if hot {
                state.hot = Some(id.clone());
            }
            state.active = Some((id, event));
            return EventResult { status: Status::Active, pressed: true };
        }

        let status = if inside { Status::Hover } else { Status::Normal };
        EventResult { status, pressed: false }
    }

    /// Make `id` (a full control path) the hot control of the current window.
    pub fn set_hot(&mut self, id: Option<String>) {
        let window = self.current_window();
        self.interaction.entry(window).or_default().hot = id;
    }

    /// Hot control of the current window.
    pub fn hot_id(&self) -> Option<&str> {
        self.interaction.get(&self.current_window()).and_then(InteractionState::hot_id)
    }

    /// Active control of the current window.
    pub fn active_id(&self) -> Option<&str> {
        self.interaction.get(&self.current_window()).and_then(InteractionState::active_id)
    }

    /// Release rules run at the end of a window:
    ///
    /// * the capture is dropped once its event is no longer firing;
    /// * a press no control took in a focused window is held as an empty
    ///   capture, so no control takes it while the button stays down;
    /// * such a press drops the hot control if the pointer was outside
    ///   every control of the frame.
    pub(crate) fn release_interaction(&mut self, window: WindowId) {
        let trigger = self.config.trigger;
        let pressed = self.platform.get_event(window, Event::WindowActive) != 0
            && self.platform.get_event(window, trigger) != 0;
        if pressed {
            self.interaction.entry(window).or_default();
        }
        let Some(state) = self.interaction.get_mut(&window) else {
            return;
        };
        let over_control = std::mem::take(&mut state.over_control);

        if let Some((id, event)) = &state.active {
            if self.platform.get_event(window, *event) == 0 {
                log::trace!("{window}: '{id}' released");
                state.active = None;
            }
        }

        if state.active.is_none() && pressed {
            state.active = Some((String::new(), trigger));
            if !over_control {
                if let Some(id) = state.hot.take() {
                    log::trace!("{window}: '{id}' lost hot");
                }
            }
        }
    }
}
