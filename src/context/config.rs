//! Context configuration and the built-in style sheet.

use crate::geometry::Vec2;
use crate::platform::Event;

// ---------------------------------------------------------------------------
// ContextConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`Context`](super::Context).
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Optional style sheet text, parsed at construction and stacked above
    /// the built-in sheet.
    pub style: Option<String>,
    /// Base UI scale, multiplied with the window's DPI factor.
    pub scale: f32,
    /// Z-level bias for popups (menus). Must exceed any per-frame command
    /// count so popups sort above regular content.
    pub popup_zlevel: i64,
    /// Smallest size the resize grip can shrink a window to (unscaled).
    pub min_window_size: Vec2,
    /// Event that presses widgets.
    pub trigger: Event,
    /// Family of the default font.
    pub font_family: String,
    /// Size of the default font (unscaled).
    pub font_size: f32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            style: None,
            scale: 1.0,
            popup_zlevel: 1 << 20,
            min_window_size: Vec2::new(120.0, 60.0),
            trigger: Event::MouseLeft,
            font_family: "sans-serif".to_string(),
            font_size: 14.0,
        }
    }
}

impl ContextConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extra style sheet text (builder).
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the base UI scale (builder).
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the popup z-level bias (builder).
    pub fn with_popup_zlevel(mut self, zlevel: i64) -> Self {
        self.popup_zlevel = zlevel;
        self
    }

    /// Set the minimum window size (builder).
    pub fn with_min_window_size(mut self, size: Vec2) -> Self {
        self.min_window_size = size;
        self
    }

    /// Set the trigger event (builder).
    pub fn with_trigger(mut self, trigger: Event) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the default font (builder).
    pub fn with_font(mut self, family: impl Into<String>, size: f32) -> Self {
        self.font_family = family.into();
        self.font_size = size;
        self
    }
}

// ---------------------------------------------------------------------------
// Built-in sheet
// ---------------------------------------------------------------------------

/// The bottom style sheet of every context.
///
/// Element text colors are declared per state (`button-text:disabled`)
/// because a query never falls back from `type-element:action` to
/// `type:action`.
pub const DEFAULT_STYLE: &str = r#"
/* universal defaults */
* {
    font-color: black;
    text-align: center;
    filled: none;
    border: none;
}

window {
    filled: filled(solid, #F0F0F0);
    border: border(solid, 1, #A0A0A0, vec4(0, 0, 0, 0));
}
window-title {
    height: 24;
    padding: 6;
    border: none;
    filled: filled(solid, steelblue);
    font-color: white;
    text-align: left;
}
window-close, window-maximize, window-minimize {
    filled: none;
    border: none;
    stroke: stroke(solid, 1, white);
    padding: 7;
}
window-close:hover { filled: filled(solid, #E81123); }
window-close:active { filled: filled(solid, dark(#E81123)); }
window-maximize:hover, window-minimize:hover { filled: filled(solid, light(steelblue)); }
window-maximize:active, window-minimize:active { filled: filled(solid, dark(steelblue)); }
window-close:disabled, window-maximize:disabled, window-minimize:disabled {
    stroke: stroke(solid, 1, lightgray);
}
window-grip {
    size: 12;
    stroke: stroke(solid, 1, gray);
}

label { text-align: left; }
label-text:disabled { font-color: gray; }

image { border: none; }

button {
    filled: filled(solid, #E1E1E1);
    border: border(solid, 1, #ADADAD, vec4(2, 2, 2, 2));
}
button:hover {
    filled: filled(solid, #E5F1FB);
    border: border(solid, 1, #0078D7, vec4(2, 2, 2, 2));
}
button:active {
    filled: filled(solid, #CCE4F7);
    border: border(solid, 1, #005499, vec4(2, 2, 2, 2));
}
button:disabled {
    filled: filled(solid, #CCCCCC);
    border: border(solid, 1, #BFBFBF, vec4(2, 2, 2, 2));
}
button-text:disabled { font-color: gray; }

radio, check {
    size: 13;
    filled: filled(solid, white);
    border: border(solid, 1, #333333, vec4(0, 0, 0, 0));
    text-align: left;
}
radio { border: border(solid, 1, #333333, vec4(6.5, 6.5, 6.5, 6.5)); }
radio:hover, check:hover { border: border(solid, 1, #0078D7, vec4(0, 0, 0, 0)); }
radio:hover { border: border(solid, 1, #0078D7, vec4(6.5, 6.5, 6.5, 6.5)); }
radio-mark { filled: filled(solid, #333333); padding: 3; }
check-mark { stroke: stroke(solid, 2, #333333); padding: 2; }
radio-text:disabled, check-text:disabled { font-color: gray; }

slider {
    inset: 5;
    filled: none;
}
slider-track { stroke: stroke(solid, 2, #C0C0C0); }
slider-cursor {
    size: 10;
    filled: filled(solid, #007AD9);
}
slider-cursor:hover { filled: filled(solid, #171717); }
slider-cursor:active { filled: filled(solid, #CCCCCC); }
slider-cursor:disabled { filled: filled(solid, #CCCCCC); }

progress {
    filled: filled(solid, #E6E6E6);
    border: border(solid, 1, #BCBCBC, vec4(0, 0, 0, 0));
}
progress-bar {
    filled: filled(solid, #06B025);
    border: none;
}

scrollbar {
    filled: filled(solid, #F0F0F0);
    step: 1;
}
scrollbar-cursor {
    size: 20;
    filled: filled(solid, #CDCDCD);
}
scrollbar-cursor:hover { filled: filled(solid, #A6A6A6); }
scrollbar-cursor:active { filled: filled(solid, #606060); }

menubar {
    filled: filled(solid, white);
}
menubar-item {
    padding: 8;
    filled: none;
}
menubar-item:hover { filled: filled(solid, #E5F3FF); }
menubar-item:active { filled: filled(solid, #CCE8FF); }
menu {
    width: 160;
    filled: filled(solid, #F2F2F2);
    border: border(solid, 1, #CCCCCC, vec4(0, 0, 0, 0));
}
menu-item {
    height: 22;
    padding: 8;
    text-align: left;
    filled: none;
    border: none;
}
menu-item:hover { filled: filled(solid, #91C9F7); }
menu-item:active { filled: filled(solid, #91C9F7); }
menu-item-text:disabled { font-color: gray; }
menu-item-arrow { stroke: stroke(solid, 1, black); }
"#;
