//! Snapshot rendering helpers.
//!
//! Turn a sorted command list into plain text, one command per line, for
//! snapshot tests and assertions.

use crate::draw::{DrawCommand, Element};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render commands as `{window} z={z} {element}` lines joined with `'\n'`.
/// The final line has no trailing newline.
///
/// # Examples
///
/// ```
/// use xui::draw::{CommandList, Element, RectElement};
/// use xui::geometry::Rect;
/// use xui::platform::WindowId;
/// use xui::testing::commands_to_string;
///
/// let mut list = CommandList::new();
/// let rect = Rect::new(0.0, 0.0, 4.0, 2.0);
/// list.push(WindowId(1), 0, Element::Rect(RectElement { rect, border: None, filled: None }));
/// assert_eq!(commands_to_string(list.commands()), "w1 z=1 rect 0,0 4x2");
/// ```
pub fn commands_to_string(commands: &[DrawCommand]) -> String {
    commands
        .iter()
        .map(|c| format!("{} z={} {}", c.window, c.z, c.element))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The text of every text element, in order.
pub fn texts(commands: &[DrawCommand]) -> Vec<&str> {
    commands
        .iter()
        .filter_map(|c| match &c.element {
            Element::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
