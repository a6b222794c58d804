//! Frame command buffer.
//!
//! Commands are recorded in submission order. Each gets
//! `z = zlevel + counter`, where the counter strictly increases through the
//! frame, so a stable sort by `(window, z)` keeps submission order for equal
//! keys.

use crate::draw::element::{Element, PathElement};
use crate::platform::WindowId;

/// One recorded draw element, tagged for ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub window: WindowId,
    pub z: i64,
    pub element: Element,
}

/// Recorded draw stream for a frame.
#[derive(Debug, Default)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
    counter: i64,
}

impl CommandList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear recorded commands and reset the counter. Keeps capacity.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.counter = 0;
    }

    /// Record a command at `zlevel` plus the next counter value.
    pub fn push(&mut self, window: WindowId, zlevel: i64, element: Element) -> &mut DrawCommand {
        self.counter += 1;
        self.commands.push(DrawCommand { window, z: zlevel + self.counter, element });
        let last = self.commands.len() - 1;
        &mut self.commands[last]
    }

    /// Record a path and return it for chaining.
    pub fn push_path(&mut self, window: WindowId, zlevel: i64, path: PathElement) -> &mut PathElement {
        match &mut self.push(window, zlevel, Element::Path(path)).element {
            Element::Path(p) => p,
            _ => unreachable!("pushed a path element"),
        }
    }

    /// Stable sort by `(window, z)`.
    pub fn sort(&mut self) {
        self.commands.sort_by_key(|c| (c.window, c.z));
    }

    /// Commands in their current order.
    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
