//! Push/pop stacks and scoped guards.
//!
//! Every `push_*` must be matched by its `pop_*` in LIFO order. Popping an
//! empty stack is a caller bug: it trips a debug assertion and is otherwise
//! ignored. The `scope_*` variants return a [`Scoped`] guard that derefs to
//! the context and pops when dropped.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use super::state::Status;
use super::Context;
use crate::geometry::Rect;
use crate::platform::{FontId, Platform, TextureId, WindowId};
use crate::style::StyleSheet;

/// One style scope: a type name, its element chain and its status stack.
#[derive(Debug, Clone)]
pub(crate) struct StyleFrame {
    pub(crate) type_name: String,
    pub(crate) elements: Vec<String>,
    pub(crate) statuses: Vec<Status>,
}

fn pop_checked<T>(stack: &mut Vec<T>, what: &str) -> Option<T> {
    let top = stack.pop();
    if top.is_none() {
        log::warn!("pop on empty {what} stack");
        debug_assert!(false, "pop on empty {what} stack");
    }
    top
}

// ---------------------------------------------------------------------------
// Scoped
// ---------------------------------------------------------------------------

/// Guard returned by the `scope_*` methods. Pops its push on drop.
pub struct Scoped<'a, P: Platform> {
    ctx: &'a mut Context<P>,
    pop: fn(&mut Context<P>),
}

impl<P: Platform> Deref for Scoped<'_, P> {
    type Target = Context<P>;

    fn deref(&self) -> &Context<P> {
        &*self.ctx
    }
}

impl<P: Platform> DerefMut for Scoped<'_, P> {
    fn deref_mut(&mut self) -> &mut Context<P> {
        &mut *self.ctx
    }
}

impl<P: Platform> Drop for Scoped<'_, P> {
    fn drop(&mut self) {
        (self.pop)(&mut *self.ctx);
    }
}

impl<P: Platform> Context<P> {
    fn scoped(&mut self, pop: fn(&mut Context<P>)) -> Scoped<'_, P> {
        Scoped { ctx: self, pop }
    }

    // ── Style sheets ─────────────────────────────────────────────────

    /// Push a sheet on top of the cascade.
    pub fn push_style(&mut self, sheet: Arc<StyleSheet>) {
        self.sheets.push(sheet);
    }

    pub fn pop_style(&mut self) {
        if self.sheets.len() <= self.base_sheets {
            log::warn!("pop on empty style sheet stack");
            debug_assert!(false, "pop on empty style sheet stack");
            return;
        }
        self.sheets.pop();
    }

    pub fn scope_style(&mut self, sheet: Arc<StyleSheet>) -> Scoped<'_, P> {
        self.push_style(sheet);
        self.scoped(|c| c.pop_style())
    }

    // ── Style scopes ─────────────────────────────────────────────────

    /// Open a style scope for widget type `type_name`.
    pub fn push_type(&mut self, type_name: &str) {
        self.styles.push(StyleFrame {
            type_name: type_name.to_string(),
            elements: Vec::new(),
            statuses: Vec::new(),
        });
    }

    /// Close the current style scope along with its elements and statuses.
    pub fn pop_type(&mut self) {
        pop_checked(&mut self.styles, "style scope");
    }

    pub fn scope_type(&mut self, type_name: &str) -> Scoped<'_, P> {
        self.push_type(type_name);
        self.scoped(|c| c.pop_type())
    }

    /// Append an element to the current style scope's chain.
    pub fn push_element(&mut self, element: &str) {
        match self.styles.last_mut() {
            Some(frame) => frame.elements.push(element.to_string()),
            None => {
                log::warn!("push_element('{element}') outside a style scope");
                debug_assert!(false, "push_element outside a style scope");
            }
        }
    }

    pub fn pop_element(&mut self) {
        match self.styles.last_mut() {
            Some(frame) => {
                pop_checked(&mut frame.elements, "element");
            }
            None => debug_assert!(false, "pop_element outside a style scope"),
        }
    }

    pub fn scope_element(&mut self, element: &str) -> Scoped<'_, P> {
        self.push_element(element);
        self.scoped(|c| c.pop_element())
    }

    /// Set the status of the current style scope.
    pub fn push_status(&mut self, status: Status) {
        match self.styles.last_mut() {
            Some(frame) => frame.statuses.push(status),
            None => {
                log::warn!("push_status outside a style scope");
                debug_assert!(false, "push_status outside a style scope");
            }
        }
    }

    pub fn pop_status(&mut self) {
        match self.styles.last_mut() {
            Some(frame) => {
                pop_checked(&mut frame.statuses, "status");
            }
            None => debug_assert!(false, "pop_status outside a style scope"),
        }
    }

    pub fn scope_status(&mut self, status: Status) -> Scoped<'_, P> {
        self.push_status(status);
        self.scoped(|c| c.pop_status())
    }

    /// Type name of the current style scope, or empty.
    pub fn current_type(&self) -> &str {
        self.styles.last().map(|f| f.type_name.as_str()).unwrap_or("")
    }

    /// Status of the current style scope; `Normal` when none was pushed.
    pub fn current_status(&self) -> Status {
        self.styles
            .last()
            .and_then(|f| f.statuses.last().copied())
            .unwrap_or(Status::Normal)
    }

    // ── Disable ──────────────────────────────────────────────────────

    /// Disable controls. A disabled scope stays disabled for its children
    /// whatever they push.
    pub fn push_disable(&mut self, disable: bool) {
        let inherited = self.is_disabled();
        self.disable.push(disable || inherited);
    }

    pub fn pop_disable(&mut self) {
        pop_checked(&mut self.disable, "disable");
    }

    pub fn scope_disable(&mut self, disable: bool) -> Scoped<'_, P> {
        self.push_disable(disable);
        self.scoped(|c| c.pop_disable())
    }

    pub fn is_disabled(&self) -> bool {
        self.disable.last().copied().unwrap_or(false)
    }

    // ── Z-level ──────────────────────────────────────────────────────

    /// Set the z-level bias added to subsequent commands.
    pub fn push_zlevel(&mut self, zlevel: i64) {
        self.zlevels.push(zlevel);
    }

    pub fn pop_zlevel(&mut self) {
        pop_checked(&mut self.zlevels, "z-level");
    }

    pub fn scope_zlevel(&mut self, zlevel: i64) -> Scoped<'_, P> {
        self.push_zlevel(zlevel);
        self.scoped(|c| c.pop_zlevel())
    }

    pub fn current_zlevel(&self) -> i64 {
        self.zlevels.last().copied().unwrap_or(0)
    }

    // ── Viewport ─────────────────────────────────────────────────────

    /// Set the window-local rect that hit tests and widget layout use.
    pub fn push_viewport(&mut self, rect: Rect) {
        self.viewports.push(rect);
    }

    pub fn pop_viewport(&mut self) {
        pop_checked(&mut self.viewports, "viewport");
    }

    pub fn scope_viewport(&mut self, rect: Rect) -> Scoped<'_, P> {
        self.push_viewport(rect);
        self.scoped(|c| c.pop_viewport())
    }

    pub fn current_viewport(&self) -> Rect {
        self.viewports.last().copied().unwrap_or(Rect::EMPTY)
    }

    // ── Font ─────────────────────────────────────────────────────────

    pub fn push_font(&mut self, font: FontId) {
        self.fonts.push(font);
    }

    pub fn pop_font(&mut self) {
        pop_checked(&mut self.fonts, "font");
    }

    pub fn scope_font(&mut self, font: FontId) -> Scoped<'_, P> {
        self.push_font(font);
        self.scoped(|c| c.pop_font())
    }

    /// Top of the font stack, or the default font.
    pub fn current_font(&self) -> FontId {
        self.fonts.last().copied().unwrap_or(self.default_font)
    }

    // ── Window ───────────────────────────────────────────────────────

    pub fn push_window(&mut self, window: WindowId) {
        self.windows.push(window);
    }

    pub fn pop_window(&mut self) {
        pop_checked(&mut self.windows, "window");
    }

    pub fn scope_window(&mut self, window: WindowId) -> Scoped<'_, P> {
        self.push_window(window);
        self.scoped(|c| c.pop_window())
    }

    pub fn current_window(&self) -> WindowId {
        self.windows.last().copied().unwrap_or_default()
    }

    // ── Texture ──────────────────────────────────────────────────────

    pub fn push_texture(&mut self, texture: TextureId) {
        self.textures.push(texture);
    }

    pub fn pop_texture(&mut self) {
        pop_checked(&mut self.textures, "texture");
    }

    pub fn scope_texture(&mut self, texture: TextureId) -> Scoped<'_, P> {
        self.push_texture(texture);
        self.scoped(|c| c.pop_texture())
    }

    pub fn current_texture(&self) -> TextureId {
        self.textures.last().copied().unwrap_or_default()
    }

    // ── Control id ───────────────────────────────────────────────────

    /// Enter a control id under the current one.
    ///
    /// Ids are `/`-joined paths. `None` generates `_{type}_{n}` from the
    /// current style scope's type and a per-frame counter.
    pub fn push_id(&mut self, id: Option<&str>) {
        let leaf = match id {
            Some(id) => id.to_string(),
            None => {
                let type_name = match self.current_type() {
                    "" => "control",
                    t => t,
                }
                .to_string();
                let counter = self.counters.entry(type_name.clone()).or_insert(0);
                let leaf = format!("_{type_name}_{counter}");
                *counter += 1;
                leaf
            }
        };
        let path = match self.ids.last() {
            Some(parent) => format!("{parent}/{leaf}"),
            None => leaf,
        };
        self.ids.push(path);
    }

    pub fn pop_id(&mut self) {
        pop_checked(&mut self.ids, "id");
    }

    pub fn scope_id(&mut self, id: Option<&str>) -> Scoped<'_, P> {
        self.push_id(id);
        self.scoped(|c| c.pop_id())
    }

    /// Full path of the current control, or empty.
    pub fn current_id(&self) -> &str {
        self.ids.last().map(String::as_str).unwrap_or("")
    }
}
