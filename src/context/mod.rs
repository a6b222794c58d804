//! The immediate-mode context.
//!
//! A [`Context`] owns the platform handle, one LIFO stack per concern
//! (style sheets, style scopes, disable flag, z-level, viewport, font,
//! window, texture, control id), the per-window interaction state and the
//! frame's command buffer.
//!
//! A frame is `begin()`, a tree of widget calls, then `end()`, which returns
//! the commands sorted by `(window, z)`:
//!
//! ```
//! use xui::context::{Context, ContextConfig};
//! use xui::geometry::Rect;
//! use xui::testing::HeadlessPlatform;
//!
//! let mut ctx = Context::new(HeadlessPlatform::new(), ContextConfig::default()).unwrap();
//! let window = ctx.create_window("demo", Rect::new(0.0, 0.0, 320.0, 240.0), None);
//!
//! ctx.begin();
//! ctx.push_window(window);
//! ctx.label(None, Rect::new(10.0, 10.0, 100.0, 20.0), "hello");
//! ctx.pop_window();
//! assert_eq!(ctx.end().len(), 1);
//! ```

mod config;
mod stacks;
mod state;

use std::collections::HashMap;
use std::sync::Arc;

pub use config::{ContextConfig, DEFAULT_STYLE};
pub use stacks::Scoped;
pub use state::{EventResult, InteractionState, Status};

use crate::draw::{
    CircleElement, CommandList, DrawCommand, Element, EllipseElement, ImageElement, LineElement,
    PathElement, PolygonElement, RectElement, TextElement,
};
use crate::geometry::{Color, Rect, Vec2};
use crate::platform::{FontId, Platform, TextureId, WindowId};
use crate::style::{Border, Filled, ParseError, Stroke, StyleSheet};

use crate::widgets::window::ChromeFrame;
use stacks::StyleFrame;

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Immediate-mode widget context over a [`Platform`].
pub struct Context<P: Platform> {
    platform: P,
    config: ContextConfig,
    commands: CommandList,

    // ── Stacks ───────────────────────────────────────────────────────
    sheets: Vec<Arc<StyleSheet>>,
    /// Sheets installed by `new`; never popped.
    base_sheets: usize,
    styles: Vec<StyleFrame>,
    disable: Vec<bool>,
    zlevels: Vec<i64>,
    viewports: Vec<Rect>,
    fonts: Vec<FontId>,
    windows: Vec<WindowId>,
    textures: Vec<TextureId>,
    ids: Vec<String>,
    /// Open `begin_window` frames.
    pub(crate) chrome: Vec<ChromeFrame>,

    /// Auto-id counters per type name, reset by `begin`.
    counters: HashMap<String, u32>,
    interaction: HashMap<WindowId, InteractionState>,
    default_font: FontId,
}

impl<P: Platform> Context<P> {
    /// Create a context. Parses [`DEFAULT_STYLE`] and `config.style` (if
    /// any) into the base of the style sheet stack and creates the default
    /// font.
    pub fn new(mut platform: P, config: ContextConfig) -> Result<Self, ParseError> {
        let mut sheets = vec![Arc::new(StyleSheet::from_text(DEFAULT_STYLE)?)];
        if let Some(text) = &config.style {
            sheets.push(Arc::new(StyleSheet::from_text(text)?));
        }
        let default_font =
            platform.create_font(&config.font_family, config.font_size * config.scale);
        log::debug!("context created with {} base style sheet(s)", sheets.len());

        Ok(Self {
            platform,
            commands: CommandList::new(),
            base_sheets: sheets.len(),
            sheets,
            styles: Vec::new(),
            disable: Vec::new(),
            zlevels: Vec::new(),
            viewports: Vec::new(),
            fonts: Vec::new(),
            windows: Vec::new(),
            textures: Vec::new(),
            ids: Vec::new(),
            chrome: Vec::new(),
            counters: HashMap::new(),
            interaction: HashMap::new(),
            default_font,
            config,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Interaction state of `window`, if any control has touched it.
    pub fn interaction(&self, window: WindowId) -> Option<&InteractionState> {
        self.interaction.get(&window)
    }

    /// Scale a length by the configured scale and the current window's DPI.
    pub fn scale(&self, v: f32) -> f32 {
        v * self.config.scale * self.platform.dpi_scale(self.current_window())
    }

    // ── Frame ────────────────────────────────────────────────────────

    /// Start a frame: drop last frame's commands and reset auto-id counters.
    pub fn begin(&mut self) {
        self.commands.clear();
        self.counters.clear();
    }

    /// Finish the frame and return its commands sorted by `(window, z)`.
    ///
    /// Every stack must be back where `begin` found it.
    pub fn end(&mut self) -> &[DrawCommand] {
        debug_assert_eq!(self.sheets.len(), self.base_sheets, "unbalanced style sheet stack");
        debug_assert!(self.styles.is_empty(), "unbalanced style scope stack");
        debug_assert!(self.disable.is_empty(), "unbalanced disable stack");
        debug_assert!(self.zlevels.is_empty(), "unbalanced z-level stack");
        debug_assert!(self.viewports.is_empty(), "unbalanced viewport stack");
        debug_assert!(self.fonts.is_empty(), "unbalanced font stack");
        debug_assert!(self.windows.is_empty(), "unbalanced window stack");
        debug_assert!(self.textures.is_empty(), "unbalanced texture stack");
        debug_assert!(self.ids.is_empty(), "unbalanced id stack");
        debug_assert!(self.chrome.is_empty(), "begin_window without end_window");

        self.commands.sort();
        log::trace!("frame ended with {} commands", self.commands.len());
        self.commands.commands()
    }

    // ── Windows ──────────────────────────────────────────────────────

    /// Create a platform window.
    pub fn create_window(&mut self, title: &str, rect: Rect, parent: Option<WindowId>) -> WindowId {
        self.platform.create_window(title, rect, parent)
    }

    /// Destroy a platform window and forget its interaction state.
    pub fn remove_window(&mut self, window: WindowId) {
        self.platform.remove_window(window);
        if self.interaction.remove(&window).is_some() {
            log::debug!("dropped interaction state of {window}");
        }
    }

    // ── Clipboard ────────────────────────────────────────────────────

    pub fn clipboard(&self) -> String {
        self.platform.clipboard()
    }

    pub fn set_clipboard(&mut self, text: &str) {
        self.platform.set_clipboard(text);
    }

    // ── Metrics / input ──────────────────────────────────────────────

    /// Size of `text` in the current font.
    pub fn text_size(&self, text: &str) -> Vec2 {
        self.platform.text_size(self.current_font(), text)
    }

    /// Pointer position in the current window.
    pub fn cursor_pos(&self) -> Vec2 {
        self.platform.cursor_pos(self.current_window())
    }

    pub fn cursor_delta(&self) -> Vec2 {
        self.platform.cursor_delta(self.current_window())
    }

    pub fn cursor_wheel(&self) -> Vec2 {
        self.platform.cursor_wheel(self.current_window())
    }

    // ── Draw emission ────────────────────────────────────────────────

    fn push_command(&mut self, element: Element) -> &mut DrawCommand {
        let window = self.current_window();
        let zlevel = self.current_zlevel();
        self.commands.push(window, zlevel, element)
    }

    /// Draw `text` in the current font.
    pub fn draw_text(&mut self, text: &str, rect: Rect, color: Color, align: u32) -> &mut DrawCommand {
        let font = self.current_font();
        self.push_command(Element::Text(TextElement {
            text: text.to_string(),
            font,
            rect,
            color,
            align,
        }))
    }

    pub fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) -> &mut DrawCommand {
        self.push_command(Element::Line(LineElement { from, to, stroke }))
    }

    pub fn draw_rect(
        &mut self,
        rect: Rect,
        border: Option<Border>,
        filled: Option<Filled>,
    ) -> &mut DrawCommand {
        self.push_command(Element::Rect(RectElement { rect, border, filled }))
    }

    /// Start a path. Chain `move_to`/`line_to`/... on the result.
    pub fn draw_path(&mut self, stroke: Option<Stroke>, filled: Option<Filled>) -> &mut PathElement {
        let window = self.current_window();
        let zlevel = self.current_zlevel();
        self.commands.push_path(window, zlevel, PathElement::new(stroke, filled))
    }

    /// Blit `src` of the current texture to `dst`.
    pub fn draw_image(&mut self, src: Rect, dst: Rect) -> &mut DrawCommand {
        let texture = self.current_texture();
        self.push_command(Element::Image(ImageElement { texture, src, dst }))
    }

    pub fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        stroke: Option<Stroke>,
        filled: Option<Filled>,
    ) -> &mut DrawCommand {
        self.push_command(Element::Circle(CircleElement { center, radius, stroke, filled }))
    }

    pub fn draw_ellipse(
        &mut self,
        center: Vec2,
        radii: Vec2,
        stroke: Option<Stroke>,
        filled: Option<Filled>,
    ) -> &mut DrawCommand {
        self.push_command(Element::Ellipse(EllipseElement { center, radii, stroke, filled }))
    }

    pub fn draw_polygon(
        &mut self,
        points: Vec<Vec2>,
        stroke: Option<Stroke>,
        filled: Option<Filled>,
    ) -> &mut DrawCommand {
        self.push_command(Element::Polygon(PolygonElement { points, stroke, filled }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::{commands_to_string, HeadlessPlatform};

    fn ctx() -> Context<HeadlessPlatform> {
        Context::new(HeadlessPlatform::new(), ContextConfig::default()).unwrap()
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn bad_config_style_is_an_error() {
        let config = ContextConfig::new().with_style("button { filled red; }");
        assert!(Context::new(HeadlessPlatform::new(), config).is_err());
    }

    #[test]
    fn config_style_overrides_default() {
        let config = ContextConfig::new().with_style("button { font-color: red; }");
        let mut ctx = Context::new(HeadlessPlatform::new(), config).unwrap();
        ctx.push_type("button");
        assert_eq!(ctx.current_style_or("font-color", Color::BLACK), Color::rgb(255, 0, 0));
        ctx.pop_type();
    }

    #[test]
    fn scale_uses_config_and_dpi() {
        let mut platform = HeadlessPlatform::new();
        let w = platform.create_window("w", Rect::new(0.0, 0.0, 100.0, 100.0), None);
        platform.set_dpi_scale(w, 1.5);
        let mut ctx = Context::new(platform, ContextConfig::new().with_scale(2.0)).unwrap();
        assert_eq!(ctx.scale(10.0), 20.0);
        ctx.push_window(w);
        assert_eq!(ctx.scale(10.0), 30.0);
        ctx.pop_window();
    }

    // ── Draw emission ────────────────────────────────────────────────

    #[test]
    fn rects_keep_submission_order() {
        let mut ctx = ctx();
        ctx.begin();
        ctx.push_window(WindowId(1));
        for x in [30.0, 10.0, 20.0] {
            ctx.draw_rect(Rect::new(x, 0.0, 1.0, 1.0), None, None);
        }
        ctx.pop_window();
        let xs: Vec<f32> = ctx
            .end()
            .iter()
            .map(|c| match &c.element {
                Element::Rect(r) => r.rect.x,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(xs, vec![30.0, 10.0, 20.0]);
    }

    #[test]
    fn zlevel_lifts_commands() {
        let mut ctx = ctx();
        ctx.begin();
        ctx.push_window(WindowId(1));
        ctx.push_zlevel(100);
        ctx.draw_circle(Vec2::new(1.0, 1.0), 2.0, None, None);
        ctx.pop_zlevel();
        ctx.draw_line(Vec2::ZERO, Vec2::new(1.0, 0.0), Stroke::solid(1.0, Color::BLACK));
        ctx.pop_window();
        insta::assert_snapshot!(commands_to_string(ctx.end()), @r"
        w1 z=2 line 0,0 -> 1,0 stroke=1/#000000FF
        w1 z=101 circle 1,1 r=2
        ");
    }

    #[test]
    fn path_chains_into_command() {
        let mut ctx = ctx();
        ctx.begin();
        ctx.draw_path(None, Some(Filled::solid(Color::BLACK)))
            .move_to(Vec2::new(0.0, 0.0))
            .line_to(Vec2::new(4.0, 0.0))
            .line_to(Vec2::new(2.0, 3.0))
            .close();
        let commands = ctx.end();
        match &commands[0].element {
            Element::Path(p) => assert_eq!(p.data, "M 0 0 L 4 0 L 2 3 Z"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn begin_clears_previous_frame() {
        let mut ctx = ctx();
        ctx.begin();
        ctx.draw_rect(Rect::new(0.0, 0.0, 1.0, 1.0), None, None);
        assert_eq!(ctx.end().len(), 1);
        ctx.begin();
        assert!(ctx.end().is_empty());
    }

    #[test]
    fn text_uses_current_font() {
        let mut ctx = ctx();
        let font = ctx.platform_mut().create_font("mono", 10.0);
        ctx.begin();
        ctx.push_font(font);
        ctx.draw_text("hi", Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK, 0);
        ctx.pop_font();
        ctx.draw_text("hi", Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK, 0);
        let fonts: Vec<FontId> = ctx
            .end()
            .iter()
            .map(|c| match &c.element {
                Element::Text(t) => t.font,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(fonts, vec![font, FontId(0)]);
    }

    // ── Windows / clipboard ──────────────────────────────────────────

    #[test]
    fn remove_window_forgets_interaction() {
        let mut ctx = ctx();
        let w = ctx.create_window("w", Rect::new(0.0, 0.0, 100.0, 100.0), None);
        ctx.platform_mut().set_focus(w, true);
        ctx.platform_mut().set_cursor(w, Vec2::new(5.0, 5.0));
        ctx.platform_mut().press(w, crate::platform::Event::MouseLeft);

        ctx.begin();
        ctx.push_window(w);
        ctx.push_viewport(Rect::new(0.0, 0.0, 10.0, 10.0));
        ctx.push_id(Some("b"));
        ctx.current_event_status(false, crate::platform::Event::MouseLeft);
        ctx.pop_id();
        ctx.pop_viewport();
        ctx.pop_window();
        ctx.end();

        assert!(ctx.interaction(w).is_some());
        ctx.remove_window(w);
        assert!(ctx.interaction(w).is_none());
    }

    #[test]
    fn clipboard_passes_through() {
        let mut ctx = ctx();
        ctx.set_clipboard("copied");
        assert_eq!(ctx.clipboard(), "copied");
    }
}
