//! Menus and menubars over an [`ItemModel`].
//!
//! The model owns the retained state: which items exist and which are
//! selected (open). Each frame the context walks the model, draws the
//! items, resolves their input and writes selection changes back. A
//! selected submenu item opens its children in a popup to the right of
//! the item (below it, for menubar items).
//!
//! Item control ids are `{menu id}/{item id}`, so item ids must be unique
//! within one model. Popups are drawn `popup_zlevel` above their parent.
//! Hit-testing is not z-aware: controls under an open popup still see the
//! pointer.

use crate::context::{Context, Status};
use crate::geometry::{Color, Rect, Vec2, Vec4};
use crate::platform::{Platform, TextureId};
use crate::style::Stroke;

// ---------------------------------------------------------------------------
// ItemModel
// ---------------------------------------------------------------------------

/// Opaque handle to an item of an [`ItemModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemIndex(pub usize);

/// Tree of menu items with per-item selection state.
///
/// `None` as a parent means the invisible root.
pub trait ItemModel {
    /// Number of children under `parent`.
    fn row_count(&self, parent: Option<ItemIndex>) -> usize;
    /// Child at `row`/`column` under `parent`.
    fn index(&self, row: usize, column: usize, parent: Option<ItemIndex>) -> Option<ItemIndex>;
    fn parent(&self, index: ItemIndex) -> Option<ItemIndex>;
    /// Whether the item opens a submenu.
    fn is_menu(&self, index: ItemIndex) -> bool;
    fn is_selected(&self, index: ItemIndex) -> bool;
    fn set_selected(&mut self, index: ItemIndex, selected: bool);
    /// Display text.
    fn name(&self, index: ItemIndex) -> &str;
    /// Stable id, reported when a leaf is clicked.
    fn id(&self, index: ItemIndex) -> &str;

    fn icon(&self, _index: ItemIndex) -> Option<TextureId> {
        None
    }

    fn is_enabled(&self, _index: ItemIndex) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
struct TreeNode {
    id: String,
    name: String,
    icon: Option<TextureId>,
    parent: Option<usize>,
    children: Vec<usize>,
    selected: bool,
    enabled: bool,
}

/// A simple in-memory [`ItemModel`]. Items with children are submenus.
///
/// # Examples
///
/// ```
/// use xui::widgets::{ItemModel, TreeItemModel};
///
/// let mut model = TreeItemModel::new();
/// let file = model.add(None, "file", "File");
/// model.add(Some(file), "quit", "Quit");
/// assert!(model.is_menu(file));
/// assert_eq!(model.row_count(Some(file)), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeItemModel {
    nodes: Vec<TreeNode>,
    roots: Vec<usize>,
}

impl TreeItemModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item under `parent`.
    pub fn add(&mut self, parent: Option<ItemIndex>, id: &str, name: &str) -> ItemIndex {
        let index = self.nodes.len();
        let parent = parent.map(|p| p.0).filter(|&p| p < index);
        self.nodes.push(TreeNode {
            id: id.to_string(),
            name: name.to_string(),
            icon: None,
            parent,
            children: Vec::new(),
            selected: false,
            enabled: true,
        });
        match parent {
            Some(p) => self.nodes[p].children.push(index),
            None => self.roots.push(index),
        }
        ItemIndex(index)
    }

    pub fn set_enabled(&mut self, index: ItemIndex, enabled: bool) {
        if let Some(node) = self.nodes.get_mut(index.0) {
            node.enabled = enabled;
        }
    }

    pub fn set_icon(&mut self, index: ItemIndex, icon: Option<TextureId>) {
        if let Some(node) = self.nodes.get_mut(index.0) {
            node.icon = icon;
        }
    }

    /// First item with the given id.
    pub fn find(&self, id: &str) -> Option<ItemIndex> {
        self.nodes.iter().position(|n| n.id == id).map(ItemIndex)
    }

    fn children(&self, parent: Option<ItemIndex>) -> &[usize] {
        match parent {
            Some(p) => self.nodes.get(p.0).map(|n| n.children.as_slice()).unwrap_or(&[]),
            None => &self.roots,
        }
    }
}

impl ItemModel for TreeItemModel {
    fn row_count(&self, parent: Option<ItemIndex>) -> usize {
        self.children(parent).len()
    }

    fn index(&self, row: usize, column: usize, parent: Option<ItemIndex>) -> Option<ItemIndex> {
        if column != 0 {
            return None;
        }
        self.children(parent).get(row).copied().map(ItemIndex)
    }

    fn parent(&self, index: ItemIndex) -> Option<ItemIndex> {
        self.nodes.get(index.0).and_then(|n| n.parent).map(ItemIndex)
    }

    fn is_menu(&self, index: ItemIndex) -> bool {
        self.nodes.get(index.0).is_some_and(|n| !n.children.is_empty())
    }

    fn is_selected(&self, index: ItemIndex) -> bool {
        self.nodes.get(index.0).is_some_and(|n| n.selected)
    }

    fn set_selected(&mut self, index: ItemIndex, selected: bool) {
        if let Some(node) = self.nodes.get_mut(index.0) {
            node.selected = selected;
        }
    }

    fn name(&self, index: ItemIndex) -> &str {
        self.nodes.get(index.0).map(|n| n.name.as_str()).unwrap_or("")
    }

    fn id(&self, index: ItemIndex) -> &str {
        self.nodes.get(index.0).map(|n| n.id.as_str()).unwrap_or("")
    }

    fn icon(&self, index: ItemIndex) -> Option<TextureId> {
        self.nodes.get(index.0).and_then(|n| n.icon)
    }

    fn is_enabled(&self, index: ItemIndex) -> bool {
        self.nodes.get(index.0).is_some_and(|n| n.enabled)
    }
}

// ---------------------------------------------------------------------------
// Selection helpers
// ---------------------------------------------------------------------------

fn children<M: ItemModel + ?Sized>(model: &M, parent: Option<ItemIndex>) -> Vec<ItemIndex> {
    (0..model.row_count(parent)).filter_map(|row| model.index(row, 0, parent)).collect()
}

/// Deselect every item below `parent`.
fn clear_selection<M: ItemModel + ?Sized>(model: &mut M, parent: Option<ItemIndex>) {
    for child in children(model, parent) {
        if model.is_selected(child) {
            model.set_selected(child, false);
        }
        if model.is_menu(child) {
            clear_selection(model, Some(child));
        }
    }
}

/// Close the open children of `parent`, subtrees included, except `keep`.
fn close_siblings<M: ItemModel + ?Sized>(
    model: &mut M,
    parent: Option<ItemIndex>,
    keep: Option<ItemIndex>,
) {
    for sibling in children(model, parent) {
        if Some(sibling) != keep && model.is_selected(sibling) {
            model.set_selected(sibling, false);
            clear_selection(model, Some(sibling));
        }
    }
}

fn any_selected<M: ItemModel + ?Sized>(model: &M, parent: Option<ItemIndex>) -> bool {
    children(model, parent).into_iter().any(|c| model.is_selected(c))
}

/// Where an item is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Bar,
    Popup,
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

impl<P: Platform> Context<P> {
    /// Horizontal menubar over the model's top-level items. Returns the id
    /// of the leaf item clicked this frame.
    ///
    /// Pressing a submenu item opens it, pressing it again closes it.
    /// While one menu is open, hovering another top-level item switches to
    /// it. A press on any other control, or one that lands on no control,
    /// closes all menus.
    pub fn menubar<M: ItemModel + ?Sized>(
        &mut self,
        id: Option<&str>,
        rect: Rect,
        model: &mut M,
    ) -> Option<String> {
        self.push_type("menubar");
        self.push_id(id);
        self.push_viewport(rect);
        self.dismiss_menus(model, None);
        self.draw_frame(rect);

        self.push_element("item");
        let padding = self.style_length("padding", 8.0);
        self.pop_element();

        let mut clicked = None;
        let mut x = rect.x;
        let mut open = None;
        for index in children(model, None) {
            let w = self.text_size(model.name(index)).x + 2.0 * padding;
            let item = Rect::new(x, rect.y, w, rect.h);
            x += w;
            self.menu_item(model, None, index, item, Placement::Bar, &mut clicked);
            if model.is_menu(index) && model.is_selected(index) {
                open = Some((index, item));
            }
        }

        if clicked.is_some() {
            clear_selection(model, None);
        } else if let Some((index, item)) = open {
            self.menu_popup(model, index, Vec2::new(item.x, item.bottom()), &mut clicked);
            if clicked.is_some() {
                clear_selection(model, None);
            }
        }

        self.pop_viewport();
        self.pop_id();
        self.pop_type();
        clicked
    }

    /// Popup menu listing the children of `parent` with its top-left at
    /// `origin`. Returns the id of the leaf item clicked this frame.
    ///
    /// The popup is drawn every frame it is called; the caller decides when
    /// to show it. Submenus open on hover. Presses elsewhere close open
    /// submenus.
    pub fn menu<M: ItemModel + ?Sized>(
        &mut self,
        id: Option<&str>,
        origin: Vec2,
        model: &mut M,
        parent: Option<ItemIndex>,
    ) -> Option<String> {
        self.push_type("menu");
        self.push_id(id);
        self.dismiss_menus(model, parent);

        let mut clicked = None;
        self.popup_items(model, parent, origin, &mut clicked);
        if clicked.is_some() {
            clear_selection(model, parent);
        }

        self.pop_id();
        self.pop_type();
        clicked
    }

    /// Close everything under `parent` when the window's capture or hot
    /// control lies outside this menu and something is open.
    fn dismiss_menus<M: ItemModel + ?Sized>(&mut self, model: &mut M, parent: Option<ItemIndex>) {
        if !any_selected(model, parent) {
            return;
        }
        let prefix = format!("{}/", self.current_id());
        let owner = self.active_id().or(self.hot_id());
        if !owner.is_some_and(|o| o.starts_with(&prefix)) {
            log::trace!("dismissing menus under '{}'", self.current_id());
            clear_selection(model, parent);
        }
    }

    /// Popup for the children of the submenu item `index`.
    fn menu_popup<M: ItemModel + ?Sized>(
        &mut self,
        model: &mut M,
        index: ItemIndex,
        origin: Vec2,
        clicked: &mut Option<String>,
    ) {
        self.push_type("menu");
        self.popup_items(model, Some(index), origin, clicked);
        self.pop_type();
    }

    /// Draw a popup of `parent`'s children in the current `menu` scope,
    /// then recurse into the submenu left open.
    fn popup_items<M: ItemModel + ?Sized>(
        &mut self,
        model: &mut M,
        parent: Option<ItemIndex>,
        origin: Vec2,
        clicked: &mut Option<String>,
    ) {
        let zlevel = self.current_zlevel() + self.config().popup_zlevel;
        self.push_zlevel(zlevel);

        let items = children(model, parent);
        self.push_element("item");
        let item_h = self.style_length("height", 22.0);
        let padding = self.style_length("padding", 8.0);
        let text_w = items
            .iter()
            .map(|&i| self.text_size(model.name(i)).x)
            .fold(0.0_f32, f32::max);
        self.pop_element();

        let width = self.style_length("width", 160.0).max(text_w + 2.0 * padding + 2.0 * item_h);
        let popup = Rect::new(origin.x, origin.y, width, items.len() as f32 * item_h);
        self.draw_frame(popup);

        let mut open = None;
        for (row, &index) in items.iter().enumerate() {
            let item = Rect::new(popup.x, popup.y + row as f32 * item_h, width, item_h);
            self.menu_item(model, parent, index, item, Placement::Popup, clicked);
            if model.is_menu(index) && model.is_selected(index) {
                open = Some((index, item));
            }
        }

        if clicked.is_none() {
            if let Some((index, item)) = open {
                self.menu_popup(model, index, Vec2::new(item.right(), item.y), clicked);
            }
        }

        self.pop_zlevel();
    }

    /// Resolve and draw one item.
    fn menu_item<M: ItemModel + ?Sized>(
        &mut self,
        model: &mut M,
        parent: Option<ItemIndex>,
        index: ItemIndex,
        rect: Rect,
        placement: Placement,
        clicked: &mut Option<String>,
    ) {
        self.push_element("item");
        self.push_id(Some(model.id(index)));
        self.push_disable(!model.is_enabled(index));
        self.push_viewport(rect);
        let trigger = self.config().trigger;
        let event = self.resolve_event(false, trigger);

        let is_menu = model.is_menu(index);
        let selected = model.is_selected(index);
        if event.pressed {
            if !is_menu {
                log::debug!("menu item '{}' clicked", model.id(index));
                *clicked = Some(model.id(index).to_string());
                self.set_hot(None);
            } else if selected && placement == Placement::Bar {
                model.set_selected(index, false);
                clear_selection(model, Some(index));
                self.set_hot(None);
            } else {
                close_siblings(model, parent, Some(index));
                model.set_selected(index, true);
                let path = self.current_id().to_string();
                self.set_hot(Some(path));
            }
        } else if event.status == Status::Hover {
            let sibling_open = children(model, parent)
                .into_iter()
                .any(|s| s != index && model.is_selected(s));
            if is_menu && !selected && (sibling_open || placement == Placement::Popup) {
                close_siblings(model, parent, Some(index));
                model.set_selected(index, true);
                let path = self.current_id().to_string();
                self.set_hot(Some(path));
            } else if !is_menu && placement == Placement::Popup && sibling_open {
                close_siblings(model, parent, None);
            }
        }

        let status = match event.status {
            Status::Disabled => Status::Disabled,
            _ if model.is_selected(index) => Status::Active,
            status => status,
        };
        self.push_status(status);
        self.draw_frame(rect);

        let padding = self.style_length("padding", 8.0);
        let mut text_rect = rect.shrink(Vec4::new(padding, 0.0, padding, 0.0));
        if placement == Placement::Popup {
            // Icon gutter on the left, arrow on the right.
            text_rect = rect.shrink(Vec4::new(rect.h + padding, 0.0, rect.h + padding, 0.0));
            if let Some(texture) = model.icon(index) {
                let icon = Rect::new(rect.x, rect.y, rect.h, rect.h).shrink(Vec4::splat(3.0));
                self.push_texture(texture);
                let src = Rect::from_size(self.platform().texture_size(texture));
                self.draw_image(src, icon);
                self.pop_texture();
            }
        }

        self.push_element("text");
        self.draw_style_text(model.name(index), text_rect);
        self.pop_element();

        if is_menu && placement == Placement::Popup {
            self.push_element("arrow");
            let stroke = self.current_style_or("stroke", Stroke::solid(1.0, Color::BLACK));
            let stroke = Stroke { width: self.scale(stroke.width), ..stroke };
            let glyph = Rect::new(rect.right() - rect.h, rect.y, rect.h, rect.h)
                .shrink(Vec4::splat(rect.h * 0.35));
            self.draw_path(Some(stroke), None)
                .move_to(Vec2::new(glyph.x, glyph.y))
                .line_to(Vec2::new(glyph.right(), glyph.center().y))
                .line_to(Vec2::new(glyph.x, glyph.bottom()));
            self.pop_element();
        }

        self.pop_status();
        self.pop_viewport();
        self.pop_disable();
        self.pop_id();
        self.pop_element();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::ContextConfig;
    use crate::platform::{Event, WindowId};
    use crate::testing::{texts, HeadlessPlatform};
    use crate::widgets::WindowFlags;

    // ── TreeItemModel ────────────────────────────────────────────────

    fn model() -> TreeItemModel {
        let mut m = TreeItemModel::new();
        let file = m.add(None, "file", "File");
        m.add(Some(file), "new", "New");
        m.add(Some(file), "open", "Open");
        let recent = m.add(Some(file), "recent", "Recent");
        m.add(Some(recent), "a.txt", "a.txt");
        let quit = m.add(Some(file), "quit", "Quit");
        m.set_enabled(quit, false);
        let edit = m.add(None, "edit", "Edit");
        m.add(Some(edit), "copy", "Copy");
        m
    }

    fn idx(m: &TreeItemModel, id: &str) -> ItemIndex {
        m.find(id).unwrap()
    }

    #[test]
    fn tree_model_indexes_rows() {
        let m = model();
        let file = idx(&m, "file");
        assert_eq!(m.row_count(None), 2);
        assert_eq!(m.row_count(Some(file)), 4);
        assert_eq!(m.index(2, 0, Some(file)), Some(idx(&m, "recent")));
        assert_eq!(m.index(0, 1, Some(file)), None);
        assert_eq!(m.index(9, 0, Some(file)), None);
        assert_eq!(m.parent(idx(&m, "a.txt")), Some(idx(&m, "recent")));
        assert_eq!(m.parent(file), None);
        assert!(m.is_menu(file));
        assert!(!m.is_menu(idx(&m, "new")));
        assert!(!m.is_enabled(idx(&m, "quit")));
        assert_eq!(m.name(idx(&m, "copy")), "Copy");
    }

    #[test]
    fn tree_model_tolerates_unknown_indices() {
        let mut m = model();
        let bogus = ItemIndex(99);
        assert_eq!(m.row_count(Some(bogus)), 0);
        assert_eq!(m.name(bogus), "");
        assert!(!m.is_selected(bogus));
        m.set_selected(bogus, true);
        assert_eq!(m.find("nope"), None);
    }

    #[test]
    fn clearing_selection_walks_subtrees() {
        let mut m = model();
        let file = idx(&m, "file");
        let recent = idx(&m, "recent");
        m.set_selected(file, true);
        m.set_selected(recent, true);
        clear_selection(&mut m, None);
        assert!(!m.is_selected(file));
        assert!(!m.is_selected(recent));
    }

    // ── Menubar ──────────────────────────────────────────────────────

    // Headless text is 7px per char at the default 14px font, padding 8:
    // File 0..44, Edit 44..88. The File popup starts at (0, 22) and is
    // 160 wide with 22px rows: New, Open, Recent, Quit. Recent's popup
    // opens at (160, 66).

    const BAR: Rect = Rect::new(0.0, 0.0, 300.0, 22.0);

    fn setup() -> (Context<HeadlessPlatform>, WindowId) {
        let mut ctx = Context::new(HeadlessPlatform::new(), ContextConfig::default()).unwrap();
        let w = ctx.create_window("main", Rect::new(0.0, 0.0, 400.0, 300.0), None);
        ctx.platform_mut().set_focus(w, true);
        (ctx, w)
    }

    /// One frame with the menubar; returns the clicked id and the texts.
    fn frame(
        ctx: &mut Context<HeadlessPlatform>,
        w: WindowId,
        m: &mut TreeItemModel,
    ) -> (Option<String>, Vec<String>) {
        ctx.begin();
        let flags = WindowFlags::NO_BACKGROUND | WindowFlags::NO_TITLE_BAR | WindowFlags::NO_RESIZE;
        ctx.begin_window(w, flags);
        let clicked = ctx.menubar(Some("main"), BAR, m);
        ctx.end_window();
        let drawn = texts(ctx.end()).into_iter().map(String::from).collect();
        ctx.platform_mut().tick();
        (clicked, drawn)
    }

    fn click(
        ctx: &mut Context<HeadlessPlatform>,
        w: WindowId,
        m: &mut TreeItemModel,
        at: Vec2,
    ) -> Option<String> {
        ctx.platform_mut().set_cursor(w, at);
        ctx.platform_mut().press(w, Event::MouseLeft);
        let (clicked, _) = frame(ctx, w, m);
        ctx.platform_mut().release(w, Event::MouseLeft);
        frame(ctx, w, m);
        clicked
    }

    #[test]
    fn closed_bar_draws_top_level_only() {
        let (mut ctx, w) = setup();
        let mut m = model();
        let (clicked, drawn) = frame(&mut ctx, w, &mut m);
        assert_eq!(clicked, None);
        assert_eq!(drawn, vec!["File", "Edit"]);
    }

    #[test]
    fn click_toggles_a_menu() {
        let (mut ctx, w) = setup();
        let mut m = model();
        click(&mut ctx, w, &mut m, Vec2::new(10.0, 10.0));
        assert!(m.is_selected(idx(&m, "file")));
        assert_eq!(ctx.interaction(w).and_then(|s| s.hot_id()), Some("w1/main/file"));

        let (_, drawn) = frame(&mut ctx, w, &mut m);
        assert_eq!(drawn, vec!["File", "Edit", "New", "Open", "Recent", "Quit"]);

        click(&mut ctx, w, &mut m, Vec2::new(10.0, 10.0));
        assert!(!m.is_selected(idx(&m, "file")));
    }

    #[test]
    fn hover_switches_between_open_menus() {
        let (mut ctx, w) = setup();
        let mut m = model();
        ctx.platform_mut().set_cursor(w, Vec2::new(50.0, 10.0));
        frame(&mut ctx, w, &mut m);
        assert!(!m.is_selected(idx(&m, "edit")), "hover alone opens nothing");

        click(&mut ctx, w, &mut m, Vec2::new(10.0, 10.0));
        ctx.platform_mut().set_cursor(w, Vec2::new(50.0, 10.0));
        let (_, drawn) = frame(&mut ctx, w, &mut m);
        assert!(m.is_selected(idx(&m, "edit")));
        assert!(!m.is_selected(idx(&m, "file")));
        assert_eq!(drawn, vec!["File", "Edit", "Copy"]);
    }

    #[test]
    fn leaf_click_reports_id_and_closes() {
        let (mut ctx, w) = setup();
        let mut m = model();
        click(&mut ctx, w, &mut m, Vec2::new(10.0, 10.0));
        let clicked = click(&mut ctx, w, &mut m, Vec2::new(20.0, 33.0));
        assert_eq!(clicked.as_deref(), Some("new"));
        assert!(!m.is_selected(idx(&m, "file")));
    }

    #[test]
    fn submenu_opens_on_hover_and_closes_on_sibling() {
        let (mut ctx, w) = setup();
        let mut m = model();
        click(&mut ctx, w, &mut m, Vec2::new(10.0, 10.0));

        ctx.platform_mut().set_cursor(w, Vec2::new(20.0, 77.0));
        let (_, drawn) = frame(&mut ctx, w, &mut m);
        assert!(m.is_selected(idx(&m, "recent")));
        assert_eq!(drawn.last().map(String::as_str), Some("a.txt"));

        ctx.platform_mut().set_cursor(w, Vec2::new(20.0, 55.0));
        frame(&mut ctx, w, &mut m);
        assert!(!m.is_selected(idx(&m, "recent")));
        assert!(m.is_selected(idx(&m, "file")));
    }

    #[test]
    fn nested_leaf_click_closes_everything() {
        let (mut ctx, w) = setup();
        let mut m = model();
        click(&mut ctx, w, &mut m, Vec2::new(10.0, 10.0));
        ctx.platform_mut().set_cursor(w, Vec2::new(20.0, 77.0));
        frame(&mut ctx, w, &mut m);

        let clicked = click(&mut ctx, w, &mut m, Vec2::new(170.0, 77.0));
        assert_eq!(clicked.as_deref(), Some("a.txt"));
        assert!(!m.is_selected(idx(&m, "file")));
        assert!(!m.is_selected(idx(&m, "recent")));
    }

    #[test]
    fn disabled_item_does_not_fire() {
        let (mut ctx, w) = setup();
        let mut m = model();
        click(&mut ctx, w, &mut m, Vec2::new(10.0, 10.0));
        assert_eq!(click(&mut ctx, w, &mut m, Vec2::new(20.0, 99.0)), None);
        // The press landed on an item, so the menu stays open.
        assert!(m.is_selected(idx(&m, "file")));
        let (_, drawn) = frame(&mut ctx, w, &mut m);
        assert_eq!(drawn, vec!["File", "Edit", "New", "Open", "Recent", "Quit"]);
    }

    #[test]
    fn press_outside_dismisses() {
        let (mut ctx, w) = setup();
        let mut m = model();
        click(&mut ctx, w, &mut m, Vec2::new(10.0, 10.0));
        click(&mut ctx, w, &mut m, Vec2::new(350.0, 250.0));
        assert!(!m.is_selected(idx(&m, "file")));
        let (_, drawn) = frame(&mut ctx, w, &mut m);
        assert_eq!(drawn, vec!["File", "Edit"]);
    }

    #[test]
    fn popups_sort_above_the_bar() {
        let (mut ctx, w) = setup();
        let mut m = model();
        click(&mut ctx, w, &mut m, Vec2::new(10.0, 10.0));
        ctx.begin();
        let flags = WindowFlags::NO_BACKGROUND | WindowFlags::NO_TITLE_BAR | WindowFlags::NO_RESIZE;
        ctx.begin_window(w, flags);
        ctx.menubar(Some("main"), BAR, &mut m);
        ctx.label(None, Rect::new(0.0, 100.0, 50.0, 20.0), "after");
        ctx.end_window();
        let commands = ctx.end();
        let z_of = |text: &str| {
            commands
                .iter()
                .find(|c| matches!(&c.element, crate::draw::Element::Text(t) if t.text == text))
                .map(|c| c.z)
                .unwrap()
        };
        assert!(z_of("New") > z_of("after"));
        assert!(z_of("New") > 1 << 20);
        assert_eq!(texts(commands).last().copied(), Some("Quit"));
    }

    // ── Standalone menu ──────────────────────────────────────────────

    #[test]
    fn standalone_menu_lists_children_and_reports_clicks() {
        let (mut ctx, w) = setup();
        let mut m = model();
        let file = idx(&m, "file");
        ctx.platform_mut().set_cursor(w, Vec2::new(60.0, 82.0));
        ctx.platform_mut().press(w, Event::MouseLeft);
        ctx.begin();
        ctx.push_window(w);
        let clicked = ctx.menu(Some("ctx"), Vec2::new(50.0, 50.0), &mut m, Some(file));
        ctx.pop_window();
        assert_eq!(texts(ctx.end()), vec!["New", "Open", "Recent", "Quit"]);
        assert_eq!(clicked.as_deref(), Some("open"));
    }
}
