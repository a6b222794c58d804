//! Style sheets and the cascade.
//!
//! A [`StyleSheet`] maps selector names to [`Selector`]s. Lookups go through
//! [`StyleSheet::find`] for one sheet, or [`cascade_find`] across a stack of
//! sheets where later sheets take precedence within each fallback tier.

use std::collections::HashMap;
use std::sync::Arc;

use crate::style::parser::{parse_selectors, ParseError};
use crate::style::query::StyleQuery;
use crate::style::value::{FromValue, Value};

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// One rule: attribute name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selector {
    attrs: HashMap<String, Value>,
}

impl Selector {
    /// Create an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an attribute value.
    pub fn get(&self, attr: &str) -> Option<&Value> {
        self.attrs.get(attr)
    }

    /// Set an attribute, replacing any previous value.
    pub fn insert(&mut self, attr: impl Into<String>, value: Value) {
        self.attrs.insert(attr.into(), value);
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Whether no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterate over `(attribute, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// ---------------------------------------------------------------------------
// StyleSheet
// ---------------------------------------------------------------------------

/// A parsed style sheet.
///
/// # Examples
///
/// ```
/// use xui::style::{StyleSheet, Value};
/// use xui::geometry::Color;
///
/// let sheet = StyleSheet::from_text("* { font-color: red; }").unwrap();
/// assert_eq!(sheet.find("label-text:hover@font-color"), Some(&Value::Color(Color::rgb(255, 0, 0))));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    selectors: HashMap<String, Selector>,
}

impl StyleSheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a new sheet from text.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        let mut sheet = Self::new();
        sheet.parse(text)?;
        Ok(sheet)
    }

    /// Replace the sheet's contents with the rules in `text`.
    ///
    /// Parsing is all-or-nothing: on error the sheet keeps its previous rules.
    pub fn parse(&mut self, text: &str) -> Result<(), ParseError> {
        let selectors = parse_selectors(text)?;
        log::debug!("parsed style sheet: {} selectors", selectors.len());
        self.selectors = selectors;
        Ok(())
    }

    /// Get a selector by its exact name.
    pub fn selector(&self, name: &str) -> Option<&Selector> {
        self.selectors.get(name)
    }

    /// Get or create a selector by its exact name.
    pub fn selector_mut(&mut self, name: &str) -> &mut Selector {
        self.selectors.entry(name.to_string()).or_default()
    }

    /// Number of selectors.
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// Whether the sheet has no selectors.
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Remove every selector.
    pub fn clear(&mut self) {
        self.selectors.clear();
    }

    /// Exact lookup of `attr` in selector `selector`, no fallback.
    pub fn lookup(&self, selector: &str, attr: &str) -> Option<&Value> {
        self.selectors.get(selector)?.get(attr)
    }

    /// Resolve a full query name (`{id#}{type}{-element}*{:action}@{attr}`)
    /// through the fallback tiers. `inherit` and empty values are skipped.
    pub fn find(&self, name: &str) -> Option<&Value> {
        let query = StyleQuery::parse(name);
        query
            .candidates()
            .iter()
            .find_map(|key| self.lookup(key, query.attr).filter(|v| v.is_terminal()))
    }

    /// [`find`](Self::find) with typed extraction and a default.
    pub fn find_or<T: FromValue>(&self, name: &str, default: T) -> T {
        self.find(name).and_then(T::from_value).unwrap_or(default)
    }
}

/// Resolve a query across a stack of sheets.
///
/// `sheets` is ordered bottom to top; for each fallback tier the sheets are
/// probed top-down before moving to the next tier.
pub fn cascade_find<'a>(sheets: &'a [Arc<StyleSheet>], name: &str) -> Option<&'a Value> {
    let query = StyleQuery::parse(name);
    for key in query.candidates() {
        for sheet in sheets.iter().rev() {
            if let Some(value) = sheet.lookup(&key, query.attr) {
                if value.is_terminal() {
                    return Some(value);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::geometry::{Color, Vec4};
    use crate::style::value::{Border, Filled, StrokeStyle};

    fn sheet(text: &str) -> StyleSheet {
        StyleSheet::from_text(text).unwrap_or_else(|e| panic!("parse failed: {e}"))
    }

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    // ── find ─────────────────────────────────────────────────────────

    #[test]
    fn universal_attr_found_from_any_query() {
        let s = sheet("* { font-size: 12; } button { filled: red; } label-text:hover { x: 1; }");
        for q in ["*@font-size", "button@font-size", "ok#label-text:hover@font-size"] {
            assert_eq!(s.find(q), Some(&Value::Int(12)), "{q}");
        }
    }

    #[test]
    fn action_falls_back_to_element_chain() {
        let s = sheet("button { filled: red; } button-text { filled: blue; }");
        assert_eq!(s.find("button-text:hover@filled"), Some(&Value::Color(BLUE)));
    }

    #[test]
    fn element_chain_truncates_from_the_end() {
        let s = sheet("menu-item { x: 1; } menu { x: 2; }");
        assert_eq!(s.find("menu-item-text-icon@x"), Some(&Value::Int(1)));
        assert_eq!(s.find("menu-bar@x"), Some(&Value::Int(2)));
    }

    #[test]
    fn id_tier_wins() {
        let s = sheet("ok#button:hover { x: 1; } button:hover { x: 2; } button { x: 3; }");
        assert_eq!(s.find("ok#button:hover@x"), Some(&Value::Int(1)));
        assert_eq!(s.find("cancel#button:hover@x"), Some(&Value::Int(2)));
        assert_eq!(s.find("ok#button@x"), Some(&Value::Int(3)));
    }

    #[test]
    fn inherit_defers_to_a_general_rule() {
        let s = sheet("* { font-color: red; } label { font-color: inherit; }");
        assert_eq!(s.find("label@font-color"), Some(&Value::Color(RED)));
    }

    #[test]
    fn inherit_with_no_fallback_is_not_found() {
        let s = sheet("label { font-color: inherit; }");
        assert_eq!(s.find("label@font-color"), None);
    }

    #[test]
    fn missing_attr_uses_default() {
        let s = sheet("button { x: 1; }");
        assert_eq!(s.find_or("button@y", 7.0f32), 7.0);
        assert_eq!(s.find_or("button@x", 7.0f32), 1.0);
        // Wrong type also falls back to the default.
        assert_eq!(s.find_or("button@x", Color::BLACK), Color::BLACK);
    }

    #[test]
    fn hover_and_normal_fills() {
        let s = sheet(
            "button{filled: filled(solid, red);} button:hover{filled: filled(solid, blue);}",
        );
        assert_eq!(s.find("button:hover@filled"), Some(&Value::Filled(Filled::solid(BLUE))));
        assert_eq!(s.find("button@filled"), Some(&Value::Filled(Filled::solid(RED))));
    }

    #[test]
    fn typed_border_lookup() {
        let s = sheet("window { border: border(solid, 2, #FF0000FF, vec4(1,2,3,4)); }");
        let b: Border = s.find_or(
            "main#window-title@border",
            Border { style: StrokeStyle::None, width: 0.0, color: Color::BLACK, radius: Vec4::ZERO },
        );
        assert_eq!(b.style, StrokeStyle::Solid);
        assert_eq!(b.width, 2.0);
        assert_eq!(b.color, Color::rgba(255, 0, 0, 255));
        assert_eq!(b.radius, Vec4::new(1.0, 2.0, 3.0, 4.0));
    }

    // ── parse ────────────────────────────────────────────────────────

    #[test]
    fn failed_reparse_keeps_previous_rules() {
        let mut s = sheet("a { x: 1; }");
        assert!(s.parse("a { x: 2;").is_err());
        assert_eq!(s.find("a@x"), Some(&Value::Int(1)));
    }

    #[test]
    fn reparse_replaces_rules() {
        let mut s = sheet("a { x: 1; }");
        s.parse("b { x: 2; }").unwrap();
        assert_eq!(s.find("a@x"), None);
        assert_eq!(s.find("b@x"), Some(&Value::Int(2)));
    }

    // ── cascade ──────────────────────────────────────────────────────

    #[test]
    fn cascade_prefers_top_sheet_within_a_tier() {
        let base = Arc::new(sheet("button { x: 1; } * { y: 1; }"));
        let theme = Arc::new(sheet("button { x: 2; }"));
        let stack = [base, theme];
        assert_eq!(cascade_find(&stack, "button@x"), Some(&Value::Int(2)));
        assert_eq!(cascade_find(&stack, "button@y"), Some(&Value::Int(1)));
    }

    #[test]
    fn cascade_is_tier_major() {
        // A specific rule in a lower sheet beats a universal rule in a higher one.
        let base = Arc::new(sheet("button { x: 1; }"));
        let theme = Arc::new(sheet("* { x: 2; }"));
        let stack = [base, theme];
        assert_eq!(cascade_find(&stack, "button@x"), Some(&Value::Int(1)));
        assert_eq!(cascade_find(&stack, "label@x"), Some(&Value::Int(2)));
    }

    #[test]
    fn theme_universal_rules_only_fill_gaps_in_default_style() {
        use crate::style::value::FromValue;

        let base = Arc::new(sheet(crate::context::DEFAULT_STYLE));
        let theme = Arc::new(sheet("* { font-color: white; filled: filled(solid, black); }"));
        let stack = [base, theme];
        // No type-level font color for labels: the theme's `*` applies.
        assert_eq!(
            cascade_find(&stack, "label-text@font-color").and_then(Color::from_value),
            Some(Color::WHITE)
        );
        // The default `button` rule is more specific than the theme's `*`.
        assert_eq!(
            cascade_find(&stack, "ok#button:hover@filled").and_then(Filled::from_value),
            Some(Filled::solid(Color::rgb(0xE5, 0xF1, 0xFB)))
        );
        assert_eq!(
            cascade_find(&stack, "button@filled").and_then(Filled::from_value),
            Some(Filled::solid(Color::rgb(0xE1, 0xE1, 0xE1)))
        );
    }

    #[test]
    fn cascade_inherit_continues_to_lower_sheet() {
        let base = Arc::new(sheet("button { x: 1; }"));
        let theme = Arc::new(sheet("button { x: inherit; }"));
        let stack = [base, theme];
        assert_eq!(cascade_find(&stack, "button@x"), Some(&Value::Int(1)));
    }

    #[test]
    fn cascade_on_empty_stack() {
        assert_eq!(cascade_find(&[], "button@x"), None);
    }
}
