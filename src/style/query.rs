//! Style queries: decomposition of `{id#}{type}{-element}*{:action}{@attr}`
//! and the fallback tiers probed by `find`.
//!
//! Tiers, most specific first (`E` is the full element chain):
//! 1. `{id#}{type}{E}{:action}`
//! 2. `{type}{E}{:action}`
//! 3. `{type}{E}`
//! 4. `{type}{E[..k]}` for k = len-1 down to 1
//! 5. `{type}`
//! 6. `*`
//!
//! Tiers that would repeat the previous key are skipped.

/// A decomposed style query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleQuery<'n> {
    /// Control id including its trailing `#`, or empty.
    pub id: &'n str,
    /// Widget type name, e.g. `button`.
    pub type_name: &'n str,
    /// Element chain in order, e.g. `["text"]` for `button-text`.
    pub elements: Vec<&'n str>,
    /// Action suffix including its leading `:`, or empty.
    pub action: &'n str,
    /// Attribute name after `@`, or empty.
    pub attr: &'n str,
}

impl<'n> StyleQuery<'n> {
    /// Decompose a full query name.
    ///
    /// Delimiters are located outside-in: `@` (last), then `#` (first), then
    /// `:`, then elements are peeled off the end one `-` at a time.
    pub fn parse(name: &'n str) -> Self {
        let (rest, attr) = match name.rfind('@') {
            Some(p) => (&name[..p], &name[p + 1..]),
            None => (name, ""),
        };
        let (id, rest) = match rest.find('#') {
            Some(p) => (&rest[..=p], &rest[p + 1..]),
            None => ("", rest),
        };
        let (mut rest, action) = match rest.find(':') {
            Some(p) => (&rest[..p], &rest[p..]),
            None => (rest, ""),
        };

        let mut elements = Vec::new();
        while let Some(p) = rest.rfind('-') {
            elements.push(&rest[p + 1..]);
            rest = &rest[..p];
        }
        elements.reverse();

        Self { id, type_name: rest, elements, action, attr }
    }

    /// `{type}` followed by the first `k` elements, `-`-joined.
    fn chain(&self, k: usize) -> String {
        let mut key = String::from(self.type_name);
        for element in &self.elements[..k] {
            key.push('-');
            key.push_str(element);
        }
        key
    }

    /// Selector keys to probe, most specific first, without repeats.
    pub fn candidates(&self) -> Vec<String> {
        let n = self.elements.len();
        let full = self.chain(n);
        let mut keys: Vec<String> = Vec::with_capacity(n + 4);
        let mut push = |key: String| {
            if keys.last() != Some(&key) {
                keys.push(key);
            }
        };

        if !self.id.is_empty() {
            push(format!("{}{}{}", self.id, full, self.action));
        }
        if !self.action.is_empty() {
            push(format!("{}{}", full, self.action));
        }
        push(full);
        for k in (0..n).rev() {
            push(self.chain(k));
        }
        push("*".to_string());

        keys
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decompose_full_name() {
        let q = StyleQuery::parse("win/ok#button-frame-text:hover@filled");
        assert_eq!(q.id, "win/ok#");
        assert_eq!(q.type_name, "button");
        assert_eq!(q.elements, vec!["frame", "text"]);
        assert_eq!(q.action, ":hover");
        assert_eq!(q.attr, "filled");
    }

    #[test]
    fn decompose_bare_type() {
        let q = StyleQuery::parse("label@font-color");
        assert_eq!(q.id, "");
        assert_eq!(q.type_name, "label");
        assert!(q.elements.is_empty());
        assert_eq!(q.action, "");
        assert_eq!(q.attr, "font-color");
    }

    #[test]
    fn universal_query() {
        let q = StyleQuery::parse("*@x");
        assert_eq!(q.type_name, "*");
        assert_eq!(q.candidates(), vec!["*".to_string()]);
    }

    #[test]
    fn candidate_order() {
        let q = StyleQuery::parse("ok#button-frame-text:hover@filled");
        assert_eq!(
            q.candidates(),
            vec![
                "ok#button-frame-text:hover",
                "button-frame-text:hover",
                "button-frame-text",
                "button-frame",
                "button",
                "*",
            ]
        );
    }

    #[test]
    fn candidates_without_id_or_action() {
        let q = StyleQuery::parse("slider-cursor@filled");
        assert_eq!(q.candidates(), vec!["slider-cursor", "slider", "*"]);
    }
}
