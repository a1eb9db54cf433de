//! Single-open accordion state.

/// Expansion state for the verse sections, keyed by category name.
///
/// At most one section is expanded at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<String>,
}

impl Accordion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `name`, collapsing whatever was open before.
    pub fn expand(&mut self, name: impl Into<String>) {
        self.expanded = Some(name.into());
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Returns `true` if `name` is expanded afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.is_expanded(name) {
            self.collapse();
            false
        } else {
            self.expand(name);
            true
        }
    }

    #[must_use]
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.as_deref() == Some(name)
    }

    #[must_use]
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::Accordion;

    #[test]
    fn expanding_another_collapses_previous() {
        let mut acc = Accordion::new();
        acc.expand("Faith");
        acc.expand("Hope");
        assert!(!acc.is_expanded("Faith"));
        assert!(acc.is_expanded("Hope"));
        assert_eq!(acc.expanded(), Some("Hope"));
    }

    #[test]
    fn toggling_active_leaves_none_expanded() {
        let mut acc = Accordion::new();
        assert!(acc.toggle("Faith"));
        assert!(!acc.toggle("Faith"));
        assert_eq!(acc.expanded(), None);
    }

    #[test]
    fn collapse_is_idempotent() {
        let mut acc = Accordion::new();
        acc.collapse();
        acc.expand("Charity");
        acc.collapse();
        acc.collapse();
        assert_eq!(acc.expanded(), None);
    }
}
