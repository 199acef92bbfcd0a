//! Identifier rewrites active while one declaration is emitted.
//!
//! A method body sees its receiver under the configured self reference (`p` → `this`). The table is owned by the
//! emitter of a single declaration, so a binding can never leak into the next declaration.

use std::collections::HashMap;

/// Identifier → replacement text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    rewrites: HashMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite `name` to `replacement` from now on. A later binding for the same name replaces the earlier one.
    pub fn bind(&mut self, name: impl Into<String>, replacement: impl Into<String>) {
        self.rewrites.insert(name.into(), replacement.into());
    }

    /// The replacement for `name`, or `name` itself when unbound.
    pub fn resolve<'n>(&'n self, name: &'n str) -> &'n str {
        self.rewrites.get(name).map_or(name, String::as_str)
    }

    pub fn clear(&mut self) {
        self.rewrites.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rewrites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_names_resolve_to_themselves() {
        let bindings = Bindings::new();
        assert_eq!(bindings.resolve("t"), "t");
        assert!(bindings.is_empty());
    }

    #[test]
    fn bound_names_are_rewritten() {
        let mut bindings = Bindings::new();
        bindings.bind("t", "this");
        assert_eq!(bindings.resolve("t"), "this");
        assert_eq!(bindings.resolve("other"), "other");
    }

    #[test]
    fn clear_removes_every_binding() {
        let mut bindings = Bindings::new();
        bindings.bind("t", "this");
        bindings.bind("t", "self");
        assert_eq!(bindings.resolve("t"), "self");
        bindings.clear();
        assert!(bindings.is_empty());
        assert_eq!(bindings.resolve("t"), "t");
    }
}
