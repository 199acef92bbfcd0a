//! Foreign directives: declarations backed by a host-API template instead of a generated body.
//!
//! A directive is recognized once, when the symbol table is built, and stored as a [`ForeignDirective`]: the
//! concatenated template text plus the set of placeholders it declares. Each call site then expands it with
//! [`ForeignDirective::expand`].
//!
//! ## Expansion order
//!
//! 1. the first `%args%` becomes the comma-joined argument texts;
//! 2. the first `%recv%` becomes the selector prefix (empty for bare calls);
//! 3. for every supplied argument `k`, every `%argk%` becomes that argument's text.
//!
//! Positional tokens beyond the supplied argument count stay in the output verbatim. Arity is not validated.

use std::collections::BTreeSet;

use elma_core::lang::directives::{self, PlaceholderId};

/// A parsed foreign directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignDirective {
    template: String,
    placeholders: BTreeSet<PlaceholderId>,
}

impl ForeignDirective {
    /// Parse a directive from raw documentation lines.
    ///
    /// ## Returns
    /// - `Some` when the first line is exactly `marker` (after stripping `//`) and at least one template line follows.
    /// - `None` otherwise; the declaration is an ordinary one.
    pub fn from_doc(doc: &[String], marker: &str) -> Option<Self> {
        let (first, template_lines) = doc.split_first()?;
        if strip_comment(first) != marker || template_lines.is_empty() {
            return None;
        }
        let template: String = template_lines.iter().map(|line| strip_comment(line)).collect();
        Some(Self::new(template))
    }

    /// Build a directive directly from template text.
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        let placeholders = directives::scan_placeholders(&template).into_iter().collect();
        Self { template, placeholders }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Placeholders referenced by the template.
    pub fn placeholders(&self) -> &BTreeSet<PlaceholderId> {
        &self.placeholders
    }

    /// Highest positional index referenced, if any.
    pub fn max_positional(&self) -> Option<usize> {
        self.placeholders
            .iter()
            .filter_map(|p| match p {
                PlaceholderId::Positional(index) => Some(*index),
                _ => None,
            })
            .max()
    }

    /// Expand the template for one call site.
    ///
    /// ## Parameters
    /// - `args`: emitted argument texts, in source order.
    /// - `receiver`: text before the called name in a selector call; empty for bare calls.
    pub fn expand(&self, args: &[String], receiver: &str) -> String {
        if let Some(max) = self.max_positional().filter(|max| *max >= args.len()) {
            tracing::warn!(
                template = %self.template,
                supplied = args.len(),
                referenced = max + 1,
                "foreign template references more arguments than supplied; leaving placeholders unexpanded"
            );
        }

        let mut out = self
            .template
            .replacen(directives::ALL_ARGS_TOKEN, &args.join(","), 1)
            .replacen(directives::RECEIVER_TOKEN, receiver, 1);
        for (index, arg) in args.iter().enumerate() {
            out = out.replace(&directives::positional_token(index), arg);
        }
        out
    }
}

fn strip_comment(line: &str) -> &str {
    line.strip_prefix(directives::COMMENT_PREFIX).unwrap_or(line)
}
