//! Define error types for JavaScript emission.
//!
//! These errors represent *backend emission* failures: the tree is well-typed, but uses a construct the translation
//! has no rule for, or is structurally incomplete.
//!
//! ## Notes
//!
//! - Prefer actionable messages: users should know which construct is unsupported so they can rewrite it.

use miette::Diagnostic;
use thiserror::Error;

/// Error during JavaScript emission.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EmitError {
    /// A node kind (or operator) with no JavaScript translation.
    #[error("unsupported construct: {kind}")]
    #[diagnostic(
        code(elma::emit::unsupported),
        help("rewrite this code using constructs the JavaScript backend supports")
    )]
    UnsupportedConstruct { kind: String },

    /// A method without exactly one receiver.
    #[error("method `{method}` must have exactly one receiver, found {found}")]
    #[diagnostic(code(elma::emit::malformed_receiver))]
    MalformedReceiver { method: String, found: usize },

    /// A statement missing a required operand.
    #[error("{construct} is missing its {side} operand")]
    #[diagnostic(code(elma::emit::missing_operand))]
    MissingOperand {
        construct: &'static str,
        side: &'static str,
    },
}

impl EmitError {
    pub(crate) fn unsupported(kind: impl Into<String>) -> Self {
        EmitError::UnsupportedConstruct { kind: kind.into() }
    }
}
