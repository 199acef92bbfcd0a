//! elma language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: operator spellings (source and JavaScript),
//! foreign directive tokens, Go basic types, and well-known identifiers.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use elma_core::lang::operators::{BinaryOp, Operator};
//!
//! assert_eq!(BinaryOp::from_go("<<"), Some(BinaryOp::Shl));
//! assert_eq!(BinaryOp::Shl.js_spelling(), Some("<<"));
//! ```

pub mod conventions;
pub mod directives;
pub mod operators;
pub mod types;
