//! Syntax tree for the elma compiler.
//!
//! The tree is produced by an external front end (parsing and type checking happen there) and handed over as JSON.
//! This crate only owns the node types and their serde representation; it does no parsing, name resolution, or type
//! checking.
//!
//! ## Notes
//! - Enums use serde's default externally tagged form: `{"Ident": "x"}`, `{"Call": {...}}`.
//! - Operators are written as their Go spelling (`"op": "+="`) and resolved through `elma_core::lang::operators`.
//!
//! ## Examples
//! ```rust
//! use elma_syntax::ast::Expr;
//!
//! let expr: Expr = serde_json::from_str(r#"{"Ident": "timer"}"#).unwrap();
//! assert_eq!(expr, Expr::ident("timer"));
//! ```

pub mod ast;
