//! elma Compiler Backend
//!
//! This module handles code generation from the typed syntax tree to JavaScript source text.
//!
//! ## Module Organization
//!
//! - `codegen` - [`JsCodegen`] facade: builds the symbol table and drives emission
//! - `emit/` - declaration, statement and expression emitters
//! - `foreign` - foreign directives (`//js-bind` templates) and their expansion

#![deny(clippy::unwrap_used)]

pub mod codegen;
pub mod emit;
pub mod foreign;

pub use codegen::JsCodegen;
pub use emit::{EmitError, JsEmitter};
pub use foreign::ForeignDirective;
