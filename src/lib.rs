#![forbid(unsafe_code)]
//! elma: a Go-subset to JavaScript compiler
//!
//! The front end (parsing and type checking) runs elsewhere and hands over a typed syntax tree as `*.ast.json`
//! files. This crate loads those trees, indexes their declarations and emits JavaScript for the root module,
//! expanding `//js-bind` templates for foreign-bound functions.
//!
//! ```text
//! *.ast.json → loader → Program → SymbolTable → JsEmitter → main.js
//! ```
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod config;
pub mod frontend;

pub use frontend::ast;
pub use frontend::loader;
pub use frontend::symbols;

pub use backend::{EmitError, JsCodegen};
pub use config::CompileConfig;
pub use frontend::loader::LoadError;
