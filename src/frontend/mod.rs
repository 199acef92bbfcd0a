//! elma Compiler Frontend
//!
//! Lexing, parsing and type checking happen in the external front end; this module receives their result:
//! - `ast`: syntax tree definitions (re-exported from `elma_syntax`)
//! - `loader`: reads serialized packages from disk
//! - `symbols`: name-indexed symbol table used by the backend

// Syntax types are provided by the shared elma_syntax crate.
pub use elma_syntax::ast;

pub mod loader;
pub mod symbols;
