//! Provide the canonical vocabulary shared by the elma syntax crate and the compiler.
//!
//! This crate is intentionally small and dependency-free. It contains the operator registries, the foreign directive
//! tokens, the Go basic types the backend needs for zero values, and a handful of naming conventions.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no AST types.
//! - Callers work with stable ids (e.g. [`lang::operators::BinaryOp`]) and look up spellings through the registries
//!   instead of comparing strings across the compiler.

pub mod lang;
