//! Emit JavaScript source text from the typed syntax tree.
//!
//! This module defines [`JsEmitter`] and wires together the focused submodules that implement tree → JavaScript
//! emission. `mod.rs` only holds the emitter state and the depth bookkeeping every submodule shares.
//!
//! ## Notes
//! - Output is compact: no indentation, no newlines. Statement terminators are emitted only at depth zero, so a call
//!   used as an argument, loop header or condition never carries a stray `;`.
//! - One emitter is created per top-level declaration. Its [`Bindings`] die with it.
//!
//! ## See also
//! - [`program`]: package-level emission
//! - [`decls`]: function, method, struct and value declarations
//! - [`statements`]: statement emission
//! - [`expressions`]: expression emission, calls and composite literals

mod bindings;
mod decls;
mod errors;
mod expressions;
mod program;
mod statements;

pub use bindings::Bindings;
pub use errors::EmitError;
pub use program::emit_package;

use crate::config::CompileConfig;
use crate::frontend::symbols::SymbolTable;

/// Emit JavaScript for one declaration at a time.
///
/// ## Notes
/// - The depth counter starts at zero and is restored by every nested emission, including failing ones.
/// - Most emission helpers are implemented on this type across submodules.
pub struct JsEmitter<'a> {
    symbols: &'a SymbolTable<'a>,
    config: &'a CompileConfig,
    bindings: Bindings,
    depth: usize,
}

impl<'a> JsEmitter<'a> {
    pub fn new(symbols: &'a SymbolTable<'a>, config: &'a CompileConfig) -> Self {
        Self {
            symbols,
            config,
            bindings: Bindings::new(),
            depth: 0,
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Run `f` one level deeper.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, EmitError>) -> Result<T, EmitError> {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Run `f` at depth zero (a function literal body starts a fresh statement context).
    fn at_depth_zero<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, EmitError>) -> Result<T, EmitError> {
        let saved = std::mem::take(&mut self.depth);
        let result = f(self);
        self.depth = saved;
        result
    }

    /// `;` at depth zero, nothing inside a nested context.
    fn terminator(&self) -> &'static str {
        if self.depth == 0 { ";" } else { "" }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::frontend::ast::{Expr, FuncLit, Stmt};

    #[test]
    fn depth_is_restored_after_failure() {
        let symbols = SymbolTable::default();
        let config = CompileConfig::default();
        let mut emitter = JsEmitter::new(&symbols, &config);

        let failing = Expr::call(Expr::ident("f"), vec![Expr::Star(Box::new(Expr::ident("p")))]);
        assert!(emitter.emit_expr(&failing).is_err());
        assert_eq!(emitter.depth(), 0);

        let nested_literal = Expr::call(
            Expr::ident("g"),
            vec![Expr::FuncLit(FuncLit {
                params: vec![],
                results: vec![],
                body: crate::frontend::ast::Block::new(vec![Stmt::Go(Expr::ident("x"))]),
            })],
        );
        assert!(emitter.emit_expr(&nested_literal).is_err());
        assert_eq!(emitter.depth(), 0);
    }

    #[test]
    fn terminator_only_at_depth_zero() {
        let symbols = SymbolTable::default();
        let config = CompileConfig::default();
        let mut emitter = JsEmitter::new(&symbols, &config);
        assert_eq!(emitter.terminator(), ";");
        let inner = emitter.nested(|e| Ok(e.terminator())).unwrap();
        assert_eq!(inner, "");
        let reset = emitter.nested(|e| e.at_depth_zero(|e| Ok(e.terminator()))).unwrap();
        assert_eq!(reset, ";");
        assert_eq!(emitter.depth(), 0);
    }
}
