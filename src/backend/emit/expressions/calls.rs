//! Call emission.
//!
//! A call is looked up by its *query name*: the identifier for `f(x)`, the selected field for `a.b.f(x)`. When the
//! symbol table binds that name to a foreign directive, the directive's template replaces the call; otherwise the
//! callee is emitted as an ordinary expression.

use super::super::{EmitError, JsEmitter};
use crate::frontend::ast::{CallExpr, Expr};

impl<'a> JsEmitter<'a> {
    pub(super) fn emit_call(&mut self, call: &CallExpr) -> Result<String, EmitError> {
        let symbols = self.symbols;
        let directive = query_name(&call.func).and_then(|name| symbols.directive(name));

        let text = match directive {
            Some(directive) => {
                let receiver = match call.func.as_ref() {
                    Expr::Selector(selector) => self.emit_nested(&selector.object)?,
                    _ => String::new(),
                };
                let args = self.emit_args(call)?;
                let expanded = directive.expand(&args, &receiver);
                tracing::debug!(template = directive.template(), expanded = %expanded, "expanded foreign call");
                expanded
            }
            None => {
                let callee = self.emit_nested(&call.func)?;
                // An arrow function is only callable once parenthesized.
                let callee = match call.func.as_ref() {
                    Expr::FuncLit(_) => format!("({})", callee),
                    _ => callee,
                };
                let args = self.emit_args(call)?;
                format!("{}({})", callee, args.join(","))
            }
        };
        Ok(format!("{}{}", text, self.terminator()))
    }

    /// Emit every argument once, left to right. A spread final argument becomes `...xs`.
    fn emit_args(&mut self, call: &CallExpr) -> Result<Vec<String>, EmitError> {
        let mut args = call
            .args
            .iter()
            .map(|arg| self.emit_nested(arg))
            .collect::<Result<Vec<_>, _>>()?;
        if call.spread {
            if let Some(last) = args.last_mut() {
                last.insert_str(0, "...");
            }
        }
        Ok(args)
    }
}

/// Name used to look a callee up in the symbol table.
fn query_name(func: &Expr) -> Option<&str> {
    match func {
        Expr::Ident(name) => Some(name),
        Expr::Selector(selector) => Some(&selector.field),
        _ => None,
    }
}
