//! Expression emission for tree → JavaScript code generation
//!
//! Every child expression is emitted one level deeper than its parent, so only a call written as a statement gets a
//! terminator.
//!
//! Submodules:
//! - [`calls`]: ordinary and foreign-bound calls
//! - [`literals`]: composite literals (struct construction, arrays, objects)

mod calls;
mod literals;

use elma_core::lang::operators::Operator;

use super::{EmitError, JsEmitter};
use crate::frontend::ast::{BasicLit, BinaryExpr, Expr, FuncLit, LitKind, UnaryExpr};

impl<'a> JsEmitter<'a> {
    /// Emit an expression at the current depth.
    pub fn emit_expr(&mut self, expr: &Expr) -> Result<String, EmitError> {
        match expr {
            Expr::Ident(name) => Ok(self.bindings.resolve(name).to_string()),
            Expr::BasicLit(lit) => Ok(emit_basic_lit(lit)),
            Expr::Call(call) => self.emit_call(call),
            Expr::Binary(binary) => self.emit_binary(binary),
            Expr::Unary(unary) => self.emit_unary(unary),
            Expr::Paren(inner) => {
                let inner = self.nested(|e| e.emit_expr(inner))?;
                Ok(format!("({})", inner))
            }
            Expr::Selector(selector) => {
                let object = self.nested(|e| e.emit_expr(&selector.object))?;
                Ok(format!("{}.{}", object, selector.field))
            }
            Expr::CompositeLit(lit) => self.emit_composite_lit(lit, None),
            Expr::KeyValue(kv) => {
                let (key, value) = self.nested(|e| Ok((e.emit_expr(&kv.key)?, e.emit_expr(&kv.value)?)))?;
                Ok(format!("{}:{}", key, value))
            }
            Expr::FuncLit(lit) => self.emit_func_lit(lit),
            Expr::Index(index) => {
                let (object, index) =
                    self.nested(|e| Ok((e.emit_expr(&index.object)?, e.emit_expr(&index.index)?)))?;
                Ok(format!("{}[{}]", object, index))
            }
            Expr::ArrayType(_)
            | Expr::Star(_)
            | Expr::Slice(_)
            | Expr::TypeAssert(_)
            | Expr::MapType(_)
            | Expr::StructType(_)
            | Expr::FuncType(_)
            | Expr::InterfaceType(_)
            | Expr::Ellipsis(_) => Err(EmitError::unsupported(expr.kind_name())),
        }
    }

    /// Emit a child expression one level deeper.
    pub(super) fn emit_nested(&mut self, expr: &Expr) -> Result<String, EmitError> {
        self.nested(|e| e.emit_expr(expr))
    }

    fn emit_binary(&mut self, binary: &BinaryExpr) -> Result<String, EmitError> {
        let op = js_operator(binary.op)?;
        let left = self.emit_nested(&binary.left)?;
        let right = self.emit_nested(&binary.right)?;
        Ok(format!("{}{}", left, join_operand(op, &right)))
    }

    fn emit_unary(&mut self, unary: &UnaryExpr) -> Result<String, EmitError> {
        let op = js_operator(unary.op)?;
        let operand = self.emit_nested(&unary.operand)?;
        Ok(join_operand(op, &operand))
    }

    /// `()=>{body}`; the body is a fresh statement context.
    fn emit_func_lit(&mut self, lit: &FuncLit) -> Result<String, EmitError> {
        if !lit.params.is_empty() {
            return Err(EmitError::unsupported("function literal with parameters"));
        }
        let body = self.at_depth_zero(|e| e.emit_stmts(&lit.body.stmts))?;
        Ok(format!("()=>{{{}}}", body))
    }
}

/// `op` followed by `operand`, spaced when the pair would otherwise lex as `++` or `--`.
fn join_operand(op: &str, operand: &str) -> String {
    let collides = matches!(
        (op.chars().last(), operand.chars().next()),
        (Some('+'), Some('+')) | (Some('-'), Some('-'))
    );
    if collides {
        format!("{} {}", op, operand)
    } else {
        format!("{}{}", op, operand)
    }
}

/// Literals pass through verbatim, except raw strings: a backquoted Go string has no escapes, while a JavaScript
/// template literal interprets `\` and `${`.
fn emit_basic_lit(lit: &BasicLit) -> String {
    match lit.kind {
        LitKind::String if lit.value.starts_with('`') => lit.value.replace('\\', "\\\\").replace("${", "\\${"),
        _ => lit.value.clone(),
    }
}

/// JavaScript spelling of an operator, or an error naming the Go operator.
pub(super) fn js_operator<T: Operator>(op: T) -> Result<&'static str, EmitError> {
    op.js_spelling()
        .ok_or_else(|| EmitError::unsupported(format!("{} `{}`", T::CATEGORY, op.go_spelling())))
}
