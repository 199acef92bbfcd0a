//! Statement emission for tree → JavaScript code generation
//!
//! This module handles emitting JavaScript statements: assignments, control flow, switch cases and blocks.
//! Headers (conditions, loop clauses, switch tags) are emitted one level deeper so the statements they contain
//! (`i++` in a `for` post clause) do not get a terminator.

use elma_core::lang::conventions;

use super::expressions::js_operator;
use super::{EmitError, JsEmitter};
use crate::frontend::ast::{
    AssignStmt, BranchKind, BranchStmt, CaseClause, Declaration, Expr, ForStmt, IfStmt, RangeStmt, Stmt, SwitchStmt,
};

impl<'a> JsEmitter<'a> {
    /// Emit statements back to back, without delimiters.
    pub fn emit_stmts(&mut self, stmts: &[Stmt]) -> Result<String, EmitError> {
        let mut out = String::new();
        for stmt in stmts {
            out.push_str(&self.emit_stmt(stmt)?);
        }
        Ok(out)
    }

    pub fn emit_stmt(&mut self, stmt: &Stmt) -> Result<String, EmitError> {
        match stmt {
            Stmt::Block(block) => self.emit_stmts(&block.stmts),
            Stmt::If(if_stmt) => self.emit_if(if_stmt),
            Stmt::For(for_stmt) => self.emit_for(for_stmt),
            Stmt::Range(range) => self.emit_range(range),
            Stmt::Switch(switch) => self.emit_switch(switch),
            Stmt::Case(clause) => self.emit_case(clause),
            Stmt::Return(ret) => match ret.results.as_slice() {
                [] => Ok("return;".to_string()),
                [value] => Ok(format!("return {};", self.emit_nested(value)?)),
                _ => Err(EmitError::unsupported("multi-value return")),
            },
            Stmt::Assign(assign) => self.emit_assign(assign),
            Stmt::IncDec(inc_dec) => {
                let operand = self.emit_nested(&inc_dec.operand)?;
                Ok(format!("{}{}{}", operand, js_operator(inc_dec.op)?, self.terminator()))
            }
            Stmt::Expr(expr) => {
                let text = self.emit_expr(expr)?;
                // Calls terminate themselves.
                match expr {
                    Expr::Call(_) => Ok(text),
                    _ => Ok(format!("{}{}", text, self.terminator())),
                }
            }
            Stmt::Decl(decl) => match decl {
                Declaration::Value(value) => self.emit_value_decl(value),
                Declaration::Struct(decl) => Ok(self.emit_struct(decl)),
                Declaration::Type(_) | Declaration::Import(_) => Ok(String::new()),
                Declaration::Function(_) | Declaration::Method(_) => Err(EmitError::unsupported(decl.kind_name())),
            },
            Stmt::Branch(branch) => emit_branch(branch),
            Stmt::Labeled(labeled) => Ok(format!("{}:{}", labeled.label, self.emit_stmt(&labeled.stmt)?)),
            Stmt::Empty => Ok(String::new()),
            Stmt::Go(_) | Stmt::Defer(_) | Stmt::Send(_) => Err(EmitError::unsupported(stmt.kind_name())),
        }
    }

    /// `if (cond){body}else{...}`; an init statement is scoped with the `if` inside a block.
    fn emit_if(&mut self, if_stmt: &IfStmt) -> Result<String, EmitError> {
        let init = self.emit_init(if_stmt.init.as_deref())?;
        let cond = self.emit_nested(&if_stmt.cond)?;
        let body = self.emit_stmts(&if_stmt.body.stmts)?;
        let mut out = format!("if ({}){{{}}}", cond, body);
        if let Some(else_branch) = &if_stmt.else_branch {
            out.push_str(&format!("else{{{}}}", self.emit_stmt(else_branch)?));
        }
        Ok(scope_init(init, out))
    }

    /// `for (init;cond;post){body}`, missing clauses left empty.
    fn emit_for(&mut self, for_stmt: &ForStmt) -> Result<String, EmitError> {
        let init = match &for_stmt.init {
            Some(init) => self.nested(|e| e.emit_stmt(init))?,
            None => String::new(),
        };
        let cond = match &for_stmt.cond {
            Some(cond) => self.emit_nested(cond)?,
            None => String::new(),
        };
        let post = match &for_stmt.post {
            Some(post) => self.nested(|e| e.emit_stmt(post))?,
            None => String::new(),
        };
        let body = self.emit_stmts(&for_stmt.body.stmts)?;
        Ok(format!("for ({};{};{}){{{}}}", init, cond, post, body))
    }

    /// `for (let [k, v] of Object.entries(subject)) {body}`
    fn emit_range(&mut self, range: &RangeStmt) -> Result<String, EmitError> {
        let key = self.emit_range_target(range.key.as_ref())?;
        let value = self.emit_range_target(range.value.as_ref())?;
        let pattern = match (key, value) {
            (key, Some(value)) => format!("[{}, {}]", key.unwrap_or_default(), value),
            (Some(key), None) => format!("[{}]", key),
            (None, None) => "[]".to_string(),
        };
        let binding = if range.define { "let " } else { "" };
        let subject = self.emit_nested(&range.subject)?;
        let body = self.emit_stmts(&range.body.stmts)?;
        Ok(format!(
            "for ({}{} of {}({})) {{{}}}",
            binding,
            pattern,
            conventions::ENTRIES_FUNCTION,
            subject,
            body
        ))
    }

    /// A range key or value; `None` when absent or blank.
    fn emit_range_target(&mut self, target: Option<&Expr>) -> Result<Option<String>, EmitError> {
        match target {
            None => Ok(None),
            Some(expr) if expr.as_ident() == Some(conventions::BLANK_IDENTIFIER) => Ok(None),
            Some(expr) => self.emit_nested(expr).map(Some),
        }
    }

    /// `switch (tag){cases}`; a tagless switch matches cases against `true`.
    fn emit_switch(&mut self, switch: &SwitchStmt) -> Result<String, EmitError> {
        let init = self.emit_init(switch.init.as_deref())?;
        let tag = match &switch.tag {
            Some(tag) => self.emit_nested(tag)?,
            None => "true".to_string(),
        };
        let body = self.emit_stmts(&switch.body.stmts)?;
        Ok(scope_init(init, format!("switch ({}){{{}}}", tag, body)))
    }

    /// `case a:case b:{body break;}` or `default:{...}`.
    ///
    /// Cases never fall through implicitly: a `break;` closes the body unless it already ends in a jump. An explicit
    /// `fallthrough` suppresses that break.
    fn emit_case(&mut self, clause: &CaseClause) -> Result<String, EmitError> {
        let mut out = String::new();
        if clause.values.is_empty() {
            out.push_str("default:");
        }
        for value in &clause.values {
            out.push_str(&format!("case {}:", self.emit_nested(value)?));
        }
        let body = self.emit_stmts(&clause.body)?;
        let needs_break = !clause.body.last().is_some_and(ends_control_flow);
        out.push_str(&format!("{{{}{}}}", body, if needs_break { "break;" } else { "" }));
        Ok(out)
    }

    fn emit_assign(&mut self, assign: &AssignStmt) -> Result<String, EmitError> {
        let target = match assign.lhs.as_slice() {
            [] => {
                return Err(EmitError::MissingOperand {
                    construct: "assignment",
                    side: "left",
                });
            }
            [target] => target,
            _ => return Err(EmitError::unsupported("multi-target assignment")),
        };
        let value = match assign.rhs.as_slice() {
            [] => {
                return Err(EmitError::MissingOperand {
                    construct: "assignment",
                    side: "right",
                });
            }
            [value] => value,
            _ => return Err(EmitError::unsupported("multi-value assignment")),
        };
        let op = js_operator(assign.op)?;
        let target = self.emit_nested(target)?;
        let value = self.emit_nested(value)?;
        Ok(format!("{}{}{}{}", target, op, value, self.terminator()))
    }

    /// The init statement of an `if` or `switch`, emitted as a full statement.
    fn emit_init(&mut self, init: Option<&Stmt>) -> Result<Option<String>, EmitError> {
        init.map(|stmt| self.at_depth_zero(|e| e.emit_stmt(stmt))).transpose()
    }
}

fn emit_branch(branch: &BranchStmt) -> Result<String, EmitError> {
    let keyword = match branch.kind {
        BranchKind::Break => "break",
        BranchKind::Continue => "continue",
        BranchKind::Fallthrough => return Ok(String::new()),
        BranchKind::Goto => return Err(EmitError::unsupported("goto statement")),
    };
    Ok(match &branch.label {
        Some(label) => format!("{} {};", keyword, label),
        None => format!("{};", keyword),
    })
}

/// Whether a case body ending in `stmt` never reaches the end of the case.
fn ends_control_flow(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::Return(_) | Stmt::Branch(_) => true,
        Stmt::Block(block) => block.stmts.last().is_some_and(ends_control_flow),
        Stmt::Labeled(labeled) => ends_control_flow(&labeled.stmt),
        _ => false,
    }
}

/// `{init;construct}` when there is an init statement.
fn scope_init(init: Option<String>, construct: String) -> String {
    match init {
        Some(init) => format!("{{{}{}}}", init, construct),
        None => construct,
    }
}
