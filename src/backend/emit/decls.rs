//! Declaration emission for tree → JavaScript code generation
//!
//! | declaration          | emitted as                                        |
//! |----------------------|---------------------------------------------------|
//! | `func f(a, b)`       | `function f(a,b){...}`                            |
//! | `func (t *T) m(a)`   | `T.prototype.m=function(a){...};`                 |
//! | `type T struct{a,b}` | `function T(a,b){this.a=a;this.b=b;}`             |
//! | `var a, b = 1`       | `let a=1;let b;`                                  |
//!
//! Foreign-bound functions, imports and non-struct type declarations produce no output.

use elma_core::lang::conventions;

use super::{EmitError, JsEmitter};
use crate::frontend::ast::{Declaration, Expr, Field, FuncDecl, MethodDecl, StructDecl, ValueDecl};

impl<'a> JsEmitter<'a> {
    /// Emit one declaration.
    pub fn emit_declaration(&mut self, decl: &Declaration) -> Result<String, EmitError> {
        match decl {
            Declaration::Function(func) => self.emit_function(func),
            Declaration::Method(method) => self.emit_method(method),
            Declaration::Struct(decl) => Ok(self.emit_struct(decl)),
            Declaration::Value(decl) => self.emit_value_decl(decl),
            Declaration::Import(_) | Declaration::Type(_) => {
                tracing::trace!(kind = decl.kind_name(), "declaration has no JavaScript form");
                Ok(String::new())
            }
        }
    }

    fn emit_function(&mut self, func: &FuncDecl) -> Result<String, EmitError> {
        let Some(body) = self.function_body(func)? else {
            return Ok(String::new());
        };
        let params = emit_params(&func.params);
        Ok(format!("function {}({}){{{}}}", func.name, params, body))
    }

    fn emit_method(&mut self, method: &MethodDecl) -> Result<String, EmitError> {
        let func = &method.func;
        let [receiver] = method.receivers.as_slice() else {
            return Err(EmitError::MalformedReceiver {
                method: func.name.clone(),
                found: method.receivers.len(),
            });
        };
        let type_name = receiver_type_name(&receiver.ty)
            .ok_or_else(|| EmitError::unsupported(format!("receiver type {}", receiver.ty.kind_name())))?;

        if let Some(name) = receiver.names.first().filter(|n| n.as_str() != conventions::BLANK_IDENTIFIER) {
            self.bindings.bind(name.as_str(), self.config.self_reference.as_str());
        }
        let body = self.function_body(func);
        self.bindings.clear();
        let Some(body) = body? else {
            return Ok(String::new());
        };
        let params = emit_params(&func.params);
        Ok(format!(
            "{}.{}.{}=function({}){{{}}};",
            type_name,
            conventions::PROTOTYPE_PROPERTY,
            func.name,
            params,
            body
        ))
    }

    /// The emitted body, or `None` for foreign-bound and body-less declarations.
    fn function_body(&mut self, func: &FuncDecl) -> Result<Option<String>, EmitError> {
        if self.symbols.is_foreign_bound(func) {
            tracing::debug!(function = %func.name, "skipping foreign-bound declaration");
            return Ok(None);
        }
        let Some(body) = &func.body else {
            tracing::debug!(function = %func.name, "skipping declaration without body");
            return Ok(None);
        };
        self.at_depth_zero(|e| e.emit_stmts(&body.stmts)).map(Some)
    }

    /// Constructor function assigning every field from its parameter.
    pub(super) fn emit_struct(&self, decl: &StructDecl) -> String {
        let fields = struct_fields(decl);
        let params: Vec<&str> = fields.iter().map(|&(name, _)| name).collect();
        let assignments: String = params
            .iter()
            .map(|name| format!("{}.{}={};", self.config.self_reference, name, name))
            .collect();
        format!("function {}({}){{{}}}", decl.name, params.join(","), assignments)
    }

    /// `let name=value;` per declared name.
    pub(super) fn emit_value_decl(&mut self, decl: &ValueDecl) -> Result<String, EmitError> {
        let mut out = String::new();
        for spec in &decl.specs {
            if !spec.values.is_empty() && spec.values.len() != spec.names.len() {
                return Err(EmitError::unsupported("multi-value initialization"));
            }
            for (index, name) in spec.names.iter().enumerate() {
                match spec.values.get(index) {
                    Some(value) => {
                        let value = self.emit_nested(value)?;
                        out.push_str(&format!("let {}={};", name, value));
                    }
                    None => out.push_str(&format!("let {};", name)),
                }
            }
        }
        Ok(out)
    }
}

/// Field names in declaration order, paired with their types. An embedded field is named after its type.
pub(super) fn struct_fields(decl: &StructDecl) -> Vec<(&str, &Expr)> {
    let mut fields = Vec::new();
    for field in &decl.fields {
        if field.names.is_empty() {
            if let Some(name) = receiver_type_name(&field.ty) {
                fields.push((name, &field.ty));
            }
        } else {
            fields.extend(field.names.iter().map(|name| (name.as_str(), &field.ty)));
        }
    }
    fields
}

/// `a,b,...rest`; unnamed parameters get positional names.
fn emit_params(params: &[Field]) -> String {
    let mut names = Vec::new();
    for field in params {
        let prefix = if matches!(field.ty, Expr::Ellipsis(_)) { "..." } else { "" };
        if field.names.is_empty() {
            names.push(format!("{}{}{}", prefix, conventions::UNNAMED_PARAM_PREFIX, names.len()));
        } else {
            names.extend(field.names.iter().map(|name| format!("{}{}", prefix, name)));
        }
    }
    names.join(",")
}

/// Name of `T`, `*T` or `pkg.T`.
fn receiver_type_name(ty: &Expr) -> Option<&str> {
    match ty {
        Expr::Ident(name) => Some(name),
        Expr::Star(inner) => receiver_type_name(inner),
        Expr::Selector(selector) => Some(&selector.field),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::CompileConfig;
    use crate::frontend::ast::{Block, Package, SourceFile, Stmt, ValueKeyword, ValueSpec};
    use crate::frontend::symbols::SymbolTable;

    fn emit(decl: &Declaration) -> Result<String, EmitError> {
        let symbols = SymbolTable::default();
        let config = CompileConfig::default();
        JsEmitter::new(&symbols, &config).emit_declaration(decl)
    }

    fn func(name: &str, params: Vec<Field>, stmts: Vec<Stmt>) -> FuncDecl {
        FuncDecl {
            name: name.into(),
            doc: vec![],
            params,
            results: vec![],
            body: Some(Block::new(stmts)),
        }
    }

    #[test]
    fn function_with_params() {
        let decl = Declaration::Function(func(
            "add",
            vec![Field::new(&["a", "b"], Expr::ident("int"))],
            vec![Stmt::Expr(Expr::call(Expr::ident("log"), vec![Expr::ident("a")]))],
        ));
        assert_eq!(emit(&decl).unwrap(), "function add(a,b){log(a);}");
    }

    #[test]
    fn variadic_and_unnamed_params() {
        let decl = Declaration::Function(func(
            "f",
            vec![
                Field::new(&[], Expr::ident("int")),
                Field::new(&["rest"], Expr::Ellipsis(Some(Box::new(Expr::ident("int"))))),
            ],
            vec![],
        ));
        assert_eq!(emit(&decl).unwrap(), "function f(_0,...rest){}");
    }

    #[test]
    fn method_binds_receiver_to_this() {
        let decl = Declaration::Method(MethodDecl {
            receivers: vec![Field::new(&["t"], Expr::Star(Box::new(Expr::ident("Timer"))))],
            func: func(
                "Stop",
                vec![],
                vec![Stmt::Expr(Expr::call(Expr::selector(Expr::ident("t"), "halt"), vec![]))],
            ),
        });
        assert_eq!(emit(&decl).unwrap(), "Timer.prototype.Stop=function(){this.halt();};");
    }

    #[test]
    fn method_without_receiver_is_malformed() {
        let decl = Declaration::Method(MethodDecl {
            receivers: vec![],
            func: func("Stop", vec![], vec![]),
        });
        assert_eq!(
            emit(&decl).unwrap_err(),
            EmitError::MalformedReceiver {
                method: "Stop".into(),
                found: 0
            }
        );
    }

    #[test]
    fn struct_constructor() {
        let decl = Declaration::Struct(StructDecl {
            name: "Point".into(),
            fields: vec![Field::new(&["x", "y"], Expr::ident("int"))],
        });
        assert_eq!(emit(&decl).unwrap(), "function Point(x,y){this.x=x;this.y=y;}");
    }

    #[test]
    fn embedded_field_is_named_after_its_type() {
        let decl = Declaration::Struct(StructDecl {
            name: "Button".into(),
            fields: vec![
                Field::new(&[], Expr::Star(Box::new(Expr::ident("Widget")))),
                Field::new(&["label"], Expr::ident("string")),
            ],
        });
        assert_eq!(
            emit(&decl).unwrap(),
            "function Button(Widget,label){this.Widget=Widget;this.label=label;}"
        );
    }

    #[test]
    fn value_declaration() {
        let decl = Declaration::Value(ValueDecl {
            keyword: ValueKeyword::Var,
            specs: vec![
                ValueSpec {
                    names: vec!["a".into()],
                    ty: None,
                    values: vec![Expr::int(1)],
                },
                ValueSpec {
                    names: vec!["b".into()],
                    ty: Some(Expr::ident("int")),
                    values: vec![],
                },
            ],
        });
        assert_eq!(emit(&decl).unwrap(), "let a=1;let b;");
    }

    #[test]
    fn foreign_bound_function_is_not_emitted() {
        let mut decl = func("Println", vec![], vec![]);
        decl.doc = vec!["//js-bind".into(), "//console.log(%args%)".into()];
        let package = Package {
            path: "main".into(),
            name: "main".into(),
            files: vec![SourceFile {
                name: "main.go".into(),
                declarations: vec![Declaration::Function(decl)],
            }],
        };
        let config = CompileConfig::default();
        let symbols = SymbolTable::build(&[&package], &config.directive_marker);
        let decl = &package.files[0].declarations[0];
        assert_eq!(JsEmitter::new(&symbols, &config).emit_declaration(decl).unwrap(), "");
    }

    #[test]
    fn directive_in_doc_is_only_honored_through_the_symbol_table() {
        // Not indexed, so the directive text is just a comment.
        let mut decl = func("Println", vec![], vec![]);
        decl.doc = vec!["//js-bind".into(), "//console.log(%args%)".into()];
        assert_eq!(emit(&Declaration::Function(decl)).unwrap(), "function Println(){}");
    }
}
