//! Composite literal emission.
//!
//! The literal's type decides its JavaScript shape:
//!
//! | literal type                          | emitted as          |
//! |---------------------------------------|---------------------|
//! | struct declared in any loaded package | `new T(v1,v2)`      |
//! | array/slice, or a named array type    | `[e1,e2]`           |
//! | anything else (maps, unknown types)   | `{k1:v1,k2:v2}`     |
//!
//! Elided inner literal types (`[]Point{{1, 2}}`) take the element type of the enclosing literal.

use elma_core::lang::types;

use super::super::decls::struct_fields;
use super::super::{EmitError, JsEmitter};
use crate::frontend::ast::{CompositeLit, Expr, StructDecl};
use crate::frontend::symbols::TypeSymbol;

/// JavaScript shape of a composite literal, with the type hint for its elements.
enum LiteralShape<'t> {
    Struct(&'t StructDecl),
    Array(Option<&'t Expr>),
    Object(Option<&'t Expr>),
}

impl<'a> JsEmitter<'a> {
    /// Emit a composite literal; `hint` is the element type of the enclosing literal, if any.
    pub(super) fn emit_composite_lit(&mut self, lit: &CompositeLit, hint: Option<&Expr>) -> Result<String, EmitError> {
        match self.literal_shape(lit.ty.as_deref().or(hint)) {
            LiteralShape::Struct(decl) => self.emit_struct_lit(decl, lit),
            LiteralShape::Array(elem) => {
                let elements = lit
                    .elements
                    .iter()
                    .map(|element| match element {
                        Expr::KeyValue(_) => Err(EmitError::unsupported("indexed array element")),
                        _ => self.emit_element(element, elem),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("[{}]", elements.join(",")))
            }
            LiteralShape::Object(value_ty) => {
                let entries = lit
                    .elements
                    .iter()
                    .map(|element| match element {
                        Expr::KeyValue(kv) => {
                            let key = self.emit_nested(&kv.key)?;
                            let value = self.emit_element(&kv.value, value_ty)?;
                            Ok(format!("{}:{}", key, value))
                        }
                        _ => Err(EmitError::unsupported("unkeyed element in object literal")),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("{{{}}}", entries.join(",")))
            }
        }
    }

    /// `new T(...)` with arguments in field declaration order.
    ///
    /// Keyed (and empty) literals are reordered to match the constructor; omitted fields get the zero value of their
    /// type.
    fn emit_struct_lit(&mut self, decl: &StructDecl, lit: &CompositeLit) -> Result<String, EmitError> {
        let fields = struct_fields(decl);
        let keyed =
            lit.elements.is_empty() || lit.elements.iter().any(|element| matches!(element, Expr::KeyValue(_)));

        let args = if keyed {
            fields
                .iter()
                .map(|&(name, ty)| {
                    let value = lit.elements.iter().find_map(|element| match element {
                        Expr::KeyValue(kv) if kv.key.as_ident() == Some(name) => Some(kv.value.as_ref()),
                        _ => None,
                    });
                    match value {
                        Some(value) => self.emit_element(value, Some(ty)),
                        None => Ok(zero_value(ty).to_string()),
                    }
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            lit.elements
                .iter()
                .enumerate()
                .map(|(index, element)| self.emit_element(element, fields.get(index).map(|&(_, ty)| ty)))
                .collect::<Result<Vec<_>, _>>()?
        };
        Ok(format!("new {}({})", decl.name, args.join(",")))
    }

    /// Emit one literal element, passing `hint` to an inner literal whose type is elided.
    fn emit_element(&mut self, element: &Expr, hint: Option<&Expr>) -> Result<String, EmitError> {
        match element {
            Expr::CompositeLit(inner) => self.nested(|e| e.emit_composite_lit(inner, hint)),
            Expr::Unary(unary) => match unary.operand.as_ref() {
                // `&T{...}` inside a literal: the element type still applies to the operand.
                Expr::CompositeLit(inner) => {
                    let op = super::js_operator(unary.op)?;
                    let inner = self.nested(|e| e.emit_composite_lit(inner, hint))?;
                    Ok(format!("{}{}", op, inner))
                }
                _ => self.emit_nested(element),
            },
            _ => self.emit_nested(element),
        }
    }

    fn literal_shape<'t>(&self, ty: Option<&'t Expr>) -> LiteralShape<'t>
    where
        'a: 't,
    {
        let named = |name: &str| match self.symbols.lookup_type(name) {
            Some(TypeSymbol::Struct(decl)) => LiteralShape::Struct(decl),
            Some(TypeSymbol::Named(decl)) => self.literal_shape(Some(&decl.ty)),
            None => LiteralShape::Object(None),
        };
        match ty {
            Some(Expr::Star(inner)) => self.literal_shape(Some(inner.as_ref())),
            Some(Expr::ArrayType(array)) => LiteralShape::Array(Some(array.elem.as_ref())),
            Some(Expr::MapType(map)) => LiteralShape::Object(Some(map.value.as_ref())),
            Some(Expr::Ident(name)) => named(name),
            Some(Expr::Selector(selector)) => named(&selector.field),
            _ => LiteralShape::Object(None),
        }
    }
}

/// Zero value for a field of type `ty`.
fn zero_value(ty: &Expr) -> &'static str {
    match ty {
        Expr::Ident(name) => types::zero_value_for(name),
        _ => types::UNKNOWN_ZERO_VALUE,
    }
}
