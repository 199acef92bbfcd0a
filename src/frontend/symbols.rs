//! Symbol table for code generation
//!
//! Indexes every top-level type and function declaration of every loaded package by bare name. The backend uses it
//! for two questions only: "does this composite literal construct a struct?" and "is this call foreign-bound?".
//!
//! ## Notes
//! - Built once, immutable afterwards.
//! - First declaration with a given name wins, in package order (dependencies first) and then source order.
//! - Methods share the function namespace under their bare name, so `e.Set(...)` finds a foreign `Set` method.
//! - Directives are parsed here, once per declaration. Emission asks [`SymbolTable::is_foreign_bound`] instead of
//!   reading doc comments again.

use std::collections::{HashMap, HashSet};

use crate::backend::foreign::ForeignDirective;
use crate::frontend::ast::{Declaration, FuncDecl, MethodDecl, Package, StructDecl, TypeDecl};

/// A type declaration visible to the backend.
#[derive(Debug, Clone, Copy)]
pub enum TypeSymbol<'p> {
    Struct(&'p StructDecl),
    Named(&'p TypeDecl),
}

impl<'p> TypeSymbol<'p> {
    pub fn as_struct(&self) -> Option<&'p StructDecl> {
        match *self {
            TypeSymbol::Struct(decl) => Some(decl),
            TypeSymbol::Named(_) => None,
        }
    }
}

/// A function or method declaration, with its foreign directive if it has one.
#[derive(Debug, Clone)]
pub struct FunctionSymbol<'p> {
    pub decl: FunctionRef<'p>,
    pub directive: Option<ForeignDirective>,
}

#[derive(Debug, Clone, Copy)]
pub enum FunctionRef<'p> {
    Function(&'p FuncDecl),
    Method(&'p MethodDecl),
}

impl<'p> FunctionRef<'p> {
    pub fn func(&self) -> &'p FuncDecl {
        match *self {
            FunctionRef::Function(func) => func,
            FunctionRef::Method(method) => &method.func,
        }
    }
}

/// Symbol table indexing declarations by name
#[derive(Debug, Default)]
pub struct SymbolTable<'p> {
    types: HashMap<&'p str, TypeSymbol<'p>>,
    functions: HashMap<&'p str, FunctionSymbol<'p>>,
    /// Every declaration carrying a directive, shadowed or not, keyed by address.
    foreign_bound: HashSet<*const FuncDecl>,
}

impl<'p> SymbolTable<'p> {
    /// Index `packages`, parsing foreign directives with `marker`.
    #[tracing::instrument(skip_all, fields(package_count = packages.len()))]
    pub fn build(packages: &[&'p Package], marker: &str) -> Self {
        let mut table = Self::default();
        for package in packages {
            for decl in package.declarations() {
                table.index(decl, marker);
            }
        }
        tracing::debug!(
            types = table.types.len(),
            functions = table.functions.len(),
            foreign = table.functions.values().filter(|f| f.directive.is_some()).count(),
            "symbol table built"
        );
        table
    }

    fn index(&mut self, decl: &'p Declaration, marker: &str) {
        match decl {
            Declaration::Struct(s) => {
                self.types.entry(s.name.as_str()).or_insert(TypeSymbol::Struct(s));
            }
            Declaration::Type(t) => {
                self.types.entry(t.name.as_str()).or_insert(TypeSymbol::Named(t));
            }
            Declaration::Function(f) => self.index_function(FunctionRef::Function(f), marker),
            Declaration::Method(m) => self.index_function(FunctionRef::Method(m), marker),
            Declaration::Import(_) | Declaration::Value(_) => {}
        }
    }

    fn index_function(&mut self, decl: FunctionRef<'p>, marker: &str) {
        let func = decl.func();
        let directive = ForeignDirective::from_doc(&func.doc, marker);
        if directive.is_some() {
            self.foreign_bound.insert(std::ptr::from_ref(func));
        }
        self.functions
            .entry(func.name.as_str())
            .or_insert(FunctionSymbol { decl, directive });
    }

    /// Look up a type declaration by name.
    pub fn lookup_type(&self, name: &str) -> Option<TypeSymbol<'p>> {
        self.types.get(name).copied()
    }

    /// Look up a function or method declaration by bare name.
    pub fn lookup_function(&self, name: &str) -> Option<&FunctionSymbol<'p>> {
        self.functions.get(name)
    }

    /// Look up a struct declaration by name.
    pub fn lookup_struct(&self, name: &str) -> Option<&'p StructDecl> {
        self.lookup_type(name).and_then(|t| t.as_struct())
    }

    pub fn is_struct(&self, name: &str) -> bool {
        self.lookup_struct(name).is_some()
    }

    /// The foreign directive bound to `name`, if the first declaration with that name carries one.
    pub fn directive(&self, name: &str) -> Option<&ForeignDirective> {
        self.lookup_function(name).and_then(|f| f.directive.as_ref())
    }

    /// Whether this exact declaration was indexed with a foreign directive.
    pub fn is_foreign_bound(&self, func: &FuncDecl) -> bool {
        self.foreign_bound.contains(&std::ptr::from_ref(func))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::{ArrayType, Expr, Field, SourceFile};

    fn package(path: &str, declarations: Vec<Declaration>) -> Package {
        Package {
            path: path.to_string(),
            name: path.to_string(),
            files: vec![SourceFile {
                name: format!("{path}.go"),
                declarations,
            }],
        }
    }

    fn func(name: &str, doc: &[&str]) -> FuncDecl {
        FuncDecl {
            name: name.to_string(),
            doc: doc.iter().map(|l| l.to_string()).collect(),
            params: vec![],
            results: vec![],
            body: None,
        }
    }

    #[test]
    fn finds_structs_and_named_types() {
        let pkg = package(
            "main",
            vec![
                Declaration::Struct(StructDecl {
                    name: "Point".into(),
                    fields: vec![Field::new(&["x", "y"], Expr::ident("int"))],
                }),
                Declaration::Type(TypeDecl {
                    name: "Names".into(),
                    ty: Expr::ArrayType(ArrayType {
                        len: None,
                        elem: Box::new(Expr::ident("string")),
                    }),
                }),
            ],
        );
        let table = SymbolTable::build(&[&pkg], "js-bind");
        assert!(table.is_struct("Point"));
        assert!(!table.is_struct("Names"));
        assert!(matches!(table.lookup_type("Names"), Some(TypeSymbol::Named(_))));
        assert!(table.lookup_type("Missing").is_none());
    }

    #[test]
    fn first_declaration_wins_across_packages() {
        let lib = package("doc", vec![Declaration::Function(func("CreateElement", &["//js-bind", "//document.createElement(%args%)"]))]);
        let main = package("main", vec![Declaration::Function(func("CreateElement", &[]))]);
        let table = SymbolTable::build(&[&lib, &main], "js-bind");
        let directive = table.directive("CreateElement").expect("foreign");
        assert_eq!(directive.template(), "document.createElement(%args%)");
    }

    #[test]
    fn methods_are_indexed_by_bare_name() {
        let lib = package(
            "doc",
            vec![Declaration::Method(MethodDecl {
                receivers: vec![Field::new(&[], Expr::ident("HTMLElement"))],
                func: func("AppendChild", &["//js-bind", "//%recv%.appendChild(%args%)"]),
            })],
        );
        let table = SymbolTable::build(&[&lib], "js-bind");
        let symbol = table.lookup_function("AppendChild").expect("method");
        assert!(matches!(symbol.decl, FunctionRef::Method(_)));
        assert!(symbol.directive.is_some());
    }

    #[test]
    fn plain_functions_have_no_directive() {
        let main = package("main", vec![Declaration::Function(func("trailingZeros", &["// pads with zeros"]))]);
        let table = SymbolTable::build(&[&main], "js-bind");
        assert!(table.lookup_function("trailingZeros").is_some());
        assert!(table.directive("trailingZeros").is_none());
    }

    #[test]
    fn foreign_binding_is_tracked_per_declaration() {
        let lib = package("doc", vec![Declaration::Function(func("Log", &[]))]);
        let main = package("main", vec![Declaration::Function(func("Log", &["//js-bind", "//console.log(%args%)"]))]);
        let table = SymbolTable::build(&[&lib, &main], "js-bind");
        fn decl_of(pkg: &Package) -> &FuncDecl {
            match &pkg.files[0].declarations[0] {
                Declaration::Function(f) => f,
                other => panic!("unexpected {other:?}"),
            }
        }
        assert!(!table.is_foreign_bound(decl_of(&lib)));
        assert!(table.is_foreign_bound(decl_of(&main)));
        assert!(table.directive("Log").is_none());
    }
}
