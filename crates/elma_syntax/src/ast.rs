//! Abstract Syntax Tree definitions for elma.
//!
//! The node set mirrors the Go syntax the front end accepts: declarations, statements and expressions with names
//! already resolved and types already checked. Nodes that the backend cannot translate are still representable so a
//! whole file deserializes; the emitter rejects them with a diagnostic naming the node kind.

use elma_core::lang::operators::{AssignOp, BinaryOp, IncDecOp, UnaryOp};
use serde::{Deserialize, Serialize};

/// Identifier (already resolved by the front end).
pub type Ident = String;

/// Every package loaded for one compilation, dependencies first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub packages: Vec<Package>,
}

/// One package (a directory of source files).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Import path relative to its root (`fmt`, `ui/doc`).
    pub path: String,
    /// Declared package name.
    pub name: String,
    #[serde(default)]
    pub files: Vec<SourceFile>,
}

impl Package {
    /// Iterate every declaration of every file, in source order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.files.iter().flat_map(|file| file.declarations.iter())
    }
}

/// A single source file: its declarations in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

// ============================================================================
// Declarations
// ============================================================================

/// Top-level (or statement-level) declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Declaration {
    Import(ImportDecl),
    Function(FuncDecl),
    Method(MethodDecl),
    Struct(StructDecl),
    Type(TypeDecl),
    Value(ValueDecl),
}

impl Declaration {
    /// Stable node-kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Declaration::Import(_) => "import declaration",
            Declaration::Function(_) => "function declaration",
            Declaration::Method(_) => "method declaration",
            Declaration::Struct(_) => "struct declaration",
            Declaration::Type(_) => "type declaration",
            Declaration::Value(_) => "value declaration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDecl {
    pub path: String,
    #[serde(default)]
    pub alias: Option<Ident>,
}

/// A function declaration.
///
/// `doc` holds the raw documentation comment lines (`//js-bind`, `//console.log(%args%)`); a foreign directive is
/// derived from them once when the symbol table is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: Ident,
    #[serde(default)]
    pub doc: Vec<String>,
    #[serde(default)]
    pub params: Vec<Field>,
    #[serde(default)]
    pub results: Vec<Field>,
    /// `None` for declarations without a body (external or foreign-bound functions).
    #[serde(default)]
    pub body: Option<Block>,
}

/// A method: a function with a receiver list.
///
/// Well-formed methods have exactly one receiver; the emitter rejects anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    #[serde(default)]
    pub receivers: Vec<Field>,
    pub func: FuncDecl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDecl {
    pub name: Ident,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A named non-struct type (`type Mode int`, `type Names []string`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: Ident,
    pub ty: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKeyword {
    Var,
    Const,
}

/// A `var` or `const` group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDecl {
    pub keyword: ValueKeyword,
    #[serde(default)]
    pub specs: Vec<ValueSpec>,
}

/// One line of a value group: `a, b int = 1, 2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSpec {
    pub names: Vec<Ident>,
    #[serde(default)]
    pub ty: Option<Expr>,
    #[serde(default)]
    pub values: Vec<Expr>,
}

/// A parameter, result, receiver or struct field. Embedded struct fields have no names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub names: Vec<Ident>,
    pub ty: Expr,
}

impl Field {
    pub fn new(names: &[&str], ty: Expr) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            ty,
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

/// A braced statement list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Block(Block),
    If(IfStmt),
    For(ForStmt),
    Range(RangeStmt),
    Switch(SwitchStmt),
    Case(CaseClause),
    Return(ReturnStmt),
    Assign(AssignStmt),
    IncDec(IncDecStmt),
    Expr(Expr),
    Decl(Declaration),
    Branch(BranchStmt),
    Labeled(LabeledStmt),
    Empty,
    Go(Expr),
    Defer(Expr),
    Send(SendStmt),
}

impl Stmt {
    /// Stable node-kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Block(_) => "block",
            Stmt::If(_) => "if statement",
            Stmt::For(_) => "for statement",
            Stmt::Range(_) => "range statement",
            Stmt::Switch(_) => "switch statement",
            Stmt::Case(_) => "case clause",
            Stmt::Return(_) => "return statement",
            Stmt::Assign(_) => "assignment",
            Stmt::IncDec(_) => "increment statement",
            Stmt::Expr(_) => "expression statement",
            Stmt::Decl(_) => "declaration statement",
            Stmt::Branch(_) => "branch statement",
            Stmt::Labeled(_) => "labeled statement",
            Stmt::Empty => "empty statement",
            Stmt::Go(_) => "go statement",
            Stmt::Defer(_) => "defer statement",
            Stmt::Send(_) => "send statement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    #[serde(default)]
    pub init: Option<Box<Stmt>>,
    pub cond: Expr,
    pub body: Block,
    /// Either a `Block` or a nested `If` (`else if`).
    #[serde(default)]
    pub else_branch: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    #[serde(default)]
    pub init: Option<Box<Stmt>>,
    #[serde(default)]
    pub cond: Option<Expr>,
    #[serde(default)]
    pub post: Option<Box<Stmt>>,
    pub body: Block,
}

/// `for key, value := range subject { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeStmt {
    #[serde(default)]
    pub key: Option<Expr>,
    #[serde(default)]
    pub value: Option<Expr>,
    /// `true` for `:=`, `false` for `=`.
    #[serde(default)]
    pub define: bool,
    pub subject: Expr,
    pub body: Block,
}

/// Expression switch. The body holds `Case` statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStmt {
    #[serde(default)]
    pub init: Option<Box<Stmt>>,
    #[serde(default)]
    pub tag: Option<Expr>,
    pub body: Block,
}

/// `case a, b: ...`; no values means `default:`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseClause {
    #[serde(default)]
    pub values: Vec<Expr>,
    #[serde(default)]
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    #[serde(default)]
    pub results: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignStmt {
    #[serde(default)]
    pub lhs: Vec<Expr>,
    #[serde(with = "spelling")]
    pub op: AssignOp,
    #[serde(default)]
    pub rhs: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncDecStmt {
    pub operand: Expr,
    #[serde(with = "spelling")]
    pub op: IncDecOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchKind {
    Break,
    Continue,
    Goto,
    Fallthrough,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchStmt {
    pub kind: BranchKind,
    #[serde(default)]
    pub label: Option<Ident>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledStmt {
    pub label: Ident,
    pub stmt: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendStmt {
    pub channel: Expr,
    pub value: Expr,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Ident(Ident),
    BasicLit(BasicLit),
    Call(CallExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Paren(Box<Expr>),
    Selector(SelectorExpr),
    CompositeLit(CompositeLit),
    KeyValue(KeyValueExpr),
    FuncLit(FuncLit),
    ArrayType(ArrayType),
    Index(IndexExpr),
    Star(Box<Expr>),
    Slice(SliceExpr),
    TypeAssert(TypeAssertExpr),
    MapType(MapType),
    StructType(Vec<Field>),
    FuncType(FuncType),
    InterfaceType(Vec<Field>),
    Ellipsis(Option<Box<Expr>>),
}

impl Expr {
    /// Stable node-kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Ident(_) => "identifier",
            Expr::BasicLit(_) => "literal",
            Expr::Call(_) => "call expression",
            Expr::Binary(_) => "binary expression",
            Expr::Unary(_) => "unary expression",
            Expr::Paren(_) => "parenthesized expression",
            Expr::Selector(_) => "selector expression",
            Expr::CompositeLit(_) => "composite literal",
            Expr::KeyValue(_) => "key-value expression",
            Expr::FuncLit(_) => "function literal",
            Expr::ArrayType(_) => "array type",
            Expr::Index(_) => "index expression",
            Expr::Star(_) => "pointer expression",
            Expr::Slice(_) => "slice expression",
            Expr::TypeAssert(_) => "type assertion",
            Expr::MapType(_) => "map type",
            Expr::StructType(_) => "struct type",
            Expr::FuncType(_) => "function type",
            Expr::InterfaceType(_) => "interface type",
            Expr::Ellipsis(_) => "ellipsis",
        }
    }

    pub fn ident(name: impl Into<Ident>) -> Self {
        Expr::Ident(name.into())
    }

    /// Integer literal.
    pub fn int(value: i64) -> Self {
        Expr::BasicLit(BasicLit {
            kind: LitKind::Int,
            value: value.to_string(),
        })
    }

    /// String literal; `value` is the unquoted text.
    pub fn string(value: &str) -> Self {
        Expr::BasicLit(BasicLit {
            kind: LitKind::String,
            value: format!("{:?}", value),
        })
    }

    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            func: Box::new(func),
            args,
            spread: false,
        })
    }

    pub fn selector(object: Expr, field: impl Into<Ident>) -> Self {
        Expr::Selector(SelectorExpr {
            object: Box::new(object),
            field: field.into(),
        })
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn key_value(key: Expr, value: Expr) -> Self {
        Expr::KeyValue(KeyValueExpr {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    /// The identifier name, if this node is a bare identifier.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Expr::Ident(name) => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

/// A literal exactly as written in the source (quotes included for strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicLit {
    pub kind: LitKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub func: Box<Expr>,
    #[serde(default)]
    pub args: Vec<Expr>,
    /// `f(xs...)`: the last argument is spread.
    #[serde(default)]
    pub spread: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    #[serde(with = "spelling")]
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    #[serde(with = "spelling")]
    pub op: UnaryOp,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorExpr {
    pub object: Box<Expr>,
    pub field: Ident,
}

/// `T{...}`; `ty` is `None` when the type is elided inside an enclosing literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeLit {
    #[serde(default)]
    pub ty: Option<Box<Expr>>,
    #[serde(default)]
    pub elements: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValueExpr {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncLit {
    #[serde(default)]
    pub params: Vec<Field>,
    #[serde(default)]
    pub results: Vec<Field>,
    pub body: Block,
}

/// `[N]T` or `[]T` (`len` is `None` for slices).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayType {
    #[serde(default)]
    pub len: Option<Box<Expr>>,
    pub elem: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpr {
    pub object: Box<Expr>,
    pub index: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceExpr {
    pub object: Box<Expr>,
    #[serde(default)]
    pub low: Option<Box<Expr>>,
    #[serde(default)]
    pub high: Option<Box<Expr>>,
    #[serde(default)]
    pub max: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAssertExpr {
    pub object: Box<Expr>,
    /// `None` for the `x.(type)` form of a type switch.
    #[serde(default)]
    pub ty: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapType {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncType {
    #[serde(default)]
    pub params: Vec<Field>,
    #[serde(default)]
    pub results: Vec<Field>,
}

/// Serialize operators by their Go spelling.
mod spelling {
    use elma_core::lang::operators::Operator;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T: Operator, S: Serializer>(op: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(op.go_spelling())
    }

    pub fn deserialize<'de, T: Operator, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
        let spelling = String::deserialize(deserializer)?;
        T::from_go(&spelling).ok_or_else(|| D::Error::custom(format!("unknown {} `{}`", T::CATEGORY, spelling)))
    }
}
