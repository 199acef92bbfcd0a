//! Operator vocabulary.
//!
//! The front end hands operators over as Go token spellings. This module maps each spelling to a stable id and to the
//! JavaScript text the backend emits for it.
//!
//! ## Notes
//! - Lookup via [`Operator::from_go`] is **case-sensitive** and exact.
//! - Most operators are spelled identically in JavaScript. The exceptions are listed in the registries below:
//!   unary `^` becomes `~`, address-of `&` is erased (JavaScript objects are already references), and `:=` becomes
//!   `=`. Operators with no JavaScript counterpart (`&^`, `&^=`, `<-`) report `None`.
//!
//! ## Examples
//! ```rust
//! use elma_core::lang::operators::{AssignOp, Operator, UnaryOp};
//!
//! assert_eq!(AssignOp::from_go(":="), Some(AssignOp::Define));
//! assert_eq!(AssignOp::Define.js_spelling(), Some("="));
//! assert_eq!(UnaryOp::Complement.js_spelling(), Some("~"));
//! ```

/// Common behavior of the operator registries.
pub trait Operator: Copy + Eq + 'static {
    /// Registry name used in diagnostics ("binary operator", ...).
    const CATEGORY: &'static str;

    /// Every operator of this category, in registry order.
    fn all() -> &'static [Self];

    /// Spelling in the source language.
    fn go_spelling(self) -> &'static str;

    /// Spelling in emitted JavaScript, or `None` when there is no counterpart.
    fn js_spelling(self) -> Option<&'static str>;

    /// Resolve a source spelling to its identifier.
    fn from_go(spelling: &str) -> Option<Self> {
        Self::all().iter().copied().find(|op| op.go_spelling() == spelling)
    }
}

/// Binary (infix) operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Quo,
    Rem,

    // Bitwise
    And,
    Or,
    Xor,
    Shl,
    Shr,
    AndNot,

    // Logical
    LogicalAnd,
    LogicalOr,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

const BINARY_OPERATORS: &[BinaryOp] = &[
    BinaryOp::Add,
    BinaryOp::Sub,
    BinaryOp::Mul,
    BinaryOp::Quo,
    BinaryOp::Rem,
    BinaryOp::And,
    BinaryOp::Or,
    BinaryOp::Xor,
    BinaryOp::Shl,
    BinaryOp::Shr,
    BinaryOp::AndNot,
    BinaryOp::LogicalAnd,
    BinaryOp::LogicalOr,
    BinaryOp::Eq,
    BinaryOp::NotEq,
    BinaryOp::Lt,
    BinaryOp::LtEq,
    BinaryOp::Gt,
    BinaryOp::GtEq,
];

impl Operator for BinaryOp {
    const CATEGORY: &'static str = "binary operator";

    fn all() -> &'static [Self] {
        BINARY_OPERATORS
    }

    fn go_spelling(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Quo => "/",
            BinaryOp::Rem => "%",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::AndNot => "&^",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
        }
    }

    fn js_spelling(self) -> Option<&'static str> {
        match self {
            BinaryOp::AndNot => None,
            other => Some(other.go_spelling()),
        }
    }
}

/// Unary (prefix) operators.
///
/// Pointer dereference is not listed here: the front end models `*x` as its own expression kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
    Complement,
    AddressOf,
    Receive,
}

const UNARY_OPERATORS: &[UnaryOp] = &[
    UnaryOp::Plus,
    UnaryOp::Neg,
    UnaryOp::Not,
    UnaryOp::Complement,
    UnaryOp::AddressOf,
    UnaryOp::Receive,
];

impl Operator for UnaryOp {
    const CATEGORY: &'static str = "unary operator";

    fn all() -> &'static [Self] {
        UNARY_OPERATORS
    }

    fn go_spelling(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::Complement => "^",
            UnaryOp::AddressOf => "&",
            UnaryOp::Receive => "<-",
        }
    }

    fn js_spelling(self) -> Option<&'static str> {
        match self {
            UnaryOp::Complement => Some("~"),
            UnaryOp::AddressOf => Some(""),
            UnaryOp::Receive => None,
            other => Some(other.go_spelling()),
        }
    }
}

/// Assignment operators, including the short variable declaration `:=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignOp {
    Assign,
    Define,
    AddAssign,
    SubAssign,
    MulAssign,
    QuoAssign,
    RemAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShlAssign,
    ShrAssign,
    AndNotAssign,
}

const ASSIGN_OPERATORS: &[AssignOp] = &[
    AssignOp::Assign,
    AssignOp::Define,
    AssignOp::AddAssign,
    AssignOp::SubAssign,
    AssignOp::MulAssign,
    AssignOp::QuoAssign,
    AssignOp::RemAssign,
    AssignOp::AndAssign,
    AssignOp::OrAssign,
    AssignOp::XorAssign,
    AssignOp::ShlAssign,
    AssignOp::ShrAssign,
    AssignOp::AndNotAssign,
];

impl Operator for AssignOp {
    const CATEGORY: &'static str = "assignment operator";

    fn all() -> &'static [Self] {
        ASSIGN_OPERATORS
    }

    fn go_spelling(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Define => ":=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::MulAssign => "*=",
            AssignOp::QuoAssign => "/=",
            AssignOp::RemAssign => "%=",
            AssignOp::AndAssign => "&=",
            AssignOp::OrAssign => "|=",
            AssignOp::XorAssign => "^=",
            AssignOp::ShlAssign => "<<=",
            AssignOp::ShrAssign => ">>=",
            AssignOp::AndNotAssign => "&^=",
        }
    }

    fn js_spelling(self) -> Option<&'static str> {
        match self {
            AssignOp::Define => Some("="),
            AssignOp::AndNotAssign => None,
            other => Some(other.go_spelling()),
        }
    }
}

/// Increment / decrement statement operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncDecOp {
    Inc,
    Dec,
}

impl Operator for IncDecOp {
    const CATEGORY: &'static str = "increment operator";

    fn all() -> &'static [Self] {
        &[IncDecOp::Inc, IncDecOp::Dec]
    }

    fn go_spelling(self) -> &'static str {
        match self {
            IncDecOp::Inc => "++",
            IncDecOp::Dec => "--",
        }
    }

    fn js_spelling(self) -> Option<&'static str> {
        Some(self.go_spelling())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_spellings<T: Operator + std::fmt::Debug>() {
        let mut seen = HashSet::new();
        for op in T::all() {
            assert!(seen.insert(op.go_spelling()), "duplicate {} spelling for {:?}", T::CATEGORY, op);
        }
    }

    #[test]
    fn spellings_are_unique_per_category() {
        assert_unique_spellings::<BinaryOp>();
        assert_unique_spellings::<UnaryOp>();
        assert_unique_spellings::<AssignOp>();
        assert_unique_spellings::<IncDecOp>();
    }

    #[test]
    fn every_spelling_resolves_back_to_its_id() {
        for op in BinaryOp::all() {
            assert_eq!(BinaryOp::from_go(op.go_spelling()), Some(*op));
        }
        for op in AssignOp::all() {
            assert_eq!(AssignOp::from_go(op.go_spelling()), Some(*op));
        }
    }

    #[test]
    fn define_is_emitted_as_plain_assignment() {
        assert_eq!(AssignOp::Define.js_spelling(), Some("="));
        assert_eq!(AssignOp::AddAssign.js_spelling(), Some("+="));
    }

    #[test]
    fn go_only_operators_have_no_javascript_spelling() {
        assert_eq!(BinaryOp::AndNot.js_spelling(), None);
        assert_eq!(AssignOp::AndNotAssign.js_spelling(), None);
        assert_eq!(UnaryOp::Receive.js_spelling(), None);
    }

    #[test]
    fn unknown_spelling_is_none() {
        assert_eq!(BinaryOp::from_go("**"), None);
        assert_eq!(UnaryOp::from_go("~"), None);
    }
}
