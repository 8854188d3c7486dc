//! Expression nodes.
//!
//! Expressions are stored flat in an [`ExprArena`] and referenced by
//! [`ExprId`]. Patterns and tuple elements hold ids, never boxed nodes.

use std::fmt;

use super::Pattern;
use crate::{DeclContextId, Name, Span};

/// Index of an expression in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Compiler-provided positional literals.
///
/// As default values these are evaluated at each call site rather than at
/// the declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MagicLiteralKind {
    Column,
    File,
    Line,
}

impl MagicLiteralKind {
    pub const fn spelling(self) -> &'static str {
        match self {
            MagicLiteralKind::Column => "__COLUMN__",
            MagicLiteralKind::File => "__FILE__",
            MagicLiteralKind::Line => "__LINE__",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }

    /// Binding power; higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Lt
            | BinaryOp::LtEq
            | BinaryOp::Gt
            | BinaryOp::GtEq => 3,
            BinaryOp::Add | BinaryOp::Sub => 4,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 5,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Int(u64),
    /// Bit pattern of an `f64`.
    Float(u64),
    String(Name),
    Bool(bool),
    Ident(Name),
    /// `_` in expression position.
    Discard,
    MagicLiteral(MagicLiteralKind),
    Paren(ExprId),
    Tuple(Vec<ExprId>),
    Array(Vec<ExprId>),
    Call {
        callee: ExprId,
        args: Vec<ExprId>,
    },
    Member {
        base: ExprId,
        name: Name,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `{ params in body }`. Owns its own declaration context.
    Closure {
        context: DeclContextId,
        params: Option<Box<Pattern>>,
        body: Option<ExprId>,
    },
    Error,
}

/// Flat storage for expressions.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        ExprArena { exprs: Vec::new() }
    }

    /// Store an expression and return its id.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` expressions are allocated.
    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX entries"));
        self.exprs.push(Expr { kind, span });
        ExprId(id)
    }

    /// Get an expression by id.
    ///
    /// Ids are only minted by this arena, so lookup cannot fail for ids
    /// that came from it.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
