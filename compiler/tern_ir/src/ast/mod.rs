//! Syntax tree for patterns and the expressions and types they embed.

mod expr;
mod pattern;
mod ty;

pub use expr::{BinaryOp, Expr, ExprArena, ExprId, ExprKind, MagicLiteralKind, UnaryOp};
pub use pattern::{
    DefaultArgKind, Pattern, PatternKind, TuplePattern, TuplePatternElt, VarDecl,
};
pub use ty::{TypeRepr, TypeReprKind};
