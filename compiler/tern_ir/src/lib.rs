//! Shared data structures for the Tern compiler front end.
//!
//! - [`Span`], [`Name`] and [`StringInterner`] for source positions and
//!   identifiers
//! - [`Token`], [`TokenKind`] and [`TokenList`] produced by the lexer
//! - the pattern, expression and type syntax tree in [`ast`]
//! - [`DeclContextArena`] for lexical scopes
//! - [`rebuild_implicit_pattern_around`] for selector-style signatures
//! - [`PatternPrinter`] for rendering trees

pub mod ast;
mod decl_context;
mod interner;
mod printer;
mod rewrite;
mod span;
mod token;

pub use ast::{
    BinaryOp, DefaultArgKind, Expr, ExprArena, ExprId, ExprKind, MagicLiteralKind, Pattern,
    PatternKind, TuplePattern, TuplePatternElt, TypeRepr, TypeReprKind, UnaryOp, VarDecl,
};
pub use decl_context::{DeclContextArena, DeclContextId, DeclContextKind};
pub use interner::{Name, StringInterner};
pub use printer::PatternPrinter;
pub use rewrite::rebuild_implicit_pattern_around;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
