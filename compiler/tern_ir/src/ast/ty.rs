//! Type annotations as written in source.

use crate::{Name, Span};

/// A type annotation as written in source.
///
/// Type checking happens in a later phase; the parser only records shape.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeRepr {
    pub kind: TypeReprKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeReprKind {
    /// `Name` or `Name<Args>`.
    Ident { name: Name, args: Vec<TypeRepr> },
    /// `Base.Name` or `Base.Name<Args>`.
    Member {
        base: Box<TypeRepr>,
        name: Name,
        args: Vec<TypeRepr>,
    },
    /// `(A, B)`; `()` is the empty tuple.
    Tuple(Vec<TypeRepr>),
    /// `A -> B`.
    Function {
        input: Box<TypeRepr>,
        output: Box<TypeRepr>,
    },
    /// `[T]`.
    Array(Box<TypeRepr>),
    /// `T?`.
    Optional(Box<TypeRepr>),
    /// Placeholder for an annotation that failed to parse.
    Error,
}

impl TypeRepr {
    #[inline]
    pub fn new(kind: TypeReprKind, span: Span) -> Self {
        TypeRepr { kind, span }
    }

    /// Placeholder for a missing or malformed annotation.
    pub fn error(span: Span) -> Self {
        TypeRepr::new(TypeReprKind::Error, span)
    }

    /// The empty tuple type `()`.
    pub fn empty_tuple(span: Span) -> Self {
        TypeRepr::new(TypeReprKind::Tuple(Vec::new()), span)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, TypeReprKind::Error)
    }

    pub fn is_empty_tuple(&self) -> bool {
        matches!(&self.kind, TypeReprKind::Tuple(elems) if elems.is_empty())
    }
}
