//! Pattern nodes.
//!
//! Patterns appear in parameter clauses, local bindings and match arms.
//! Each pattern owns its children; a function declaration's argument and
//! body trees are therefore fully independent.

use super::{Expr, ExprId, ExprKind, MagicLiteralKind, TypeRepr};
use crate::{DeclContextId, Name, Span};

/// A local binding introduced by a `Named` pattern.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDecl {
    pub name: Name,
    pub span: Span,
    /// `true` for immutable (`let`) bindings.
    pub is_let: bool,
    /// Synthesized by the parser, e.g. a selector label.
    pub implicit: bool,
    /// Owning context. Reassigned once the enclosing function exists.
    pub context: DeclContextId,
}

/// How a parameter's default value is evaluated.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum DefaultArgKind {
    /// No default value.
    #[default]
    None,
    /// An ordinary expression evaluated by the callee.
    Normal,
    /// A positional literal substituted at each call site.
    Magic(MagicLiteralKind),
}

impl DefaultArgKind {
    /// Classify a parsed initializer.
    pub fn classify(init: Option<&Expr>) -> Self {
        match init.map(|expr| &expr.kind) {
            None => DefaultArgKind::None,
            Some(ExprKind::MagicLiteral(kind)) => DefaultArgKind::Magic(*kind),
            Some(_) => DefaultArgKind::Normal,
        }
    }
}

/// One element of a tuple pattern.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TuplePatternElt {
    pub pattern: Pattern,
    pub init: Option<ExprId>,
    pub default_kind: DefaultArgKind,
}

impl TuplePatternElt {
    /// Element without a default value.
    pub fn new(pattern: Pattern) -> Self {
        TuplePatternElt {
            pattern,
            init: None,
            default_kind: DefaultArgKind::None,
        }
    }

    pub fn with_init(pattern: Pattern, init: Option<ExprId>, default_kind: DefaultArgKind) -> Self {
        TuplePatternElt {
            pattern,
            init,
            default_kind,
        }
    }
}

/// `( elt, elt, ... )` with an optional trailing `...`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TuplePattern {
    pub elements: Vec<TuplePatternElt>,
    pub lparen: Span,
    pub rparen: Span,
    /// Position of a valid trailing `...`. Invalid ellipses are not recorded.
    pub ellipsis: Option<Span>,
}

impl TuplePattern {
    #[inline]
    pub fn has_vararg(&self) -> bool {
        self.ellipsis.is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
    /// Synthesized by the parser rather than written by the user.
    pub implicit: bool,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatternKind {
    /// `_`
    Any,
    /// A binding name.
    Named(VarDecl),
    Tuple(TuplePattern),
    /// `( pattern )` without tuple semantics.
    Paren(Box<Pattern>),
    /// `pattern : Type`
    Typed { sub: Box<Pattern>, ty: TypeRepr },
    /// `var pattern` / `let pattern`
    Var { is_let: bool, sub: Box<Pattern> },
    /// Expression fallback in matching patterns.
    Expr(ExprId),
    /// `is Type`
    Isa(TypeRepr),
}

impl Pattern {
    #[inline]
    pub fn new(kind: PatternKind, span: Span) -> Self {
        Pattern {
            kind,
            span,
            implicit: false,
        }
    }

    pub fn any(span: Span) -> Self {
        Pattern::new(PatternKind::Any, span)
    }

    pub fn named(decl: VarDecl) -> Self {
        let span = decl.span;
        Pattern::new(PatternKind::Named(decl), span)
    }

    pub fn typed(sub: Pattern, ty: TypeRepr) -> Self {
        let span = sub.span.merge(ty.span);
        Pattern::new(
            PatternKind::Typed {
                sub: Box::new(sub),
                ty,
            },
            span,
        )
    }

    /// `var`/`let` qualifier starting at `keyword`.
    pub fn var(is_let: bool, keyword: Span, sub: Pattern) -> Self {
        let span = keyword.merge(sub.span);
        Pattern::new(
            PatternKind::Var {
                is_let,
                sub: Box::new(sub),
            },
            span,
        )
    }

    pub fn expr(id: ExprId, span: Span) -> Self {
        Pattern::new(PatternKind::Expr(id), span)
    }

    pub fn isa(ty: TypeRepr, span: Span) -> Self {
        Pattern::new(PatternKind::Isa(ty), span)
    }

    pub fn tuple(tuple: TuplePattern) -> Self {
        let span = tuple.lparen.merge(tuple.rparen);
        Pattern::new(PatternKind::Tuple(tuple), span)
    }

    /// `()` spanning the given parentheses.
    pub fn empty_tuple(lparen: Span, rparen: Span) -> Self {
        Pattern::tuple(TuplePattern {
            elements: Vec::new(),
            lparen,
            rparen,
            ellipsis: None,
        })
    }

    /// Build a parenthesized pattern from parsed elements.
    ///
    /// A single element with no default value and no ellipsis becomes a
    /// `Paren`; everything else, including `()`, becomes a `Tuple`.
    pub fn create_simple(
        lparen: Span,
        mut elements: Vec<TuplePatternElt>,
        ellipsis: Option<Span>,
        rparen: Span,
    ) -> Self {
        if elements.len() == 1 && elements[0].init.is_none() && ellipsis.is_none() {
            if let Some(only) = elements.pop() {
                return Pattern::new(
                    PatternKind::Paren(Box::new(only.pattern)),
                    lparen.merge(rparen),
                );
            }
        }
        Pattern::tuple(TuplePattern {
            elements,
            lparen,
            rparen,
            ellipsis,
        })
    }

    /// Mark this node (not its children) as synthesized.
    #[must_use]
    pub fn into_implicit(mut self) -> Self {
        self.implicit = true;
        if let PatternKind::Named(decl) = &mut self.kind {
            decl.implicit = true;
        }
        self
    }

    #[inline]
    pub fn is_typed(&self) -> bool {
        matches!(self.kind, PatternKind::Typed { .. })
    }

    pub fn as_tuple(&self) -> Option<&TuplePattern> {
        match &self.kind {
            PatternKind::Tuple(tuple) => Some(tuple),
            _ => None,
        }
    }

    pub fn as_named(&self) -> Option<&VarDecl> {
        match &self.kind {
            PatternKind::Named(decl) => Some(decl),
            _ => None,
        }
    }

    /// Visit every binding declaration, left to right.
    pub fn for_each_binding<'p>(&'p self, f: &mut impl FnMut(&'p VarDecl)) {
        match &self.kind {
            PatternKind::Named(decl) => f(decl),
            PatternKind::Tuple(tuple) => {
                for elt in &tuple.elements {
                    elt.pattern.for_each_binding(f);
                }
            }
            PatternKind::Paren(sub)
            | PatternKind::Typed { sub, .. }
            | PatternKind::Var { sub, .. } => sub.for_each_binding(f),
            PatternKind::Any | PatternKind::Expr(_) | PatternKind::Isa(_) => {}
        }
    }

    fn for_each_binding_mut(&mut self, f: &mut impl FnMut(&mut VarDecl)) {
        match &mut self.kind {
            PatternKind::Named(decl) => f(decl),
            PatternKind::Tuple(tuple) => {
                for elt in &mut tuple.elements {
                    elt.pattern.for_each_binding_mut(f);
                }
            }
            PatternKind::Paren(sub)
            | PatternKind::Typed { sub, .. }
            | PatternKind::Var { sub, .. } => sub.for_each_binding_mut(f),
            PatternKind::Any | PatternKind::Expr(_) | PatternKind::Isa(_) => {}
        }
    }

    /// All binding declarations, left to right.
    pub fn bindings(&self) -> Vec<&VarDecl> {
        let mut out = Vec::new();
        self.for_each_binding(&mut |decl| out.push(decl));
        out
    }

    /// Move every binding in this tree into `context`.
    pub fn reparent_bindings(&mut self, context: DeclContextId) {
        self.for_each_binding_mut(&mut |decl| decl.context = context);
    }
}
