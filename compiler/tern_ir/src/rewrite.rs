//! Pattern rewriting for selector-style signatures.
//!
//! A selector clause like `label(x: Int)` binds `x` in the body while
//! callers see `label`. The argument-side pattern is derived from the body
//! pattern by keeping its shape and replacing its binding identity.

use crate::ast::{Pattern, PatternKind, TuplePattern, TuplePatternElt};

/// Clone `pattern` with `new_root` substituted at every binding position.
///
/// Typed nodes keep their annotation but their subpattern becomes
/// `new_root` without descending into the original child. `Named` and
/// `Any` leaves become `new_root`. Every node of the result, including the
/// substituted copies, is marked implicit.
pub fn rebuild_implicit_pattern_around(pattern: &Pattern, new_root: &Pattern) -> Pattern {
    let kind = match &pattern.kind {
        PatternKind::Named(_) | PatternKind::Any => return clone_implicit(new_root),
        PatternKind::Typed { ty, .. } => PatternKind::Typed {
            sub: Box::new(clone_implicit(new_root)),
            ty: ty.clone(),
        },
        PatternKind::Paren(sub) => {
            PatternKind::Paren(Box::new(rebuild_implicit_pattern_around(sub, new_root)))
        }
        PatternKind::Var { is_let, sub } => PatternKind::Var {
            is_let: *is_let,
            sub: Box::new(rebuild_implicit_pattern_around(sub, new_root)),
        },
        PatternKind::Tuple(tuple) => PatternKind::Tuple(TuplePattern {
            elements: tuple
                .elements
                .iter()
                .map(|elt| TuplePatternElt {
                    pattern: rebuild_implicit_pattern_around(&elt.pattern, new_root),
                    init: elt.init,
                    default_kind: elt.default_kind,
                })
                .collect(),
            lparen: tuple.lparen,
            rparen: tuple.rparen,
            ellipsis: tuple.ellipsis,
        }),
        PatternKind::Expr(id) => PatternKind::Expr(*id),
        PatternKind::Isa(ty) => PatternKind::Isa(ty.clone()),
    };
    Pattern {
        kind,
        span: pattern.span,
        implicit: true,
    }
}

/// Deep clone with every node marked implicit.
fn clone_implicit(pattern: &Pattern) -> Pattern {
    let kind = match &pattern.kind {
        PatternKind::Named(decl) => {
            let mut decl = decl.clone();
            decl.implicit = true;
            PatternKind::Named(decl)
        }
        PatternKind::Typed { sub, ty } => PatternKind::Typed {
            sub: Box::new(clone_implicit(sub)),
            ty: ty.clone(),
        },
        PatternKind::Paren(sub) => PatternKind::Paren(Box::new(clone_implicit(sub))),
        PatternKind::Var { is_let, sub } => PatternKind::Var {
            is_let: *is_let,
            sub: Box::new(clone_implicit(sub)),
        },
        PatternKind::Tuple(tuple) => PatternKind::Tuple(TuplePattern {
            elements: tuple
                .elements
                .iter()
                .map(|elt| TuplePatternElt {
                    pattern: clone_implicit(&elt.pattern),
                    init: elt.init,
                    default_kind: elt.default_kind,
                })
                .collect(),
            lparen: tuple.lparen,
            rparen: tuple.rparen,
            ellipsis: tuple.ellipsis,
        }),
        other => other.clone(),
    };
    Pattern {
        kind,
        span: pattern.span,
        implicit: true,
    }
}
