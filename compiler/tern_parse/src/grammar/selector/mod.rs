//! Selector-style parameter clauses.
//!
//! ```text
//! func copy(from) to(dest: Path) overwrite(flag: Bool)
//! ```
//!
//! Each clause after the first is `label(pattern)`. The body sees the
//! inner pattern's bindings; callers see the label. Both views are built
//! as two independent tuples with one element per clause, the argument
//! view derived from the body view with [`rebuild_implicit_pattern_around`].

use rustc_hash::FxHashMap;
use tern_ir::{
    rebuild_implicit_pattern_around, DefaultArgKind, Name, Pattern, PatternKind, Span,
    TokenKind, TuplePattern, TuplePatternElt, TypeRepr,
};
use tracing::debug;

use crate::error;
use crate::grammar::DefaultArgumentInfo;
use crate::outcome::ParseStatus;
use crate::recovery::{self, TokenSet};
use crate::Parser;

/// Argument and body views of a selector-style signature.
pub(crate) struct SelectorClauses {
    pub(crate) arg_pattern: Pattern,
    pub(crate) body_pattern: Pattern,
    pub(crate) status: ParseStatus,
}

/// Element lists under construction, kept in lockstep.
#[derive(Default)]
struct SelectorElements {
    args: Vec<TuplePatternElt>,
    bodies: Vec<TuplePatternElt>,
    /// First span of each label, for redefinition diagnostics.
    labels: FxHashMap<Name, Span>,
    /// Closing paren of the last clause pushed.
    rparen: Option<Span>,
}

impl SelectorElements {
    fn push(&mut self, arg: TuplePatternElt, body: TuplePatternElt, rparen: Span) {
        self.args.push(arg);
        self.bodies.push(body);
        self.rparen = Some(rparen);
    }
}

impl Parser<'_> {
    /// Continue a signature whose first clause `first` is followed by a
    /// selector label.
    pub(crate) fn parse_selector_function_arguments(
        &mut self,
        first: Pattern,
        defaults: &mut DefaultArgumentInfo,
    ) -> SelectorClauses {
        debug!("selector-style parameter clauses");
        let lparen = Span::new(first.span.start, first.span.start + 1);
        let first_span = first.span;
        let mut status = ParseStatus::Success;
        let mut elements = SelectorElements::default();

        match first.kind {
            PatternKind::Paren(sub) => {
                let arg = rebuild_implicit_pattern_around(&sub, &placeholder(sub.span));
                elements.push(
                    TuplePatternElt::new(arg),
                    TuplePatternElt::new(*sub),
                    closing_paren(first_span),
                );
            }
            PatternKind::Tuple(tuple) => {
                if tuple.len() != 1 {
                    self.emit(error::selector_not_one_argument(first_span));
                    status.set_recovered();
                }
                match tuple.elements.into_iter().next() {
                    Some(body) => {
                        let leaf = placeholder(body.pattern.span);
                        let arg = TuplePatternElt::with_init(
                            rebuild_implicit_pattern_around(&body.pattern, &leaf),
                            body.init,
                            body.default_kind,
                        );
                        elements.push(arg, body, tuple.rparen);
                    }
                    None => {
                        // `()` becomes `(_: ())` on both sides.
                        let empty = Pattern::typed(
                            placeholder(tuple.rparen),
                            TypeRepr::empty_tuple(first_span),
                        )
                        .into_implicit();
                        elements.push(
                            TuplePatternElt::new(empty.clone()),
                            TuplePatternElt::new(empty),
                            tuple.rparen,
                        );
                    }
                }
            }
            _ => unreachable!("a parameter clause parses to a paren or tuple pattern"),
        }

        let rest = self.parse_selector_clauses(elements, lparen, defaults);
        SelectorClauses {
            status: status | rest.status,
            ..rest
        }
    }

    /// Parse the labelled clauses of a constructor that starts directly
    /// with a label, as in `init withName(name: String)`.
    pub(crate) fn parse_selector_constructor_arguments(
        &mut self,
        defaults: &mut DefaultArgumentInfo,
    ) -> SelectorClauses {
        debug!("selector-style initializer without a leading clause");
        let lparen = self.cursor.current_span();
        self.parse_selector_clauses(SelectorElements::default(), lparen, defaults)
    }

    /// Parse `label(pattern)` clauses until the next token cannot start a
    /// binding name, then wrap both element lists in implicit tuples.
    fn parse_selector_clauses(
        &mut self,
        mut elements: SelectorElements,
        lparen: Span,
        defaults: &mut DefaultArgumentInfo,
    ) -> SelectorClauses {
        let mut status = ParseStatus::Success;
        while self.is_at_start_of_binding_name() {
            let clause_status = self.parse_selector_argument(&mut elements, defaults);
            status |= clause_status;
            if clause_status.has_code_completion() {
                break;
            }
        }

        if !status.has_code_completion() && self.cursor.check(&TokenKind::LParen) {
            self.emit(error::curry_after_selector(self.cursor.current_span()));
            let stop = TokenSet::single(TokenKind::LBrace);
            recovery::skip_until_decl_rbrace(&mut self.cursor, stop);
            status.set_error();
        }

        // Skipped tokens stay outside the implicit tuples.
        let rparen = elements.rparen.unwrap_or(lparen);
        let wrap = |elements: Vec<TuplePatternElt>| {
            Pattern::tuple(TuplePattern {
                elements,
                lparen,
                rparen,
                ellipsis: None,
            })
            .into_implicit()
        };
        SelectorClauses {
            arg_pattern: wrap(elements.args),
            body_pattern: wrap(elements.bodies),
            status,
        }
    }

    /// Parse one `label(pattern)` clause.
    fn parse_selector_argument(
        &mut self,
        elements: &mut SelectorElements,
        defaults: &mut DefaultArgumentInfo,
    ) -> ParseStatus {
        let mut status = ParseStatus::Success;
        let (label, _) = self.parse_pattern_identifier(true).into_parts();
        let Some(label) = label else {
            return ParseStatus::Error;
        };
        let label = label.into_implicit();

        if let Some(decl) = label.as_named() {
            match elements.labels.get(&decl.name) {
                Some(&first) => {
                    let name = self.interner().lookup(decl.name);
                    self.emit(error::label_redefinition(name, decl.span, first));
                    status.set_recovered();
                }
                None => {
                    elements.labels.insert(decl.name, decl.span);
                }
            }
        }

        if !self.cursor.check(&TokenKind::LParen) {
            self.emit(error::selector_without_paren(
                self.cursor.current_span(),
                self.cursor.current_kind(),
            ));
            return ParseStatus::Error;
        }

        let (clause, clause_status) = self
            .parse_pattern_tuple(true, Some(defaults))
            .into_parts();
        status |= clause_status;
        if status.has_code_completion() {
            return status;
        }
        let Some(clause) = clause else {
            return status | ParseStatus::Error;
        };

        let clause_span = clause.span;
        let (body, rparen) = match clause.kind {
            PatternKind::Paren(sub) => (TuplePatternElt::new(*sub), closing_paren(clause_span)),
            PatternKind::Tuple(tuple) => {
                let single = <[TuplePatternElt; 1]>::try_from(tuple.elements);
                match (tuple.ellipsis, single) {
                    (None, Ok([only])) => (only, tuple.rparen),
                    _ => {
                        self.emit(error::selector_not_one_argument(clause_span));
                        return status | ParseStatus::Error;
                    }
                }
            }
            _ => unreachable!("a parameter clause parses to a paren or tuple pattern"),
        };

        let default_kind = DefaultArgKind::classify(body.init.map(|id| self.arena.get(id)));
        let arg = TuplePatternElt::with_init(
            rebuild_implicit_pattern_around(&body.pattern, &label),
            body.init,
            default_kind,
        );
        elements.push(arg, body, rparen);
        status
    }
}

/// The `)` ending a parenthesized pattern spanning `span`.
fn closing_paren(span: Span) -> Span {
    Span::new(span.end.saturating_sub(1), span.end)
}

/// Implicit `_` used as the argument-side leaf of an unlabelled clause.
fn placeholder(span: Span) -> Pattern {
    Pattern::any(span).into_implicit()
}
