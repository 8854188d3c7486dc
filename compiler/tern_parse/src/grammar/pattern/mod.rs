//! Core pattern grammar.
//!
//! ```text
//! pattern       ::= ('var' | 'let') pattern
//!                 | pattern-atom (':' type)?
//! pattern-atom  ::= identifier | '_' | pattern-tuple
//! pattern-tuple ::= '(' (tuple-elt (',' tuple-elt)*)? ')'
//! tuple-elt     ::= pattern ('=' expr)? '...'?
//! ```
//!
//! Every other pattern entry point bottoms out here.

use tern_ir::{DefaultArgKind, Pattern, TokenKind, TuplePatternElt, TypeRepr, VarDecl};

use crate::error;
use crate::grammar::DefaultArgumentInfo;
use crate::outcome::{ParseOutcome, ParseStatus};
use crate::series::{SeriesConfig, TrailingSeparator};
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

impl Parser<'_> {
    /// Parse a pattern. Bindings outside any `var`/`let` qualifier get the
    /// mutability given by `is_let`.
    pub(crate) fn parse_pattern(&mut self, is_let: bool) -> ParseOutcome<Pattern> {
        ensure_sufficient_stack(|| self.parse_pattern_inner(is_let))
    }

    fn parse_pattern_inner(&mut self, is_let: bool) -> ParseOutcome<Pattern> {
        if matches!(self.cursor.current_kind(), TokenKind::Var | TokenKind::Let) {
            return self.parse_pattern_var_or_let();
        }

        let (atom, mut status) = self.parse_pattern_atom(is_let).into_parts();
        if status.has_code_completion() {
            return ParseOutcome::new(status, atom);
        }
        let Some(colon) = self.cursor.consume_if(&TokenKind::Colon) else {
            return ParseOutcome::new(status, atom);
        };

        let atom = match atom {
            Some(atom) => atom,
            None => {
                // A failed atom stays a failure; the annotation is kept.
                status |= ParseStatus::Error;
                Pattern::any(colon).into_implicit()
            }
        };

        let (ty, ty_status) = self.parse_type().into_parts();
        if ty_status.has_code_completion() {
            return ParseOutcome::code_completion();
        }
        let ty = ty.unwrap_or_else(|| TypeRepr::error(colon));
        ParseOutcome::with_status(status | ty_status, Pattern::typed(atom, ty))
    }

    /// Parse `var pattern` or `let pattern`.
    ///
    /// A qualifier nested inside another is diagnosed; its bindings keep
    /// the outer qualifier's mutability.
    fn parse_pattern_var_or_let(&mut self) -> ParseOutcome<Pattern> {
        let keyword_is_let = self.cursor.check(&TokenKind::Let);
        let keyword = self.cursor.advance().span;
        let mut status = ParseStatus::Success;

        let (context, bindings_are_let) = if self.context.in_var_or_let_pattern() {
            self.emit(error::nested_var_or_let(keyword, keyword_is_let));
            status.set_recovered();
            (self.context, self.context.in_let_pattern())
        } else {
            (self.context.with_qualifier(keyword_is_let), keyword_is_let)
        };

        let (sub, sub_status) = self
            .with_context(context, |p| p.parse_pattern(bindings_are_let))
            .into_parts();
        status |= sub_status;
        match sub {
            Some(sub) => ParseOutcome::with_status(status, Pattern::var(keyword_is_let, keyword, sub)),
            None => ParseOutcome::new(status, None),
        }
    }

    /// Parse a pattern atom: a name, `_`, or a parenthesized tuple.
    fn parse_pattern_atom(&mut self, is_let: bool) -> ParseOutcome<Pattern> {
        let span = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::LParen => self.parse_pattern_tuple(is_let, None),
            TokenKind::Ident(_) | TokenKind::Underscore => self.parse_pattern_identifier(is_let),
            TokenKind::CodeComplete => {
                // No completions are offered for new binding names.
                self.cursor.advance();
                ParseOutcome::error()
            }
            keyword
                if keyword.is_keyword()
                    && (self.cursor.next_is_colon() || self.cursor.next_is_eq()) =>
            {
                self.emit(error::keyword_as_pattern(span, keyword));
                self.cursor.advance();
                ParseOutcome::recovered(Pattern::any(span).into_implicit())
            }
            found => {
                self.emit(error::expected_pattern(span, found));
                ParseOutcome::error()
            }
        }
    }

    /// Parse a binding name or `_`. The caller has checked the token.
    pub(crate) fn parse_pattern_identifier(&mut self, is_let: bool) -> ParseOutcome<Pattern> {
        let token = self.cursor.advance();
        match token.kind {
            TokenKind::Ident(name) => ParseOutcome::success(Pattern::named(VarDecl {
                name,
                span: token.span,
                is_let,
                implicit: false,
                context: self.decl_context,
            })),
            TokenKind::Underscore => ParseOutcome::success(Pattern::any(token.span)),
            _ => {
                self.emit(error::expected_pattern(token.span, &token.kind));
                ParseOutcome::error()
            }
        }
    }

    /// Parse a parenthesized tuple pattern. The current token is `(`.
    ///
    /// With a default-argument manager the elements may carry default
    /// values and each element draws an index from it. The result is always
    /// present: a `Paren` pattern for a single plain element, a `Tuple`
    /// otherwise.
    pub(crate) fn parse_pattern_tuple(
        &mut self,
        is_let: bool,
        mut defaults: Option<&mut DefaultArgumentInfo>,
    ) -> ParseOutcome<Pattern> {
        let lparen = self.cursor.advance().span;
        let mut elements = Vec::new();
        let mut ellipsis = None;

        let config = SeriesConfig::comma(TokenKind::RParen)
            .trailing(TrailingSeparator::Forbidden)
            .unclosed("expected `)` at end of tuple pattern");
        let end = self.series(&config, lparen, |p| {
            let (elt, mut status) = p
                .parse_pattern_tuple_element(is_let, defaults.as_deref_mut())
                .into_parts();
            if status.has_code_completion() {
                return status;
            }
            let Some(elt) = elt else {
                return status;
            };

            if let Some(dots) = p.cursor.consume_if(&TokenKind::Ellipsis) {
                if elt.init.is_some() {
                    p.emit(error::vararg_with_default(dots));
                    status.set_recovered();
                } else if !elt.pattern.is_typed() {
                    p.emit(error::untyped_vararg(dots));
                    status.set_recovered();
                } else if p.cursor.check(&TokenKind::RParen) {
                    ellipsis = Some(dots);
                } else {
                    p.emit(error::ellipsis_not_last(dots));
                    status.set_recovered();
                }
            }
            elements.push(elt);
            status
        });

        ParseOutcome::with_status(
            end.status,
            Pattern::create_simple(lparen, elements, ellipsis, end.close),
        )
    }

    /// Parse one tuple element and its optional default value.
    fn parse_pattern_tuple_element(
        &mut self,
        is_let: bool,
        mut defaults: Option<&mut DefaultArgumentInfo>,
    ) -> ParseOutcome<TuplePatternElt> {
        // Indices are positional: every element draws one, default or not.
        let index = defaults.as_deref_mut().map_or(0, DefaultArgumentInfo::claim_index);

        let (pattern, mut status) = self.parse_pattern(is_let).into_parts();
        if status.has_code_completion() {
            return ParseOutcome::code_completion();
        }
        let Some(pattern) = pattern else {
            return ParseOutcome::new(status, None);
        };

        let mut init = None;
        if self.cursor.check(&TokenKind::Eq) {
            let (expr, init_status) = self.parse_default_argument(defaults, index).into_parts();
            status |= init_status;
            init = expr;
        }
        let default_kind = DefaultArgKind::classify(init.map(|id| self.arena.get(id)));
        ParseOutcome::with_status(
            status,
            TuplePatternElt::with_init(pattern, init, default_kind),
        )
    }

    /// Check if the current token can begin a binding name: `_`, or an
    /// identifier that does not start a declaration.
    pub(crate) fn is_at_start_of_binding_name(&self) -> bool {
        self.cursor.check(&TokenKind::Underscore)
            || (self.cursor.check_ident() && !self.cursor.is_start_of_decl())
    }
}
