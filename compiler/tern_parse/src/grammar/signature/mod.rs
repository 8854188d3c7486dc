//! Function signatures and initializer parameter clauses.
//!
//! ```text
//! func-signature ::= param-clauses (('->' | ':') type)?
//! param-clauses  ::= pattern-tuple pattern-tuple*              curried
//!                  | pattern-tuple (label pattern-tuple)+      selector
//! ```
//!
//! Parameter clauses are parsed in an implicit `let` context: parameters
//! are immutable, and an explicit `var`/`let` inside a clause is a nested
//! qualifier.

use tern_ir::{Pattern, Span, TokenKind, TypeRepr};
use tracing::debug;

use crate::error;
use crate::grammar::DefaultArgumentInfo;
use crate::outcome::{ParseOutcome, ParseStatus};
use crate::Parser;

/// Parsed parameter clauses and result type of a function.
///
/// `arg_patterns` and `body_patterns` always have the same length and at
/// least one entry. For curried signatures they are equal; for selector
/// signatures they hold one implicit tuple each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionSignature {
    pub arg_patterns: Vec<Pattern>,
    pub body_patterns: Vec<Pattern>,
    pub result_type: Option<TypeRepr>,
    pub has_selector_style: bool,
}

/// Parsed parameter clause of an initializer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructorArguments {
    pub arg_pattern: Pattern,
    pub body_pattern: Pattern,
    pub has_selector_style: bool,
}

/// Argument and body clause lists under construction.
struct ParameterClauses {
    arg_patterns: Vec<Pattern>,
    body_patterns: Vec<Pattern>,
    has_selector_style: bool,
}

impl ParameterClauses {
    fn single(arg: Pattern, body: Pattern, has_selector_style: bool) -> Self {
        ParameterClauses {
            arg_patterns: vec![arg],
            body_patterns: vec![body],
            has_selector_style,
        }
    }

    /// An implicit `()` clause on both sides.
    fn empty(at: Span) -> Self {
        let empty = Pattern::empty_tuple(at, at).into_implicit();
        Self::single(empty.clone(), empty, false)
    }
}

impl Parser<'_> {
    /// Parse a function signature. The first clause may carry default
    /// values, which register with `defaults`.
    pub(crate) fn parse_function_signature(
        &mut self,
        defaults: &mut DefaultArgumentInfo,
    ) -> ParseOutcome<FunctionSignature> {
        let mut status = ParseStatus::Success;

        let clauses = if self.cursor.check(&TokenKind::LParen) {
            let params = self.context.with_qualifier(true);
            let (clauses, clause_status) =
                self.with_context(params, |p| p.parse_function_arguments(defaults));
            status |= clause_status;
            clauses
        } else {
            self.emit(error::func_decl_without_paren(self.cursor.current_span()));
            status.set_recovered();
            ParameterClauses::empty(Span::point(self.cursor.previous_span().end))
        };

        let mut signature = FunctionSignature {
            arg_patterns: clauses.arg_patterns,
            body_patterns: clauses.body_patterns,
            result_type: None,
            has_selector_style: clauses.has_selector_style,
        };
        if status.has_code_completion() {
            return ParseOutcome::with_status(status, signature);
        }

        if self.cursor.check(&TokenKind::Arrow) || self.cursor.check(&TokenKind::Colon) {
            let introducer = self.cursor.advance();
            if introducer.kind == TokenKind::Colon {
                self.emit(error::colon_for_result_type(introducer.span));
                status.set_recovered();
            }
            let (ty, ty_status) = self.parse_type().into_parts();
            status |= ty_status;
            if !ty_status.has_code_completion() {
                let fallback = self.cursor.previous_span();
                signature.result_type = Some(ty.unwrap_or_else(|| TypeRepr::error(fallback)));
            }
        }

        ParseOutcome::with_status(status, signature)
    }

    /// Parse the parameter clauses after deciding between curried and
    /// selector style. The current token is `(`.
    fn parse_function_arguments(
        &mut self,
        defaults: &mut DefaultArgumentInfo,
    ) -> (ParameterClauses, ParseStatus) {
        let (first, mut status) = self.parse_pattern_tuple(true, Some(defaults)).into_parts();
        let Some(first) = first else {
            let at = Span::point(self.cursor.previous_span().end);
            return (ParameterClauses::empty(at), status | ParseStatus::Error);
        };
        if status.has_code_completion() {
            return (ParameterClauses::single(first.clone(), first, false), status);
        }

        if self.is_at_start_of_binding_name() {
            let selector = self.parse_selector_function_arguments(first, defaults);
            let clauses =
                ParameterClauses::single(selector.arg_pattern, selector.body_pattern, true);
            return (clauses, status | selector.status);
        }

        debug!("curried parameter clauses");
        let mut clauses = ParameterClauses::single(first.clone(), first, false);
        while self.cursor.check(&TokenKind::LParen) {
            let (clause, clause_status) = self.parse_pattern_tuple(true, None).into_parts();
            status |= clause_status;
            if let Some(clause) = clause {
                clauses.arg_patterns.push(clause.clone());
                clauses.body_patterns.push(clause);
            }
            if clause_status.has_code_completion() {
                break;
            }
        }
        (clauses, status)
    }

    /// Parse an initializer's parameter clause.
    pub(crate) fn parse_constructor_arguments(
        &mut self,
        defaults: &mut DefaultArgumentInfo,
    ) -> ParseOutcome<ConstructorArguments> {
        let params = self.context.with_qualifier(true);
        self.with_context(params, |p| p.parse_constructor_arguments_inner(defaults))
    }

    fn parse_constructor_arguments_inner(
        &mut self,
        defaults: &mut DefaultArgumentInfo,
    ) -> ParseOutcome<ConstructorArguments> {
        if self.cursor.check(&TokenKind::LParen) {
            let (first, status) = self.parse_pattern_tuple(true, Some(defaults)).into_parts();
            let first = first.unwrap_or_else(|| {
                let at = Span::point(self.cursor.previous_span().end);
                Pattern::empty_tuple(at, at).into_implicit()
            });
            if !status.has_code_completion() && self.is_at_start_of_binding_name() {
                let selector = self.parse_selector_function_arguments(first, defaults);
                return ParseOutcome::with_status(
                    status | selector.status,
                    ConstructorArguments {
                        arg_pattern: selector.arg_pattern,
                        body_pattern: selector.body_pattern,
                        has_selector_style: true,
                    },
                );
            }
            let body_pattern = first.clone();
            return ParseOutcome::with_status(
                status,
                ConstructorArguments {
                    arg_pattern: first,
                    body_pattern,
                    has_selector_style: false,
                },
            );
        }

        if !self.is_at_start_of_binding_name() {
            let span = self.cursor.current_span();
            let insert_at = self
                .cursor
                .check(&TokenKind::LBrace)
                .then_some(span.start);
            self.emit(error::init_without_paren(span, insert_at));
            let at = Span::point(self.cursor.previous_span().end);
            let empty = Pattern::empty_tuple(at, at).into_implicit();
            return ParseOutcome::with_status(
                ParseStatus::Error,
                ConstructorArguments {
                    arg_pattern: empty.clone(),
                    body_pattern: empty,
                    has_selector_style: false,
                },
            );
        }

        let selector = self.parse_selector_constructor_arguments(defaults);
        ParseOutcome::with_status(
            selector.status,
            ConstructorArguments {
                arg_pattern: selector.arg_pattern,
                body_pattern: selector.body_pattern,
                has_selector_style: true,
            },
        )
    }
}

#[cfg(test)]
mod tests;
