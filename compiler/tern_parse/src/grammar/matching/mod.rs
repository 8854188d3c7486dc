//! Matching patterns, as used by `case` labels.
//!
//! ```text
//! matching-pattern ::= ('var' | 'let') matching-pattern
//!                    | 'is' type
//!                    | expr
//! ```
//!
//! Everything that is not a qualifier or a type test is parsed as an
//! expression and wrapped in an `Expr` pattern; name resolution decides
//! later what the expression binds.

use tern_ir::{Pattern, TokenKind};

use crate::error;
use crate::outcome::{ParseOutcome, ParseStatus};
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

impl Parser<'_> {
    /// Parse a matching pattern.
    pub(crate) fn parse_matching_pattern(&mut self) -> ParseOutcome<Pattern> {
        ensure_sufficient_stack(|| match self.cursor.current_kind() {
            TokenKind::Var | TokenKind::Let => self.parse_matching_pattern_var_or_let(),
            TokenKind::Is => self.parse_matching_pattern_isa(),
            _ => {
                let (expr, status) = self.parse_expr().into_parts();
                if status.has_code_completion() {
                    return ParseOutcome::code_completion();
                }
                match expr {
                    Some(id) => {
                        let span = self.arena.get(id).span;
                        ParseOutcome::with_status(status, Pattern::expr(id, span))
                    }
                    None => ParseOutcome::new(status, None),
                }
            }
        })
    }

    fn parse_matching_pattern_var_or_let(&mut self) -> ParseOutcome<Pattern> {
        let is_let = self.cursor.check(&TokenKind::Let);
        let keyword = self.cursor.advance().span;
        let mut status = ParseStatus::Success;

        let context = if self.context.in_var_or_let_pattern() {
            self.emit(error::nested_var_or_let(keyword, is_let));
            status.set_recovered();
            self.context
        } else {
            self.context.with_qualifier(is_let)
        };

        let (sub, sub_status) = self
            .with_context(context, Parser::parse_matching_pattern)
            .into_parts();
        status |= sub_status;
        match sub {
            Some(sub) => ParseOutcome::with_status(status, Pattern::var(is_let, keyword, sub)),
            None => ParseOutcome::new(status, None),
        }
    }

    fn parse_matching_pattern_isa(&mut self) -> ParseOutcome<Pattern> {
        let is = self.cursor.advance().span;
        let (ty, status) = self.parse_type().into_parts();
        if status.has_code_completion() {
            return ParseOutcome::code_completion();
        }
        match ty {
            Some(ty) => {
                let span = is.merge(ty.span);
                ParseOutcome::with_status(status, Pattern::isa(ty, span))
            }
            None => ParseOutcome::new(status, None),
        }
    }
}

#[cfg(test)]
mod tests;
