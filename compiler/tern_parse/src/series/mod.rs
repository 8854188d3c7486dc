//! Delimited list parsing.
//!
//! [`Parser::series`] drives every `( a, b, c )` style list in the grammar:
//! it handles separators, stray and trailing separators, missing
//! separators, resynchronization after a failed element, and the closing
//! delimiter. Callers supply only the per-element callback.

use tern_ir::{Span, TokenKind};
use tracing::debug;

use crate::error;
use crate::outcome::ParseStatus;
use crate::recovery::{self, TokenSet};
use crate::Parser;

/// Whether a separator may directly precede the terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailingSeparator {
    /// `(a, b,)` is accepted silently.
    Allowed,
    /// `(a, b,)` is diagnosed; the list is still accepted.
    Forbidden,
}

/// Configuration for one kind of delimited list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesConfig {
    pub separator: TokenKind,
    pub terminator: TokenKind,
    pub trailing: TrailingSeparator,
    /// Message for a missing terminator.
    pub unclosed_message: &'static str,
}

impl SeriesConfig {
    /// Comma-separated list closed by `terminator`.
    pub fn comma(terminator: TokenKind) -> Self {
        SeriesConfig {
            separator: TokenKind::Comma,
            terminator,
            trailing: TrailingSeparator::Allowed,
            unclosed_message: "expected closing delimiter",
        }
    }

    #[must_use]
    pub fn trailing(mut self, trailing: TrailingSeparator) -> Self {
        self.trailing = trailing;
        self
    }

    #[must_use]
    pub fn unclosed(mut self, message: &'static str) -> Self {
        self.unclosed_message = message;
        self
    }
}

/// How a list ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesEnd {
    /// Combined status of the elements and the delimiters.
    pub status: ParseStatus,
    /// Span of the terminator, or of the last consumed token when the
    /// terminator is missing.
    pub close: Span,
}

impl Parser<'_> {
    /// Parse the elements of a delimited list whose opening token at
    /// `open` has already been consumed.
    ///
    /// `element` parses one element and reports its status. The list stops
    /// immediately when an element requests code completion.
    pub(crate) fn series(
        &mut self,
        config: &SeriesConfig,
        open: Span,
        mut element: impl FnMut(&mut Self) -> ParseStatus,
    ) -> SeriesEnd {
        if let Some(close) = self.cursor.consume_if(&config.terminator) {
            return SeriesEnd {
                status: ParseStatus::Success,
                close,
            };
        }

        let resync = TokenSet::single(config.terminator)
            .with(config.separator)
            .with(TokenKind::LBrace);
        let mut status = ParseStatus::Success;

        loop {
            while self.cursor.check(&config.separator) {
                let span = self.cursor.advance().span;
                self.emit(error::unexpected_separator(span, &config.separator));
                status.set_recovered();
            }
            if self.cursor.check(&config.terminator) {
                break;
            }

            let start = self.cursor.position();
            let element_status = element(self);
            status |= element_status;
            if element_status.has_code_completion() {
                break;
            }
            if self.cursor.check(&config.terminator) {
                break;
            }

            let stalled = self.cursor.position() == start;
            if stalled || element_status.is_error() {
                if stalled {
                    status.set_error();
                }
                recovery::skip_until_decl_rbrace(&mut self.cursor, resync);
                if !self.cursor.check(&config.separator) {
                    break;
                }
            }

            if let Some(separator) = self.cursor.consume_if(&config.separator) {
                if !self.cursor.check(&config.terminator) {
                    continue;
                }
                if config.trailing == TrailingSeparator::Forbidden {
                    self.emit(error::trailing_separator(separator, &config.separator));
                    status.set_recovered();
                }
                break;
            }

            if self.at_list_boundary() {
                break;
            }

            let insert_at = self.cursor.previous_span().end;
            self.emit(error::expected_separator(
                self.cursor.current_span(),
                &config.separator,
                self.cursor.current_kind(),
                insert_at,
            ));
            status.set_error();
        }

        let close = if status.is_error() {
            self.cursor
                .consume_if(&config.terminator)
                .unwrap_or_else(|| self.cursor.previous_span())
        } else if let Some(close) = self.cursor.consume_if(&config.terminator) {
            close
        } else {
            debug!(open = ?open, "unclosed delimited list");
            let at = self.cursor.current_span();
            self.emit(error::unclosed_delimiter(
                config.unclosed_message,
                at,
                open,
                &config.terminator,
            ));
            status.set_error();
            self.cursor.previous_span()
        };

        SeriesEnd { status, close }
    }

    /// Tokens at which a list gives up without complaining about a missing
    /// separator.
    fn at_list_boundary(&self) -> bool {
        self.cursor.is_at_end()
            || self.cursor.check(&TokenKind::LBrace)
            || self.cursor.check(&TokenKind::RBrace)
            || self.cursor.is_start_of_decl()
    }
}

#[cfg(test)]
mod tests;
