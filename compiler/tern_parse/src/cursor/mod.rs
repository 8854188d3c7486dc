//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

/// Identifiers that act as declaration modifiers when a declaration
/// keyword follows them.
const CONTEXTUAL_DECL_MODIFIERS: &[&str] = &[
    "mutating", "override", "infix", "prefix", "postfix", "weak", "unowned",
];

/// Cursor for navigating tokens.
///
/// Tracks the current position in the token stream. The stream always ends
/// with `Eof` and the cursor never moves past it.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        debug_assert!(
            tokens
                .as_slice()
                .last()
                .is_some_and(|t| t.kind == TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    /// Get a reference to the string interner.
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Get the current position in the token stream.
    ///
    /// Used for progress tracking: compare positions before and after
    /// parsing to determine if tokens were consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.token_at(self.pos)
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    ///
    /// At the start of the stream this is an empty span at the current token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::point(self.current_span().start)
        }
    }

    /// Token at `index`, clamped to the trailing `Eof`.
    #[inline]
    fn token_at(&self, index: usize) -> &'a Token {
        let tokens: &'a TokenList = self.tokens;
        let last = tokens.len().saturating_sub(1);
        &tokens[index.min(last)]
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token matches the given kind, ignoring payload.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Check if the current token is an identifier.
    #[inline]
    pub fn check_ident(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(_))
    }

    /// Peek at the next token's kind (one-token lookahead).
    /// Returns `TokenKind::Eof` if at the end of the stream.
    #[inline]
    pub fn peek_next_kind(&self) -> &'a TokenKind {
        self.peek_kind_at(1)
    }

    /// Peek at the token kind at offset `n` from current position.
    ///
    /// `peek_kind_at(0)` is the current token, `peek_kind_at(1)` is the next, etc.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> &'a TokenKind {
        &self.token_at(self.pos + n).kind
    }

    /// Check if the next token (lookahead) is a colon.
    #[inline]
    pub fn next_is_colon(&self) -> bool {
        matches!(self.peek_next_kind(), TokenKind::Colon)
    }

    /// Check if the next token (lookahead) is `=`.
    #[inline]
    pub fn next_is_eq(&self) -> bool {
        matches!(self.peek_next_kind(), TokenKind::Eq)
    }

    /// Check if the current token starts a declaration.
    ///
    /// Declaration keywords always do. A contextual modifier such as
    /// `mutating` does when a declaration keyword follows it.
    pub fn is_start_of_decl(&self) -> bool {
        match self.current_kind() {
            kind if kind.is_decl_keyword() => true,
            TokenKind::Ident(name) => {
                CONTEXTUAL_DECL_MODIFIERS.contains(&self.interner.lookup(*name))
                    && self.peek_next_kind().is_decl_keyword()
            }
            _ => false,
        }
    }

    /// Check if the current token starts a statement.
    pub fn is_start_of_stmt(&self) -> bool {
        self.current_kind().is_stmt_keyword()
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// At `Eof` the cursor stays put and `Eof` is returned again.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`, returning its span.
    #[inline]
    pub fn consume_if(&mut self, kind: &TokenKind) -> Option<Span> {
        if self.check(kind) {
            Some(self.advance().span)
        } else {
            None
        }
    }

    /// Expect the current token to be of the given kind, advance and return
    /// its span.
    ///
    /// Split into inline happy path + `#[cold]` error path so that
    /// `format!()` allocations don't prevent inlining the fast case.
    #[inline]
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Span, Diagnostic> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: &TokenKind) -> Diagnostic {
        Diagnostic::error(ErrorCode::E1001)
            .with_message(format!(
                "expected `{}`, found {}",
                kind.display_name(),
                describe(self.current_kind())
            ))
            .with_label(
                self.current_span(),
                format!("expected `{}`", kind.display_name()),
            )
    }
}

/// Describe a token for "found ..." messages.
pub(crate) fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Ident(_)
        | TokenKind::Int(_)
        | TokenKind::Float(_)
        | TokenKind::String(_)
        | TokenKind::Eof
        | TokenKind::Error
        | TokenKind::CodeComplete => kind.display_name().to_string(),
        _ => format!("`{}`", kind.display_name()),
    }
}
