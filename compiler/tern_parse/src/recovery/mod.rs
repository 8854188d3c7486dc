//! Error recovery for the parser.
//!
//! Provides token sets and the skipping routines used to resynchronize
//! after a hard error. Skipping always steps over balanced `()`, `[]` and
//! `{}` groups as a unit so that recovery never stops inside a nested
//! construct.

use tern_ir::TokenKind;
use tracing::debug;

use crate::cursor::Cursor;

// TokenSet uses a u128 bitset, so all discriminant indices must be < 128.
const _: () = assert!(
    TokenKind::MAX_DISCRIMINANT <= 127,
    "TokenSet uses u128 bitset; all discriminant indices must be < 128"
);

/// A set of token kinds using bitset representation for O(1) membership
/// testing.
///
/// Each bit corresponds to a [`TokenKind::discriminant_index`], so
/// data-carrying kinds match regardless of payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single token kind.
    #[inline]
    #[allow(
        clippy::needless_pass_by_value,
        reason = "const fn builder API; by-value required for static init"
    )]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u128 << kind.discriminant_index())
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    #[allow(
        clippy::needless_pass_by_value,
        reason = "const fn builder API; by-value required for static init"
    )]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }
}

/// Tokens that close a group. Recovery inside a list never skips past one
/// of these unless it opened the group itself.
pub const CLOSE_DELIMITERS: TokenSet = TokenSet::new()
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::RBrace);

/// Where a malformed default value stops skipping (besides statement and
/// declaration starts).
pub const DEFAULT_VALUE_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Comma)
    .with(TokenKind::RParen)
    .with(TokenKind::LBrace)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Advance the cursor until reaching a token in the recovery set or EOF.
///
/// Returns `true` if a recovery token was found, `false` if EOF was reached.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    while !cursor.is_at_end() {
        if recovery.contains(cursor.current_kind()) {
            return true;
        }
        skip_single(cursor);
    }
    false
}

/// Skip one token, or one balanced group if the current token opens one.
///
/// A stray closing delimiter is consumed as a single token. An unclosed
/// group is skipped to EOF.
pub fn skip_single(cursor: &mut Cursor<'_>) {
    let close = match cursor.current_kind() {
        TokenKind::LParen => TokenKind::RParen,
        TokenKind::LBracket => TokenKind::RBracket,
        TokenKind::LBrace => TokenKind::RBrace,
        _ => {
            cursor.advance();
            return;
        }
    };
    cursor.advance();
    while !cursor.is_at_end() && !cursor.check(&close) {
        if CLOSE_DELIMITERS.contains(cursor.current_kind()) {
            // Mismatched closer: the group is malformed, let the caller see it.
            return;
        }
        skip_single(cursor);
    }
    cursor.consume_if(&close);
}

/// Skip to the end of the current declaration's signature.
///
/// Stops at EOF, at `}`, at the start of a declaration, or at any token in
/// `stop`. Returns the number of tokens skipped.
pub fn skip_until_decl_rbrace(cursor: &mut Cursor<'_>, stop: TokenSet) -> usize {
    let start = cursor.position();
    while !cursor.is_at_end()
        && !cursor.check(&TokenKind::RBrace)
        && !stop.contains(cursor.current_kind())
        && !cursor.is_start_of_decl()
    {
        skip_single(cursor);
    }
    let skipped = cursor.position() - start;
    if skipped > 0 {
        debug!(skipped, stop_at = %cursor.current_kind(), "resynchronized to declaration boundary");
    }
    skipped
}

/// Skip the remainder of a malformed default value.
///
/// Stops at `,`, `)`, `{`, `}`, EOF, or the start of a statement or
/// declaration, leaving the parameter list to close itself.
pub fn skip_malformed_default_value(cursor: &mut Cursor<'_>) {
    let start = cursor.position();
    while !DEFAULT_VALUE_BOUNDARY.contains(cursor.current_kind())
        && !cursor.is_start_of_stmt()
        && !cursor.is_start_of_decl()
    {
        skip_single(cursor);
    }
    debug!(
        skipped = cursor.position() - start,
        "skipped malformed default value"
    );
}

#[cfg(test)]
mod tests;
