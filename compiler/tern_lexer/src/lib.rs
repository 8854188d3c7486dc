//! Lexer for the Tern compiler.
//!
//! Built on logos. Identifiers and string contents are interned so that
//! tokens are `Copy`.

mod lexer;
mod raw_token;

pub use lexer::{LexOutput, Lexer};

use tern_ir::{StringInterner, TokenList};

/// Lex source text, dropping lexical diagnostics.
///
/// Invalid input still shows up as `TokenKind::Error` tokens, which the
/// parser reports as unexpected.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    Lexer::new(source, interner).lex_all().tokens
}

/// Lex source text, keeping lexical diagnostics.
pub fn lex_with_diagnostics(source: &str, interner: &StringInterner) -> LexOutput {
    Lexer::new(source, interner).lex_all()
}
