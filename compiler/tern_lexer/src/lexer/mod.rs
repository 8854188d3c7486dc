//! Lexer that turns source text into an interned [`TokenList`].

use logos::Logos;
use tracing::debug;

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_ir::{Span, StringInterner, Token, TokenKind, TokenList};

use crate::raw_token::RawToken;

/// Tokens plus any lexical errors found along the way.
#[derive(Clone, Debug)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lexer that produces interned tokens.
pub struct Lexer<'src, 'i> {
    source: &'src str,
    interner: &'i StringInterner,
}

impl<'src, 'i> Lexer<'src, 'i> {
    /// Create a new lexer.
    pub fn new(source: &'src str, interner: &'i StringInterner) -> Self {
        Lexer { source, interner }
    }

    /// Lex all tokens from the source.
    ///
    /// The list always ends with [`TokenKind::Eof`]. Unrecognized input
    /// becomes a [`TokenKind::Error`] token and a diagnostic.
    pub fn lex_all(&self) -> LexOutput {
        let mut tokens = TokenList::with_capacity(self.source.len() / 3 + 1);
        let mut diagnostics = Vec::new();
        let mut logos = RawToken::lexer(self.source);

        while let Some(token_result) = logos.next() {
            let span = Span::from_range(logos.span());
            let slice = logos.slice();

            let kind = match token_result {
                Ok(RawToken::UnterminatedString) => {
                    diagnostics.push(
                        Diagnostic::error(ErrorCode::E0001)
                            .with_message("unterminated string literal")
                            .with_label(span, "missing closing `\"`"),
                    );
                    TokenKind::Error
                }
                Ok(raw) => self.convert_token(raw, slice),
                Err(()) => {
                    diagnostics.push(self.error_for(slice, span));
                    TokenKind::Error
                }
            };
            tokens.push(Token::new(kind, span));
        }

        let eof = Span::from_range(self.source.len()..self.source.len());
        tokens.push(Token::new(TokenKind::Eof, eof));

        debug!(
            tokens = tokens.len(),
            errors = diagnostics.len(),
            "lexed source"
        );
        LexOutput {
            tokens,
            diagnostics,
        }
    }

    fn error_for(&self, slice: &str, span: Span) -> Diagnostic {
        if slice.starts_with(|c: char| c.is_ascii_digit()) {
            Diagnostic::error(ErrorCode::E0003)
                .with_message(format!("invalid number literal `{slice}`"))
                .with_label(span, "number does not fit in 64 bits")
        } else {
            Diagnostic::error(ErrorCode::E0002)
                .with_message(format!("invalid character `{slice}`"))
                .with_label(span, "not valid here")
        }
    }

    /// Convert a raw token to a `TokenKind`, interning strings.
    fn convert_token(&self, raw: RawToken, slice: &str) -> TokenKind {
        match raw {
            // Literals
            RawToken::Int(n) => TokenKind::Int(n),
            RawToken::Float(f) => TokenKind::Float(f.to_bits()),
            RawToken::String => {
                let content = slice
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(slice);
                TokenKind::String(self.interner.intern(&unescape_string(content)))
            }
            RawToken::Ident => TokenKind::Ident(self.interner.intern(slice)),
            RawToken::UnterminatedString => TokenKind::Error,
            RawToken::CodeComplete => TokenKind::CodeComplete,

            // Keywords
            RawToken::Func => TokenKind::Func,
            RawToken::Init => TokenKind::Init,
            RawToken::Var => TokenKind::Var,
            RawToken::Let => TokenKind::Let,
            RawToken::Is => TokenKind::Is,
            RawToken::Class => TokenKind::Class,
            RawToken::Struct => TokenKind::Struct,
            RawToken::Enum => TokenKind::Enum,
            RawToken::Protocol => TokenKind::Protocol,
            RawToken::Extension => TokenKind::Extension,
            RawToken::Import => TokenKind::Import,
            RawToken::Typealias => TokenKind::Typealias,
            RawToken::Subscript => TokenKind::Subscript,
            RawToken::Static => TokenKind::Static,
            RawToken::Return => TokenKind::Return,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::While => TokenKind::While,
            RawToken::For => TokenKind::For,
            RawToken::In => TokenKind::In,
            RawToken::Switch => TokenKind::Switch,
            RawToken::Case => TokenKind::Case,
            RawToken::Default => TokenKind::Default,
            RawToken::Break => TokenKind::Break,
            RawToken::Continue => TokenKind::Continue,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,

            // Positional literals
            RawToken::MagicLine => TokenKind::MagicLine,
            RawToken::MagicFile => TokenKind::MagicFile,
            RawToken::MagicColumn => TokenKind::MagicColumn,

            // Punctuation
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Eq => TokenKind::Eq,
            RawToken::Arrow => TokenKind::Arrow,
            RawToken::Ellipsis => TokenKind::Ellipsis,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Question => TokenKind::Question,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::AmpAmp => TokenKind::AmpAmp,
            RawToken::PipePipe => TokenKind::PipePipe,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Underscore => TokenKind::Underscore,
        }
    }
}

/// Process string escape sequences.
fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('0') => result.push('\0'),
                Some(other) => {
                    // Unknown escape - keep as-is
                    result.push('\\');
                    result.push(other);
                }
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests;
