//! Token types produced by the lexer and consumed by the parser.

use crate::{Name, Span};
use std::fmt;

/// A token with its source span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Token kinds.
///
/// Data-carrying variants compare by payload in `==`; grammar checks go
/// through [`TokenKind::discriminant_index`] so that `check(&Ident(_))`
/// style tests do not need a payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals and names
    Ident(Name),
    Int(u64),
    /// Float literal stored as its bit pattern so the token stays `Eq`.
    Float(u64),
    String(Name),

    // Reserved keywords
    Func,
    Init,
    Var,
    Let,
    Is,
    Class,
    Struct,
    Enum,
    Protocol,
    Extension,
    Import,
    Typealias,
    Subscript,
    Static,
    Return,
    If,
    Else,
    While,
    For,
    In,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    True,
    False,

    // Compiler-provided positional literals
    MagicLine,
    MagicFile,
    MagicColumn,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Colon,
    Semicolon,
    Eq,
    Arrow,
    Ellipsis,
    Dot,
    Question,
    Lt,
    Gt,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    EqEq,
    NotEq,
    LtEq,
    GtEq,
    AmpAmp,
    PipePipe,
    Bang,
    Underscore,

    // Special
    /// Interactive completion request (`#^` or `#^NAME^#`).
    CodeComplete,
    /// Unrecognized input; the lexer has already reported it.
    Error,
    Eof,
}

impl TokenKind {
    /// Largest value returned by [`TokenKind::discriminant_index`].
    pub const MAX_DISCRIMINANT: u8 = 65;

    /// Dense index of the variant, ignoring any payload.
    pub const fn discriminant_index(&self) -> u8 {
        match self {
            TokenKind::Ident(_) => 0,
            TokenKind::Int(_) => 1,
            TokenKind::Float(_) => 2,
            TokenKind::String(_) => 3,
            TokenKind::Func => 4,
            TokenKind::Init => 5,
            TokenKind::Var => 6,
            TokenKind::Let => 7,
            TokenKind::Is => 8,
            TokenKind::Class => 9,
            TokenKind::Struct => 10,
            TokenKind::Enum => 11,
            TokenKind::Protocol => 12,
            TokenKind::Extension => 13,
            TokenKind::Import => 14,
            TokenKind::Typealias => 15,
            TokenKind::Subscript => 16,
            TokenKind::Static => 17,
            TokenKind::Return => 18,
            TokenKind::If => 19,
            TokenKind::Else => 20,
            TokenKind::While => 21,
            TokenKind::For => 22,
            TokenKind::In => 23,
            TokenKind::Switch => 24,
            TokenKind::Case => 25,
            TokenKind::Default => 26,
            TokenKind::Break => 27,
            TokenKind::Continue => 28,
            TokenKind::True => 29,
            TokenKind::False => 30,
            TokenKind::MagicLine => 31,
            TokenKind::MagicFile => 32,
            TokenKind::MagicColumn => 33,
            TokenKind::LParen => 34,
            TokenKind::RParen => 35,
            TokenKind::LBrace => 36,
            TokenKind::RBrace => 37,
            TokenKind::LBracket => 38,
            TokenKind::RBracket => 39,
            TokenKind::Comma => 40,
            TokenKind::Colon => 41,
            TokenKind::Semicolon => 42,
            TokenKind::Eq => 43,
            TokenKind::Arrow => 44,
            TokenKind::Ellipsis => 45,
            TokenKind::Dot => 46,
            TokenKind::Question => 47,
            TokenKind::Lt => 48,
            TokenKind::Gt => 49,
            TokenKind::Plus => 50,
            TokenKind::Minus => 51,
            TokenKind::Star => 52,
            TokenKind::Slash => 53,
            TokenKind::Percent => 54,
            TokenKind::EqEq => 55,
            TokenKind::NotEq => 56,
            TokenKind::LtEq => 57,
            TokenKind::GtEq => 58,
            TokenKind::AmpAmp => 59,
            TokenKind::PipePipe => 60,
            TokenKind::Bang => 61,
            TokenKind::Underscore => 62,
            TokenKind::CodeComplete => 63,
            TokenKind::Error => 64,
            TokenKind::Eof => 65,
        }
    }

    /// Check if two kinds are the same variant, ignoring payloads.
    #[inline]
    pub const fn same_kind(&self, other: &TokenKind) -> bool {
        self.discriminant_index() == other.discriminant_index()
    }

    /// Source spelling of a reserved keyword, or `None`.
    pub const fn keyword_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::Func => Some("func"),
            TokenKind::Init => Some("init"),
            TokenKind::Var => Some("var"),
            TokenKind::Let => Some("let"),
            TokenKind::Is => Some("is"),
            TokenKind::Class => Some("class"),
            TokenKind::Struct => Some("struct"),
            TokenKind::Enum => Some("enum"),
            TokenKind::Protocol => Some("protocol"),
            TokenKind::Extension => Some("extension"),
            TokenKind::Import => Some("import"),
            TokenKind::Typealias => Some("typealias"),
            TokenKind::Subscript => Some("subscript"),
            TokenKind::Static => Some("static"),
            TokenKind::Return => Some("return"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::While => Some("while"),
            TokenKind::For => Some("for"),
            TokenKind::In => Some("in"),
            TokenKind::Switch => Some("switch"),
            TokenKind::Case => Some("case"),
            TokenKind::Default => Some("default"),
            TokenKind::Break => Some("break"),
            TokenKind::Continue => Some("continue"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            _ => None,
        }
    }

    /// Check if this is a reserved keyword.
    #[inline]
    pub const fn is_keyword(&self) -> bool {
        self.keyword_str().is_some()
    }

    /// Keywords that always begin a declaration.
    pub const fn is_decl_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Func
                | TokenKind::Init
                | TokenKind::Var
                | TokenKind::Let
                | TokenKind::Class
                | TokenKind::Struct
                | TokenKind::Enum
                | TokenKind::Protocol
                | TokenKind::Extension
                | TokenKind::Import
                | TokenKind::Typealias
                | TokenKind::Subscript
                | TokenKind::Static
        )
    }

    /// Keywords that always begin a statement.
    pub const fn is_stmt_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Return
                | TokenKind::If
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Switch
                | TokenKind::Case
                | TokenKind::Default
                | TokenKind::Break
                | TokenKind::Continue
        )
    }

    /// Human-readable name for error messages.
    pub const fn display_name(&self) -> &'static str {
        if let Some(kw) = self.keyword_str() {
            return kw;
        }
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::String(_) => "string",
            TokenKind::MagicLine => "__LINE__",
            TokenKind::MagicFile => "__FILE__",
            TokenKind::MagicColumn => "__COLUMN__",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Eq => "=",
            TokenKind::Arrow => "->",
            TokenKind::Ellipsis => "...",
            TokenKind::Dot => ".",
            TokenKind::Question => "?",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::AmpAmp => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::Bang => "!",
            TokenKind::Underscore => "_",
            TokenKind::CodeComplete => "code completion",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
            // Keywords are handled above.
            _ => "keyword",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Token stream for one source file.
///
/// The lexer always terminates the list with [`TokenKind::Eof`], so a
/// cursor over a non-empty list can never run off the end.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}
