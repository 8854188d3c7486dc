//! Raw tokens recognized by logos, before interning.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub(crate) enum RawToken {
    // === Keywords ===
    #[token("func")]
    Func,
    #[token("init")]
    Init,
    #[token("var")]
    Var,
    #[token("let")]
    Let,
    #[token("is")]
    Is,
    #[token("class")]
    Class,
    #[token("struct")]
    Struct,
    #[token("enum")]
    Enum,
    #[token("protocol")]
    Protocol,
    #[token("extension")]
    Extension,
    #[token("import")]
    Import,
    #[token("typealias")]
    Typealias,
    #[token("subscript")]
    Subscript,
    #[token("static")]
    Static,
    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("in")]
    In,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("default")]
    Default,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // === Positional literals ===
    #[token("__LINE__")]
    MagicLine,
    #[token("__FILE__")]
    MagicFile,
    #[token("__COLUMN__")]
    MagicColumn,

    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,

    // === Operators ===
    #[token("=")]
    Eq,
    #[token("->")]
    Arrow,
    #[token("...")]
    Ellipsis,
    #[token(".")]
    Dot,
    #[token("?")]
    Question,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("!")]
    Bang,
    #[token("_", priority = 3)]
    Underscore,

    // === Completion marker ===
    #[regex(r"#\^([A-Za-z0-9_]*\^#)?")]
    CodeComplete,

    // === Literals ===
    // Integer with underscores
    #[regex(r"[0-9][0-9_]*", |lex| {
        lex.slice().replace('_', "").parse::<u64>().ok()
    })]
    Int(u64),

    // Float with optional exponent
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?", |lex| {
        lex.slice().replace('_', "").parse::<f64>().ok()
    })]
    Float(f64),

    // String literal (double-quoted)
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    // String literal missing its closing quote
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedString,

    // Identifier
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
