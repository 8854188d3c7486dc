use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    Lexer::new(source, interner)
        .lex_all()
        .tokens
        .iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_signature_tokens() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let int = interner.intern("Int");
    assert_eq!(
        kinds("(x: Int...) -> Int", &interner),
        vec![
            TokenKind::LParen,
            TokenKind::Ident(x),
            TokenKind::Colon,
            TokenKind::Ident(int),
            TokenKind::Ellipsis,
            TokenKind::RParen,
            TokenKind::Arrow,
            TokenKind::Ident(int),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_underscore_and_keywords() {
    let interner = StringInterner::new();
    let under = interner.intern("_x");
    assert_eq!(
        kinds("_ _x let var is func", &interner),
        vec![
            TokenKind::Underscore,
            TokenKind::Ident(under),
            TokenKind::Let,
            TokenKind::Var,
            TokenKind::Is,
            TokenKind::Func,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_magic_literals() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("__LINE__ __FILE__ __COLUMN__", &interner),
        vec![
            TokenKind::MagicLine,
            TokenKind::MagicFile,
            TokenKind::MagicColumn,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_code_completion_marker() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("(x = #^DEFAULT^#)", &interner)[3],
        TokenKind::CodeComplete
    );
    assert_eq!(kinds("#^", &interner)[0], TokenKind::CodeComplete);
}

#[test]
fn test_literals() {
    let interner = StringInterner::new();
    let hi = interner.intern("hi\n");
    assert_eq!(
        kinds(r#"1_000 2.5 "hi\n""#, &interner),
        vec![
            TokenKind::Int(1000),
            TokenKind::Float(2.5f64.to_bits()),
            TokenKind::String(hi),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("( // comment\n )", &interner),
        vec![TokenKind::LParen, TokenKind::RParen, TokenKind::Eof]
    );
}

#[test]
fn test_invalid_character_reports_error() {
    let interner = StringInterner::new();
    let output = Lexer::new("x @ y", &interner).lex_all();
    assert_eq!(output.tokens[1].kind, TokenKind::Error);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, ErrorCode::E0002);
    assert_eq!(output.tokens[3].kind, TokenKind::Eof);
}

#[test]
fn test_unterminated_string() {
    let interner = StringInterner::new();
    let output = Lexer::new("\"abc", &interner).lex_all();
    assert_eq!(output.tokens[0].kind, TokenKind::Error);
    assert_eq!(output.diagnostics[0].code, ErrorCode::E0001);
}

#[test]
fn test_eof_span_is_at_end() {
    let interner = StringInterner::new();
    let output = Lexer::new("abc", &interner).lex_all();
    assert_eq!(output.tokens[1].span, Span::new(3, 3));
}
