use super::*;
use tern_ir::{Name, StringInterner, TokenList};

/// Owns the token list and interner so `Cursor` can borrow them.
struct TestCtx {
    tokens: TokenList,
    interner: StringInterner,
}

impl TestCtx {
    fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let tokens = tern_lexer::lex(source, &interner);
        Self { tokens, interner }
    }

    fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens, &self.interner)
    }
}

#[test]
fn test_token_set_membership() {
    let set = TokenSet::new().with(TokenKind::Comma).with(TokenKind::RParen);
    assert!(set.contains(&TokenKind::Comma));
    assert!(set.contains(&TokenKind::RParen));
    assert!(!set.contains(&TokenKind::LParen));
    assert!(!TokenSet::new().contains(&TokenKind::Comma));
}

#[test]
fn test_token_set_ignores_payload() {
    let set = TokenSet::single(TokenKind::Ident(Name::EMPTY));
    assert!(set.contains(&TokenKind::Ident(Name::EMPTY)));
    let other = StringInterner::new().intern("other");
    assert!(set.contains(&TokenKind::Ident(other)));
    assert!(!set.contains(&TokenKind::Int(0)));
}

#[test]
fn test_close_delimiters() {
    for kind in [TokenKind::RParen, TokenKind::RBracket, TokenKind::RBrace] {
        assert!(CLOSE_DELIMITERS.contains(&kind));
    }
    assert!(!CLOSE_DELIMITERS.contains(&TokenKind::Comma));
}

#[test]
fn test_synchronize_finds_token() {
    let ctx = TestCtx::new("a b , c");
    let mut cursor = ctx.cursor();
    assert!(synchronize(&mut cursor, TokenSet::single(TokenKind::Comma)));
    assert!(cursor.check(&TokenKind::Comma));
}

#[test]
fn test_synchronize_skips_groups() {
    let ctx = TestCtx::new("(a, b) , c");
    let mut cursor = ctx.cursor();
    assert!(synchronize(&mut cursor, TokenSet::single(TokenKind::Comma)));
    assert_eq!(cursor.position(), 5);
}

#[test]
fn test_synchronize_reaches_eof() {
    let ctx = TestCtx::new("a b c");
    let mut cursor = ctx.cursor();
    assert!(!synchronize(&mut cursor, TokenSet::single(TokenKind::Comma)));
    assert!(cursor.is_at_end());
}

#[test]
fn test_skip_single_balanced() {
    let ctx = TestCtx::new("{ a ( b ) [ c ] } d");
    let mut cursor = ctx.cursor();
    skip_single(&mut cursor);
    assert!(cursor.check_ident());
    assert_eq!(cursor.position(), 9);
}

#[test]
fn test_skip_single_stops_at_mismatched_closer() {
    let ctx = TestCtx::new("( a } b");
    let mut cursor = ctx.cursor();
    skip_single(&mut cursor);
    assert!(cursor.check(&TokenKind::RBrace));
}

#[test]
fn test_skip_until_decl_rbrace() {
    let ctx = TestCtx::new("(a) (b) { body } func f");
    let mut cursor = ctx.cursor();
    let skipped = skip_until_decl_rbrace(&mut cursor, TokenSet::single(TokenKind::LBrace));
    assert_eq!(skipped, 6);
    assert!(cursor.check(&TokenKind::LBrace));

    let ctx = TestCtx::new("x y func f");
    let mut cursor = ctx.cursor();
    skip_until_decl_rbrace(&mut cursor, TokenSet::new());
    assert!(cursor.check(&TokenKind::Func));
}

#[test]
fn test_skip_malformed_default_value() {
    let ctx = TestCtx::new("+ (2, 3) ] , y");
    let mut cursor = ctx.cursor();
    skip_malformed_default_value(&mut cursor);
    assert!(cursor.check(&TokenKind::Comma));

    let ctx = TestCtx::new("1 + ) y");
    let mut cursor = ctx.cursor();
    skip_malformed_default_value(&mut cursor);
    assert!(cursor.check(&TokenKind::RParen));

    let ctx = TestCtx::new("1 + 2 return");
    let mut cursor = ctx.cursor();
    skip_malformed_default_value(&mut cursor);
    assert!(cursor.check(&TokenKind::Return));
}
