use pretty_assertions::assert_eq;
use tern_diagnostic::ErrorCode;
use tern_ir::{DeclContextKind, ExprKind, PatternPrinter, StringInterner};

use crate::outcome::ParseStatus;
use crate::Parser;

struct Parsed {
    printed: String,
    status: ParseStatus,
    codes: Vec<ErrorCode>,
    closures: usize,
}

fn parse_expr_source(source: &str) -> Parsed {
    let interner = StringInterner::new();
    let tokens = tern_lexer::lex(source, &interner);
    let mut parser = Parser::new(&tokens, &interner);
    let (expr, status) = parser.parse_expr().into_parts();
    let printed = expr
        .map(|id| PatternPrinter::new(&interner, &parser.arena).expr(id))
        .unwrap_or_default();
    Parsed {
        printed,
        status,
        codes: parser.diagnostics.codes(),
        closures: parser.closure_count,
    }
}

#[test]
fn test_literals() {
    assert_eq!(parse_expr_source("42").printed, "42");
    assert_eq!(parse_expr_source("\"hi\"").printed, "\"hi\"");
    assert_eq!(parse_expr_source("true").printed, "true");
    assert_eq!(parse_expr_source("__LINE__").printed, "__LINE__");
    assert_eq!(parse_expr_source("_").printed, "_");
}

#[test]
fn test_precedence() {
    let parsed = parse_expr_source("a + b * c == d || e && f");
    assert_eq!(parsed.status, ParseStatus::Success);
    assert_eq!(parsed.printed, "a + b * c == d || e && f");

    let interner = StringInterner::new();
    let tokens = tern_lexer::lex("1 + 2 * 3", &interner);
    let mut parser = Parser::new(&tokens, &interner);
    let id = parser.parse_expr().into_parts().0.unwrap();
    let ExprKind::Binary { right, .. } = &parser.arena.get(id).kind else {
        panic!("expected binary expression");
    };
    assert!(matches!(
        parser.arena.get(*right).kind,
        ExprKind::Binary { .. }
    ));
}

#[test]
fn test_postfix_and_unary() {
    let parsed = parse_expr_source("-f(x, 1).count");
    assert_eq!(parsed.status, ParseStatus::Success);
    assert_eq!(parsed.printed, "-f(x, 1).count");
    assert_eq!(parse_expr_source("!ok").printed, "!ok");
}

#[test]
fn test_paren_tuple_and_array() {
    assert_eq!(parse_expr_source("(a)").printed, "(a)");
    assert_eq!(parse_expr_source("(a, b)").printed, "(a, b)");
    assert_eq!(parse_expr_source("()").printed, "()");
    assert_eq!(parse_expr_source("[1, 2]").printed, "[1, 2]");
}

#[test]
fn test_closure_counts_and_contexts() {
    let interner = StringInterner::new();
    let tokens = tern_lexer::lex("{ x in { y in x + y } }", &interner);
    let mut parser = Parser::new(&tokens, &interner);
    let (expr, status) = parser.parse_expr().into_parts();
    assert_eq!(status, ParseStatus::Success);
    assert_eq!(parser.closure_count, 2);

    let id = expr.unwrap();
    let ExprKind::Closure {
        context, params, ..
    } = &parser.arena.get(id).kind
    else {
        panic!("expected closure");
    };
    assert_eq!(parser.contexts.kind(*context), Some(DeclContextKind::Closure));
    let params = params.as_ref().unwrap();
    assert_eq!(params.bindings()[0].context, *context);
    assert_eq!(
        PatternPrinter::new(&interner, &parser.arena).expr(id),
        "{ x in { y in x + y } }"
    );
}

#[test]
fn test_closure_without_params() {
    let parsed = parse_expr_source("{ 1 }");
    assert_eq!(parsed.status, ParseStatus::Success);
    assert_eq!(parsed.closures, 1);
    let parsed = parse_expr_source("{ }");
    assert_eq!(parsed.status, ParseStatus::Success);
}

#[test]
fn test_unclosed_closure() {
    let parsed = parse_expr_source("{ x in x");
    assert_eq!(parsed.status, ParseStatus::Error);
    assert_eq!(parsed.codes, vec![ErrorCode::E1001]);
}

#[test]
fn test_missing_expression() {
    let parsed = parse_expr_source(")");
    assert_eq!(parsed.status, ParseStatus::Error);
    assert_eq!(parsed.codes, vec![ErrorCode::E1002]);

    let parsed = parse_expr_source("1 +");
    assert_eq!(parsed.status, ParseStatus::Error);
    assert_eq!(parsed.printed, "1 + <error>");
}

#[test]
fn test_completion_in_expression() {
    let parsed = parse_expr_source("1 + #^EXPR^#");
    assert_eq!(parsed.status, ParseStatus::CodeCompletion);
    assert!(parsed.codes.is_empty());
}
