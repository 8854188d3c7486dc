use pretty_assertions::assert_eq;
use tern_diagnostic::ErrorCode;
use tern_ir::{ExprKind, Pattern, PatternKind};

use crate::outcome::ParseStatus;
use crate::tests::{parse_source, Parsed};

fn matching(source: &str) -> Parsed<Pattern> {
    parse_source(source, |p| p.parse_matching_pattern())
}

#[test]
fn test_type_test() {
    let parsed = matching("is Int?");
    assert_eq!(parsed.status(), ParseStatus::Success);
    assert!(matches!(parsed.value().kind, PatternKind::Isa(_)));
    assert_eq!(parsed.print(parsed.value()), "is Int?");
    assert_eq!(parsed.value().span, tern_ir::Span::new(0, 7));
}

#[test]
fn test_expression_pattern() {
    let parsed = matching("x + 1");
    assert_eq!(parsed.status(), ParseStatus::Success);
    let PatternKind::Expr(id) = parsed.value().kind else {
        panic!("expected expression pattern");
    };
    assert!(matches!(parsed.output.arena.get(id).kind, ExprKind::Binary { .. }));
    assert_eq!(parsed.print(parsed.value()), "x + 1");
}

#[test]
fn test_qualified_patterns() {
    let parsed = matching("let x");
    assert_eq!(parsed.print(parsed.value()), "let x");
    assert!(matches!(parsed.value().kind, PatternKind::Var { is_let: true, .. }));

    let parsed = matching("var (a, 1)");
    assert_eq!(parsed.status(), ParseStatus::Success);
    assert_eq!(parsed.print(parsed.value()), "var (a, 1)");

    let parsed = matching("let is String");
    assert_eq!(parsed.print(parsed.value()), "let is String");
}

#[test]
fn test_nested_qualifier() {
    let parsed = matching("let var x");
    assert_eq!(parsed.status(), ParseStatus::Recovered);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1010]);
    assert_eq!(parsed.print(parsed.value()), "let var x");
}

#[test]
fn test_type_test_without_type() {
    let parsed = matching("is");
    assert_eq!(parsed.status(), ParseStatus::Error);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1005]);
    assert!(parsed.output.value.is_none());
}

#[test]
fn test_missing_expression() {
    let parsed = matching("let");
    assert_eq!(parsed.status(), ParseStatus::Error);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1002]);
}

#[test]
fn test_completion() {
    assert_eq!(matching("#^").status(), ParseStatus::CodeCompletion);
    assert_eq!(matching("is #^").status(), ParseStatus::CodeCompletion);
    assert_eq!(matching("let #^").status(), ParseStatus::CodeCompletion);
}
