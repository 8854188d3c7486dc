use pretty_assertions::assert_eq;
use tern_diagnostic::ErrorCode;
use tern_ir::{ExprArena, PatternPrinter, StringInterner, TypeRepr};

use crate::outcome::ParseStatus;
use crate::Parser;

fn parse_type_source(source: &str) -> (Option<TypeRepr>, ParseStatus, Vec<ErrorCode>, String) {
    let interner = StringInterner::new();
    let tokens = tern_lexer::lex(source, &interner);
    let mut parser = Parser::new(&tokens, &interner);
    let (ty, status) = parser.parse_type().into_parts();
    let codes = parser.diagnostics.codes();
    let arena = ExprArena::new();
    let printed = ty
        .as_ref()
        .map(|t| PatternPrinter::new(&interner, &arena).ty(t))
        .unwrap_or_default();
    (ty, status, codes, printed)
}

#[test]
fn test_simple_and_generic_types() {
    let (_, status, codes, printed) = parse_type_source("Int");
    assert_eq!(status, ParseStatus::Success);
    assert!(codes.is_empty());
    assert_eq!(printed, "Int");

    let (_, _, _, printed) = parse_type_source("Dictionary<String, [Int]>");
    assert_eq!(printed, "Dictionary<String, [Int]>");
}

#[test]
fn test_member_and_optional_types() {
    let (_, status, _, printed) = parse_type_source("Std.Array<Int>??");
    assert_eq!(status, ParseStatus::Success);
    assert_eq!(printed, "Std.Array<Int>??");
}

#[test]
fn test_function_types_are_right_associative() {
    let (ty, _, _, printed) = parse_type_source("(Int, Bool) -> Int -> String");
    assert_eq!(printed, "(Int, Bool) -> Int -> String");
    let ty = ty.unwrap();
    let tern_ir::TypeReprKind::Function { output, .. } = &ty.kind else {
        panic!("expected function type, got {ty:?}");
    };
    assert!(matches!(output.kind, tern_ir::TypeReprKind::Function { .. }));
}

#[test]
fn test_empty_tuple_type() {
    let (ty, status, _, printed) = parse_type_source("()");
    assert_eq!(status, ParseStatus::Success);
    assert!(ty.unwrap().is_empty_tuple());
    assert_eq!(printed, "()");
}

#[test]
fn test_missing_type() {
    let (ty, status, codes, _) = parse_type_source("= 1");
    assert!(ty.is_none());
    assert_eq!(status, ParseStatus::Error);
    assert_eq!(codes, vec![ErrorCode::E1005]);
}

#[test]
fn test_missing_function_result_type() {
    let (ty, status, codes, printed) = parse_type_source("Int ->");
    assert_eq!(status, ParseStatus::Error);
    assert_eq!(codes, vec![ErrorCode::E1005]);
    assert!(ty.is_some());
    assert_eq!(printed, "Int -> <error>");
}

#[test]
fn test_unclosed_array_type() {
    let (_, status, codes, _) = parse_type_source("[Int");
    assert_eq!(status, ParseStatus::Error);
    assert_eq!(codes, vec![ErrorCode::E1001]);
}

#[test]
fn test_code_completion_in_type() {
    let (ty, status, codes, _) = parse_type_source("#^TYPE^#");
    assert!(ty.is_none());
    assert_eq!(status, ParseStatus::CodeCompletion);
    assert!(codes.is_empty());
}
