//! Whole-input scenarios through the public entry points.

use pretty_assertions::assert_eq;
use tern_diagnostic::{DiagnosticConfig, ErrorCode};
use tern_ir::{DefaultArgKind, PatternPrinter, StringInterner, TokenKind};

use crate::{
    is_only_start_of_matching_pattern, parse_constructor_arguments, parse_decls,
    parse_function_signature, parse_matching_pattern, parse_pattern, Decl, ParseStatus,
};

#[test]
fn test_public_signature_entry() {
    let interner = StringInterner::new();
    let tokens = tern_lexer::lex(
        "(x: Int) with(y: Int...) -> (Int, String)",
        &interner,
    );
    let output = parse_function_signature(&tokens, &interner);
    // A selector clause cannot be variadic.
    assert_eq!(output.status, ParseStatus::Error);
    assert_eq!(output.error_codes(), vec![ErrorCode::E1016]);
    let sig = output.value.as_ref().unwrap();
    let printer = PatternPrinter::new(&interner, &output.arena);
    assert_eq!(printer.pattern(&sig.body_patterns[0]), "(x: Int)");
    assert_eq!(printer.ty(sig.result_type.as_ref().unwrap()), "(Int, String)");
}

#[test]
fn test_magic_default_in_curried_signature() {
    let interner = StringInterner::new();
    let tokens = tern_lexer::lex("(line: Int = __LINE__, col: Int = __COLUMN__)(z: Int)", &interner);
    let output = parse_function_signature(&tokens, &interner);
    assert_eq!(output.status, ParseStatus::Success);
    let sig = output.value.unwrap();
    assert_eq!(sig.arg_patterns.len(), 2);
    let first = sig.arg_patterns[0].as_tuple().unwrap();
    assert!(first
        .elements
        .iter()
        .all(|elt| matches!(elt.default_kind, DefaultArgKind::Magic(_))));
}

#[test]
fn test_trailing_input_is_diagnosed() {
    let interner = StringInterner::new();
    let tokens = tern_lexer::lex("x y", &interner);
    let output = parse_pattern(&tokens, &interner);
    assert_eq!(output.status, ParseStatus::Recovered);
    assert_eq!(output.error_codes(), vec![ErrorCode::E1001]);
    assert!(output.value.is_some());
    assert!(output.has_errors());
}

#[test]
fn test_constructor_entry() {
    let interner = StringInterner::new();
    let tokens = tern_lexer::lex("(a: Int) b(c: Int)", &interner);
    let output = parse_constructor_arguments(&tokens, &interner);
    assert_eq!(output.status, ParseStatus::Success);
    let args = output.value.unwrap();
    assert!(args.has_selector_style);
    let printer = PatternPrinter::new(&interner, &output.arena);
    assert_eq!(printer.pattern(&args.arg_pattern), "(_: Int, b: Int)");
}

#[test]
fn test_matching_entry() {
    let interner = StringInterner::new();
    let tokens = tern_lexer::lex("let (x, is)", &interner);
    let output = parse_matching_pattern(&tokens, &interner);
    assert_eq!(output.status, ParseStatus::Error);
    assert_eq!(output.error_codes(), vec![ErrorCode::E1002]);
}

#[test]
fn test_matching_pattern_starters() {
    assert!(is_only_start_of_matching_pattern(&TokenKind::Is));
    assert!(is_only_start_of_matching_pattern(&TokenKind::Let));
    assert!(is_only_start_of_matching_pattern(&TokenKind::Var));
    assert!(!is_only_start_of_matching_pattern(&TokenKind::LParen));
    assert!(!is_only_start_of_matching_pattern(&TokenKind::Underscore));
}

#[test]
fn test_error_limit_stops_declarations() {
    let interner = StringInterner::new();
    let tokens = tern_lexer::lex("func 1 {} func 2 {} func 3 {} func ok() {}", &interner);
    let output = parse_decls(&tokens, &interner, DiagnosticConfig::limited(2));
    assert_eq!(output.error_codes(), vec![ErrorCode::E1004, ErrorCode::E1004]);
    assert_eq!(output.status, ParseStatus::Error);
    assert!(output.value.unwrap().is_empty());
}

#[test]
fn test_declarations_in_sequence() {
    let interner = StringInterner::new();
    let source = "\
        let origin = (0, 0)
        func move(by: Int) to(x: Int, y: Int) -> Point { }
        init(x: Int, y: Int) { }
        var count = 0;
    ";
    let tokens = tern_lexer::lex(source, &interner);
    let output = parse_decls(&tokens, &interner, DiagnosticConfig::unlimited());
    // `to(x, y)` has two fields; the rest is well formed.
    assert_eq!(output.error_codes(), vec![ErrorCode::E1016]);
    let decls = output.value.unwrap();
    assert_eq!(decls.len(), 4);
    assert!(matches!(decls[0], Decl::Binding(_)));
    assert!(matches!(decls[1], Decl::Func(_)));
    assert!(matches!(decls[2], Decl::Init(_)));
    assert!(matches!(decls[3], Decl::Binding(_)));
}
