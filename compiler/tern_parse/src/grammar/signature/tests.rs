use pretty_assertions::assert_eq;
use tern_diagnostic::ErrorCode;

use super::*;
use crate::tests::{parse_source, Parsed};

fn signature(source: &str) -> Parsed<FunctionSignature> {
    parse_source(source, |p| {
        let mut defaults = DefaultArgumentInfo::new();
        p.parse_function_signature(&mut defaults)
    })
}

/// Parse initializer clauses, then skip whatever follows them.
fn constructor(source: &str) -> Parsed<ConstructorArguments> {
    parse_source(source, |p| {
        let mut defaults = DefaultArgumentInfo::new();
        let outcome = p.parse_constructor_arguments(&mut defaults);
        while !p.cursor.is_at_end() {
            p.cursor.advance();
        }
        outcome
    })
}

fn printed_clauses(parsed: &Parsed<FunctionSignature>) -> Vec<String> {
    parsed
        .value()
        .arg_patterns
        .iter()
        .map(|pattern| parsed.print(pattern))
        .collect()
}

#[test]
fn test_single_clause_with_result() {
    let parsed = signature("(a: Int, b: String) -> Bool");
    assert_eq!(parsed.status(), ParseStatus::Success);
    let sig = parsed.value();
    assert!(!sig.has_selector_style);
    assert_eq!(sig.arg_patterns, sig.body_patterns);
    assert_eq!(printed_clauses(&parsed), vec!["(a: Int, b: String)"]);
    assert_eq!(parsed.print_type(sig.result_type.as_ref().unwrap()), "Bool");
}

#[test]
fn test_curried_clauses() {
    let parsed = signature("(a: Int)(b: Int)() -> Int");
    assert_eq!(parsed.status(), ParseStatus::Success);
    let sig = parsed.value();
    assert_eq!(sig.arg_patterns, sig.body_patterns);
    assert_eq!(printed_clauses(&parsed), vec!["(a: Int)", "(b: Int)", "()"]);
}

#[test]
fn test_parameters_are_immutable() {
    let parsed = signature("(a: Int, (b, c): (Int, Int))");
    let bindings = parsed.value().body_patterns[0].bindings();
    assert_eq!(bindings.len(), 3);
    assert!(bindings.iter().all(|decl| decl.is_let));
}

#[test]
fn test_explicit_qualifier_in_parameters() {
    let parsed = signature("(var a: Int)");
    assert_eq!(parsed.status(), ParseStatus::Recovered);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1010]);
}

#[test]
fn test_colon_before_result_type() {
    let parsed = signature("(a: Int): Int");
    assert_eq!(parsed.status(), ParseStatus::Recovered);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1007]);
    let fix = &parsed.output.diagnostics[0].suggestions[0].substitutions[0];
    assert_eq!(fix.snippet, "->");
    assert_eq!(fix.span, Span::new(8, 9));
    let sig = parsed.value();
    assert_eq!(parsed.print_type(sig.result_type.as_ref().unwrap()), "Int");
}

#[test]
fn test_missing_parameter_clause() {
    let parsed = signature("-> Int");
    assert_eq!(parsed.status(), ParseStatus::Recovered);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1006]);
    let sig = parsed.value();
    assert_eq!(sig.arg_patterns.len(), 1);
    assert!(sig.arg_patterns[0].implicit);
    assert!(sig.arg_patterns[0].as_tuple().unwrap().is_empty());
    assert!(sig.result_type.is_some());
}

#[test]
fn test_missing_result_type() {
    let parsed = signature("(a: Int) ->");
    assert_eq!(parsed.status(), ParseStatus::Error);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1005]);
    assert!(parsed.value().result_type.as_ref().unwrap().is_error());
}

#[test]
fn test_defaults_only_in_first_clause() {
    let parsed = signature("(a: Int = 1)(b: Int = 2)");
    assert_eq!(parsed.status(), ParseStatus::Recovered);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1014]);
    assert_eq!(printed_clauses(&parsed), vec!["(a: Int = 1)", "(b: Int)"]);
}

#[test]
fn test_malformed_default_keeps_result_type() {
    let parsed = signature("(a: Int = , b: Int) -> Bool");
    assert_eq!(parsed.status(), ParseStatus::Error);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1002]);
    let sig = parsed.value();
    assert_eq!(printed_clauses(&parsed), vec!["(a: Int, b: Int)"]);
    assert_eq!(parsed.print_type(sig.result_type.as_ref().unwrap()), "Bool");
}

#[test]
fn test_completion_in_result_type() {
    let parsed = signature("(a: Int) -> #^");
    assert_eq!(parsed.status(), ParseStatus::CodeCompletion);
    assert!(parsed.value().result_type.is_none());
}

#[test]
fn test_completion_in_parameters_skips_result() {
    let parsed = signature("(a: #^) -> Int");
    assert_eq!(parsed.status(), ParseStatus::CodeCompletion);
    assert!(parsed.value().result_type.is_none());
}

#[test]
fn test_constructor_plain_clause() {
    let parsed = constructor("(name: String)");
    assert_eq!(parsed.status(), ParseStatus::Success);
    let args = parsed.value();
    assert!(!args.has_selector_style);
    assert_eq!(args.arg_pattern, args.body_pattern);
    assert_eq!(parsed.print(&args.body_pattern), "(name: String)");
}

#[test]
fn test_constructor_selector_after_clause() {
    let parsed = constructor("(name: String) withAge(age: Int)");
    assert_eq!(parsed.status(), ParseStatus::Success);
    let args = parsed.value();
    assert!(args.has_selector_style);
    assert_eq!(parsed.print(&args.arg_pattern), "(_: String, withAge: Int)");
    assert_eq!(parsed.print(&args.body_pattern), "(name: String, age: Int)");
}

#[test]
fn test_constructor_leading_selector() {
    let parsed = constructor("withName(name: String) age(years: Int = 0)");
    assert_eq!(parsed.status(), ParseStatus::Success);
    let args = parsed.value();
    assert!(args.has_selector_style);
    assert_eq!(
        parsed.print(&args.arg_pattern),
        "(withName: String, age: Int = 0)"
    );
    assert_eq!(
        parsed.print(&args.body_pattern),
        "(name: String, years: Int = 0)"
    );
    assert_eq!(args.body_pattern.as_tuple().unwrap().lparen, Span::new(0, 8));
}

#[test]
fn test_constructor_without_paren_before_body() {
    let parsed = constructor("{ }");
    assert_eq!(parsed.status(), ParseStatus::Error);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1019]);
    let fix = &parsed.output.diagnostics[0].suggestions[0].substitutions[0];
    assert!(fix.is_insertion());
    assert_eq!(fix.span.start, 0);
    assert_eq!(fix.snippet, "() ");
    assert!(parsed.value().arg_pattern.as_tuple().unwrap().is_empty());
}

#[test]
fn test_constructor_without_paren_elsewhere() {
    let parsed = constructor("-> Int");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1019]);
    assert!(parsed.output.diagnostics[0].suggestions.is_empty());
}
