use pretty_assertions::assert_eq;
use tern_diagnostic::ErrorCode;
use tern_ir::{Name, TokenKind};

use super::*;
use crate::outcome::ParseOutcome;
use crate::tests::{parse_source, Parsed};

/// Parse `( ident, ident, ... )` with the given trailing-separator policy.
fn ident_list(source: &str, trailing: TrailingSeparator) -> Parsed<Vec<Name>> {
    parse_source(source, |p| {
        let open = p.cursor.advance().span;
        let mut names = Vec::new();
        let config = SeriesConfig::comma(TokenKind::RParen)
            .trailing(trailing)
            .unclosed("expected `)` at end of list");
        let end = p.series(&config, open, |p| {
            let span = p.cursor.current_span();
            match *p.cursor.current_kind() {
                TokenKind::Ident(name) => {
                    p.cursor.advance();
                    names.push(name);
                    ParseStatus::Success
                }
                TokenKind::CodeComplete => {
                    p.cursor.advance();
                    ParseStatus::CodeCompletion
                }
                found => {
                    p.emit(error::expected_identifier(span, &found, "`(`"));
                    ParseStatus::Error
                }
            }
        });
        ParseOutcome::with_status(end.status, names)
    })
}

fn names(parsed: &Parsed<Vec<Name>>) -> Vec<&'static str> {
    parsed
        .value()
        .iter()
        .map(|&name| parsed.interner.lookup(name))
        .collect()
}

#[test]
fn test_empty_list() {
    let parsed = ident_list("()", TrailingSeparator::Forbidden);
    assert_eq!(parsed.status(), ParseStatus::Success);
    assert!(parsed.value().is_empty());
    assert!(parsed.codes().is_empty());
}

#[test]
fn test_well_formed_list() {
    let parsed = ident_list("(a, b, c)", TrailingSeparator::Forbidden);
    assert_eq!(parsed.status(), ParseStatus::Success);
    assert_eq!(names(&parsed), vec!["a", "b", "c"]);
}

#[test]
fn test_stray_separator_is_removed() {
    let parsed = ident_list("(a,, b)", TrailingSeparator::Allowed);
    assert_eq!(parsed.status(), ParseStatus::Recovered);
    assert_eq!(names(&parsed), vec!["a", "b"]);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1001]);
    let diag = &parsed.output.diagnostics[0];
    assert!(diag.suggestions[0].substitutions[0].is_removal());
}

#[test]
fn test_trailing_separator_policy() {
    let allowed = ident_list("(a, b,)", TrailingSeparator::Allowed);
    assert_eq!(allowed.status(), ParseStatus::Success);
    assert!(allowed.codes().is_empty());

    let forbidden = ident_list("(a, b,)", TrailingSeparator::Forbidden);
    assert_eq!(forbidden.status(), ParseStatus::Recovered);
    assert_eq!(forbidden.codes(), vec![ErrorCode::E1001]);
    assert_eq!(names(&forbidden), vec!["a", "b"]);
}

#[test]
fn test_missing_separator_inserts_comma() {
    let parsed = ident_list("(a b)", TrailingSeparator::Forbidden);
    assert_eq!(parsed.status(), ParseStatus::Error);
    assert_eq!(names(&parsed), vec!["a", "b"]);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1001]);
    let fix = &parsed.output.diagnostics[0].suggestions[0].substitutions[0];
    assert!(fix.is_insertion());
    assert_eq!(fix.span.start, 2);
    assert_eq!(fix.snippet, ",");
}

#[test]
fn test_unclosed_list() {
    let parsed = ident_list("(a, b", TrailingSeparator::Forbidden);
    assert_eq!(parsed.status(), ParseStatus::Error);
    assert_eq!(names(&parsed), vec!["a", "b"]);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1003]);
    let diag = &parsed.output.diagnostics[0];
    assert_eq!(diag.message, "expected `)` at end of list");
    assert_eq!(diag.labels[1].span, Span::new(0, 1));
}

#[test]
fn test_bad_element_resynchronizes_at_separator() {
    let parsed = ident_list("(a, +, b)", TrailingSeparator::Forbidden);
    assert_eq!(parsed.status(), ParseStatus::Error);
    assert_eq!(names(&parsed), vec!["a", "b"]);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1004]);
}

#[test]
fn test_list_stops_at_declaration_start() {
    let parsed = parse_source("(a, b func", |p| {
        let open = p.cursor.advance().span;
        let config = SeriesConfig::comma(TokenKind::RParen);
        let end = p.series(&config, open, |p| {
            p.cursor.advance();
            ParseStatus::Success
        });
        // Leave `func` for the caller.
        p.cursor.advance();
        ParseOutcome::with_status(end.status, end.close)
    });
    assert_eq!(parsed.codes(), vec![ErrorCode::E1003]);
    assert_eq!(*parsed.value(), Span::new(4, 5));
}

#[test]
fn test_completion_stops_the_list() {
    let parsed = ident_list("(a, #^", TrailingSeparator::Forbidden);
    assert_eq!(parsed.status(), ParseStatus::CodeCompletion);
    assert_eq!(names(&parsed), vec!["a"]);
    assert!(parsed.codes().is_empty());
}
