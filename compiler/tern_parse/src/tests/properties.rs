//! Property-based checks over generated parameter lists.
//!
//! Case counts are kept small; each case lexes and parses a short input.

use proptest::prelude::*;
use tern_ir::{DeclContextKind, PatternKind, StringInterner};

use super::parse_source;
use crate::grammar::DefaultArgumentInfo;
use crate::{parse_decls, parse_function_signature, parse_matching_pattern, parse_pattern};
use crate::ParseStatus;

/// Strategy for a parameter type.
fn arb_type() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Int"),
        Just("String?"),
        Just("[Bool]"),
        Just("(Int, Int)"),
        Just("() -> Int"),
        Just("Dictionary<String, Int>"),
    ]
}

/// Strategy for a default value, or none.
fn arb_default() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("1")),
        Just(Some("__LINE__")),
        Just(Some("{ 0 }")),
        Just(Some("f(1, 2)")),
    ]
}

/// One rendered parameter: its type, if annotated, and default value.
fn arb_param() -> impl Strategy<Value = (Option<&'static str>, Option<&'static str>)> {
    (prop::option::of(arb_type()), arb_default())
}

fn render_params(params: &[(Option<&str>, Option<&str>)], vararg: bool) -> String {
    let mut parts: Vec<String> = params
        .iter()
        .enumerate()
        .map(|(i, (ty, default))| {
            let mut param = format!("p{i}");
            if let Some(ty) = ty {
                param.push_str(&format!(": {ty}"));
            }
            if let Some(value) = default {
                param.push_str(&format!(" = {value}"));
            }
            param
        })
        .collect();
    if vararg {
        parts.push("rest: Int...".to_string());
    }
    format!("({})", parts.join(", "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// No entry point panics or hangs on arbitrary input.
    #[test]
    fn parser_no_panic(input in ".{0,60}") {
        let interner = StringInterner::new();
        let tokens = tern_lexer::lex(&input, &interner);
        let _ = parse_pattern(&tokens, &interner);
        let _ = parse_matching_pattern(&tokens, &interner);
        let _ = parse_function_signature(&tokens, &interner);
        let _ = parse_decls(&tokens, &interner, Default::default());
    }

    /// A well-formed clause keeps one element per parameter, in order,
    /// and records the ellipsis only when one was written. A lone element
    /// without a default or ellipsis collapses to a paren.
    #[test]
    fn tuple_shape_is_preserved(
        params in prop::collection::vec(arb_param(), 0..6),
        vararg in any::<bool>(),
    ) {
        let source = render_params(&params, vararg);
        let interner = StringInterner::new();
        let tokens = tern_lexer::lex(&source, &interner);
        let output = parse_function_signature(&tokens, &interner);

        prop_assert_eq!(output.status, ParseStatus::Success, "{}", source);
        let sig = output.value.unwrap();
        let clause = &sig.body_patterns[0];
        if let [(ty, None)] = params.as_slice() {
            if !vararg {
                let PatternKind::Paren(inner) = &clause.kind else {
                    return Err(TestCaseError::fail(format!("expected a paren for {source}")));
                };
                prop_assert_eq!(inner.is_typed(), ty.is_some(), "{}", source);
                let names: Vec<_> = inner.bindings().iter().map(|d| d.name).collect();
                prop_assert_eq!(names, vec![interner.intern("p0")]);
                return Ok(());
            }
        }
        let tuple = clause.as_tuple().unwrap();
        prop_assert_eq!(tuple.len(), params.len() + usize::from(vararg));
        prop_assert_eq!(tuple.has_vararg(), vararg);
        for (elt, (_, default)) in tuple.elements.iter().zip(&params) {
            prop_assert_eq!(elt.init.is_some(), default.is_some());
        }
    }

    /// Default-argument contexts carry the position of their parameter,
    /// counting parameters without defaults too.
    #[test]
    fn default_indices_are_positional(
        params in prop::collection::vec(arb_param(), 1..6),
    ) {
        let source = render_params(&params, false);
        let mut defaults = DefaultArgumentInfo::new();
        let parsed = parse_source(&source, |p| p.parse_function_signature(&mut defaults));

        prop_assert_eq!(parsed.status(), ParseStatus::Success);
        prop_assert_eq!(defaults.next_index() as usize, params.len());

        let expected: Vec<u32> = params
            .iter()
            .enumerate()
            .filter(|(_, (_, default))| *default == Some("{ 0 }"))
            .map(|(i, _)| u32::try_from(i).unwrap())
            .collect();
        let actual: Vec<u32> = defaults
            .retained_contexts()
            .iter()
            .map(|&context| match parsed.output.contexts.kind(context) {
                Some(DeclContextKind::DefaultArgument { index }) => index,
                other => panic!("unexpected context kind {other:?}"),
            })
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// Selector clauses produce aligned argument and body tuples.
    #[test]
    fn selector_views_correspond(
        first in arb_type(),
        clauses in prop::collection::vec(arb_type(), 1..5),
    ) {
        let mut source = format!("(p0: {first})");
        for (i, ty) in clauses.iter().enumerate() {
            source.push_str(&format!(" l{n}(p{n}: {ty})", n = i + 1));
        }
        let parsed = parse_source(&source, |p| {
            let mut defaults = DefaultArgumentInfo::new();
            p.parse_function_signature(&mut defaults)
        });

        prop_assert_eq!(parsed.status(), ParseStatus::Success, "{}", source);
        let sig = parsed.value();
        let args = sig.arg_patterns[0].as_tuple().unwrap();
        let bodies = sig.body_patterns[0].as_tuple().unwrap();
        prop_assert_eq!(args.len(), clauses.len() + 1);
        prop_assert_eq!(bodies.len(), clauses.len() + 1);

        for (i, (arg, body)) in args.elements.iter().zip(&bodies.elements).enumerate() {
            let arg_names: Vec<_> = arg.pattern.bindings().iter().map(|d| d.name).collect();
            let body_names: Vec<_> = body.pattern.bindings().iter().map(|d| d.name).collect();
            prop_assert_eq!(body_names, vec![parsed.name(&format!("p{i}"))]);
            if i == 0 {
                prop_assert!(arg_names.is_empty());
            } else {
                prop_assert_eq!(arg_names, vec![parsed.name(&format!("l{i}"))]);
            }
            // Both sides keep the clause's annotation.
            prop_assert_eq!(
                parsed.print(&arg.pattern).split_once(": ").map(|(_, ty)| ty.to_string()),
                parsed.print(&body.pattern).split_once(": ").map(|(_, ty)| ty.to_string())
            );
        }
    }
}
