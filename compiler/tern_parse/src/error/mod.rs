//! Diagnostic constructors for parse errors.
//!
//! Every parser diagnostic is built here so that message wording and codes
//! stay consistent across the grammar modules. All constructors are cold:
//! they only run on the error path.

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_ir::{Span, TokenKind};

use crate::cursor::describe;

#[cold]
pub(crate) fn unexpected_separator(span: Span, separator: &TokenKind) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!("unexpected `{}` separator", separator.display_name()))
        .with_label(span, "unexpected separator")
        .with_removal(format!("remove this `{}`", separator.display_name()), span)
}

#[cold]
pub(crate) fn expected_separator(
    at: Span,
    separator: &TokenKind,
    found: &TokenKind,
    insert_at: u32,
) -> Diagnostic {
    let sep = separator.display_name();
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!("expected `{sep}` separator, found {}", describe(found)))
        .with_label(at, format!("expected `{sep}`"))
        .with_insertion(format!("insert `{sep}`"), insert_at, sep)
}

#[cold]
pub(crate) fn trailing_separator(span: Span, separator: &TokenKind) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!(
            "unexpected trailing `{}` in parameter list",
            separator.display_name()
        ))
        .with_label(span, "trailing separator not allowed here")
        .with_removal("remove the trailing separator", span)
}

#[cold]
pub(crate) fn unclosed_delimiter(
    message: &str,
    at: Span,
    open: Span,
    close: &TokenKind,
) -> Diagnostic {
    let opener = match close {
        TokenKind::Gt => "<",
        TokenKind::RBracket => "[",
        TokenKind::RBrace => "{",
        _ => "(",
    };
    Diagnostic::error(ErrorCode::E1003)
        .with_message(message.to_string())
        .with_label(at, format!("expected `{}`", close.display_name()))
        .with_secondary_label(open, format!("to match this opening `{opener}`"))
}

#[cold]
pub(crate) fn expected_expression(span: Span, found: &TokenKind) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message(format!("expected expression, found {}", describe(found)))
        .with_label(span, "expected expression")
}

#[cold]
pub(crate) fn expected_identifier(span: Span, found: &TokenKind, after: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1004)
        .with_message(format!("expected identifier after {after}, found {}", describe(found)))
        .with_label(span, "expected identifier")
}

#[cold]
pub(crate) fn expected_type(span: Span, found: &TokenKind) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1005)
        .with_message(format!("expected type, found {}", describe(found)))
        .with_label(span, "expected type")
}

#[cold]
pub(crate) fn func_decl_without_paren(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1006)
        .with_message("expected `(` in argument list of function declaration")
        .with_label(span, "expected `(`")
}

#[cold]
pub(crate) fn colon_for_result_type(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1007)
        .with_message("expected `->` before the result type, found `:`")
        .with_label(span, "use `->` here")
        .with_fix("replace `:` with `->`", span, "->")
}

#[cold]
pub(crate) fn expected_pattern(span: Span, found: &TokenKind) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1008)
        .with_message(format!("expected pattern, found {}", describe(found)))
        .with_label(span, "expected pattern")
}

#[cold]
pub(crate) fn keyword_as_pattern(span: Span, keyword: &TokenKind) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1009)
        .with_message(format!(
            "keyword `{}` cannot be used as a pattern name",
            keyword.display_name()
        ))
        .with_label(span, "reserved keyword")
        .with_note("the name is treated as `_`")
}

#[cold]
pub(crate) fn nested_var_or_let(span: Span, is_let: bool) -> Diagnostic {
    let keyword = if is_let { "let" } else { "var" };
    Diagnostic::error(ErrorCode::E1010)
        .with_message(format!(
            "`{keyword}` cannot appear nested inside another `var` or `let` pattern"
        ))
        .with_label(span, "nested qualifier")
}

#[cold]
pub(crate) fn vararg_with_default(ellipsis: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1011)
        .with_message("variadic parameter cannot have a default value")
        .with_label(ellipsis, "`...` on a parameter with a default value")
}

#[cold]
pub(crate) fn untyped_vararg(ellipsis: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1012)
        .with_message("`...` must follow a type annotation")
        .with_label(ellipsis, "variadic parameter has no type")
}

#[cold]
pub(crate) fn ellipsis_not_last(ellipsis: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1013)
        .with_message("`...` must be on the last parameter")
        .with_label(ellipsis, "not the last parameter")
}

#[cold]
pub(crate) fn default_outside_parameters(eq: Span, removal: Option<Span>) -> Diagnostic {
    let diag = Diagnostic::error(ErrorCode::E1014)
        .with_message("default argument is only permitted for a non-curried function parameter")
        .with_label(eq, "default value not allowed here");
    match removal {
        Some(span) => diag.with_removal("remove the default value", span),
        None => diag,
    }
}

#[cold]
pub(crate) fn selector_without_paren(span: Span, found: &TokenKind) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1015)
        .with_message(format!(
            "expected `(` after selector label, found {}",
            describe(found)
        ))
        .with_label(span, "expected `(`")
}

#[cold]
pub(crate) fn selector_not_one_argument(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1016)
        .with_message("selector-style parameter clause must contain exactly one parameter")
        .with_label(span, "expected a single parameter")
}

#[cold]
pub(crate) fn curry_after_selector(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1017)
        .with_message("curried parameter clauses cannot follow selector-style clauses")
        .with_label(span, "unexpected `(`")
}

#[cold]
pub(crate) fn label_redefinition(name: &str, span: Span, first: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1018)
        .with_message(format!("invalid redeclaration of selector label `{name}`"))
        .with_label(span, "redeclared here")
        .with_secondary_label(first, format!("`{name}` first declared here"))
}

#[cold]
pub(crate) fn init_without_paren(span: Span, insert_at: Option<u32>) -> Diagnostic {
    let diag = Diagnostic::error(ErrorCode::E1019)
        .with_message("expected `(` for initializer parameters")
        .with_label(span, "expected `(`");
    match insert_at {
        Some(at) => diag.with_insertion("add an empty parameter clause", at, "() "),
        None => diag,
    }
}

#[cold]
pub(crate) fn expected_declaration(span: Span, found: &TokenKind) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1020)
        .with_message(format!("expected declaration, found {}", describe(found)))
        .with_label(span, "expected `func`, `init`, `var` or `let`")
}
