//! Crate-level parser tests.
//!
//! `compositional` exercises whole signatures and declarations through the
//! public entry points; `properties` holds the property-based checks. The
//! helpers here are shared with the per-module test files.

mod compositional;
mod properties;

use tern_diagnostic::ErrorCode;
use tern_ir::{Pattern, PatternPrinter, StringInterner, TypeRepr};

use crate::{ParseOutcome, ParseOutput, ParseStatus, Parser};

/// A finished parse together with the interner its names live in.
pub(crate) struct Parsed<T> {
    pub(crate) interner: StringInterner,
    pub(crate) output: ParseOutput<T>,
}

impl<T> Parsed<T> {
    pub(crate) fn value(&self) -> &T {
        self.output
            .value
            .as_ref()
            .unwrap_or_else(|| panic!("parse produced no value: {:?}", self.output.diagnostics))
    }

    pub(crate) fn status(&self) -> ParseStatus {
        self.output.status
    }

    pub(crate) fn codes(&self) -> Vec<ErrorCode> {
        self.output.error_codes()
    }

    pub(crate) fn printer(&self) -> PatternPrinter<'_> {
        PatternPrinter::new(&self.interner, &self.output.arena)
    }

    pub(crate) fn print(&self, pattern: &Pattern) -> String {
        self.printer().pattern(pattern)
    }

    pub(crate) fn print_type(&self, ty: &TypeRepr) -> String {
        self.printer().ty(ty)
    }

    pub(crate) fn name(&self, text: &str) -> tern_ir::Name {
        self.interner.intern(text)
    }
}

/// Lex `source` and run `entry` on a fresh parser.
pub(crate) fn parse_source<T>(
    source: &str,
    entry: impl FnOnce(&mut Parser<'_>) -> ParseOutcome<T>,
) -> Parsed<T> {
    let interner = StringInterner::new();
    let tokens = tern_lexer::lex(source, &interner);
    let output = Parser::new(&tokens, &interner).run(entry);
    Parsed { interner, output }
}
