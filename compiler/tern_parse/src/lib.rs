//! Recursive descent parser for Tern patterns and parameter clauses.
//!
//! The grammar covers:
//! - binding patterns (`x`, `_`, `(a, b)`, `x: Int`, `var x`)
//! - function signatures, curried and selector-style, with default values
//! - constructor parameter clauses
//! - matching patterns (`is T`, `let x`, expression patterns)
//!
//! plus the expression and type grammars those need and a small
//! declaration shell. Expressions live in an [`ExprArena`]; lexical scopes
//! live in a [`DeclContextArena`]. Every entry point returns a
//! [`ParseOutput`] carrying the value, the [`ParseStatus`] and all
//! diagnostics.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod context;
mod cursor;
mod error;
mod grammar;
mod outcome;
mod recovery;
mod series;
mod stack;

#[cfg(test)]
mod tests;

pub use context::ParseContext;
pub use cursor::Cursor;
pub use grammar::{
    BindingDecl, ConstructorArguments, Decl, DefaultArgumentInfo, FuncDecl, FunctionSignature,
    InitDecl,
};
pub use outcome::{ParseOutcome, ParseStatus};
pub use recovery::{synchronize, TokenSet};
pub use series::{SeriesConfig, SeriesEnd, TrailingSeparator};

use tern_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode};
use tern_ir::{
    DeclContextArena, DeclContextId, ExprArena, Pattern, StringInterner, TokenKind, TokenList,
};
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    contexts: DeclContextArena,
    diagnostics: DiagnosticQueue,
    context: ParseContext,
    decl_context: DeclContextId,
    /// Closures parsed so far. Default-value parsing compares this before
    /// and after an initializer.
    closure_count: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser that keeps every diagnostic.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Self::with_config(tokens, interner, DiagnosticConfig::default())
    }

    /// Create a parser with a custom diagnostic configuration.
    pub fn with_config(
        tokens: &'a TokenList,
        interner: &'a StringInterner,
        config: DiagnosticConfig,
    ) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::new(),
            contexts: DeclContextArena::new(),
            diagnostics: DiagnosticQueue::with_config(config),
            context: ParseContext::NONE,
            decl_context: DeclContextId::MODULE,
            closure_count: 0,
        }
    }

    /// Report a diagnostic.
    #[inline]
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    #[inline]
    fn interner(&self) -> &'a StringInterner {
        self.cursor.interner()
    }

    /// Run `f` with the context flags replaced by `context`, restoring the
    /// previous flags afterwards.
    fn with_context<T>(&mut self, context: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.context;
        self.context = context;
        let result = f(self);
        self.context = saved;
        result
    }

    /// Run `f` with `id` as the current declaration context.
    fn with_decl_context<T>(&mut self, id: DeclContextId, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.decl_context;
        self.decl_context = id;
        let result = f(self);
        self.decl_context = saved;
        result
    }

    /// Run one entry point, diagnose leftover input and package the result.
    fn run<T>(mut self, entry: impl FnOnce(&mut Self) -> ParseOutcome<T>) -> ParseOutput<T> {
        let (value, mut status) = entry(&mut self).into_parts();
        if !status.has_code_completion() && !self.cursor.is_at_end() {
            let span = self.cursor.current_span();
            let found = self.cursor.current_kind();
            self.emit(
                Diagnostic::error(ErrorCode::E1001)
                    .with_message(format!(
                        "unexpected {} after the end of the input",
                        cursor::describe(found)
                    ))
                    .with_label(span, "unexpected token"),
            );
            status.set_recovered();
        }
        debug!(
            ?status,
            diagnostics = self.diagnostics.len(),
            dropped = self.diagnostics.dropped_count(),
            "parse finished"
        );
        ParseOutput {
            value,
            status,
            arena: self.arena,
            contexts: self.contexts,
            diagnostics: self.diagnostics.into_vec(),
        }
    }
}

/// Everything one parse produces.
#[derive(Debug)]
pub struct ParseOutput<T> {
    /// The parsed value; `None` only after a hard failure.
    pub value: Option<T>,
    pub status: ParseStatus,
    /// Expressions referenced by `ExprId`s in the value.
    pub arena: ExprArena,
    /// Declaration contexts referenced by the value.
    pub contexts: DeclContextArena,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> ParseOutput<T> {
    /// Check if any error diagnostics were reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Codes of all reported diagnostics, in order.
    pub fn error_codes(&self) -> Vec<ErrorCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }
}

/// Parse a single binding pattern such as `(a, b: Int)` or `var x`.
///
/// Bindings not under a `var` qualifier are immutable.
pub fn parse_pattern(tokens: &TokenList, interner: &StringInterner) -> ParseOutput<Pattern> {
    Parser::new(tokens, interner).run(|p| p.parse_pattern(true))
}

/// Parse a pattern in matching position: `is T`, `let x`, or an expression.
pub fn parse_matching_pattern(
    tokens: &TokenList,
    interner: &StringInterner,
) -> ParseOutput<Pattern> {
    Parser::new(tokens, interner).run(Parser::parse_matching_pattern)
}

/// Parse a function signature: parameter clauses and an optional result
/// type.
pub fn parse_function_signature(
    tokens: &TokenList,
    interner: &StringInterner,
) -> ParseOutput<FunctionSignature> {
    Parser::new(tokens, interner).run(|p| {
        let mut defaults = DefaultArgumentInfo::new();
        p.parse_function_signature(&mut defaults)
    })
}

/// Parse the parameter clause of an initializer.
pub fn parse_constructor_arguments(
    tokens: &TokenList,
    interner: &StringInterner,
) -> ParseOutput<ConstructorArguments> {
    Parser::new(tokens, interner).run(|p| {
        let mut defaults = DefaultArgumentInfo::new();
        p.parse_constructor_arguments(&mut defaults)
    })
}

/// Parse a sequence of `func`, `init`, `var` and `let` declarations.
pub fn parse_decls(
    tokens: &TokenList,
    interner: &StringInterner,
    config: DiagnosticConfig,
) -> ParseOutput<Vec<Decl>> {
    Parser::with_config(tokens, interner, config).run(Parser::parse_decls)
}

/// Whether the next token can only begin a matching pattern, never an
/// expression.
pub fn is_only_start_of_matching_pattern(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::Var | TokenKind::Let | TokenKind::Is)
}
