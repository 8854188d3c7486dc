//! Declaration shell.
//!
//! ```text
//! decl         ::= func-decl | init-decl | binding-decl
//! func-decl    ::= 'func' identifier func-signature body?
//! init-decl    ::= 'init' constructor-arguments body?
//! binding-decl ::= ('var' | 'let') pattern ('=' expr)? ';'?
//! body         ::= '{' balanced-tokens '}'
//! ```
//!
//! Function and initializer bodies are skipped as balanced token groups.
//! Once a signature is parsed the shell creates the function's
//! declaration context, hands the retained default-argument contexts to it
//! and moves the body bindings under it.

use tern_ir::{DeclContextId, DeclContextKind, ExprId, Name, Pattern, Span, TokenKind};
use tracing::debug;

use crate::error;
use crate::grammar::{ConstructorArguments, DefaultArgumentInfo, FunctionSignature};
use crate::outcome::{ParseOutcome, ParseStatus};
use crate::recovery;
use crate::Parser;

/// `func name(...) -> T { ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: Name,
    pub span: Span,
    /// The function's own declaration context.
    pub context: DeclContextId,
    pub signature: FunctionSignature,
    /// Default-argument contexts moved under `context`.
    pub default_contexts: usize,
    pub body: Option<Span>,
}

/// `init(...) { ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitDecl {
    pub span: Span,
    pub context: DeclContextId,
    pub arguments: ConstructorArguments,
    pub default_contexts: usize,
    pub body: Option<Span>,
}

/// `var pattern = expr` or `let pattern = expr`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingDecl {
    pub is_let: bool,
    pub span: Span,
    pub pattern: Pattern,
    pub init: Option<ExprId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decl {
    Func(FuncDecl),
    Init(InitDecl),
    Binding(BindingDecl),
}

impl Parser<'_> {
    /// Parse declarations until EOF or the diagnostic limit.
    pub(crate) fn parse_decls(&mut self) -> ParseOutcome<Vec<Decl>> {
        let mut decls = Vec::new();
        let mut status = ParseStatus::Success;

        while !self.cursor.is_at_end() && !self.diagnostics.limit_reached() {
            let (decl, decl_status) = match self.cursor.current_kind() {
                TokenKind::Func => self.parse_func_decl().into_parts(),
                TokenKind::Init => self.parse_init_decl().into_parts(),
                TokenKind::Var | TokenKind::Let => self.parse_binding_decl().into_parts(),
                TokenKind::Semicolon => {
                    self.cursor.advance();
                    continue;
                }
                TokenKind::Ident(_) if self.cursor.is_start_of_decl() => {
                    // Contextual modifier such as `mutating`.
                    self.cursor.advance();
                    continue;
                }
                found => {
                    self.emit(error::expected_declaration(self.cursor.current_span(), found));
                    self.cursor.advance();
                    self.skip_to_next_decl();
                    (None, ParseStatus::Recovered)
                }
            };
            status |= decl_status;
            decls.extend(decl);
            if decl_status.has_code_completion() {
                break;
            }
        }

        ParseOutcome::with_status(status, decls)
    }

    fn parse_func_decl(&mut self) -> ParseOutcome<Decl> {
        let start = self.cursor.advance().span;
        let TokenKind::Ident(name) = *self.cursor.current_kind() else {
            self.emit(error::expected_identifier(
                self.cursor.current_span(),
                self.cursor.current_kind(),
                "`func`",
            ));
            self.skip_to_next_decl();
            return ParseOutcome::error();
        };
        self.cursor.advance();

        let mut defaults = DefaultArgumentInfo::new();
        let (signature, mut status) = self.parse_function_signature(&mut defaults).into_parts();
        let Some(mut signature) = signature else {
            return ParseOutcome::new(status, None);
        };
        if status.has_code_completion() {
            return ParseOutcome::code_completion();
        }

        let context = self.contexts.alloc(DeclContextKind::Function, self.decl_context);
        let default_contexts = defaults.set_function_context(&mut self.contexts, context);
        for body in &mut signature.body_patterns {
            body.reparent_bindings(context);
        }
        debug!(name = self.interner().lookup(name), ?context, "function declaration");

        let (body, body_status) = self.parse_decl_body();
        status |= body_status;
        let span = start.merge(self.cursor.previous_span());
        ParseOutcome::with_status(
            status,
            Decl::Func(FuncDecl {
                name,
                span,
                context,
                signature,
                default_contexts,
                body,
            }),
        )
    }

    fn parse_init_decl(&mut self) -> ParseOutcome<Decl> {
        let start = self.cursor.advance().span;
        let mut defaults = DefaultArgumentInfo::new();
        let (arguments, mut status) = self.parse_constructor_arguments(&mut defaults).into_parts();
        let Some(mut arguments) = arguments else {
            return ParseOutcome::new(status, None);
        };
        if status.has_code_completion() {
            return ParseOutcome::code_completion();
        }

        let context = self.contexts.alloc(DeclContextKind::Function, self.decl_context);
        let default_contexts = defaults.set_function_context(&mut self.contexts, context);
        arguments.body_pattern.reparent_bindings(context);

        let (body, body_status) = self.parse_decl_body();
        status |= body_status;
        let span = start.merge(self.cursor.previous_span());
        ParseOutcome::with_status(
            status,
            Decl::Init(InitDecl {
                span,
                context,
                arguments,
                default_contexts,
                body,
            }),
        )
    }

    fn parse_binding_decl(&mut self) -> ParseOutcome<Decl> {
        let is_let = self.cursor.check(&TokenKind::Let);
        let start = self.cursor.advance().span;

        let context = self.context.with_qualifier(is_let);
        let (pattern, mut status) = self
            .with_context(context, |p| p.parse_pattern(is_let))
            .into_parts();
        if status.has_code_completion() {
            return ParseOutcome::code_completion();
        }
        let Some(pattern) = pattern else {
            self.skip_to_next_decl();
            return ParseOutcome::new(status, None);
        };

        let mut init = None;
        if self.cursor.consume_if(&TokenKind::Eq).is_some() {
            let (expr, expr_status) = self.parse_expr().into_parts();
            status |= expr_status;
            if expr_status.has_code_completion() {
                return ParseOutcome::code_completion();
            }
            init = expr;
        }
        self.cursor.consume_if(&TokenKind::Semicolon);

        let span = start.merge(self.cursor.previous_span());
        ParseOutcome::with_status(
            status,
            Decl::Binding(BindingDecl {
                is_let,
                span,
                pattern,
                init,
            }),
        )
    }

    /// Skip an optional `{ ... }` body, returning its span.
    fn parse_decl_body(&mut self) -> (Option<Span>, ParseStatus) {
        let Some(open) = self.cursor.consume_if(&TokenKind::LBrace) else {
            return (None, ParseStatus::Success);
        };
        while !self.cursor.is_at_end() && !self.cursor.check(&TokenKind::RBrace) {
            recovery::skip_single(&mut self.cursor);
        }
        match self.cursor.consume_if(&TokenKind::RBrace) {
            Some(close) => (Some(open.merge(close)), ParseStatus::Success),
            None => {
                self.emit(error::unclosed_delimiter(
                    "expected `}` at end of body",
                    self.cursor.current_span(),
                    open,
                    &TokenKind::RBrace,
                ));
                (Some(open.merge(self.cursor.previous_span())), ParseStatus::Error)
            }
        }
    }

    fn skip_to_next_decl(&mut self) {
        while !self.cursor.is_at_end() && !self.cursor.is_start_of_decl() {
            recovery::skip_single(&mut self.cursor);
        }
    }
}
