//! Expression parsing.
//!
//! Default values and expression patterns are full expressions:
//!
//! ```text
//! expr    ::= unary (binop unary)*
//! unary   ::= ('-' | '!')? postfix
//! postfix ::= primary ('(' args? ')' | '.' identifier)*
//! primary ::= literal | identifier | '_' | magic-literal
//!           | '(' exprs? ')' | '[' exprs? ']' | closure
//! closure ::= '{' (pattern 'in')? expr? '}'
//! ```
//!
//! Binary operators use precedence climbing. Closures open a new
//! declaration context and bump the parser's closure count.

use tern_ir::{
    BinaryOp, DeclContextKind, ExprId, ExprKind, MagicLiteralKind, Span, TokenKind, UnaryOp,
};
use tracing::trace;

use crate::context::ParseContext;
use crate::error;
use crate::outcome::{ParseOutcome, ParseStatus};
use crate::recovery::{self, TokenSet};
use crate::series::{SeriesConfig, SeriesEnd};
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

/// Map a token to the binary operator it spells.
fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::PipePipe => BinaryOp::Or,
        TokenKind::AmpAmp => BinaryOp::And,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Rem,
        _ => return None,
    };
    Some(op)
}

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> ParseOutcome<ExprId> {
        ensure_sufficient_stack(|| self.parse_binary(0))
    }

    fn parse_binary(&mut self, min_precedence: u8) -> ParseOutcome<ExprId> {
        let (left, mut status) = self.parse_unary().into_parts();
        let Some(mut left) = left else {
            return ParseOutcome::new(status, None);
        };

        while !status.has_code_completion() {
            let Some(op) = binary_op(self.cursor.current_kind()) else {
                break;
            };
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.cursor.advance();

            let (right, right_status) = self.parse_binary(precedence + 1).into_parts();
            status |= right_status;
            let right = right.unwrap_or_else(|| self.error_expr());
            let span = self.arena.get(left).span.merge(self.arena.get(right).span);
            left = self.arena.alloc(ExprKind::Binary { op, left, right }, span);
        }
        ParseOutcome::with_status(status, left)
    }

    fn parse_unary(&mut self) -> ParseOutcome<ExprId> {
        let op = match self.cursor.current_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Bang => UnaryOp::Not,
            _ => return self.parse_postfix(),
        };
        let start = self.cursor.advance().span;
        let (operand, status) = ensure_sufficient_stack(|| self.parse_unary()).into_parts();
        let Some(operand) = operand else {
            return ParseOutcome::new(status, None);
        };
        let span = start.merge(self.arena.get(operand).span);
        ParseOutcome::with_status(
            status,
            self.arena.alloc(ExprKind::Unary { op, operand }, span),
        )
    }

    fn parse_postfix(&mut self) -> ParseOutcome<ExprId> {
        let (base, mut status) = self.parse_primary().into_parts();
        let Some(mut expr) = base else {
            return ParseOutcome::new(status, None);
        };

        while !status.is_error() {
            let start = self.arena.get(expr).span;
            if let Some(open) = self.cursor.consume_if(&TokenKind::LParen) {
                let (args, end) = self.parse_expr_list(
                    open,
                    TokenKind::RParen,
                    "expected `)` in call arguments",
                );
                status |= end.status;
                expr = self.arena.alloc(
                    ExprKind::Call { callee: expr, args },
                    start.merge(end.close),
                );
            } else if self.cursor.consume_if(&TokenKind::Dot).is_some() {
                let TokenKind::Ident(name) = *self.cursor.current_kind() else {
                    let diag = error::expected_identifier(
                        self.cursor.current_span(),
                        self.cursor.current_kind(),
                        "`.`",
                    );
                    self.emit(diag);
                    status.set_error();
                    break;
                };
                let end = self.cursor.advance().span;
                expr = self
                    .arena
                    .alloc(ExprKind::Member { base: expr, name }, start.merge(end));
            } else {
                break;
            }
        }
        ParseOutcome::with_status(status, expr)
    }

    fn parse_primary(&mut self) -> ParseOutcome<ExprId> {
        let span = self.cursor.current_span();
        let kind = match self.cursor.current_kind() {
            TokenKind::Int(value) => ExprKind::Int(*value),
            TokenKind::Float(bits) => ExprKind::Float(*bits),
            TokenKind::String(name) => ExprKind::String(*name),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Ident(name) => ExprKind::Ident(*name),
            TokenKind::Underscore => ExprKind::Discard,
            TokenKind::MagicLine => ExprKind::MagicLiteral(MagicLiteralKind::Line),
            TokenKind::MagicFile => ExprKind::MagicLiteral(MagicLiteralKind::File),
            TokenKind::MagicColumn => ExprKind::MagicLiteral(MagicLiteralKind::Column),
            TokenKind::LParen => return self.parse_paren_expr(),
            TokenKind::LBracket => return self.parse_array_expr(),
            TokenKind::LBrace => return self.parse_closure(),
            TokenKind::CodeComplete => {
                self.cursor.advance();
                return ParseOutcome::code_completion();
            }
            found => {
                let diag = error::expected_expression(span, found);
                self.emit(diag);
                return ParseOutcome::error();
            }
        };
        self.cursor.advance();
        ParseOutcome::success(self.arena.alloc(kind, span))
    }

    fn parse_paren_expr(&mut self) -> ParseOutcome<ExprId> {
        let open = self.cursor.advance().span;
        let (mut elements, end) =
            self.parse_expr_list(open, TokenKind::RParen, "expected `)` in expression");
        let span = open.merge(end.close);
        let kind = if elements.len() == 1 {
            ExprKind::Paren(elements.remove(0))
        } else {
            ExprKind::Tuple(elements)
        };
        ParseOutcome::with_status(end.status, self.arena.alloc(kind, span))
    }

    fn parse_array_expr(&mut self) -> ParseOutcome<ExprId> {
        let open = self.cursor.advance().span;
        let (elements, end) =
            self.parse_expr_list(open, TokenKind::RBracket, "expected `]` in array literal");
        ParseOutcome::with_status(
            end.status,
            self.arena
                .alloc(ExprKind::Array(elements), open.merge(end.close)),
        )
    }

    fn parse_expr_list(
        &mut self,
        open: Span,
        terminator: TokenKind,
        unclosed: &'static str,
    ) -> (Vec<ExprId>, SeriesEnd) {
        let mut elements = Vec::new();
        let config = SeriesConfig::comma(terminator).unclosed(unclosed);
        let end = self.series(&config, open, |p| {
            let (expr, status) = p.parse_expr().into_parts();
            if let Some(expr) = expr {
                elements.push(expr);
            }
            status
        });
        (elements, end)
    }

    /// Parse `{ params in body }`.
    ///
    /// The closure gets its own declaration context; its parameters bind
    /// in that context and start outside any `var`/`let` qualifier.
    fn parse_closure(&mut self) -> ParseOutcome<ExprId> {
        let open = self.cursor.advance().span;
        let context = self
            .contexts
            .alloc(DeclContextKind::Closure, self.decl_context);
        self.closure_count += 1;
        trace!(?context, "closure");

        let has_params = self.closure_has_params();
        let (params, body, mut status) = self.with_decl_context(context, |p| {
            p.with_context(ParseContext::NONE, |p| {
                let mut status = ParseStatus::Success;
                let mut params = None;
                if has_params {
                    let (pattern, pattern_status) = p.parse_pattern(true).into_parts();
                    status |= pattern_status;
                    params = pattern.map(Box::new);
                    if status.has_code_completion() {
                        return (params, None, status);
                    }
                    if let Err(diag) = p.cursor.expect(&TokenKind::In) {
                        if !status.is_error() {
                            p.emit(diag);
                        }
                        status.set_error();
                        recovery::synchronize(
                            &mut p.cursor,
                            TokenSet::single(TokenKind::In).with(TokenKind::RBrace),
                        );
                        p.cursor.consume_if(&TokenKind::In);
                    }
                }
                let mut body = None;
                if !p.cursor.check(&TokenKind::RBrace) && !status.has_code_completion() {
                    let (expr, body_status) = p.parse_expr().into_parts();
                    status |= body_status;
                    body = expr;
                }
                (params, body, status)
            })
        });

        let close = if status.has_code_completion() {
            self.cursor.previous_span()
        } else {
            match self.cursor.expect(&TokenKind::RBrace) {
                Ok(close) => close,
                Err(diag) => {
                    if !status.is_error() {
                        self.emit(diag);
                    }
                    status.set_error();
                    recovery::synchronize(&mut self.cursor, TokenSet::single(TokenKind::RBrace));
                    self.cursor
                        .consume_if(&TokenKind::RBrace)
                        .unwrap_or_else(|| self.cursor.previous_span())
                }
            }
        };

        ParseOutcome::with_status(
            status,
            self.arena.alloc(
                ExprKind::Closure {
                    context,
                    params,
                    body,
                },
                open.merge(close),
            ),
        )
    }

    /// Look ahead for an `in` at the closure's own nesting level.
    fn closure_has_params(&self) -> bool {
        let mut depth = 0usize;
        let mut offset = 0;
        loop {
            match self.cursor.peek_kind_at(offset) {
                TokenKind::Eof => return false,
                TokenKind::In if depth == 0 => return true,
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
                TokenKind::RBrace => {
                    if depth == 0 {
                        return false;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            offset += 1;
        }
    }

    /// Allocate an error expression at the previous token.
    fn error_expr(&mut self) -> ExprId {
        let span = self.cursor.previous_span();
        self.arena.alloc(ExprKind::Error, span)
    }
}

#[cfg(test)]
mod tests;
