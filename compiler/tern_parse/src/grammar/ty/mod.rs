//! Type annotation parsing.
//!
//! ```text
//! type         ::= type-simple ('->' type)?
//! type-simple  ::= type-primary '?'*
//! type-primary ::= identifier generic-args? ('.' identifier generic-args?)*
//!                | '(' (type (',' type)*)? ')'
//!                | '[' type ']'
//! generic-args ::= '<' type (',' type)* '>'
//! ```

use tern_ir::{Name, TokenKind, TypeRepr, TypeReprKind};

use crate::error;
use crate::outcome::{ParseOutcome, ParseStatus};
use crate::series::SeriesConfig;
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

impl Parser<'_> {
    /// Parse a type annotation.
    ///
    /// A missing type is diagnosed and reported as a null error outcome;
    /// callers that need a node substitute [`TypeRepr::error`].
    pub(crate) fn parse_type(&mut self) -> ParseOutcome<TypeRepr> {
        ensure_sufficient_stack(|| self.parse_type_inner())
    }

    fn parse_type_inner(&mut self) -> ParseOutcome<TypeRepr> {
        let (input, status) = self.parse_type_simple().into_parts();
        let Some(input) = input else {
            return ParseOutcome::new(status, None);
        };
        if status.has_code_completion() || !self.cursor.check(&TokenKind::Arrow) {
            return ParseOutcome::with_status(status, input);
        }
        self.cursor.advance();

        let (output, output_status) = self.parse_type().into_parts();
        let output = output.unwrap_or_else(|| TypeRepr::error(self.cursor.previous_span()));
        let span = input.span.merge(output.span);
        ParseOutcome::with_status(
            status | output_status,
            TypeRepr::new(
                TypeReprKind::Function {
                    input: Box::new(input),
                    output: Box::new(output),
                },
                span,
            ),
        )
    }

    fn parse_type_simple(&mut self) -> ParseOutcome<TypeRepr> {
        let (ty, status) = self.parse_type_primary().into_parts();
        let Some(mut ty) = ty else {
            return ParseOutcome::new(status, None);
        };
        while let Some(question) = self.cursor.consume_if(&TokenKind::Question) {
            let span = ty.span.merge(question);
            ty = TypeRepr::new(TypeReprKind::Optional(Box::new(ty)), span);
        }
        ParseOutcome::with_status(status, ty)
    }

    fn parse_type_primary(&mut self) -> ParseOutcome<TypeRepr> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => self.parse_type_identifier(*name),
            TokenKind::LParen => self.parse_type_tuple(),
            TokenKind::LBracket => self.parse_type_array(),
            TokenKind::CodeComplete => {
                self.cursor.advance();
                ParseOutcome::code_completion()
            }
            found => {
                let diag = error::expected_type(self.cursor.current_span(), found);
                self.emit(diag);
                ParseOutcome::error()
            }
        }
    }

    fn parse_type_identifier(&mut self, name: Name) -> ParseOutcome<TypeRepr> {
        let start = self.cursor.advance().span;
        let (args, mut status) = self.parse_generic_args();
        let mut ty = TypeRepr::new(
            TypeReprKind::Ident { name, args },
            start.merge(self.cursor.previous_span()),
        );

        while !status.is_error() && self.cursor.check(&TokenKind::Dot) {
            self.cursor.advance();
            let TokenKind::Ident(member) = *self.cursor.current_kind() else {
                let diag = error::expected_identifier(
                    self.cursor.current_span(),
                    self.cursor.current_kind(),
                    "`.` in type",
                );
                self.emit(diag);
                status.set_error();
                break;
            };
            self.cursor.advance();
            let (args, args_status) = self.parse_generic_args();
            status |= args_status;
            ty = TypeRepr::new(
                TypeReprKind::Member {
                    base: Box::new(ty),
                    name: member,
                    args,
                },
                start.merge(self.cursor.previous_span()),
            );
        }
        ParseOutcome::with_status(status, ty)
    }

    fn parse_generic_args(&mut self) -> (Vec<TypeRepr>, ParseStatus) {
        let Some(open) = self.cursor.consume_if(&TokenKind::Lt) else {
            return (Vec::new(), ParseStatus::Success);
        };
        let mut args = Vec::new();
        let config =
            SeriesConfig::comma(TokenKind::Gt).unclosed("expected `>` to complete generic argument list");
        let end = self.series(&config, open, |p| p.parse_type_element(&mut args));
        (args, end.status)
    }

    fn parse_type_tuple(&mut self) -> ParseOutcome<TypeRepr> {
        let open = self.cursor.advance().span;
        let mut elements = Vec::new();
        let config =
            SeriesConfig::comma(TokenKind::RParen).unclosed("expected `)` at end of tuple type");
        let end = self.series(&config, open, |p| p.parse_type_element(&mut elements));
        ParseOutcome::with_status(
            end.status,
            TypeRepr::new(TypeReprKind::Tuple(elements), open.merge(end.close)),
        )
    }

    fn parse_type_array(&mut self) -> ParseOutcome<TypeRepr> {
        let open = self.cursor.advance().span;
        let (element, mut status) = self.parse_type().into_parts();
        let element = element.unwrap_or_else(|| TypeRepr::error(self.cursor.previous_span()));
        if status.has_code_completion() {
            return ParseOutcome::with_status(status, element);
        }
        let close = match self.cursor.expect(&TokenKind::RBracket) {
            Ok(close) => close,
            Err(diag) => {
                if !status.is_error() {
                    self.emit(diag);
                }
                status.set_error();
                self.cursor.previous_span()
            }
        };
        ParseOutcome::with_status(
            status,
            TypeRepr::new(TypeReprKind::Array(Box::new(element)), open.merge(close)),
        )
    }

    /// Element callback shared by tuple types and generic arguments.
    fn parse_type_element(&mut self, out: &mut Vec<TypeRepr>) -> ParseStatus {
        let (ty, status) = self.parse_type().into_parts();
        if let Some(ty) = ty {
            out.push(ty);
        }
        status
    }
}

#[cfg(test)]
mod tests;
