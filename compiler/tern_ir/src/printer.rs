//! Source-like rendering of patterns, types and expressions.
//!
//! Used by the driver to show parse results and by tests to compare tree
//! shapes as short strings.

use crate::ast::{
    ExprArena, ExprId, ExprKind, Pattern, PatternKind, TuplePattern, TypeRepr, TypeReprKind,
    UnaryOp,
};
use crate::StringInterner;

/// Renders syntax trees back to compact source text.
pub struct PatternPrinter<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
}

impl<'a> PatternPrinter<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        PatternPrinter { interner, arena }
    }

    pub fn pattern(&self, pattern: &Pattern) -> String {
        let mut out = String::new();
        self.write_pattern(&mut out, pattern);
        out
    }

    pub fn ty(&self, ty: &TypeRepr) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty);
        out
    }

    pub fn expr(&self, id: ExprId) -> String {
        let mut out = String::new();
        self.write_expr(&mut out, id);
        out
    }

    fn write_pattern(&self, out: &mut String, pattern: &Pattern) {
        match &pattern.kind {
            PatternKind::Any => out.push('_'),
            PatternKind::Named(decl) => out.push_str(self.interner.lookup(decl.name)),
            PatternKind::Tuple(tuple) => self.write_tuple(out, tuple),
            PatternKind::Paren(sub) => {
                out.push('(');
                self.write_pattern(out, sub);
                out.push(')');
            }
            PatternKind::Typed { sub, ty } => {
                self.write_pattern(out, sub);
                out.push_str(": ");
                self.write_type(out, ty);
            }
            PatternKind::Var { is_let, sub } => {
                out.push_str(if *is_let { "let " } else { "var " });
                self.write_pattern(out, sub);
            }
            PatternKind::Expr(id) => self.write_expr(out, *id),
            PatternKind::Isa(ty) => {
                out.push_str("is ");
                self.write_type(out, ty);
            }
        }
    }

    fn write_tuple(&self, out: &mut String, tuple: &TuplePattern) {
        out.push('(');
        let last = tuple.elements.len().saturating_sub(1);
        for (i, elt) in tuple.elements.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_pattern(out, &elt.pattern);
            if i == last && tuple.has_vararg() {
                out.push_str("...");
            }
            if let Some(init) = elt.init {
                out.push_str(" = ");
                self.write_expr(out, init);
            }
        }
        out.push(')');
    }

    fn write_type_list(&self, out: &mut String, types: &[TypeRepr]) {
        for (i, ty) in types.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_type(out, ty);
        }
    }

    fn write_generic_args(&self, out: &mut String, args: &[TypeRepr]) {
        if !args.is_empty() {
            out.push('<');
            self.write_type_list(out, args);
            out.push('>');
        }
    }

    fn write_type(&self, out: &mut String, ty: &TypeRepr) {
        match &ty.kind {
            TypeReprKind::Ident { name, args } => {
                out.push_str(self.interner.lookup(*name));
                self.write_generic_args(out, args);
            }
            TypeReprKind::Member { base, name, args } => {
                self.write_type(out, base);
                out.push('.');
                out.push_str(self.interner.lookup(*name));
                self.write_generic_args(out, args);
            }
            TypeReprKind::Tuple(elems) => {
                out.push('(');
                self.write_type_list(out, elems);
                out.push(')');
            }
            TypeReprKind::Function { input, output } => {
                self.write_type(out, input);
                out.push_str(" -> ");
                self.write_type(out, output);
            }
            TypeReprKind::Array(elem) => {
                out.push('[');
                self.write_type(out, elem);
                out.push(']');
            }
            TypeReprKind::Optional(inner) => {
                self.write_type(out, inner);
                out.push('?');
            }
            TypeReprKind::Error => out.push_str("<error>"),
        }
    }

    fn write_expr_list(&self, out: &mut String, ids: &[ExprId]) {
        for (i, id) in ids.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_expr(out, *id);
        }
    }

    fn write_expr(&self, out: &mut String, id: ExprId) {
        match &self.arena.get(id).kind {
            ExprKind::Int(value) => out.push_str(&value.to_string()),
            ExprKind::Float(bits) => out.push_str(&f64::from_bits(*bits).to_string()),
            ExprKind::String(name) => {
                out.push('"');
                out.push_str(self.interner.lookup(*name));
                out.push('"');
            }
            ExprKind::Bool(value) => out.push_str(if *value { "true" } else { "false" }),
            ExprKind::Ident(name) => out.push_str(self.interner.lookup(*name)),
            ExprKind::Discard => out.push('_'),
            ExprKind::MagicLiteral(kind) => out.push_str(kind.spelling()),
            ExprKind::Paren(inner) => {
                out.push('(');
                self.write_expr(out, *inner);
                out.push(')');
            }
            ExprKind::Tuple(elems) => {
                out.push('(');
                self.write_expr_list(out, elems);
                out.push(')');
            }
            ExprKind::Array(elems) => {
                out.push('[');
                self.write_expr_list(out, elems);
                out.push(']');
            }
            ExprKind::Call { callee, args } => {
                self.write_expr(out, *callee);
                out.push('(');
                self.write_expr_list(out, args);
                out.push(')');
            }
            ExprKind::Member { base, name } => {
                self.write_expr(out, *base);
                out.push('.');
                out.push_str(self.interner.lookup(*name));
            }
            ExprKind::Unary { op, operand } => {
                out.push(match op {
                    UnaryOp::Neg => '-',
                    UnaryOp::Not => '!',
                });
                self.write_expr(out, *operand);
            }
            ExprKind::Binary { op, left, right } => {
                self.write_expr(out, *left);
                out.push(' ');
                out.push_str(op.symbol());
                out.push(' ');
                self.write_expr(out, *right);
            }
            ExprKind::Closure { params, body, .. } => {
                out.push('{');
                if let Some(params) = params {
                    out.push(' ');
                    self.write_pattern(out, params);
                    out.push_str(" in");
                }
                if let Some(body) = body {
                    out.push(' ');
                    self.write_expr(out, *body);
                }
                out.push_str(" }");
            }
            ExprKind::Error => out.push_str("<error>"),
        }
    }
}
