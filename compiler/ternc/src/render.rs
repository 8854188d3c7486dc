//! Text rendering for parse results and diagnostics.

use tern_diagnostic::Diagnostic;
use tern_ir::{PatternPrinter, StringInterner};
use tern_parse::{ConstructorArguments, Decl, FunctionSignature};

/// Byte offsets of line starts, for turning spans into `line:col`.
pub struct LineIndex {
    starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineIndex { starts }
    }

    /// 1-based line and column of a byte offset.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line = self.starts.partition_point(|&start| start <= offset);
        let line_start = self.starts.get(line.saturating_sub(1)).copied().unwrap_or(0);
        let line = u32::try_from(line).unwrap_or(u32::MAX);
        (line.max(1), offset - line_start + 1)
    }
}

/// `path:line:col: error [E1001]: ...`, followed by labels and fixes.
pub fn diagnostic(path: &str, index: &LineIndex, diagnostic: &Diagnostic) -> String {
    let (line, col) = diagnostic
        .primary_span()
        .map_or((1, 1), |span| index.line_col(span.start));
    format!("{path}:{line}:{col}: {diagnostic}")
}

pub fn signature(printer: &PatternPrinter<'_>, signature: &FunctionSignature) -> Vec<String> {
    let mut lines = Vec::new();
    if signature.has_selector_style {
        lines.push("selector-style".to_string());
    }
    for (i, (arg, body)) in signature
        .arg_patterns
        .iter()
        .zip(&signature.body_patterns)
        .enumerate()
    {
        let arg = printer.pattern(arg);
        let body = printer.pattern(body);
        if arg == body {
            lines.push(format!("clause {i}: {arg}"));
        } else {
            lines.push(format!("clause {i}: {arg} / body {body}"));
        }
    }
    if let Some(result) = &signature.result_type {
        lines.push(format!("result: {}", printer.ty(result)));
    }
    lines
}

pub fn constructor(printer: &PatternPrinter<'_>, arguments: &ConstructorArguments) -> Vec<String> {
    let mut lines = Vec::new();
    if arguments.has_selector_style {
        lines.push("selector-style".to_string());
    }
    lines.push(format!("arguments: {}", printer.pattern(&arguments.arg_pattern)));
    lines.push(format!("body: {}", printer.pattern(&arguments.body_pattern)));
    lines
}

pub fn decls(printer: &PatternPrinter<'_>, interner: &StringInterner, decls: &[Decl]) -> Vec<String> {
    let mut lines = Vec::new();
    for decl in decls {
        match decl {
            Decl::Func(func) => {
                lines.push(format!(
                    "func {} (context {}, {} default contexts)",
                    interner.lookup(func.name),
                    func.context.index(),
                    func.default_contexts
                ));
                lines.extend(indent(signature(printer, &func.signature)));
            }
            Decl::Init(init) => {
                lines.push(format!(
                    "init (context {}, {} default contexts)",
                    init.context.index(),
                    init.default_contexts
                ));
                lines.extend(indent(constructor(printer, &init.arguments)));
            }
            Decl::Binding(binding) => {
                let keyword = if binding.is_let { "let" } else { "var" };
                let pattern = printer.pattern(&binding.pattern);
                match binding.init {
                    Some(init) => {
                        lines.push(format!("{keyword} {pattern} = {}", printer.expr(init)));
                    }
                    None => lines.push(format!("{keyword} {pattern}")),
                }
            }
        }
    }
    lines
}

fn indent(lines: Vec<String>) -> impl Iterator<Item = String> {
    lines.into_iter().map(|line| format!("  {line}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_col_first_line() {
        let index = LineIndex::new("abc\ndef");
        assert_eq!(index.line_col(0), (1, 1));
        assert_eq!(index.line_col(2), (1, 3));
    }

    #[test]
    fn test_line_col_after_newline() {
        let index = LineIndex::new("abc\ndef\n\nx");
        assert_eq!(index.line_col(3), (1, 4));
        assert_eq!(index.line_col(4), (2, 1));
        assert_eq!(index.line_col(6), (2, 3));
        assert_eq!(index.line_col(8), (3, 1));
        assert_eq!(index.line_col(9), (4, 1));
    }

    #[test]
    fn test_signature_lines() {
        let interner = StringInterner::new();
        let tokens = tern_lexer::lex("(x) to(y: Int) -> Int", &interner);
        let output = tern_parse::parse_function_signature(&tokens, &interner);
        let printer = PatternPrinter::new(&interner, &output.arena);
        let signature = output.value.as_ref().map(|s| signature(&printer, s));
        assert_eq!(
            signature,
            Some(vec![
                "selector-style".to_string(),
                "clause 0: (_, to: Int) / body (x, y: Int)".to_string(),
                "result: Int".to_string(),
            ])
        );
    }

    #[test]
    fn test_binding_decl_lines() {
        let interner = StringInterner::new();
        let tokens = tern_lexer::lex("let (a, b) = (1, 2)\nvar c: Int", &interner);
        let output = tern_parse::parse_decls(
            &tokens,
            &interner,
            tern_diagnostic::DiagnosticConfig::default(),
        );
        let printer = PatternPrinter::new(&interner, &output.arena);
        let lines = output.value.as_deref().map(|d| decls(&printer, &interner, d));
        assert_eq!(
            lines,
            Some(vec![
                "let (a, b) = (1, 2)".to_string(),
                "var c: Int".to_string(),
            ])
        );
    }
}
