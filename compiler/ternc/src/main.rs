//! Tern parser driver.
//!
//! Lexes a file, runs one parser entry point over it and prints the
//! resulting trees followed by the diagnostics.

mod error;
mod render;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Once;

use tern_diagnostic::{Diagnostic, DiagnosticConfig};
use tern_ir::{PatternPrinter, StringInterner, TokenKind};
use tern_parse::ParseOutput;
use tracing::debug;

use error::DriverError;
use render::LineIndex;

static TRACING_INIT: Once = Once::new();

/// Install a subscriber when `RUST_LOG` is set.
///
/// ```bash
/// RUST_LOG=tern_parse=debug ternc signature sig.tern
/// RUST_LOG=tern_parse=trace ternc pattern pat.tern   # every consumed token
/// ```
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Decls,
    Pattern,
    Match,
    Signature,
    Init,
}

impl Command {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "decls" => Some(Command::Decls),
            "pattern" => Some(Command::Pattern),
            "match" => Some(Command::Match),
            "signature" => Some(Command::Signature),
            "init" => Some(Command::Init),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Options {
    command: Command,
    path: String,
    /// Stop reporting after this many errors (0 = unlimited).
    error_limit: usize,
}

fn parse_args(args: &[String]) -> Result<Options, DriverError> {
    let Some(name) = args.first() else {
        return Err(DriverError::Usage("missing command".to_string()));
    };
    let command =
        Command::from_name(name).ok_or_else(|| DriverError::UnknownCommand(name.clone()))?;

    let mut path = None;
    let mut error_limit = 0;
    for arg in &args[1..] {
        if let Some(value) = arg.strip_prefix("--error-limit=") {
            error_limit = value
                .parse()
                .map_err(|_| DriverError::InvalidErrorLimit(value.to_string()))?;
        } else if arg.starts_with("--") {
            return Err(DriverError::Usage(format!("unknown option `{arg}`")));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(DriverError::Usage(format!("unexpected argument `{arg}`")));
        }
    }

    let path = path.ok_or_else(|| DriverError::Usage(format!("`{name}` needs a file")))?;
    Ok(Options {
        command,
        path,
        error_limit,
    })
}

fn print_usage() {
    eprintln!("Tern parser driver");
    eprintln!();
    eprintln!("Usage: ternc <command> <file> [--error-limit=N]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  decls       Parse func/init/var/let declarations");
    eprintln!("  pattern     Parse one binding pattern");
    eprintln!("  match       Parse one matching pattern");
    eprintln!("  signature   Parse a function signature");
    eprintln!("  init        Parse initializer parameter clauses");
    eprintln!();
    eprintln!("Set RUST_LOG=tern_parse=debug to trace parser decisions.");
}

/// Rendered value and diagnostics of one command.
struct Report {
    lines: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    fn from_output<T>(
        output: ParseOutput<T>,
        render_value: impl FnOnce(&PatternPrinter<'_>, &T) -> Vec<String>,
        interner: &StringInterner,
    ) -> Self {
        let printer = PatternPrinter::new(interner, &output.arena);
        let mut lines = vec![format!("status: {:?}", output.status)];
        match &output.value {
            Some(value) => lines.extend(render_value(&printer, value)),
            None => lines.push("<no value>".to_string()),
        }
        Report {
            lines,
            diagnostics: output.diagnostics,
        }
    }
}

fn read_source(path: &str) -> Result<String, DriverError> {
    let source = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: Path::new(path).to_path_buf(),
        source,
    })?;
    if u32::try_from(source.len()).is_err() {
        return Err(DriverError::SourceTooLarge {
            path: Path::new(path).to_path_buf(),
            len: source.len(),
        });
    }
    Ok(source)
}

/// Run one command. Returns whether any error diagnostic was reported.
fn run(options: &Options) -> Result<bool, DriverError> {
    let source = read_source(&options.path)?;
    let interner = StringInterner::new();
    let lexed = tern_lexer::lex_with_diagnostics(&source, &interner);
    let tokens = &lexed.tokens;

    if let Some(first) = tokens.as_slice().first() {
        debug!(
            matching_only = tern_parse::is_only_start_of_matching_pattern(&first.kind),
            eof = first.kind == TokenKind::Eof,
            "input start"
        );
    }

    let report = match options.command {
        Command::Decls => {
            let config = if options.error_limit == 0 {
                DiagnosticConfig::unlimited()
            } else {
                DiagnosticConfig::limited(options.error_limit)
            };
            Report::from_output(
                tern_parse::parse_decls(tokens, &interner, config),
                |printer, decls| render::decls(printer, &interner, decls),
                &interner,
            )
        }
        Command::Pattern => Report::from_output(
            tern_parse::parse_pattern(tokens, &interner),
            |printer, pattern| vec![printer.pattern(pattern)],
            &interner,
        ),
        Command::Match => Report::from_output(
            tern_parse::parse_matching_pattern(tokens, &interner),
            |printer, pattern| vec![printer.pattern(pattern)],
            &interner,
        ),
        Command::Signature => Report::from_output(
            tern_parse::parse_function_signature(tokens, &interner),
            render::signature,
            &interner,
        ),
        Command::Init => Report::from_output(
            tern_parse::parse_constructor_arguments(tokens, &interner),
            render::constructor,
            &interner,
        ),
    };

    for line in &report.lines {
        println!("{line}");
    }

    let index = LineIndex::new(&source);
    let mut has_errors = false;
    for diagnostic in lexed.diagnostics.iter().chain(&report.diagnostics) {
        has_errors |= diagnostic.is_error();
        eprintln!("{}", render::diagnostic(&options.path, &index, diagnostic));
    }
    Ok(has_errors)
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return ExitCode::from(2);
    }

    let result = parse_args(&args).and_then(|options| run(&options));
    match result {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::FAILURE,
        Err(err) if err.is_usage() => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
