//! The [`Diagnostic`] type and its parts.
//!
//! A diagnostic is built with chained `with_*` calls at the point the
//! parser detects the problem:
//!
//! ```text
//! Diagnostic::error(ErrorCode::E1007)
//!     .with_message("expected `->` before the result type, found `:`")
//!     .with_label(colon, "use `->` here")
//!     .with_fix("replace `:` with `->`", colon, "->")
//! ```

use std::fmt;

use tern_ir::Span;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// How safely a tool may apply a suggestion without asking.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Applicability {
    /// Applying the edit yields the code the user meant.
    MachineApplicable,
    /// A plausible edit that a person should confirm.
    #[default]
    MaybeIncorrect,
}

/// One text edit. An empty snippet deletes `span`; an empty `span`
/// inserts the snippet.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Substitution {
    pub span: Span,
    pub snippet: String,
}

impl Substitution {
    pub fn new(span: Span, snippet: impl Into<String>) -> Self {
        Substitution {
            span,
            snippet: snippet.into(),
        }
    }

    pub fn is_removal(&self) -> bool {
        !self.span.is_empty() && self.snippet.is_empty()
    }

    pub fn is_insertion(&self) -> bool {
        self.span.is_empty()
    }
}

/// A fix-it: a message and the edits that implement it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Suggestion {
    pub message: String,
    pub substitutions: Vec<Substitution>,
    pub applicability: Applicability,
}

impl Suggestion {
    pub fn new(
        message: impl Into<String>,
        edit: Substitution,
        applicability: Applicability,
    ) -> Self {
        Suggestion {
            message: message.into(),
            substitutions: vec![edit],
            applicability,
        }
    }
}

/// A highlighted source range. Each diagnostic has at most one primary
/// label; secondary labels point at related code such as an opening
/// delimiter or an earlier declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub is_primary: bool,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Warning)
    }

    fn with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add the primary label.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), true)
    }

    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), false)
    }

    fn push_label(mut self, span: Span, message: String, is_primary: bool) -> Self {
        self.labels.push(Label {
            span,
            message,
            is_primary,
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    fn with_edit(
        mut self,
        message: impl Into<String>,
        edit: Substitution,
        applicability: Applicability,
    ) -> Self {
        self.suggestions
            .push(Suggestion::new(message, edit, applicability));
        self
    }

    /// Replace `span` with `snippet`; safe to apply automatically.
    pub fn with_fix(
        self,
        message: impl Into<String>,
        span: Span,
        snippet: impl Into<String>,
    ) -> Self {
        self.with_edit(
            message,
            Substitution::new(span, snippet),
            Applicability::MachineApplicable,
        )
    }

    /// Delete `span`; safe to apply automatically.
    pub fn with_removal(self, message: impl Into<String>, span: Span) -> Self {
        self.with_fix(message, span, "")
    }

    /// Insert `text` at byte offset `at`. The insertion is a guess at what
    /// was meant, so it is not marked machine applicable.
    pub fn with_insertion(self, message: impl Into<String>, at: u32, text: impl Into<String>) -> Self {
        self.with_edit(
            message,
            Substitution::new(Span::point(at), text),
            Applicability::MaybeIncorrect,
        )
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find_map(|label| label.is_primary.then_some(label.span))
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn has_machine_applicable_fix(&self) -> bool {
        self.suggestions
            .iter()
            .any(|s| s.applicability == Applicability::MachineApplicable)
    }
}

/// Plain-text form used by the driver:
///
/// ```text
/// error [E1007]: expected `->` before the result type, found `:`
///   --> 7..8: use `->` here
///   = help: replace `:` with `->` [7..8 => "->"]
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;
        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {marker} {:?}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {}", suggestion.message)?;
            for edit in &suggestion.substitutions {
                write!(f, " [{:?} => {:?}]", edit.span, edit.snippet)?;
            }
        }
        Ok(())
    }
}
