//! Diagnostic system for the Tern front end.
//!
//! Every diagnostic carries:
//! - an error code for searchability
//! - a message saying what went wrong
//! - a primary span saying where
//! - optional secondary labels and notes
//! - optional structured fix-its

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{Applicability, Diagnostic, Label, Severity, Substitution, Suggestion};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
