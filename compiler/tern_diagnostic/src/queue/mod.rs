//! Diagnostic queue for collecting diagnostics during a parse.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of diagnostics reported twice at the same position

use rustc_hash::FxHashSet;
use tracing::debug;

use tern_ir::Span;

use crate::{Diagnostic, ErrorCode};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic whose code and primary span match an earlier one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig::unlimited()
    }
}

impl DiagnosticConfig {
    /// Keep everything.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }

    /// Stop after `limit` errors and drop exact repeats.
    pub fn limited(limit: usize) -> Self {
        DiagnosticConfig {
            error_limit: limit,
            deduplicate: true,
        }
    }
}

/// Collects diagnostics in emission order.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    config: DiagnosticConfig,
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<(ErrorCode, Option<Span>)>,
    error_count: usize,
    dropped: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            diagnostics: Vec::new(),
            seen: FxHashSet::default(),
            error_count: 0,
            dropped: 0,
        }
    }

    /// Add a diagnostic. Returns `false` if it was filtered out.
    pub fn push(&mut self, diagnostic: Diagnostic) -> bool {
        if diagnostic.is_error() && self.limit_reached() {
            self.dropped += 1;
            return false;
        }
        if self.config.deduplicate
            && !self
                .seen
                .insert((diagnostic.code, diagnostic.primary_span()))
        {
            debug!(code = %diagnostic.code, "dropping duplicate diagnostic");
            self.dropped += 1;
            return false;
        }
        if diagnostic.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
        true
    }

    /// True once the configured error limit has been hit.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Diagnostics filtered out by the limit or deduplication.
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Codes of all kept diagnostics, in emission order.
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
