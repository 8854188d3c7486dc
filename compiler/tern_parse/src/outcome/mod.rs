//! Parse outcomes.
//!
//! Every grammar routine reports a [`ParseStatus`] next to its result.
//! Statuses are ordered by dominance and combine by taking the maximum, so
//! a hard error outranks a recovered diagnostic and a completion request
//! outranks everything.

use std::ops::{BitOr, BitOrAssign};

/// How a parse went.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParseStatus {
    /// Parsed cleanly.
    #[default]
    Success,
    /// A diagnostic was emitted but a well-formed result was still built.
    Recovered,
    /// A required piece failed to parse; the result, if any, is partial.
    Error,
    /// The user asked for completion. Callers stop structural parsing.
    CodeCompletion,
}

impl ParseStatus {
    /// Combine two statuses; the more severe one wins.
    #[inline]
    #[must_use]
    pub fn combine(self, other: ParseStatus) -> ParseStatus {
        self.max(other)
    }

    /// A hard failure or a completion request.
    #[inline]
    pub fn is_error(self) -> bool {
        self >= ParseStatus::Error
    }

    #[inline]
    pub fn has_code_completion(self) -> bool {
        self == ParseStatus::CodeCompletion
    }

    /// Record that a diagnostic was emitted and recovered from.
    #[inline]
    pub fn set_recovered(&mut self) {
        *self = self.combine(ParseStatus::Recovered);
    }

    /// Record a hard failure.
    #[inline]
    pub fn set_error(&mut self) {
        *self = self.combine(ParseStatus::Error);
    }
}

impl BitOr for ParseStatus {
    type Output = ParseStatus;

    fn bitor(self, rhs: ParseStatus) -> ParseStatus {
        self.combine(rhs)
    }
}

impl BitOrAssign for ParseStatus {
    fn bitor_assign(&mut self, rhs: ParseStatus) {
        *self = self.combine(rhs);
    }
}

/// A parse result: an optional value and the status it was produced with.
///
/// A value may be present with an error status (a partial tree built
/// during recovery) and absent with a non-error status (a default value
/// that was diagnosed and discarded).
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "parse outcomes carry a status that must be propagated"]
pub struct ParseOutcome<T> {
    value: Option<T>,
    status: ParseStatus,
}

impl<T> ParseOutcome<T> {
    #[inline]
    pub fn new(status: ParseStatus, value: Option<T>) -> Self {
        ParseOutcome { value, status }
    }

    /// Clean success.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::new(ParseStatus::Success, Some(value))
    }

    /// Success after a diagnosed recovery.
    #[inline]
    pub fn recovered(value: T) -> Self {
        Self::new(ParseStatus::Recovered, Some(value))
    }

    /// A value produced with the given status.
    #[inline]
    pub fn with_status(status: ParseStatus, value: T) -> Self {
        Self::new(status, Some(value))
    }

    /// Hard failure with no value.
    #[inline]
    pub fn error() -> Self {
        Self::new(ParseStatus::Error, None)
    }

    /// Completion request with no value.
    #[inline]
    pub fn code_completion() -> Self {
        Self::new(ParseStatus::CodeCompletion, None)
    }

    #[inline]
    pub fn status(&self) -> ParseStatus {
        self.status
    }

    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.status.is_error()
    }

    #[inline]
    pub fn has_code_completion(&self) -> bool {
        self.status.has_code_completion()
    }

    #[inline]
    pub fn into_parts(self) -> (Option<T>, ParseStatus) {
        (self.value, self.status)
    }

    /// Transform the value, keeping the status.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<U> {
        ParseOutcome {
            value: self.value.map(f),
            status: self.status,
        }
    }
}
