//! Parse context flags for context-sensitive parsing.
//!
//! Pattern parsing needs to know whether it is already inside a `var` or
//! `let` qualifier: qualifiers must not nest, and bindings inherit the
//! mutability of the innermost qualifier.

/// Context flags for parsing.
///
/// Multiple flags can be combined using [`ParseContext::with`]. The parser
/// only changes its context through `Parser::with_context`, which restores
/// the previous flags when the closure returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParseContext(u16);

impl ParseContext {
    /// No special context.
    pub const NONE: Self = Self(0);

    /// Inside a `var` pattern. Bindings are mutable.
    pub const IN_VAR_PATTERN: Self = Self(1 << 0);

    /// Inside a `let` pattern, or a parameter clause. Bindings are
    /// immutable.
    pub const IN_LET_PATTERN: Self = Self(1 << 1);

    /// Create a new context with no flags set.
    #[inline]
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Check if a flag is set.
    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Add a flag to the context.
    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// Remove a flag from the context.
    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    /// Replace any qualifier flag with the one for `is_let`.
    #[inline]
    #[must_use]
    pub const fn with_qualifier(self, is_let: bool) -> Self {
        let cleared = self
            .without(Self::IN_VAR_PATTERN)
            .without(Self::IN_LET_PATTERN);
        if is_let {
            cleared.with(Self::IN_LET_PATTERN)
        } else {
            cleared.with(Self::IN_VAR_PATTERN)
        }
    }

    /// Check if we're inside any `var`/`let` qualifier.
    #[inline]
    pub const fn in_var_or_let_pattern(self) -> bool {
        self.has(Self::IN_VAR_PATTERN) || self.has(Self::IN_LET_PATTERN)
    }

    /// Check if we're inside a `let` qualifier.
    #[inline]
    pub const fn in_let_pattern(self) -> bool {
        self.has(Self::IN_LET_PATTERN)
    }
}
