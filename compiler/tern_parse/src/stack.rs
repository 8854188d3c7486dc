//! Stack growth for deep recursion.
//!
//! Nested tuple patterns, parenthesized expressions and closures recurse
//! once per nesting level. Wrapping the recursive entry points in
//! [`ensure_sufficient_stack`] lets adversarial nesting grow the stack
//! instead of overflowing it.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
