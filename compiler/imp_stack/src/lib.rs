//! Stack growth for deeply nested programs.
//!
//! Loops never recurse in the interpreter, but expressions and statement
//! sequences are still walked recursively. A hand-built program can nest a
//! `Seq` or an `Add` chain tens of thousands of levels deep, which would blow
//! a default thread stack. Every recursive step goes through
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow` allocates a new segment when
//!   the remaining space drops below the red zone.
//! - **WASM targets**: plain call.

/// Remaining stack below which a new segment is allocated (128KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment (2MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn exec_stmt(&self, stmt: &Stmt, state: &mut State) -> EvalResult<()> {
///     ensure_sufficient_stack(|| match stmt {
///         Stmt::Seq(first, second) => { ... }
///         ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
