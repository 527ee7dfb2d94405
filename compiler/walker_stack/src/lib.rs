//! Stack growth for deeply nested Walker programs.
//!
//! The scanner evaluates a block by recursing into every nested `{`, and
//! each call re-enters the scanner at its code pointer. Program nesting
//! therefore maps directly onto native recursion depth. Wrapping each
//! recursive step in [`ensure_sufficient_stack`] keeps that mapping while
//! moving the recursion onto a freshly allocated stack segment when the
//! current one runs low.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.
//!
//! # Configuration
//!
//! - **Red zone**: 128KB. Each scanner step keeps a few frames of locals
//!   alive (cursor save points, receiver paths), so the margin is a little
//!   wider than a parser would need.
//! - **Growth size**: 2MB per new segment.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if less than the red
/// zone remains on the current one.
///
/// ```text
/// fn scan_block(&mut self) -> Flow {
///     ensure_sufficient_stack(|| self.scan_block_inner())
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

/// Remaining native stack in bytes, if the platform can report it.
///
/// Used by the interpreter's debug tracing to annotate deep calls.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests;
