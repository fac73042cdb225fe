//! Stack growth guard for recursive descent.
//!
//! Parsing and evaluating nested expressions recurses once per nesting
//! level. Deeply nested programs (long `let` chains, towers of parentheses)
//! would otherwise overflow the native stack, so every recursive entry point
//! in the parser and evaluator runs through [`ensure_sufficient_stack`].
//!
//! On wasm32 the guard is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Bytes left on the current stack segment, when the platform reports it.
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
mod tests {
    use super::*;

    /// Nesting depth of a right-leaning `let` chain.
    fn nested_let_depth(levels: u32) -> u32 {
        ensure_sufficient_stack(|| {
            if levels == 0 {
                0
            } else {
                nested_let_depth(levels - 1) + 1
            }
        })
    }

    #[test]
    fn passes_through_the_closure_value() {
        assert_eq!(ensure_sufficient_stack(|| "done"), "done");
    }

    #[test]
    fn propagates_errors() {
        let result: Result<(), String> = ensure_sufficient_stack(|| Err("stop".to_owned()));
        assert_eq!(result, Err("stop".to_owned()));
    }

    #[test]
    fn survives_very_deep_nesting() {
        assert_eq!(nested_let_depth(200_000), 200_000);
    }

    #[test]
    fn remaining_stack_is_reported_on_native_targets() {
        if cfg!(not(target_arch = "wasm32")) {
            assert!(remaining_stack().is_some_and(|bytes| bytes > 0));
        }
    }
}
