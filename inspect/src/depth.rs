//! Recursion bound for the dispatcher.
//!
//! The counter is thread-local: independent inspection passes on different
//! threads are bounded independently.

use std::cell::Cell;

/// Deepest nesting level the dispatcher will render.
pub const MAX_DEPTH: u32 = 32;

/// Text shown in place of a value nested deeper than [`MAX_DEPTH`].
pub const DEPTH_PLACEHOLDER: &str = "<maximum depth reached>";

thread_local! {
    static DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// Current nesting level on this thread.
pub fn current_depth() -> u32 {
    DEPTH.with(Cell::get)
}

/// RAII token for one level of nesting.
///
/// The level is released when the guard drops, so early returns and panics
/// unwinding through a strategy keep the counter balanced.
#[must_use = "the nesting level is released as soon as the guard drops"]
pub struct DepthGuard {
    _private: (),
}

impl DepthGuard {
    /// Enters one level, or returns `None` when already at [`MAX_DEPTH`].
    pub fn enter() -> Option<Self> {
        DEPTH.with(|depth| {
            let current = depth.get();
            if current >= MAX_DEPTH {
                None
            } else {
                depth.set(current + 1);
                Some(Self { _private: () })
            }
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_balances_counter() {
        assert_eq!(current_depth(), 0);
        {
            let _a = DepthGuard::enter().unwrap();
            let _b = DepthGuard::enter().unwrap();
            assert_eq!(current_depth(), 2);
        }
        assert_eq!(current_depth(), 0);
    }

    #[test]
    fn refuses_past_the_bound() {
        let guards: Vec<_> = (0..MAX_DEPTH)
            .map(|_| DepthGuard::enter().unwrap())
            .collect();
        assert_eq!(current_depth(), MAX_DEPTH);
        assert!(DepthGuard::enter().is_none());
        assert_eq!(current_depth(), MAX_DEPTH);
        drop(guards);
        assert_eq!(current_depth(), 0);
    }

    #[test]
    fn threads_have_independent_counters() {
        let _outer = DepthGuard::enter().unwrap();
        let inner = std::thread::spawn(current_depth).join().unwrap();
        assert_eq!(inner, 0);
        assert_eq!(current_depth(), 1);
    }
}
