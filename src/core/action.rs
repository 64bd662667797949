//! Actions performed when a transition fires.
//!
//! An action is a zero-argument procedure run by the kernel after a row's
//! guard passes and before the new state is written. Rows without an action
//! simply move the state.

/// Side-effecting procedure attached to a transition row.
///
/// The kernel invokes the action at most once per step, and only for the row
/// that fires. Panics inside an action are not caught; they propagate to the
/// caller before the state change is recorded.
///
/// # Example
///
/// ```rust
/// use cogwork::core::Action;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let fired = Arc::new(AtomicUsize::new(0));
///
/// let counter = Arc::clone(&fired);
/// let action = Action::new(move || {
///     counter.fetch_add(1, Ordering::Relaxed);
/// });
///
/// action.run();
/// assert_eq!(fired.load(Ordering::Relaxed), 1);
/// ```
pub struct Action {
    procedure: Box<dyn Fn() + Send + Sync>,
}

impl Action {
    /// Create an action from a closure.
    pub fn new<F>(procedure: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Action {
            procedure: Box::new(procedure),
        }
    }

    /// Run the action.
    pub fn run(&self) {
        (self.procedure)()
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Action")
    }
}
