//! Guard predicates for controlling state transitions.
//!
//! Guards are zero-argument boolean callables that determine whether a table
//! row may fire. They take no input from the kernel: each guard reads
//! whatever external signal it needs itself, through whatever state it
//! captured at construction time.

/// Predicate that determines if a transition row can fire.
///
/// A guard is evaluated fresh on every step that reaches its row. The kernel
/// is agnostic to where the guard's answer comes from — a captured atomic, a
/// polled queue, a constant. Guards are expected to be cheap and are usually
/// pure, though nothing stops a caller from storing an impure one.
///
/// # Example
///
/// ```rust
/// use cogwork::core::Guard;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let armed = Arc::new(AtomicBool::new(false));
///
/// let flag = Arc::clone(&armed);
/// let guard = Guard::new(move || flag.load(Ordering::Relaxed));
///
/// assert!(!guard.check());
/// armed.store(true, Ordering::Relaxed);
/// assert!(guard.check());
/// ```
pub struct Guard {
    predicate: Box<dyn Fn() -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a predicate closure.
    ///
    /// The closure must be thread-safe (`Send + Sync`) so tables can be
    /// shared read-only across machines.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cogwork::core::Guard;
    ///
    /// let always = Guard::new(|| true);
    /// assert!(always.check());
    /// ```
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard.
    ///
    /// Called by the kernel once per step for each row it considers; also
    /// callable directly when composing tables by hand.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Guard")
    }
}
