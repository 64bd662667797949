//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait. The kernel only ever
//! compares states for equality; the remaining methods exist for display and
//! for driver loops that want a termination condition.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are opaque, equality-comparable identifiers describing the current
/// position of a machine. The kernel never inspects them beyond `==`.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for history tracking
/// - `PartialEq`: states must be comparable for row matching
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable so histories
///   can be exported
///
/// # Example
///
/// ```rust
/// use cogwork::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum ValveState {
///     Closed,
///     Opening,
///     Open,
/// }
///
/// impl State for ValveState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Opening => "Opening",
///             Self::Open => "Open",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Open)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// The kernel itself never terminates; `is_final` is a convention for
    /// driver loops that want to stop stepping.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
