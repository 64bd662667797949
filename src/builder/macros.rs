//! Macros for ergonomic state machine construction.

/// Generate State trait implementation for simple enums.
///
/// # Example
///
/// ```
/// use cogwork::state_enum;
///
/// state_enum! {
///     pub enum JobState {
///         Queued,
///         Running,
///         Done,
///     }
///     final: [Done]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Declare a transition table as a literal list of rows.
///
/// Each entry is `(present_state, guard, next_state)` or
/// `(present_state, guard, action, next_state)`, in scan order. This mirrors
/// the tabular reading of a state diagram: one line per arrow.
///
/// # Example
///
/// ```
/// use cogwork::{state_enum, transition_table};
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// let table = transition_table![
///     (Light::Red, || true, || println!("go"), Light::Green),
///     (Light::Green, || false, Light::Red),
/// ];
///
/// assert_eq!(table.len(), 2);
/// ```
#[macro_export]
macro_rules! transition_table {
    (@row ($from:expr, $guard:expr, $to:expr)) => {
        $crate::kernel::TableRow {
            present_state: $from,
            guard: Some($crate::core::Guard::new($guard)),
            action: None,
            next_state: $to,
        }
    };
    (@row ($from:expr, $guard:expr, $action:expr, $to:expr)) => {
        $crate::kernel::TableRow {
            present_state: $from,
            guard: Some($crate::core::Guard::new($guard)),
            action: Some($crate::core::Action::new($action)),
            next_state: $to,
        }
    };
    ($( ( $($row:tt)+ ) ),* $(,)?) => {
        $crate::kernel::TransitionTable::new(vec![
            $( $crate::transition_table!(@row ($($row)+)) ),*
        ])
    };
}
