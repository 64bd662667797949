//! State machine executing table-driven transitions.

use crate::builder::BuildError;
use crate::core::{State, StateHistory, StateTransition};
use crate::kernel::table::TransitionTable;
use chrono::Utc;
use thiserror::Error;

/// Outcome of a successful step.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult<S: State> {
    /// A row fired; the machine moved to this state.
    Transitioned(S),

    /// No row for the current state had a true guard. The state is
    /// unchanged. This is the normal steady-state outcome while the
    /// environment has not produced a recognized event.
    Idle,
}

/// Errors detected by the kernel during a step.
#[derive(Debug, Error)]
pub enum StepError {
    /// A row selected for evaluation carries no guard. The table is
    /// misconfigured; the machine's state has not been touched.
    #[error("transition row {row} for state '{state}' has no guard")]
    MissingGuard { state: String, row: usize },
}

/// State machine stepping over a borrowed transition table.
///
/// The machine owns only its current state (and the history of fired
/// transitions); the table is caller-owned and must outlive the machine.
/// Several machines may step over one table concurrently, each with its own
/// state, as long as every individual machine stays on a single thread of
/// control.
///
/// # Example
///
/// ```rust
/// use cogwork::builder::guarded_row;
/// use cogwork::kernel::{StateMachine, StepResult, TransitionTable};
/// use cogwork::state_enum;
///
/// state_enum! {
///     enum Motor {
///         Stopped,
///         Running,
///     }
/// }
///
/// let table = TransitionTable::new(vec![
///     guarded_row(Motor::Stopped, || true, Motor::Running),
/// ]);
///
/// let mut machine = StateMachine::new(&table, Motor::Stopped).unwrap();
/// assert_eq!(machine.step().unwrap(), StepResult::Transitioned(Motor::Running));
///
/// // Running has no rows: further steps succeed without effect.
/// assert_eq!(machine.step().unwrap(), StepResult::Idle);
/// ```
pub struct StateMachine<'t, S: State> {
    table: &'t TransitionTable<S>,
    current: S,
    history: StateHistory<S>,
}

impl<'t, S: State> StateMachine<'t, S> {
    /// Create a machine over `table` starting in `initial`.
    ///
    /// The table must be non-empty. The initial state need not appear in the
    /// table; such a machine idles forever, successfully.
    pub fn new(table: &'t TransitionTable<S>, initial: S) -> Result<Self, BuildError> {
        if table.is_empty() {
            return Err(BuildError::EmptyTable);
        }

        Ok(Self {
            table,
            current: initial,
            history: StateHistory::new(),
        })
    }

    /// Get the current state (pure).
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the machine is in a final state (pure).
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get the history of fired transitions (pure).
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Execute at most one transition.
    ///
    /// Scans the table in order. Rows for other states are skipped; a row
    /// for the current state with no guard aborts the step with
    /// [`StepError::MissingGuard`] before any mutation; a false guard passes
    /// the row over. The first row whose guard returns true fires: its action
    /// runs (panics propagate uncaught), then the machine moves to the row's
    /// next state and the scan stops. An exhausted scan is a successful
    /// [`StepResult::Idle`].
    ///
    /// The state is written only after the action returns normally, so a
    /// panicking action leaves the machine in its pre-step state.
    pub fn step(&mut self) -> Result<StepResult<S>, StepError> {
        for (row_index, row) in self.table.rows().iter().enumerate() {
            if !row.matches(&self.current) {
                continue;
            }

            let guard = row.guard.as_ref().ok_or_else(|| StepError::MissingGuard {
                state: self.current.name().to_string(),
                row: row_index,
            })?;

            if !guard.check() {
                continue;
            }

            if let Some(action) = &row.action {
                action.run();
            }

            let from = std::mem::replace(&mut self.current, row.next_state.clone());
            self.history = self.history.record(StateTransition {
                from,
                to: self.current.clone(),
                timestamp: Utc::now(),
            });

            return Ok(StepResult::Transitioned(self.current.clone()));
        }

        Ok(StepResult::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Guard};
    use crate::kernel::table::TableRow;
    use serde::{Deserialize, Serialize};
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Phase {
        Zero,
        One,
        Two,
    }

    impl State for Phase {
        fn name(&self) -> &str {
            match self {
                Self::Zero => "Zero",
                Self::One => "One",
                Self::Two => "Two",
            }
        }
    }

    fn row(from: Phase, guard: Guard, to: Phase) -> TableRow<Phase> {
        TableRow {
            present_state: from,
            guard: Some(guard),
            action: None,
            next_state: to,
        }
    }

    #[test]
    fn transition_fires_on_true_guard() {
        let table = TransitionTable::new(vec![row(Phase::Zero, Guard::new(|| true), Phase::One)]);

        let mut machine = StateMachine::new(&table, Phase::Zero).unwrap();
        let result = machine.step().unwrap();

        assert_eq!(result, StepResult::Transitioned(Phase::One));
        assert_eq!(machine.current_state(), &Phase::One);
        assert_eq!(machine.history().transitions().len(), 1);
    }

    #[test]
    fn false_guard_is_passed_over_for_later_row() {
        let skipped = Arc::new(AtomicUsize::new(0));
        let skipped_counter = Arc::clone(&skipped);

        let table = TransitionTable::new(vec![
            TableRow {
                present_state: Phase::Zero,
                guard: Some(Guard::new(|| false)),
                action: Some(Action::new(move || {
                    skipped_counter.fetch_add(1, Ordering::Relaxed);
                })),
                next_state: Phase::One,
            },
            row(Phase::Zero, Guard::new(|| true), Phase::Two),
        ]);

        let mut machine = StateMachine::new(&table, Phase::Zero).unwrap();
        let result = machine.step().unwrap();

        assert_eq!(result, StepResult::Transitioned(Phase::Two));
        assert_eq!(skipped.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn first_true_guard_wins() {
        let second = Arc::new(AtomicUsize::new(0));
        let second_counter = Arc::clone(&second);

        let table = TransitionTable::new(vec![
            row(Phase::Zero, Guard::new(|| true), Phase::One),
            TableRow {
                present_state: Phase::Zero,
                guard: Some(Guard::new(|| true)),
                action: Some(Action::new(move || {
                    second_counter.fetch_add(1, Ordering::Relaxed);
                })),
                next_state: Phase::Two,
            },
        ]);

        let mut machine = StateMachine::new(&table, Phase::Zero).unwrap();
        let result = machine.step().unwrap();

        assert_eq!(result, StepResult::Transitioned(Phase::One));
        assert_eq!(second.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn unmatched_state_idles() {
        let table = TransitionTable::new(vec![row(Phase::Zero, Guard::new(|| true), Phase::One)]);

        let mut machine = StateMachine::new(&table, Phase::Two).unwrap();

        // No row for Two, so stepping is a permanent no-op.
        for _ in 0..5 {
            assert_eq!(machine.step().unwrap(), StepResult::Idle);
            assert_eq!(machine.current_state(), &Phase::Two);
        }
        assert_eq!(machine.history().transitions().len(), 0);
    }

    #[test]
    fn no_true_guard_is_repeatable_without_effect() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_counter = Arc::clone(&fired);

        let table = TransitionTable::new(vec![TableRow {
            present_state: Phase::Zero,
            guard: Some(Guard::new(|| false)),
            action: Some(Action::new(move || {
                fired_counter.fetch_add(1, Ordering::Relaxed);
            })),
            next_state: Phase::One,
        }]);

        let mut machine = StateMachine::new(&table, Phase::Zero).unwrap();

        for _ in 0..3 {
            assert_eq!(machine.step().unwrap(), StepResult::Idle);
        }

        assert_eq!(machine.current_state(), &Phase::Zero);
        assert_eq!(fired.load(Ordering::Relaxed), 0);
        assert_eq!(machine.history().transitions().len(), 0);
    }

    #[test]
    fn missing_guard_is_an_error() {
        let table = TransitionTable::new(vec![
            TableRow {
                present_state: Phase::Zero,
                guard: None,
                action: None,
                next_state: Phase::One,
            },
            // A perfectly good row after the broken one must not rescue it.
            row(Phase::Zero, Guard::new(|| true), Phase::Two),
        ]);

        let mut machine = StateMachine::new(&table, Phase::Zero).unwrap();
        let error = machine.step().unwrap_err();

        assert!(matches!(
            error,
            StepError::MissingGuard { row: 0, .. }
        ));
        assert_eq!(machine.current_state(), &Phase::Zero);
    }

    #[test]
    fn missing_guard_is_reached_only_during_the_scan() {
        // The row before the broken one is evaluated normally; the error
        // fires when the scan reaches the guardless row.
        let checked = Arc::new(AtomicUsize::new(0));
        let checked_counter = Arc::clone(&checked);

        let table = TransitionTable::new(vec![
            TableRow {
                present_state: Phase::Zero,
                guard: Some(Guard::new(move || {
                    checked_counter.fetch_add(1, Ordering::Relaxed);
                    false
                })),
                action: None,
                next_state: Phase::One,
            },
            TableRow {
                present_state: Phase::Zero,
                guard: None,
                action: None,
                next_state: Phase::Two,
            },
        ]);

        let mut machine = StateMachine::new(&table, Phase::Zero).unwrap();
        let error = machine.step().unwrap_err();

        assert!(matches!(error, StepError::MissingGuard { row: 1, .. }));
        assert_eq!(checked.load(Ordering::Relaxed), 1);
        assert_eq!(machine.current_state(), &Phase::Zero);
    }

    #[test]
    fn missing_guard_on_other_state_rows_is_ignored() {
        let table = TransitionTable::new(vec![
            TableRow {
                present_state: Phase::One,
                guard: None,
                action: None,
                next_state: Phase::Two,
            },
            row(Phase::Zero, Guard::new(|| true), Phase::One),
        ]);

        let mut machine = StateMachine::new(&table, Phase::Zero).unwrap();

        // The broken row belongs to another state; the scan never selects it.
        assert_eq!(machine.step().unwrap(), StepResult::Transitioned(Phase::One));
    }

    #[test]
    fn action_runs_exactly_once_per_step() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let table = TransitionTable::new(vec![TableRow {
            present_state: Phase::Zero,
            guard: Some(Guard::new(|| true)),
            action: Some(Action::new(move || {
                counter.fetch_add(1, Ordering::Relaxed);
            })),
            next_state: Phase::One,
        }]);

        let mut machine = StateMachine::new(&table, Phase::Zero).unwrap();
        machine.step().unwrap();

        assert_eq!(count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn panicking_action_leaves_state_unchanged() {
        let table = TransitionTable::new(vec![TableRow {
            present_state: Phase::Zero,
            guard: Some(Guard::new(|| true)),
            action: Some(Action::new(|| panic!("actuator fault"))),
            next_state: Phase::One,
        }]);

        let mut machine = StateMachine::new(&table, Phase::Zero).unwrap();

        let outcome = catch_unwind(AssertUnwindSafe(|| machine.step()));
        assert!(outcome.is_err());

        // The state is written only after the action returns normally.
        assert_eq!(machine.current_state(), &Phase::Zero);
        assert_eq!(machine.history().transitions().len(), 0);
    }

    #[test]
    fn empty_table_is_rejected_at_construction() {
        let table: TransitionTable<Phase> = TransitionTable::new(Vec::new());

        let result = StateMachine::new(&table, Phase::Zero);
        assert!(matches!(result, Err(BuildError::EmptyTable)));
    }

    #[test]
    fn is_final_reflects_current_state() {
        #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
        enum Job {
            Queued,
            Done,
        }

        impl State for Job {
            fn name(&self) -> &str {
                match self {
                    Self::Queued => "Queued",
                    Self::Done => "Done",
                }
            }

            fn is_final(&self) -> bool {
                matches!(self, Self::Done)
            }
        }

        let table = TransitionTable::new(vec![TableRow {
            present_state: Job::Queued,
            guard: Some(Guard::new(|| true)),
            action: None,
            next_state: Job::Done,
        }]);

        let mut machine = StateMachine::new(&table, Job::Queued).unwrap();
        assert!(!machine.is_final());

        machine.step().unwrap();
        assert!(machine.is_final());
    }

    #[test]
    fn machines_share_one_table() {
        let table = TransitionTable::new(vec![row(Phase::Zero, Guard::new(|| true), Phase::One)]);

        let mut first = StateMachine::new(&table, Phase::Zero).unwrap();
        let mut second = StateMachine::new(&table, Phase::Zero).unwrap();

        first.step().unwrap();

        assert_eq!(first.current_state(), &Phase::One);
        assert_eq!(second.current_state(), &Phase::Zero);

        second.step().unwrap();
        assert_eq!(second.current_state(), &Phase::One);
    }

    // Mirrors the classic demo table: events arrive through a shared cell
    // the guards poll between steps.
    #[test]
    fn event_driven_walkthrough() {
        let event = Arc::new(AtomicI32::new(-1));

        let is_event = |value: i32| {
            let cell = Arc::clone(&event);
            Guard::new(move || cell.load(Ordering::Relaxed) == value)
        };

        let table = TransitionTable::new(vec![
            row(Phase::Zero, is_event(1), Phase::One),
            row(Phase::One, is_event(2), Phase::Two),
            row(Phase::Two, is_event(0), Phase::Zero),
            row(Phase::Two, is_event(1), Phase::One),
        ]);

        let mut machine = StateMachine::new(&table, Phase::Zero).unwrap();

        event.store(1, Ordering::Relaxed);
        assert_eq!(machine.step().unwrap(), StepResult::Transitioned(Phase::One));

        event.store(2, Ordering::Relaxed);
        assert_eq!(machine.step().unwrap(), StepResult::Transitioned(Phase::Two));

        // Both rows for Two are scanned; the second one's guard matches.
        event.store(1, Ordering::Relaxed);
        assert_eq!(machine.step().unwrap(), StepResult::Transitioned(Phase::One));

        // Unrecognized event: the step succeeds and changes nothing.
        event.store(99, Ordering::Relaxed);
        assert_eq!(machine.step().unwrap(), StepResult::Idle);
        assert_eq!(machine.current_state(), &Phase::One);

        let path = machine.history().get_path();
        assert_eq!(
            path,
            vec![&Phase::Zero, &Phase::One, &Phase::Two, &Phase::One]
        );
    }
}
