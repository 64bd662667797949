//! Builder for constructing transition table rows.

use crate::builder::error::BuildError;
use crate::core::{Action, Guard, State};
use crate::kernel::TableRow;

/// Builder for constructing table rows with a fluent API.
///
/// `from` and `to` are required. The guard is not validated here: a row
/// without one is constructible, and the kernel reports it as a
/// configuration error if the scan ever selects it. The action is genuinely
/// optional.
pub struct RowBuilder<S: State> {
    from: Option<S>,
    to: Option<S>,
    guard: Option<Guard>,
    action: Option<Action>,
}

impl<S: State> RowBuilder<S> {
    /// Create a new row builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            guard: None,
            action: None,
        }
    }

    /// Set the present state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the next state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the guard.
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Set the guard from a closure.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the action (optional).
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Set the action from a closure (optional).
    pub fn then<F>(mut self, procedure: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.action = Some(Action::new(procedure));
        self
    }

    /// Build the row.
    pub fn build(self) -> Result<TableRow<S>, BuildError> {
        let present_state = self.from.ok_or(BuildError::MissingPresentState)?;
        let next_state = self.to.ok_or(BuildError::MissingNextState)?;

        Ok(TableRow {
            present_state,
            guard: self.guard,
            action: self.action,
            next_state,
        })
    }
}

impl<S: State> Default for RowBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Middle,
        End,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Middle => "Middle",
                Self::End => "End",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::End)
        }
    }

    #[test]
    fn builder_validates_missing_present_state() {
        let result = RowBuilder::<TestState>::new().to(TestState::Middle).build();

        assert!(matches!(result, Err(BuildError::MissingPresentState)));
    }

    #[test]
    fn builder_validates_missing_next_state() {
        let result = RowBuilder::<TestState>::new()
            .from(TestState::Start)
            .build();

        assert!(matches!(result, Err(BuildError::MissingNextState)));
    }

    #[test]
    fn fluent_api_builds_row() {
        let row = RowBuilder::new()
            .from(TestState::Start)
            .when(|| true)
            .to(TestState::Middle)
            .build()
            .unwrap();

        assert_eq!(row.present_state, TestState::Start);
        assert_eq!(row.next_state, TestState::Middle);
        assert!(row.guard.is_some());
        assert!(row.action.is_none());
    }

    #[test]
    fn guardless_row_is_constructible() {
        // Its invalidity surfaces at step time, not build time.
        let row = RowBuilder::new()
            .from(TestState::Start)
            .to(TestState::Middle)
            .build()
            .unwrap();

        assert!(row.guard.is_none());
    }

    #[test]
    fn prebuilt_guard_and_action_are_accepted() {
        let row = RowBuilder::new()
            .from(TestState::Start)
            .guard(Guard::new(|| false))
            .action(Action::new(|| {}))
            .to(TestState::Middle)
            .build()
            .unwrap();

        assert!(!row.guard.as_ref().unwrap().check());
        assert!(row.action.is_some());
    }

    #[test]
    fn then_attaches_an_action() {
        let row = RowBuilder::new()
            .from(TestState::Start)
            .to(TestState::End)
            .when(|| true)
            .then(|| {})
            .build()
            .unwrap();

        assert!(row.action.is_some());
    }
}
