//! Finite-state stepper over the option catalog
//!
//! The stepper owns no terminal state; a driver feeds it actions decoded
//! from key presses and redraws from `current_step()` / `cursor()`.

use super::catalog::{Catalog, Step};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Cursor movement within the current step's option list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Every operation the stepper accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Move(Direction),
    Confirm,
    Advance,
    Retreat,
    Cancel,
}

/// Where the run currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStatus {
    Running,
    Accepted,
    Cancelled,
}

/// Confirmed values keyed by step label
pub type Selections = HashMap<String, String>;

/// Progress through one wizard run
#[derive(Debug, Clone)]
pub struct WizardState<'a> {
    catalog: &'a Catalog,
    step_index: usize,
    cursor: usize,
    selections: Selections,
    status: WizardStatus,
}

impl<'a> WizardState<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            step_index: 0,
            cursor: 0,
            selections: Selections::new(),
            status: WizardStatus::Running,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> WizardStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status != WizardStatus::Running
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// The step under the cursor, `None` once every step is confirmed
    pub fn current_step(&self) -> Option<&'a Step> {
        self.catalog.step(self.step_index)
    }

    /// Apply one action; actions after termination are ignored
    pub fn apply(&mut self, action: WizardAction) {
        match action {
            WizardAction::Move(direction) => self.move_cursor(direction),
            WizardAction::Confirm => self.confirm_current_step(),
            WizardAction::Advance => self.advance_step(),
            WizardAction::Retreat => self.retreat_step(),
            WizardAction::Cancel => self.cancel(),
        }
    }

    /// Move the cursor one option, stopping at either end of the list
    pub fn move_cursor(&mut self, direction: Direction) {
        let Some(step) = self.running_step() else {
            return;
        };
        match direction {
            Direction::Up => self.cursor = self.cursor.saturating_sub(1),
            Direction::Down => {
                if self.cursor + 1 < step.options().len() {
                    self.cursor += 1;
                }
            }
        }
    }

    /// Record the option under the cursor and move on; confirming the last
    /// step accepts the run
    pub fn confirm_current_step(&mut self) {
        let Some(step) = self.running_step() else {
            return;
        };
        let value = step.options()[self.cursor].clone();
        self.selections.insert(step.label().to_string(), value);

        self.step_index += 1;
        self.cursor = 0;
        if self.step_index == self.catalog.len() {
            self.status = WizardStatus::Accepted;
        }
    }

    /// Go to the next step without recording anything
    pub fn advance_step(&mut self) {
        if self.running_step().is_none() {
            return;
        }
        if self.step_index + 1 < self.catalog.len() {
            self.enter_step(self.step_index + 1);
        }
    }

    /// Go back to the previous step without recording anything
    pub fn retreat_step(&mut self) {
        if self.running_step().is_none() {
            return;
        }
        if self.step_index > 0 {
            self.enter_step(self.step_index - 1);
        }
    }

    pub fn cancel(&mut self) {
        if self.status == WizardStatus::Running {
            self.status = WizardStatus::Cancelled;
        }
    }

    /// Hand over the confirmed selections of an accepted run
    pub fn into_selections(self) -> Result<Selections> {
        match self.status {
            WizardStatus::Accepted => Ok(self.selections),
            WizardStatus::Cancelled => Err(Error::WizardCancelled),
            WizardStatus::Running => Err(Error::WizardIncomplete),
        }
    }

    fn running_step(&self) -> Option<&'a Step> {
        if self.status != WizardStatus::Running {
            return None;
        }
        self.current_step()
    }

    // Lands on the recorded option when revisiting a confirmed step
    fn enter_step(&mut self, index: usize) {
        self.step_index = index;
        let Some(step) = self.catalog.step(index) else {
            return;
        };
        self.cursor = self
            .selections
            .get(step.label())
            .and_then(|value| step.position(value))
            .unwrap_or_else(|| self.cursor.min(step.options().len() - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::catalog::{BUILD_SYSTEM, COMPILER, CPP_STANDARD, TESTING_FRAMEWORK};

    fn small_catalog() -> Catalog {
        Catalog::new(vec![
            Step::new("Long", &["a", "b", "c", "d", "e"]),
            Step::new("Short", &["x", "y"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_cursor_clamps_at_both_ends() {
        let catalog = small_catalog();
        let mut state = WizardState::new(&catalog);

        state.move_cursor(Direction::Up);
        assert_eq!(state.cursor(), 0);

        for _ in 0..10 {
            state.move_cursor(Direction::Down);
        }
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn test_cursor_stays_in_bounds_for_any_sequence() {
        let catalog = Catalog::builtin();
        let mut state = WizardState::new(&catalog);
        let actions = [
            WizardAction::Move(Direction::Down),
            WizardAction::Move(Direction::Down),
            WizardAction::Move(Direction::Down),
            WizardAction::Move(Direction::Down),
            WizardAction::Move(Direction::Down),
            WizardAction::Advance,
            WizardAction::Move(Direction::Down),
            WizardAction::Advance,
            WizardAction::Retreat,
            WizardAction::Move(Direction::Up),
            WizardAction::Retreat,
            WizardAction::Advance,
            WizardAction::Advance,
            WizardAction::Advance,
        ];

        for action in actions {
            state.apply(action);
            let step = state.current_step().unwrap();
            assert!(state.cursor() < step.options().len());
        }
    }

    #[test]
    fn test_confirm_records_selection_and_resets_cursor() {
        let catalog = small_catalog();
        let mut state = WizardState::new(&catalog);

        state.move_cursor(Direction::Down);
        state.move_cursor(Direction::Down);
        state.confirm_current_step();

        assert_eq!(state.selections().get("Long"), Some(&"c".to_string()));
        assert_eq!(state.step_index(), 1);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.status(), WizardStatus::Running);
    }

    #[test]
    fn test_confirming_last_step_accepts() {
        let catalog = Catalog::builtin();
        let mut state = WizardState::new(&catalog);

        // CMake, c++20, GCC, None
        state.move_cursor(Direction::Down);
        state.move_cursor(Direction::Down);
        state.confirm_current_step();
        state.move_cursor(Direction::Down);
        state.confirm_current_step();
        state.confirm_current_step();
        state.move_cursor(Direction::Down);
        state.move_cursor(Direction::Down);
        state.confirm_current_step();

        assert_eq!(state.status(), WizardStatus::Accepted);
        assert_eq!(state.step_index(), catalog.len());
        assert!(state.current_step().is_none());

        let selections = state.into_selections().unwrap();
        assert_eq!(selections.len(), 4);
        assert_eq!(selections[BUILD_SYSTEM], "CMake");
        assert_eq!(selections[CPP_STANDARD], "c++20");
        assert_eq!(selections[COMPILER], "GCC");
        assert_eq!(selections[TESTING_FRAMEWORK], "None");
    }

    #[test]
    fn test_one_entry_per_confirmed_step() {
        let catalog = Catalog::builtin();
        let mut state = WizardState::new(&catalog);

        state.confirm_current_step();
        state.confirm_current_step();
        assert_eq!(state.selections().len(), 2);
        for (label, value) in state.selections() {
            let step = catalog.find(label).unwrap();
            assert!(step.position(value).is_some());
        }
    }

    #[test]
    fn test_skipped_step_has_no_selection() {
        let catalog = Catalog::builtin();
        let mut state = WizardState::new(&catalog);

        state.advance_step();
        assert_eq!(state.step_index(), 1);
        assert!(state.selections().is_empty());

        state.confirm_current_step();
        state.confirm_current_step();
        state.confirm_current_step();

        let selections = state.into_selections().unwrap();
        assert!(!selections.contains_key(BUILD_SYSTEM));
        assert_eq!(selections.len(), 3);
    }

    #[test]
    fn test_navigation_clamped_to_step_range() {
        let catalog = small_catalog();
        let mut state = WizardState::new(&catalog);

        state.retreat_step();
        assert_eq!(state.step_index(), 0);

        state.advance_step();
        state.advance_step();
        assert_eq!(state.step_index(), 1);
        assert_eq!(state.status(), WizardStatus::Running);
    }

    #[test]
    fn test_advance_clamps_cursor_to_shorter_step() {
        let catalog = small_catalog();
        let mut state = WizardState::new(&catalog);

        for _ in 0..4 {
            state.move_cursor(Direction::Down);
        }
        state.advance_step();
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_retreat_restores_confirmed_option() {
        let catalog = small_catalog();
        let mut state = WizardState::new(&catalog);

        state.move_cursor(Direction::Down);
        state.move_cursor(Direction::Down);
        state.move_cursor(Direction::Down);
        state.confirm_current_step();
        state.retreat_step();

        assert_eq!(state.step_index(), 0);
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_cancel_is_distinct_from_accept() {
        let catalog = Catalog::builtin();
        let mut state = WizardState::new(&catalog);

        state.confirm_current_step();
        state.cancel();
        assert_eq!(state.status(), WizardStatus::Cancelled);

        // Further input is ignored once cancelled
        state.confirm_current_step();
        assert_eq!(state.selections().len(), 1);

        assert!(matches!(
            state.into_selections(),
            Err(Error::WizardCancelled)
        ));
    }

    #[test]
    fn test_unfinished_run_has_no_snapshot() {
        let catalog = Catalog::builtin();
        let state = WizardState::new(&catalog);
        assert!(matches!(
            state.into_selections(),
            Err(Error::WizardIncomplete)
        ));
    }

    #[test]
    fn test_cancel_after_accept_keeps_accept() {
        let catalog = small_catalog();
        let mut state = WizardState::new(&catalog);
        state.confirm_current_step();
        state.confirm_current_step();
        state.cancel();
        assert_eq!(state.status(), WizardStatus::Accepted);
    }
}
