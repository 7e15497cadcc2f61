use std::collections::BTreeMap;
use std::sync::Arc;
use crate::client::{ Output, Resolution, Step };

/// Identifies one invocation: the step it ran on and the navigation generation at the time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ticket {
    pub step: usize,
    pub generation: u64
}

#[derive(Clone, PartialEq, Debug)]
pub enum WizardAction {
    Next,
    Previous,
    SetInput { field: String, value: String },
    Begin { message: String },
    Resolve { ticket: Ticket, resolution: Resolution }
}

/// Immutable snapshot of the wizard. `apply` is the only way to get the next one.
#[derive(Clone, PartialEq, Debug)]
pub struct WizardState {
    steps: Arc<Vec<Step>>,
    step: usize,
    inputs: BTreeMap<String, String>,
    output: Output,
    generation: u64
}

impl WizardState {
    /// `steps` must not be empty.
    pub fn new(steps: Arc<Vec<Step>>) -> Self {
        WizardState {
            steps,
            step: 0,
            inputs: BTreeMap::new(),
            output: Output::Idle,
            generation: 0
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.step]
    }

    pub fn inputs(&self) -> &BTreeMap<String, String> {
        &self.inputs
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn is_first_step(&self) -> bool {
        self.step == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 >= self.steps.len()
    }

    pub fn ticket(&self) -> Ticket {
        Ticket { step: self.step, generation: self.generation }
    }

    pub fn accepts(&self, ticket: Ticket) -> bool {
        ticket == self.ticket()
    }

    pub fn apply(&self, action: WizardAction) -> WizardState {
        match action {
            WizardAction::Next if !self.is_last_step() => self.move_to(self.step + 1),
            WizardAction::Previous if !self.is_first_step() => self.move_to(self.step - 1),
            WizardAction::Next | WizardAction::Previous => self.clone(),
            WizardAction::SetInput { field, value } => {
                let mut next = self.clone();
                if self.current_step().declares_input(&field) {
                    next.inputs.insert(field, value);
                }
                next
            },
            WizardAction::Begin { message } => WizardState { output: Output::Loading(message), ..self.clone() },
            WizardAction::Resolve { ticket, resolution } => {
                if !self.accepts(ticket) {
                    return self.clone();
                }
                WizardState { output: Output::from(resolution), ..self.clone() }
            }
        }
    }

    fn move_to(&self, step: usize) -> WizardState {
        WizardState {
            steps: self.steps.clone(),
            step,
            inputs: BTreeMap::new(),
            output: Output::Idle,
            generation: self.generation + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::client::demo_steps;
    use super::*;

    fn initial_state() -> WizardState {
        WizardState::new(Arc::new(demo_steps()))
    }

    fn set_input(field: &str, value: &str) -> WizardAction {
        WizardAction::SetInput { field: field.to_string(), value: value.to_string() }
    }

    #[test]
    fn cursor_stays_within_bounds() {
        let mut state = initial_state();
        for _ in 0..3 {
            state = state.apply(WizardAction::Previous);
            assert_eq!(state.step(), 0);
        }
        for expected in 1..=5 {
            state = state.apply(WizardAction::Next);
            assert_eq!(state.step(), expected);
        }
        for _ in 0..10 {
            state = state.apply(WizardAction::Next);
            assert_eq!(state.step(), 5);
        }
        assert!(state.is_last_step());
        state = state.apply(WizardAction::Previous);
        assert_eq!(state.step(), 4);
    }

    #[test]
    fn navigation_clears_inputs_and_output() {
        let state = initial_state()
            .apply(WizardAction::Next)
            .apply(set_input("coffee", "Latte"))
            .apply(WizardAction::Begin { message: String::from("Placing order...") });
        assert_eq!(state.inputs().get("coffee"), Some(&String::from("Latte")));
        assert_eq!(state.output(), &Output::Loading(String::from("Placing order...")));

        let moved = state.apply(WizardAction::Next);
        assert!(moved.inputs().is_empty());
        assert_eq!(moved.output(), &Output::Idle);
        let moved_back = moved.apply(WizardAction::Previous);
        assert_eq!(moved_back.step(), 1);
        assert!(moved_back.inputs().is_empty());
    }

    #[test]
    fn boundary_navigation_is_a_no_op() {
        let state = initial_state().apply(WizardAction::Begin { message: String::from("Fetching coffee types...") });
        let unchanged = state.apply(WizardAction::Previous);
        assert_eq!(unchanged, state);
    }

    #[test]
    fn undeclared_inputs_are_ignored() {
        let state = initial_state().apply(set_input("coffee", "Latte"));
        assert!(state.inputs().is_empty());
    }

    #[test]
    fn apply_leaves_the_previous_snapshot_untouched() {
        let state = initial_state();
        let _ = state.apply(WizardAction::Next);
        assert_eq!(state.step(), 0);
        assert_eq!(state.output(), &Output::Idle);
    }

    #[test]
    fn resolution_replaces_loading() {
        let state = initial_state().apply(WizardAction::Begin { message: String::from("Fetching coffee types...") });
        let ticket = state.ticket();
        let resolved = state.apply(WizardAction::Resolve { ticket, resolution: Resolution::data(json!([1, 2])) });
        assert_eq!(resolved.output(), &Output::Data { value: json!([1, 2]), preview_url: None });

        let failed = state.apply(WizardAction::Resolve { ticket, resolution: Resolution::Error(String::from("Error: offline")) });
        assert_eq!(failed.output(), &Output::Error(String::from("Error: offline")));
    }

    #[test]
    fn late_results_are_ignored_after_navigation() {
        let state = initial_state().apply(WizardAction::Begin { message: String::from("Fetching coffee types...") });
        let stale_ticket = state.ticket();
        // Away and back again lands on the same step with a newer generation.
        let returned = state.apply(WizardAction::Next).apply(WizardAction::Previous);
        assert_eq!(returned.step(), stale_ticket.step);
        assert!(!returned.accepts(stale_ticket));

        let after_late_result = returned.apply(WizardAction::Resolve { ticket: stale_ticket, resolution: Resolution::data(json!("late")) });
        assert_eq!(after_late_result.output(), &Output::Idle);
    }
}
