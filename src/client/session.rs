use std::sync::Arc;
use serde_json::json;
use tokio::sync::mpsc::UnboundedSender;
use crate::client::{ render_output, render_state, Command, Resolution, StepRunner, Ticket, WizardAction, WizardState, HELP_TEXT };
use crate::resources::ResourceService;

pub type ResolutionSender = UnboundedSender<(Ticket, Resolution)>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionControl {
    Continue,
    Quit
}

/// Drives the wizard from terminal commands. Step actions run on their own tasks and report back
/// through `resolution_sender`; the prompt never waits on them.
pub struct Session {
    state: WizardState,
    step_runner: Arc<StepRunner>,
    resource_service: ResourceService,
    resolution_sender: ResolutionSender
}

impl Session {
    pub fn new(state: WizardState, step_runner: Arc<StepRunner>, resource_service: ResourceService, resolution_sender: ResolutionSender) -> Session {
        Session { state, step_runner, resource_service, resolution_sender }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Applies one command and returns what to print.
    pub fn handle(&mut self, command: Command) -> (SessionControl, String) {
        match command {
            Command::Next => {
                self.state = self.state.apply(WizardAction::Next);
                (SessionControl::Continue, render_state(&self.state))
            },
            Command::Previous => {
                self.state = self.state.apply(WizardAction::Previous);
                (SessionControl::Continue, render_state(&self.state))
            },
            Command::Set { field, value } => {
                if !self.state.current_step().declares_input(&field) {
                    return (SessionControl::Continue, format!("This step has no input named \"{}\"\n", field));
                }
                self.state = self.state.apply(WizardAction::SetInput { field, value });
                (SessionControl::Continue, String::new())
            },
            Command::Run => {
                self.run_current_step();
                (SessionControl::Continue, render_output(self.state.output()))
            },
            Command::Show => (SessionControl::Continue, render_state(&self.state)),
            Command::Help => (SessionControl::Continue, format!("{}\n", HELP_TEXT)),
            Command::Quit => (SessionControl::Quit, String::new())
        }
    }

    /// Applies a finished invocation. Returns what to print, or nothing if the result arrived too late.
    pub fn resolve(&mut self, ticket: Ticket, resolution: Resolution) -> Option<String> {
        if !self.state.accepts(ticket) {
            let late_message = self.resource_service.render("late_result_ignored_debug_message_template", &json!({ "step": ticket.step + 1 }));
            log::debug!("{}", late_message);
            return None;
        }
        self.state = self.state.apply(WizardAction::Resolve { ticket, resolution });
        Some(render_output(self.state.output()))
    }

    fn run_current_step(&mut self) {
        let action = self.state.current_step().action.clone();
        let message = self.step_runner.loading_message(&action);
        self.state = self.state.apply(WizardAction::Begin { message });
        let ticket = self.state.ticket();
        let inputs = self.state.inputs().clone();
        let step_runner = self.step_runner.clone();
        let resolution_sender = self.resolution_sender.clone();
        tokio::spawn(async move {
            let resolution = step_runner.run(&action, &inputs).await;
            // The receiver is gone once the session has quit.
            let _ = resolution_sender.send((ticket, resolution));
        });
    }
}
