use thiserror::Error;

use crate::wizard::step::Step;

/// Errors returned by [`WizardController`] navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Advance requested on the last step.
    #[error("Already at the final step ({step:?})")]
    TerminalStep { step: Step },
    /// Back requested with no earlier step in the history.
    #[error("No previous step to go back to")]
    NoHistory,
}

/// Position in the wizard plus the visit history used for back navigation.
///
/// `history` is never empty and always starts with [`Step::Start`]; its last
/// entry is the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardController {
    current_index: usize,
    history: Vec<Step>,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    pub fn new() -> Self {
        Self {
            current_index: Step::Start.index(),
            history: vec![Step::Start],
        }
    }

    pub fn current_step(&self) -> Step {
        Step::ORDER[self.current_index]
    }

    pub fn history(&self) -> &[Step] {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() >= 2
    }

    /// Move to the next step in forward order.
    pub fn advance(&mut self) -> Result<Step, NavigationError> {
        let current = self.current_step();
        let Some(next) = current.next() else {
            tracing::warn!(step = ?current, "Advance requested on terminal step");
            return Err(NavigationError::TerminalStep { step: current });
        };
        self.history.push(next);
        self.current_index = next.index();
        tracing::debug!(from = ?current, to = ?next, "Wizard advanced");
        Ok(next)
    }

    /// Return to the previously visited step.
    pub fn go_back(&mut self) -> Result<Step, NavigationError> {
        if !self.can_go_back() {
            tracing::warn!("Back requested with empty history");
            return Err(NavigationError::NoHistory);
        }
        let left = self.history.pop();
        let previous = self.history[self.history.len() - 1];
        self.current_index = previous.index();
        tracing::debug!(from = ?left, to = ?previous, "Wizard went back");
        Ok(previous)
    }

    pub fn cancel_to_start(&mut self) {
        self.history.clear();
        self.history.push(Step::Start);
        self.current_index = Step::Start.index();
        tracing::debug!("Wizard cancelled to start");
    }
}
