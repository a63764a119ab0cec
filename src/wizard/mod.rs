//! Linear step sequencing for the ordering wizard.
//!
//! Forward moves only go through [`WizardController::advance`]; back moves
//! follow the visit history rather than positional arithmetic.

mod controller;
mod step;

pub use controller::{NavigationError, WizardController};
pub use step::Step;
