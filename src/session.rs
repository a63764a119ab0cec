//! One in-progress order: its fields, its wizard position, and the hooks that
//! keep a renderer in sync.
//!
//! The session is owned by whoever drives the UI and passed by reference to
//! the code that needs it. It is the only place where order mutations and
//! wizard navigation are coordinated (e.g. cancel = back to start + reset).

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::labels::Labels;
use crate::order::{OrderError, OrderField, OrderSnapshot, OrderState};
use crate::share::{compose_summary, ShareError, ShareMessage, ShareSink};
use crate::wizard::{NavigationError, Step, WizardController};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error("'{action}' is not available on the {step:?} step")]
    WrongStep { action: &'static str, step: Step },

    #[error(transparent)]
    Share(#[from] ShareError),
}

/// Everything a renderer needs for the current frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub step: Step,
    pub can_go_back: bool,
    pub order: OrderSnapshot,
}

type Listener = Box<dyn FnMut(&SessionSnapshot)>;

pub struct OrderSession {
    order: OrderState,
    wizard: WizardController,
    listeners: Vec<Listener>,
}

impl OrderSession {
    pub fn new(order: OrderState) -> Self {
        Self {
            order,
            wizard: WizardController::new(),
            listeners: Vec::new(),
        }
    }

    pub fn order(&self) -> &OrderState {
        &self.order
    }

    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    pub fn current_step(&self) -> Step {
        self.wizard.current_step()
    }

    pub fn can_go_back(&self) -> bool {
        self.wizard.can_go_back()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            step: self.wizard.current_step(),
            can_go_back: self.wizard.can_go_back(),
            order: self.order.snapshot(),
        }
    }

    /// Register a callback run after every successful change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&SessionSnapshot) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Start step: record the quantity and move on to flavor selection.
    pub fn choose_quantity(&mut self, quantity: u32) -> Result<Step, SessionError> {
        self.require_step(Step::Start, "choose quantity")?;
        self.order.set_quantity(quantity)?;
        let step = self.wizard.advance()?;
        tracing::info!(quantity, "Quantity chosen");
        self.notify();
        Ok(step)
    }

    pub fn choose_flavor(&mut self, id: &str) -> Result<(), SessionError> {
        self.require_step(Step::Flavor, "choose flavor")?;
        self.order.set_flavor(id)?;
        tracing::info!(flavor = id, price = %self.order.price_formatted(), "Flavor chosen");
        self.notify();
        Ok(())
    }

    pub fn choose_date(&mut self, date: &str) -> Result<(), SessionError> {
        self.require_step(Step::Pickup, "choose pickup date")?;
        self.order.set_date(date)?;
        tracing::info!(date, "Pickup date chosen");
        self.notify();
        Ok(())
    }

    /// Leave the current step. Each selection step needs its choice made
    /// before it can be left.
    pub fn next(&mut self) -> Result<Step, SessionError> {
        let missing = match self.wizard.current_step() {
            Step::Start if self.order.quantity().is_none() => Some(OrderField::Quantity),
            Step::Flavor if self.order.flavor().is_none() => Some(OrderField::Flavor),
            Step::Pickup if self.order.pickup_date().is_none() => Some(OrderField::PickupDate),
            _ => None,
        };
        if let Some(field) = missing {
            tracing::warn!(%field, "Next requested without a selection");
            return Err(OrderError::InvalidInput {
                field,
                reason: format!("choose a {} first", field),
            }
            .into());
        }
        let step = self.wizard.advance()?;
        self.notify();
        Ok(step)
    }

    pub fn back(&mut self) -> Result<Step, SessionError> {
        let step = self.wizard.go_back()?;
        self.notify();
        Ok(step)
    }

    /// Drop the order and return to the start step.
    pub fn cancel(&mut self) {
        self.wizard.cancel_to_start();
        self.order.reset();
        tracing::info!("Order cancelled");
        self.notify();
    }

    /// Summary step: compose the order text and hand it to `sink`.
    pub fn share(
        &self,
        sink: &mut dyn ShareSink,
        labels: &dyn Labels,
    ) -> Result<ShareMessage, SessionError> {
        self.require_step(Step::Summary, "share")?;
        let message = compose_summary(&self.order.snapshot(), labels)?;
        sink.share(&message)?;
        tracing::info!(sink = sink.name(), "Order shared");
        Ok(message)
    }

    fn require_step(&self, step: Step, action: &'static str) -> Result<(), SessionError> {
        let current = self.wizard.current_step();
        if current != step {
            tracing::warn!(action, step = ?current, "Action not available on this step");
            return Err(SessionError::WrongStep {
                action,
                step: current,
            });
        }
        Ok(())
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

impl fmt::Debug for OrderSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderSession")
            .field("order", &self.order)
            .field("wizard", &self.wizard)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
