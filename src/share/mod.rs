//! Handing a finished order to something outside the app.
//!
//! The core composes a plain [`ShareMessage`]; where it ends up is decided by
//! the [`ShareSink`] the caller passes in.

mod clipboard;
mod file;
mod summary;

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::order::OrderField;

pub use clipboard::ClipboardSink;
pub use file::FileSink;
pub use summary::compose_summary;

/// Subject/body pair describing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareMessage {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Order is incomplete: {missing} not chosen")]
    IncompleteOrder { missing: OrderField },

    #[error("Failed to set clipboard text: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Failed to write share outbox '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode share record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Destination for composed order summaries.
pub trait ShareSink {
    /// Short name used in logs and status lines.
    fn name(&self) -> &'static str;

    fn share(&mut self, message: &ShareMessage) -> Result<(), ShareError>;

    /// Extra line shown to the user after a successful share.
    fn hint(&self) -> Option<&'static str> {
        None
    }
}

/// Keeps every shared message in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub messages: Vec<ShareMessage>,
}

impl ShareSink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn share(&mut self, message: &ShareMessage) -> Result<(), ShareError> {
        self.messages.push(message.clone());
        Ok(())
    }
}
