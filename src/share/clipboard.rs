//! Clipboard share target.

use arboard::Clipboard;

use crate::share::{ShareError, ShareMessage, ShareSink};

/// Copies the order summary to the system clipboard.
pub struct ClipboardSink {
    clipboard: Clipboard,
}

impl ClipboardSink {
    pub fn new() -> Result<Self, ShareError> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }
}

impl ShareSink for ClipboardSink {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn share(&mut self, message: &ShareMessage) -> Result<(), ShareError> {
        let text = format!("{}\n\n{}", message.subject, message.body);
        self.clipboard.set_text(text)?;
        Ok(())
    }

    // X11/Wayland selections are served by this process; they are gone
    // after exit unless a clipboard manager took them over.
    #[cfg(target_os = "linux")]
    fn hint(&self) -> Option<&'static str> {
        Some("Paste it before quitting: the clipboard is cleared when cupcake exits")
    }
}
