use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver, RecvError};
use std::thread;

pub enum AppEvent {
    Input(KeyEvent),
    Resize(u16, u16),
}

/// Reads terminal input on a background thread and forwards it as
/// [`AppEvent`]s. Only the UI thread touches the session.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            let forwarded = match event::read() {
                Ok(Event::Key(key)) => tx.send(AppEvent::Input(key)),
                Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!(error = %err, "Failed to read terminal event");
                    break;
                }
            };
            // Receiver gone: the UI has stopped
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx }
    }

    /// Block until the next event. Fails once the input thread has exited.
    pub fn next(&self) -> Result<AppEvent, RecvError> {
        self.rx.recv()
    }
}
