use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

/// Run the wizard until the user quits. Redraws only after a change.
pub fn run(mut app: App) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new();
    tracing::info!("Terminal UI started");

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next() {
            Ok(AppEvent::Input(key)) => {
                tracing::debug!(?key, "Key event");
                handle_key(&mut app, key);
            }
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
                app.mark_dirty();
            }
            Err(_) => break,
        }
    }

    drop(guard);
    tracing::info!("Terminal UI stopped");
    Ok(())
}
