mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use cupcake::order::{Flavor, Money};
use cupcake::share::{ShareError, ShareMessage, ShareSink};
use cupcake::ui::app::App;
use cupcake::ui::input::handle_key;
use cupcake::wizard::Step;
use std::cell::RefCell;
use std::rc::Rc;

/// Sink whose messages stay observable after it is boxed into the app.
#[derive(Clone, Default)]
struct SpySink(Rc<RefCell<Vec<ShareMessage>>>);

impl ShareSink for SpySink {
    fn name(&self) -> &'static str {
        "spy"
    }

    fn share(&mut self, message: &ShareMessage) -> Result<(), ShareError> {
        self.0.borrow_mut().push(message.clone());
        Ok(())
    }
}

/// Sink that asks for a follow-up line in the status bar.
struct HintedSink;

impl ShareSink for HintedSink {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn share(&mut self, _message: &ShareMessage) -> Result<(), ShareError> {
        Ok(())
    }

    fn hint(&self) -> Option<&'static str> {
        Some("Paste it before quitting")
    }
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn step(app: &App) -> Step {
    app.session().current_step()
}

#[test]
fn enter_walks_the_whole_wizard() {
    let spy = SpySink::default();
    let mut app = common::app_with_sink(Box::new(spy.clone()));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(step(&app), Step::Flavor);
    assert_eq!(app.session().order().quantity(), Some(6));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(step(&app), Step::Pickup);
    assert_eq!(app.session().order().flavor(), Some(Flavor::Chocolate));

    press(&mut app, KeyCode::Enter);
    assert_eq!(step(&app), Step::Summary);
    assert_eq!(app.session().order().pickup_date(), Some(common::FIRST_PICKUP));

    press(&mut app, KeyCode::Char('s'));
    let shared = spy.0.borrow();
    assert_eq!(shared.len(), 1);
    assert!(shared[0].body.contains("Flavor: Chocolate"));
    assert!(shared[0].body.contains("Total: $15.00"));
    let status = app.status().expect("status after share");
    assert!(!status.is_error);
    assert_eq!(status.text, "Order sent to spy");
}

#[test]
fn space_selects_without_advancing() {
    let mut app = common::app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Char(' '));

    assert_eq!(step(&app), Step::Flavor);
    assert_eq!(app.session().order().flavor(), Some(Flavor::Coffee));
    assert_eq!(app.session().order().price(), Money::from_cents(500));
    assert_eq!(app.chosen_index(), Some(4));
}

#[test]
fn back_restores_focus_on_previous_choice() {
    let mut app = common::app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session().order().quantity(), Some(12));

    press(&mut app, KeyCode::Left);
    assert_eq!(step(&app), Step::Start);
    assert_eq!(app.options().focused(), Some(2));
    assert!(app.status().is_none());
}

#[test]
fn back_on_start_is_not_offered() {
    let mut app = common::app();
    press(&mut app, KeyCode::Backspace);
    assert_eq!(step(&app), Step::Start);
    assert!(app.status().is_none());
}

#[test]
fn cancel_resets_everything() {
    let mut app = common::app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(step(&app), Step::Pickup);

    press(&mut app, KeyCode::Char('c'));

    assert_eq!(step(&app), Step::Start);
    assert!(!app.session().can_go_back());
    assert_eq!(app.session().order().quantity(), None);
    assert_eq!(app.options().focused(), Some(0));
}

#[test]
fn share_key_ignored_before_summary() {
    let spy = SpySink::default();
    let mut app = common::app_with_sink(Box::new(spy.clone()));
    press(&mut app, KeyCode::Char('s'));
    assert!(spy.0.borrow().is_empty());
    assert_eq!(step(&app), Step::Start);
}

#[test]
fn quit_keys() {
    let mut app = common::app();
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = common::app();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
    // Ctrl+C quits instead of cancelling
    assert_eq!(step(&app), Step::Start);
}

#[test]
fn key_release_is_ignored() {
    let mut app = common::app();
    let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert_eq!(step(&app), Step::Start);
}

#[test]
fn redraw_flag_follows_changes() {
    let mut app = common::app();
    assert!(app.take_redraw());
    assert!(!app.take_redraw());

    press(&mut app, KeyCode::Enter);
    assert!(app.take_redraw());

    press(&mut app, KeyCode::Char('x'));
    assert!(!app.take_redraw());
}

#[test]
fn share_status_includes_sink_hint() {
    let mut app = common::app_with_sink(Box::new(HintedSink));
    for _ in 0..4 {
        press(&mut app, KeyCode::Enter);
    }
    assert_eq!(step(&app), Step::Summary);
    let status = app.status().expect("status after share");
    assert!(!status.is_error);
    assert_eq!(
        status.text,
        "Order sent to clipboard. Paste it before quitting"
    );
}
