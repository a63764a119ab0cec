mod common;

use cupcake::labels::EnglishLabels;
use cupcake::order::{Money, OrderError, OrderField};
use cupcake::session::{SessionError, SessionSnapshot};
use cupcake::share::{MemorySink, ShareError};
use cupcake::wizard::{NavigationError, Step};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn full_order_reaches_summary() {
    let session = common::completed_session();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.step, Step::Summary);
    assert!(snapshot.can_go_back);
    assert_eq!(snapshot.order.quantity, Some(6));
    assert_eq!(snapshot.order.pickup_date.as_deref(), Some(common::FIRST_PICKUP));
    assert_eq!(snapshot.order.price, Money::from_cents(1500));
}

#[test]
fn choosing_quantity_advances_to_flavor() {
    let mut session = common::session();
    assert_eq!(session.choose_quantity(12).unwrap(), Step::Flavor);
    assert_eq!(session.order().quantity(), Some(12));
}

#[test]
fn invalid_quantity_stays_on_start() {
    let mut session = common::session();
    let err = session.choose_quantity(0).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Order(OrderError::InvalidInput {
            field: OrderField::Quantity,
            ..
        })
    ));
    assert_eq!(session.current_step(), Step::Start);
}

#[test]
fn next_requires_a_flavor() {
    let mut session = common::session();
    session.choose_quantity(1).unwrap();
    let err = session.next().unwrap_err();
    assert!(matches!(
        err,
        SessionError::Order(OrderError::InvalidInput {
            field: OrderField::Flavor,
            ..
        })
    ));
    assert_eq!(session.current_step(), Step::Flavor);
}

#[test]
fn next_requires_a_pickup_date() {
    let mut session = common::session();
    session.choose_quantity(1).unwrap();
    session.choose_flavor("coffee").unwrap();
    session.next().unwrap();
    assert!(session.next().is_err());
    assert_eq!(session.current_step(), Step::Pickup);
}

#[test]
fn next_on_summary_is_terminal() {
    let mut session = common::completed_session();
    let err = session.next().unwrap_err();
    assert!(matches!(
        err,
        SessionError::Navigation(NavigationError::TerminalStep { .. })
    ));
    assert_eq!(session.current_step(), Step::Summary);
}

#[test]
fn setters_are_tied_to_their_step() {
    let mut session = common::session();
    assert!(matches!(
        session.choose_flavor("vanilla"),
        Err(SessionError::WrongStep {
            step: Step::Start,
            ..
        })
    ));
    assert!(matches!(
        session.choose_date(common::FIRST_PICKUP),
        Err(SessionError::WrongStep { .. })
    ));
    assert_eq!(session.order().flavor(), None);
}

#[test]
fn back_keeps_order_fields() {
    let mut session = common::completed_session();
    session.back().unwrap();
    session.back().unwrap();
    assert_eq!(session.current_step(), Step::Flavor);
    assert_eq!(session.order().quantity(), Some(6));
    assert!(session.order().pickup_date().is_some());
}

#[test]
fn back_then_next_rebuilds_wizard_history() {
    let mut session = common::completed_session();
    session.back().unwrap();
    assert_eq!(
        session.wizard().history(),
        &[Step::Start, Step::Flavor, Step::Pickup]
    );

    assert_eq!(session.next().unwrap(), Step::Summary);
    assert_eq!(
        session.wizard().history(),
        &[Step::Start, Step::Flavor, Step::Pickup, Step::Summary]
    );

    session.cancel();
    assert_eq!(session.wizard().history(), &[Step::Start]);
}

#[test]
fn back_from_start_reports_no_history() {
    let mut session = common::session();
    assert!(matches!(
        session.back(),
        Err(SessionError::Navigation(NavigationError::NoHistory))
    ));
}

#[test]
fn cancel_resets_order_and_wizard() {
    let mut session = common::session();
    session.choose_quantity(6).unwrap();
    session.choose_flavor("chocolate").unwrap();
    session.next().unwrap();
    assert_eq!(session.current_step(), Step::Pickup);

    session.cancel();

    assert_eq!(session.current_step(), Step::Start);
    assert!(!session.can_go_back());
    assert_eq!(session.order().quantity(), None);
    assert_eq!(session.order().flavor(), None);
    assert_eq!(session.order().price(), Money::ZERO);
    assert_eq!(session.order().pickup_options().len(), 4);
}

#[test]
fn listeners_see_every_successful_change() {
    let mut session = common::session();
    let seen: Rc<RefCell<Vec<SessionSnapshot>>> = Rc::default();
    let sink = Rc::clone(&seen);
    session.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

    session.choose_quantity(6).unwrap();
    session.choose_flavor("vanilla").unwrap();
    session.cancel();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].step, Step::Flavor);
    assert_eq!(seen[1].order.price, Money::from_cents(1500));
    assert_eq!(seen[2].step, Step::Start);
    assert_eq!(seen[2].order.price, Money::ZERO);
}

#[test]
fn listeners_are_quiet_on_failure() {
    let mut session = common::session();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    session.subscribe(move |_| *counter.borrow_mut() += 1);

    assert!(session.back().is_err());
    assert!(session.choose_quantity(0).is_err());
    assert!(session.next().is_err());
    assert!(session.choose_quantity(6).is_ok());
    assert!(session.next().is_err());
    assert!(session.choose_date(common::FIRST_PICKUP).is_err());

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn share_sends_summary_to_sink() {
    let session = common::completed_session();
    let mut sink = MemorySink::default();
    let message = session.share(&mut sink, &EnglishLabels).unwrap();

    assert_eq!(sink.messages, vec![message.clone()]);
    assert_eq!(message.subject, "New Cupcake Order");
    assert!(message.body.contains("6 cupcakes"));
}

#[test]
fn share_only_on_summary() {
    let mut session = common::session();
    session.choose_quantity(6).unwrap();
    let mut sink = MemorySink::default();
    let err = session.share(&mut sink, &EnglishLabels).unwrap_err();
    assert!(matches!(err, SessionError::WrongStep { .. }));
    assert!(sink.messages.is_empty());
}

#[test]
fn share_errors_are_wrapped() {
    let err = SessionError::from(ShareError::IncompleteOrder {
        missing: OrderField::Flavor,
    });
    assert_eq!(err.to_string(), "Order is incomplete: flavor not chosen");
}
