//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use chrono::NaiveDate;
use cupcake::labels::EnglishLabels;
use cupcake::order::{FixedClock, OrderState, PriceList};
use cupcake::session::OrderSession;
use cupcake::share::{MemorySink, ShareSink};
use cupcake::ui::app::App;
use std::sync::Arc;

/// Monday, so the first pickup option is "Mon Mar 4".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date")
}

pub const FIRST_PICKUP: &str = "Mon Mar 4";
pub const LAST_PICKUP: &str = "Thu Mar 7";

pub fn order() -> OrderState {
    OrderState::with_clock(PriceList::default(), Arc::new(FixedClock(today())))
}

pub fn session() -> OrderSession {
    OrderSession::new(order())
}

/// Session already on the summary step with 6 vanilla cupcakes.
pub fn completed_session() -> OrderSession {
    let mut session = session();
    session.choose_quantity(6).expect("quantity");
    session.choose_flavor("vanilla").expect("flavor");
    session.next().expect("to pickup");
    session.choose_date(FIRST_PICKUP).expect("date");
    session.next().expect("to summary");
    session
}

pub fn app_with_sink(sink: Box<dyn ShareSink>) -> App {
    App::new(session(), Box::new(EnglishLabels), sink, vec![1, 6, 12])
}

pub fn app() -> App {
    app_with_sink(Box::new(MemorySink::default()))
}
