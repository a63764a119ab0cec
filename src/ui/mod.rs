//! Terminal rendering of the ordering wizard.
//!
//! Presentation only: every order or navigation change goes through the
//! [`crate::session::OrderSession`] owned by [`app::App`].

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod options;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
