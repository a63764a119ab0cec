//! Cupcake ordering wizard: quantity, flavor, pickup date, summary.

pub mod config;
pub mod labels;
pub mod logging;
pub mod order;
pub mod session;
pub mod share;
pub mod ui;
pub mod wizard;
