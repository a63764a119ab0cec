//! Display text for stable identifiers.
//!
//! Core types only hold ids ([`Step`], [`Flavor`], raw quantities); every
//! user-facing string goes through a [`Labels`] implementation.

use crate::order::Flavor;
use crate::wizard::Step;

pub trait Labels {
    fn step_title(&self, step: Step) -> &str;
    fn flavor_name(&self, flavor: Flavor) -> &str;
    fn quantity(&self, count: u32) -> String;
    fn subtotal(&self, price: &str) -> String;
    fn summary_subject(&self) -> &str;
    fn summary_quantity(&self) -> &str;
    fn summary_flavor(&self) -> &str;
    fn summary_pickup(&self) -> &str;
    fn summary_total(&self) -> &str;
}

/// Built-in English strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishLabels;

impl Labels for EnglishLabels {
    fn step_title(&self, step: Step) -> &str {
        match step {
            Step::Start => "Cupcake",
            Step::Flavor => "Choose Flavor",
            Step::Pickup => "Choose Pickup Date",
            Step::Summary => "Order Summary",
        }
    }

    fn flavor_name(&self, flavor: Flavor) -> &str {
        match flavor {
            Flavor::Vanilla => "Vanilla",
            Flavor::Chocolate => "Chocolate",
            Flavor::RedVelvet => "Red Velvet",
            Flavor::SaltedCaramel => "Salted Caramel",
            Flavor::Coffee => "Coffee",
        }
    }

    fn quantity(&self, count: u32) -> String {
        if count == 1 {
            "1 cupcake".to_string()
        } else {
            format!("{} cupcakes", count)
        }
    }

    fn subtotal(&self, price: &str) -> String {
        format!("Subtotal {}", price)
    }

    fn summary_subject(&self) -> &str {
        "New Cupcake Order"
    }

    fn summary_quantity(&self) -> &str {
        "Quantity"
    }

    fn summary_flavor(&self) -> &str {
        "Flavor"
    }

    fn summary_pickup(&self) -> &str {
        "Pickup date"
    }

    fn summary_total(&self) -> &str {
        "Total"
    }
}
