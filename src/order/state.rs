use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::order::error::{OrderError, OrderField};
use crate::order::flavor::Flavor;
use crate::order::money::Money;
use crate::order::pickup::{pickup_options, Clock, SystemClock};
use crate::order::pricing::PriceList;

/// Immutable copy of the order fields, handed to renderers and listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSnapshot {
    pub quantity: Option<u32>,
    pub flavor: Option<Flavor>,
    pub pickup_date: Option<String>,
    pub pickup_options: Vec<String>,
    pub price: Money,
    pub price_formatted: String,
}

/// Fields of the in-progress order.
///
/// `price` is derived from `quantity` and `flavor` and recomputed on every
/// mutation. `pickup_options` is computed once per order lifecycle, at
/// creation and on [`OrderState::reset`].
pub struct OrderState {
    quantity: Option<u32>,
    flavor: Option<Flavor>,
    pickup_date: Option<String>,
    pickup_options: Vec<String>,
    price: Money,
    prices: PriceList,
    clock: Arc<dyn Clock>,
}

impl OrderState {
    pub fn new(prices: PriceList) -> Self {
        Self::with_clock(prices, Arc::new(SystemClock))
    }

    pub fn with_clock(prices: PriceList, clock: Arc<dyn Clock>) -> Self {
        let pickup_options = pickup_options(clock.today());
        Self {
            quantity: None,
            flavor: None,
            pickup_date: None,
            pickup_options,
            price: Money::ZERO,
            prices,
            clock,
        }
    }

    pub fn quantity(&self) -> Option<u32> {
        self.quantity
    }

    pub fn flavor(&self) -> Option<Flavor> {
        self.flavor
    }

    pub fn pickup_date(&self) -> Option<&str> {
        self.pickup_date.as_deref()
    }

    pub fn pickup_options(&self) -> &[String] {
        &self.pickup_options
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), OrderError> {
        if quantity == 0 {
            return Err(rejected(
                OrderField::Quantity,
                "quantity must be positive".to_string(),
            ));
        }
        self.quantity = Some(quantity);
        self.update_price();
        Ok(())
    }

    /// Set the flavor by its stable id (e.g. `"red_velvet"`).
    pub fn set_flavor(&mut self, id: &str) -> Result<(), OrderError> {
        let flavor = id.parse::<Flavor>().map_err(|unknown| {
            rejected(
                OrderField::Flavor,
                format!("unknown flavor '{}'", unknown.0),
            )
        })?;
        self.flavor = Some(flavor);
        self.update_price();
        Ok(())
    }

    pub fn set_date(&mut self, date: &str) -> Result<(), OrderError> {
        if !self.pickup_options.iter().any(|option| option == date) {
            return Err(rejected(
                OrderField::PickupDate,
                format!("'{}' is not an offered pickup date", date),
            ));
        }
        self.pickup_date = Some(date.to_string());
        Ok(())
    }

    /// Clear the order and recompute pickup options from today's date.
    pub fn reset(&mut self) {
        self.quantity = None;
        self.flavor = None;
        self.pickup_date = None;
        self.pickup_options = pickup_options(self.clock.today());
        self.update_price();
        tracing::debug!(options = ?self.pickup_options, "Order reset");
    }

    pub fn price_formatted(&self) -> String {
        self.prices.format(self.price)
    }

    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            quantity: self.quantity,
            flavor: self.flavor,
            pickup_date: self.pickup_date.clone(),
            pickup_options: self.pickup_options.clone(),
            price: self.price,
            price_formatted: self.price_formatted(),
        }
    }

    fn update_price(&mut self) {
        self.price = self.prices.total(self.quantity, self.flavor);
    }
}

impl fmt::Debug for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderState")
            .field("quantity", &self.quantity)
            .field("flavor", &self.flavor)
            .field("pickup_date", &self.pickup_date)
            .field("pickup_options", &self.pickup_options)
            .field("price", &self.price)
            .finish_non_exhaustive()
    }
}

fn rejected(field: OrderField, reason: String) -> OrderError {
    tracing::warn!(%field, %reason, "Rejected order input");
    OrderError::InvalidInput { field, reason }
}
