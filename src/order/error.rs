use std::fmt;

use thiserror::Error;

/// Order field a rejected value was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Quantity,
    Flavor,
    PickupDate,
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderField::Quantity => "quantity",
            OrderField::Flavor => "flavor",
            OrderField::PickupDate => "pickup date",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`super::OrderState`] setters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: OrderField, reason: String },
}

impl OrderError {
    pub fn field(&self) -> OrderField {
        match self {
            OrderError::InvalidInput { field, .. } => *field,
        }
    }
}
