//! In-progress order: quantity, flavor, pickup date and the derived price.

mod error;
mod flavor;
mod money;
mod pickup;
mod pricing;
mod state;

pub use error::{OrderError, OrderField};
pub use flavor::{Flavor, UnknownFlavor};
pub use money::Money;
pub use pickup::{pickup_options, Clock, FixedClock, SystemClock, PICKUP_OPTION_COUNT};
pub use pricing::PriceList;
pub use state::{OrderSnapshot, OrderState};
