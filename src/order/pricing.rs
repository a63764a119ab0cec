use crate::config::PricingConfig;
use crate::order::flavor::Flavor;
use crate::order::money::Money;

/// Prices used to derive an order total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceList {
    pub per_item: Money,
    /// Added once per order as soon as a flavor is chosen.
    pub flavor_surcharge: Money,
    pub currency_symbol: String,
}

impl PriceList {
    /// Order total for the given fields. Always computed from scratch.
    pub fn total(&self, quantity: Option<u32>, flavor: Option<Flavor>) -> Money {
        let items = self
            .per_item
            .saturating_mul(u64::from(quantity.unwrap_or(0)));
        match flavor {
            Some(_) => items.saturating_add(self.flavor_surcharge),
            None => items,
        }
    }

    pub fn format(&self, amount: Money) -> String {
        amount.format(&self.currency_symbol)
    }
}

impl Default for PriceList {
    fn default() -> Self {
        Self::from(&PricingConfig::default())
    }
}

impl From<&PricingConfig> for PriceList {
    fn from(config: &PricingConfig) -> Self {
        Self {
            per_item: Money::from_cents(config.base_price_cents),
            flavor_surcharge: Money::from_cents(config.flavor_surcharge_cents),
            currency_symbol: config.currency_symbol.clone(),
        }
    }
}
