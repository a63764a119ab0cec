use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Prices in minor currency units (cents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Price of a single cupcake (default: 200).
    #[serde(default = "default_base_price_cents")]
    pub base_price_cents: u64,
    /// Added once per order when a flavor is chosen (default: 300).
    #[serde(default = "default_flavor_surcharge_cents")]
    pub flavor_surcharge_cents: u64,
    /// Prefix for formatted amounts (default: "$").
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

/// Choices offered on the start step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Quantities the customer can pick from (default: 1, 6, 12).
    #[serde(default = "default_quantity_options")]
    pub quantity_options: Vec<u32>,
}

/// Where finished orders are sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShareTarget {
    #[default]
    Clipboard,
    File,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default)]
    pub target: ShareTarget,
    /// Outbox file for the `file` target. Defaults to the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbox: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file. Defaults to the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_base_price_cents() -> u64 {
    200
}

fn default_flavor_surcharge_cents() -> u64 {
    300
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_quantity_options() -> Vec<u32> {
    vec![1, 6, 12]
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price_cents: default_base_price_cents(),
            flavor_surcharge_cents: default_flavor_surcharge_cents(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            quantity_options: default_quantity_options(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
