mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, MenuConfig, PricingConfig, ShareConfig, ShareTarget};
