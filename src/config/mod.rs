//! Configuration loading for the derivation engine.
//!
//! Display settings (placeholders and currency) are read from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use ess_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Date placeholder: {}", config.config().placeholders.date);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DISPLAY_CONFIG_FILE};
pub use types::{CurrencyConfig, DisplayConfig, Placeholders};
