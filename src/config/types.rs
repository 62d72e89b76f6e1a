//! Configuration types for display derivations.
//!
//! These structures are deserialized from `display.yaml`. Their defaults
//! match the placeholders used by the pure formatters in
//! [`crate::calculation`].

use serde::{Deserialize, Serialize};

use crate::calculation::{DATE_PLACEHOLDER, DURATION_PLACEHOLDER, PERCENTAGE_PLACEHOLDER};

/// Placeholder strings for values that cannot be derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholders {
    /// Shown for an underivable working duration.
    #[serde(default = "default_duration_placeholder")]
    pub duration: String,
    /// Shown for a missing or unparseable date.
    #[serde(default = "default_date_placeholder")]
    pub date: String,
    /// Shown in place of the attendance card when the history is unavailable.
    #[serde(default = "default_percentage_placeholder")]
    pub percentage: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            duration: default_duration_placeholder(),
            date: default_date_placeholder(),
            percentage: default_percentage_placeholder(),
        }
    }
}

fn default_duration_placeholder() -> String {
    DURATION_PLACEHOLDER.to_string()
}

fn default_date_placeholder() -> String {
    DATE_PLACEHOLDER.to_string()
}

fn default_percentage_placeholder() -> String {
    PERCENTAGE_PLACEHOLDER.to_string()
}

/// Currency presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Symbol prefixed to every amount.
    #[serde(default = "default_currency_symbol")]
    pub symbol: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_currency_symbol(),
        }
    }
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

/// The complete display configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Placeholder strings.
    #[serde(default)]
    pub placeholders: Placeholders,
    /// Currency presentation.
    #[serde(default)]
    pub currency: CurrencyConfig,
}
