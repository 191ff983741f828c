//! CLI configuration.

use abhiram_commerce::Currency;
use abhiram_observability::{LogFormat, LogLevel};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["abhiram.toml", ".abhiram.toml", "abhiram.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Checkout settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Session logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Storefront settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name shown in headers and receipts.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Currency new carts are priced in.
    #[serde(default)]
    pub currency: Currency,

    /// Whether sessions start with the demo cart.
    #[serde(default = "default_true")]
    pub seed_demo_cart: bool,
}

fn default_store_name() -> String {
    "ABHIRAM".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency: Currency::default(),
            seed_demo_cart: true,
        }
    }
}

/// Checkout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated processing time before the receipt is shown.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    1000
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

/// Session logging settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

/// Generate a default abhiram.toml config file.
pub fn generate_default_config() -> String {
    r#"# ABHIRAM storefront configuration

[store]
name = "ABHIRAM"
# One of INR, USD, EUR, GBP
currency = "INR"
# Start every session with the demo T-shirt and watch in the cart
seed_demo_cart = true

[checkout]
# Simulated processing time before the receipt is shown
delay_ms = 1000

[logging]
# trace, debug, info, warn or error
level = "info"
# human or json
format = "human"
"#
    .to_string()
}
