//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TILLBOOK_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the session banner)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// JSON product list to use instead of the built-in sample menu
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// Development defaults: sample menu, USD.
    fn default() -> Self {
        ConfigState {
            store_name: "Tillbook Café".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TILLBOOK_STORE_NAME`: Override store name
    /// - `TILLBOOK_CURRENCY_CODE`: Override currency code
    /// - `TILLBOOK_CURRENCY_SYMBOL`: Override currency symbol
    /// - `TILLBOOK_CATALOG_PATH`: Load products from this JSON file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("TILLBOOK_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(code) = lookup("TILLBOOK_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Some(symbol) = lookup("TILLBOOK_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(path) = lookup("TILLBOOK_CATALOG_PATH").filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use tillbook_terminal_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(650), "$6.50");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1000), "$10.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_format_currency_no_decimals() {
        let config = ConfigState {
            currency_symbol: "¥".to_string(),
            currency_decimals: 0,
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(350), "¥350");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let env: HashMap<&str, &str> = [
            ("TILLBOOK_STORE_NAME", "Corner Bakery"),
            ("TILLBOOK_CURRENCY_SYMBOL", "€"),
            ("TILLBOOK_CATALOG_PATH", "/srv/menu.json"),
        ]
        .into_iter()
        .collect();

        let config = ConfigState::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.store_name, "Corner Bakery");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/menu.json")));
    }

    #[test]
    fn test_from_lookup_ignores_blank_catalog_path() {
        let config = ConfigState::from_lookup(|key| {
            (key == "TILLBOOK_CATALOG_PATH").then(|| "  ".to_string())
        });
        assert!(config.catalog_path.is_none());
    }
}
