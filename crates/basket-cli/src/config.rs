//! # Application Config
//!
//! Runtime settings for the `basket` binary, loaded from environment
//! variables (and a `.env` file if present).

use basket_core::{CartError, CartResult, CurrencyCode};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Currency token printed after every amount
    pub currency: CurrencyCode,
    /// Cart script to run; `None` runs the built-in demo
    pub script: Option<PathBuf>,
}

impl AppConfig {
    /// Load from environment variables.
    ///
    /// - `CART_CURRENCY` (default `TND`)
    /// - `CART_SCRIPT` (optional path)
    pub fn from_env() -> CartResult<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            std::env::var("CART_CURRENCY").ok(),
            std::env::var("CART_SCRIPT").ok(),
        )
    }

    /// Build from explicit values, applying the same defaults as `from_env`
    pub fn from_vars(currency: Option<String>, script: Option<String>) -> CartResult<Self> {
        let currency = match currency {
            Some(code) => CurrencyCode::parse(&code)?,
            None => CurrencyCode::default(),
        };

        let script = match script {
            Some(path) if path.trim().is_empty() => {
                return Err(CartError::Configuration("CART_SCRIPT is set but empty".to_string()))
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        Ok(Self { currency, script })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            script: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::from_vars(None, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.currency.as_str(), "TND");
        assert!(config.script.is_none());
    }

    #[test]
    fn test_app_config_overrides() {
        let config =
            AppConfig::from_vars(Some("eur".to_string()), Some("carts/weekly.toml".to_string()))
                .unwrap();
        assert_eq!(config.currency.as_str(), "EUR");
        assert_eq!(config.script, Some(PathBuf::from("carts/weekly.toml")));
    }

    #[test]
    fn test_invalid_currency() {
        let result = AppConfig::from_vars(Some("EURO".to_string()), None);
        assert!(matches!(result, Err(CartError::InvalidCurrency { .. })));
    }

    #[test]
    fn test_empty_script_path() {
        let result = AppConfig::from_vars(None, Some("  ".to_string()));
        assert!(matches!(result, Err(CartError::Configuration(_))));
    }
}
