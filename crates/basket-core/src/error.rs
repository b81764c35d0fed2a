//! # Cart Error Types
//!
//! Typed errors for the configuration and script layers of basket-rs.
//! Cart operations themselves are total and never produce one of these.

use thiserror::Error;

/// Error type for everything around the cart: config, currency, scripts
#[derive(Debug, Error)]
pub enum CartError {
    /// Configuration errors (bad env values, conflicting settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Currency token is not a three-letter code
    #[error("Invalid currency code: {code:?} (expected three ASCII letters)")]
    InvalidCurrency { code: String },

    /// Cart script could not be read from disk
    #[error("Failed to read cart script {path}: {source}")]
    ScriptRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Cart script is not valid TOML or has unknown steps
    #[error("Cart script parse error: {0}")]
    ScriptParse(String),
}

impl From<toml::de::Error> for CartError {
    fn from(err: toml::de::Error) -> Self {
        CartError::ScriptParse(err.to_string())
    }
}

/// Result type alias for fallible basket-rs operations
pub type CartResult<T> = Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CartError::InvalidCurrency {
            code: "DOLLARS".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid currency code: \"DOLLARS\" (expected three ASCII letters)"
        );

        let err = CartError::Configuration("CART_SCRIPT is empty".into());
        assert_eq!(err.to_string(), "Configuration error: CART_SCRIPT is empty");
    }

    #[test]
    fn test_script_read_keeps_source() {
        use std::error::Error as _;

        let err = CartError::ScriptRead {
            path: "missing.toml".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().starts_with("Failed to read cart script missing.toml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("steps = [").unwrap_err();
        let err: CartError = toml_err.into();
        assert!(matches!(err, CartError::ScriptParse(_)));
    }
}
