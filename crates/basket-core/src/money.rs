//! # Money Formatting
//!
//! Currency token and amount display for basket-rs.
//! Amounts stay as `f64` everywhere and are only rounded when rendered.
//! Rounding works on the exact binary value and takes halves away from zero,
//! so `0.125` shows as `0.13` and `-0.125` as `-0.13`.

use crate::error::{CartError, CartResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default currency token (Tunisian dinar)
pub const DEFAULT_CURRENCY: &str = "TND";

/// Three-letter currency code shown after every amount (e.g. "TND").
///
/// This is a display token only. There is no conversion between codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parse a currency code, normalizing to upper-case
    pub fn parse(code: &str) -> CartResult<Self> {
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CartError::InvalidCurrency {
                code: code.to_string(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_string())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

/// Format an amount with two decimals and the currency suffix (e.g. "3.00 TND")
pub fn format_amount(amount: f64, currency: &CurrencyCode) -> String {
    // Sign is applied to the rounded magnitude; -0.0 shows as 0.00
    let sign = if amount < 0.0 { "-" } else { "" };
    match Decimal::from_f64_retain(amount.abs()) {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            format!("{}{} {}", sign, rounded, currency)
        }
        // NaN, infinities and values beyond Decimal's range
        None => format!("{:.2} {}", amount, currency),
    }
}
