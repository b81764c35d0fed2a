//! # Cart Scripts
//!
//! A run of cart operations described in TOML.
//! The binary loads one from `CART_SCRIPT`, or falls back to [`CartScript::demo`].
//!
//! ```toml
//! currency = "TND"
//!
//! [[steps]]
//! action = "add"
//! name = "Apple"
//! quantity = 2
//! unit_price = 1.5
//!
//! [[steps]]
//! action = "view"
//! ```

use crate::error::{CartError, CartResult};
use crate::money::CurrencyCode;
use crate::notifier::Notifier;
use crate::shopping_cart::ShoppingCart;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single cart operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Append a line item
    Add {
        name: String,
        quantity: f64,
        unit_price: f64,
    },
    /// Show items and totals
    #[serde(alias = "list")]
    View,
    /// Remove the first item with this name
    Remove { name: String },
    /// Empty the cart
    Clear,
}

impl Step {
    /// Apply this step to `cart`
    pub fn apply<N: Notifier>(&self, cart: &mut ShoppingCart<N>) {
        match self {
            Step::Add {
                name,
                quantity,
                unit_price,
            } => {
                cart.add_item(name.as_str(), *quantity, *unit_price);
            }
            Step::View => {
                cart.view_cart();
            }
            Step::Remove { name } => {
                cart.remove_item(name);
            }
            Step::Clear => {
                cart.clear_cart();
            }
        }
    }
}

/// An ordered list of steps, optionally with its own currency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartScript {
    /// Overrides the configured currency when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyCode>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

impl CartScript {
    /// The Apple/Orange walkthrough: add two items, view, remove one, view, clear, view
    pub fn demo() -> Self {
        Self {
            currency: None,
            steps: vec![
                Step::Add {
                    name: "Apple".to_string(),
                    quantity: 2.0,
                    unit_price: 1.5,
                },
                Step::Add {
                    name: "Orange".to_string(),
                    quantity: 3.0,
                    unit_price: 2.0,
                },
                Step::View,
                Step::Remove {
                    name: "Apple".to_string(),
                },
                Step::View,
                Step::Clear,
                Step::View,
            ],
        }
    }

    /// Parse a script from a TOML string
    pub fn from_toml(toml_str: &str) -> CartResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a script file
    pub fn load(path: impl AsRef<Path>) -> CartResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CartError::ScriptRead {
            path: path.display().to_string(),
            source,
        })?;
        let script = Self::from_toml(&content)?;
        tracing::info!("Loaded {} steps from {}", script.steps.len(), path.display());
        Ok(script)
    }

    /// Currency to use: the script's own, else `fallback`
    pub fn currency_or(&self, fallback: &CurrencyCode) -> CurrencyCode {
        self.currency.clone().unwrap_or_else(|| fallback.clone())
    }

    /// Apply every step in order
    pub fn run<N: Notifier>(&self, cart: &mut ShoppingCart<N>) {
        for step in &self.steps {
            step.apply(cart);
        }
    }
}
