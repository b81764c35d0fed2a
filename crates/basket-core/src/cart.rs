//! # Cart Types
//!
//! The cart data model and its four operations: add, list, remove, clear.
//!
//! Every operation is total. Mutations return a typed outcome whose
//! `Display` is the message shown to the shopper, so callers decide where
//! the text goes (see [`crate::notifier`]).
//!
//! ```text
//! add("Apple", 2, 1.5)   ──► items.push(..)          ──► Added
//! list()                 ──► (read only)             ──► Listing
//! remove("Apple")        ──► items.remove(first ==)  ──► Removed
//! clear()                ──► items.clear()           ──► Cleared
//! ```

use crate::money::{format_amount, CurrencyCode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One product entry added to the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name (not unique within a cart)
    pub name: String,

    /// Quantity, taken as given
    pub quantity: f64,

    /// Price per unit, taken as given
    pub unit_price: f64,
}

impl LineItem {
    /// Create a line item
    pub fn new(name: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Calculate the total price for this line item
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// An ordered, in-memory shopping cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Line items in insertion order
    items: Vec<LineItem>,

    /// Currency token used when rendering amounts
    #[serde(default)]
    currency: CurrencyCode,
}

impl Cart {
    /// Create an empty cart priced in the default currency
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart priced in `currency`
    pub fn with_currency(currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Append a line item. Existing entries with the same name are left alone.
    pub fn add(&mut self, name: impl Into<String>, quantity: f64, unit_price: f64) -> Added {
        let item = LineItem::new(name, quantity, unit_price);
        let added = Added {
            name: item.name.clone(),
            quantity: item.quantity,
        };
        self.items.push(item);
        added
    }

    /// Snapshot the cart contents with per-line and grand totals
    pub fn list(&self) -> Listing {
        let rows = self
            .items
            .iter()
            .map(|item| ListingRow {
                name: item.name.clone(),
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();

        Listing {
            rows,
            grand_total: self.grand_total(),
            currency: self.currency.clone(),
        }
    }

    /// Remove the first item whose name matches exactly
    pub fn remove(&mut self, name: &str) -> Removed {
        match self.items.iter().position(|item| item.name == name) {
            Some(index) => Removed::Item(self.items.remove(index)),
            None => Removed::NotFound(name.to_string()),
        }
    }

    /// Drop every line item
    pub fn clear(&mut self) -> Cleared {
        self.items.clear();
        Cleared
    }

    /// Sum of unrounded line totals
    pub fn grand_total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Line items in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of line items (not summed quantities)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currency used when rendering amounts
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }
}

/// Outcome of [`Cart::add`]
#[derive(Debug, Clone, PartialEq)]
pub struct Added {
    pub name: String,
    pub quantity: f64,
}

impl fmt::Display for Added {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (x{}) added to cart.", self.name, self.quantity)
    }
}

/// Outcome of [`Cart::remove`]
#[derive(Debug, Clone, PartialEq)]
pub enum Removed {
    /// The first matching item, now out of the cart
    Item(LineItem),
    /// No item had the requested name
    NotFound(String),
}

impl Removed {
    /// Check if an item was actually removed
    pub fn is_found(&self) -> bool {
        matches!(self, Removed::Item(_))
    }
}

impl fmt::Display for Removed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Removed::Item(item) => write!(f, "{} removed from cart.", item.name),
            Removed::NotFound(name) => write!(f, "{} not found in cart.", name),
        }
    }
}

/// Outcome of [`Cart::clear`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cleared;

impl fmt::Display for Cleared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cart cleared.")
    }
}

/// One row of a [`Listing`]
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    pub name: String,
    pub quantity: f64,
    pub line_total: f64,
}

/// Read-only view of the cart as produced by [`Cart::list`]
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    rows: Vec<ListingRow>,
    grand_total: f64,
    currency: CurrencyCode,
}

impl Listing {
    pub const EMPTY_MESSAGE: &'static str = "Your cart is empty.";
    pub const HEADER: &'static str = "Cart Items:";

    /// Rows in insertion order
    pub fn rows(&self) -> &[ListingRow] {
        &self.rows
    }

    /// Sum of unrounded line totals
    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    /// Check if the listing has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Message lines in display order.
    ///
    /// An empty cart yields the single empty-cart line; otherwise a header,
    /// one line per item, and the total.
    pub fn lines(&self) -> Vec<String> {
        if self.rows.is_empty() {
            return vec![Self::EMPTY_MESSAGE.to_string()];
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(Self::HEADER.to_string());
        for row in &self.rows {
            lines.push(format!(
                "{} (x{}) - {}",
                row.name,
                row.quantity,
                format_amount(row.line_total, &self.currency)
            ));
        }
        lines.push(format!(
            "Total: {}",
            format_amount(self.grand_total, &self.currency)
        ));
        lines
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
