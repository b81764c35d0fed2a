//! # Shopping Cart
//!
//! A cart bundled with the notifier its messages go to.

use crate::cart::{Added, Cart, Cleared, Listing, Removed};
use crate::money::CurrencyCode;
use crate::notifier::{ConsoleNotifier, Notifier};
use crate::procedural;

/// Encapsulated cart: owns its items and announces every operation.
///
/// ## Example
///
/// ```rust
/// use basket_core::{MemoryNotifier, ShoppingCart};
///
/// let mut shop = ShoppingCart::with_notifier(MemoryNotifier::new());
/// shop.add_item("Apple", 2.0, 1.5);
/// shop.view_cart();
///
/// assert_eq!(shop.notifier().lines().last().unwrap(), "Total: 3.00 TND");
/// ```
#[derive(Debug, Clone)]
pub struct ShoppingCart<N: Notifier = ConsoleNotifier> {
    cart: Cart,
    notifier: N,
}

impl ShoppingCart<ConsoleNotifier> {
    /// Create an empty cart that prints to stdout
    pub fn new() -> Self {
        Self::with_notifier(ConsoleNotifier)
    }
}

impl Default for ShoppingCart<ConsoleNotifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Notifier> ShoppingCart<N> {
    /// Create an empty cart reporting to `notifier`
    pub fn with_notifier(notifier: N) -> Self {
        Self {
            cart: Cart::new(),
            notifier,
        }
    }

    /// Builder: price the (still empty) cart in another currency
    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.cart = Cart::with_currency(currency);
        self
    }

    /// Add an item and announce it
    pub fn add_item(&mut self, name: impl Into<String>, quantity: f64, unit_price: f64) -> Added {
        procedural::add_item(&mut self.cart, &mut self.notifier, name, quantity, unit_price)
    }

    /// Print the cart contents and totals
    pub fn view_cart(&mut self) -> Listing {
        procedural::view_cart(&self.cart, &mut self.notifier)
    }

    /// Remove the first item named `name`, announcing the result
    pub fn remove_item(&mut self, name: &str) -> Removed {
        procedural::remove_item(&mut self.cart, &mut self.notifier, name)
    }

    /// Empty the cart and announce it
    pub fn clear_cart(&mut self) -> Cleared {
        procedural::clear_cart(&mut self.cart, &mut self.notifier)
    }

    /// Read access to the underlying cart
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The notifier messages are sent to
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable access to the notifier
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Split into the cart and its notifier
    pub fn into_parts(self) -> (Cart, N) {
        (self.cart, self.notifier)
    }
}
