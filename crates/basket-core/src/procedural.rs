//! # Procedural Cart API
//!
//! Free functions over an explicitly passed [`Cart`]. Each function applies
//! the operation, sends its message lines to the notifier, and returns the
//! outcome. [`crate::ShoppingCart`] is built on top of these.

use crate::cart::{Added, Cart, Cleared, Listing, Removed};
use crate::notifier::Notifier;
use tracing::debug;

/// Add an item and announce it
pub fn add_item<N: Notifier>(
    cart: &mut Cart,
    notifier: &mut N,
    name: impl Into<String>,
    quantity: f64,
    unit_price: f64,
) -> Added {
    let added = cart.add(name, quantity, unit_price);
    debug!(item = %added.name, quantity, unit_price, items = cart.len(), "item added");
    notifier.notify(&added.to_string());
    added
}

/// Print the cart contents and totals
pub fn view_cart<N: Notifier>(cart: &Cart, notifier: &mut N) -> Listing {
    let listing = cart.list();
    debug!(items = cart.len(), total = listing.grand_total(), "cart viewed");
    notifier.notify_all(listing.lines());
    listing
}

/// Remove the first item named `name`, reporting whether it was found
pub fn remove_item<N: Notifier>(cart: &mut Cart, notifier: &mut N, name: &str) -> Removed {
    let removed = cart.remove(name);
    debug!(item = name, found = removed.is_found(), items = cart.len(), "remove requested");
    notifier.notify(&removed.to_string());
    removed
}

/// Empty the cart
pub fn clear_cart<N: Notifier>(cart: &mut Cart, notifier: &mut N) -> Cleared {
    let dropped = cart.len();
    let cleared = cart.clear();
    debug!(dropped, "cart cleared");
    notifier.notify(&cleared.to_string());
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::MemoryNotifier;

    #[test]
    fn test_procedural_demo_output() {
        let mut cart = Cart::new();
        let mut out = MemoryNotifier::new();

        add_item(&mut cart, &mut out, "Apple", 2.0, 1.5);
        add_item(&mut cart, &mut out, "Orange", 3.0, 2.0);
        view_cart(&cart, &mut out);
        remove_item(&mut cart, &mut out, "Apple");
        view_cart(&cart, &mut out);
        clear_cart(&mut cart, &mut out);
        view_cart(&cart, &mut out);

        assert_eq!(
            out.lines(),
            &[
                "Apple (x2) added to cart.",
                "Orange (x3) added to cart.",
                "Cart Items:",
                "Apple (x2) - 3.00 TND",
                "Orange (x3) - 6.00 TND",
                "Total: 9.00 TND",
                "Apple removed from cart.",
                "Cart Items:",
                "Orange (x3) - 6.00 TND",
                "Total: 6.00 TND",
                "Cart cleared.",
                "Your cart is empty.",
            ]
        );
    }

    #[test]
    fn test_remove_missing_reports_not_found() {
        let mut cart = Cart::new();
        let mut out = MemoryNotifier::new();

        add_item(&mut cart, &mut out, "Bread", 1.0, 0.9);
        let removed = remove_item(&mut cart, &mut out, "Butter");

        assert!(!removed.is_found());
        assert_eq!(cart.len(), 1);
        assert_eq!(out.lines().last().unwrap(), "Butter not found in cart.");
    }
}
