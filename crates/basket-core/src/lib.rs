//! # basket-core
//!
//! Core types for the basket-rs in-memory shopping cart.
//!
//! This crate provides:
//! - `Cart` and `LineItem` with add, list, remove and clear
//! - `ShoppingCart`, a cart bundled with its `Notifier`
//! - `procedural` free functions over an explicitly passed `Cart`
//! - `CartScript` for running a TOML-described sequence of operations
//! - `CartError` for typed error handling around configuration and scripts
//!
//! ## Example
//!
//! ```rust
//! use basket_core::ShoppingCart;
//!
//! let mut shop = ShoppingCart::new();
//! shop.add_item("Apple", 2.0, 1.5);   // Apple (x2) added to cart.
//! shop.add_item("Orange", 3.0, 2.0);  // Orange (x3) added to cart.
//! shop.view_cart();                   // ... Total: 9.00 TND
//! shop.remove_item("Apple");          // Apple removed from cart.
//! shop.clear_cart();                  // Cart cleared.
//! ```

pub mod cart;
pub mod error;
pub mod money;
pub mod notifier;
pub mod procedural;
pub mod script;
pub mod shopping_cart;

// Re-exports for convenience
pub use cart::{Added, Cart, Cleared, LineItem, Listing, ListingRow, Removed};
pub use error::{CartError, CartResult};
pub use money::{format_amount, CurrencyCode, DEFAULT_CURRENCY};
pub use notifier::{BoxedNotifier, ConsoleNotifier, MemoryNotifier, Notifier};
pub use script::{CartScript, Step};
pub use shopping_cart::ShoppingCart;
