//! # Runner
//!
//! Resolves the script to run and drives it against a fresh cart.

use crate::config::AppConfig;
use basket_core::{CartResult, CartScript, Notifier, ShoppingCart};
use tracing::{debug, info};

/// Load the configured script, or the demo when none is configured
pub fn resolve_script(config: &AppConfig) -> CartResult<CartScript> {
    match &config.script {
        Some(path) => CartScript::load(path),
        None => {
            info!("No CART_SCRIPT set, running the built-in demo");
            Ok(CartScript::demo())
        }
    }
}

/// Run `script` on an empty cart that reports to `notifier`, returning the final cart
pub fn run<N: Notifier>(config: &AppConfig, script: &CartScript, notifier: N) -> ShoppingCart<N> {
    let currency = script.currency_or(&config.currency);
    info!("Currency: {}", currency);

    let mut shop = ShoppingCart::with_notifier(notifier).with_currency(currency);
    script.run(&mut shop);

    match serde_json::to_string(shop.cart()) {
        Ok(snapshot) => debug!(cart = %snapshot, "final cart"),
        Err(e) => debug!("Could not serialize final cart: {}", e),
    }

    shop
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::{CurrencyCode, MemoryNotifier, Step};

    #[test]
    fn test_resolve_demo_by_default() {
        let script = resolve_script(&AppConfig::default()).unwrap();
        assert_eq!(script, CartScript::demo());
    }

    #[test]
    fn test_resolve_missing_script_fails() {
        let config = AppConfig::from_vars(None, Some("/nonexistent/basket.toml".into())).unwrap();
        assert!(resolve_script(&config).is_err());
    }

    #[test]
    fn test_sample_script_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/cart.toml");
        let config = AppConfig::from_vars(None, Some(path.to_string())).unwrap();
        let script = resolve_script(&config).unwrap();
        let shop = run(&config, &script, MemoryNotifier::new());

        assert_eq!(
            &shop.notifier().lines()[3..],
            &[
                "Cart Items:",
                "Apple (x2) - 3.00 TND",
                "Orange (x3) - 6.00 TND",
                "Apple (x1) - 1.50 TND",
                "Total: 10.50 TND",
                "Apple removed from cart.",
                "Banana not found in cart.",
                "Cart Items:",
                "Orange (x3) - 6.00 TND",
                "Apple (x1) - 1.50 TND",
                "Total: 7.50 TND",
                "Cart cleared.",
                "Your cart is empty.",
            ]
        );
    }

    #[test]
    fn test_run_uses_configured_currency() {
        let config = AppConfig::from_vars(Some("USD".into()), None).unwrap();
        let shop = run(&config, &CartScript::demo(), MemoryNotifier::new());

        assert_eq!(shop.notifier().lines()[5], "Total: 9.00 USD");
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_script_currency_wins() {
        let script = CartScript {
            currency: Some(CurrencyCode::parse("GBP").unwrap()),
            steps: vec![
                Step::Add {
                    name: "Scone".into(),
                    quantity: 3.0,
                    unit_price: 1.2,
                },
                Step::View,
            ],
        };
        let config = AppConfig::from_vars(Some("USD".into()), None).unwrap();
        let shop = run(&config, &script, MemoryNotifier::new());

        assert_eq!(shop.notifier().lines().last().unwrap(), "Total: 3.60 GBP");
        assert_eq!(shop.cart().len(), 1);
    }
}
