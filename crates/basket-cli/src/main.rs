//! # basket
//!
//! In-memory shopping cart runner.
//!
//! ## Usage
//!
//! ```bash
//! # Run the built-in Apple/Orange demo
//! basket
//!
//! # Run your own cart script, priced in euros
//! export CART_SCRIPT=carts/weekly.toml
//! export CART_CURRENCY=EUR
//! basket
//! ```

use basket_cli::{config::AppConfig, runner};
use basket_core::ConsoleNotifier;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only cart output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;
    info!("basket v{} starting", env!("CARGO_PKG_VERSION"));

    let script = runner::resolve_script(&config).map_err(|e| {
        error!("Failed to load cart script: {}", e);
        e
    })?;
    info!("Steps: {}", script.steps.len());

    let shop = runner::run(&config, &script, ConsoleNotifier);
    info!("Done, {} item(s) left in cart", shop.cart().len());

    Ok(())
}
