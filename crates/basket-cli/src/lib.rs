//! # basket-cli
//!
//! Runner for basket-rs: reads configuration from the environment and plays
//! a cart script (or the built-in demo), printing cart messages to stdout.
//!
//! ## Environment
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CART_CURRENCY` | `TND` | Currency code shown after amounts |
//! | `CART_SCRIPT` | unset | TOML cart script to run |
//! | `RUST_LOG` | `info` | Log filter (logs go to stderr) |

pub mod config;
pub mod runner;

pub use config::AppConfig;
