//! # checkout-app
//!
//! Scenario runner for the strategy-checkout demo.
//!
//! This crate provides:
//! - Environment and TOML scenario configuration
//! - Strategy wiring from a scenario into selectors
//! - `run_scenario`, which performs one checkout and writes its transcript
//!
//! ## Environment
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `CHECKOUT_SCENARIO` | Path to a scenario TOML file |
//! | `CHECKOUT_INVOICE_FORMAT` | `pdf` or `text` |
//! | `CHECKOUT_PAYMENT_METHOD` | `credit-card`, `paypal` or `cash-on-delivery` |
//! | `CHECKOUT_OUTPUT` | `text` (default) or `json` |
//! | `CHECKOUT_LOG_FORMAT` | `json` for structured logs on stderr |

pub mod config;
pub mod scenario;
pub mod state;

pub use config::{load_scenario, AppConfig, OutputFormat, ScenarioConfig};
pub use scenario::{run_scenario, run_state, write_json, CheckoutOutcome};
pub use state::AppState;
