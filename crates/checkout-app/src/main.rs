//! # checkout-demo
//!
//! Runs one sample checkout and prints the transcript.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in sample: PDF invoice, credit card payment
//! checkout-demo
//!
//! # Same cart, different strategies
//! CHECKOUT_INVOICE_FORMAT=text CHECKOUT_PAYMENT_METHOD=paypal checkout-demo
//!
//! # Custom scenario, JSON outcome
//! CHECKOUT_SCENARIO=my-cart.toml CHECKOUT_OUTPUT=json checkout-demo
//! ```

use checkout_app::{load_scenario, run_state, write_json, AppConfig, AppState, OutputFormat};
use std::io::{self, Write};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Logs go to stderr; stdout carries the transcript
    let json_logs = config.json_logs;
    tracing_subscriber::registry()
        .with(json_logs.then(|| fmt::layer().json().with_writer(io::stderr)))
        .with((!json_logs).then(|| fmt::layer().with_writer(io::stderr)))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    info!("checkout-demo v{}", env!("CARGO_PKG_VERSION"));
    for warning in &config.warnings {
        warn!("{}", warning);
    }

    let scenario = load_scenario(&config)?;
    let state = AppState::from_scenario(&scenario)?;

    info!(
        "Invoice: {} | Payment: {} | Available payments: {:?}",
        state.invoice_name,
        state.payment_name,
        state.payments.names()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.output {
        OutputFormat::Text => {
            run_state(&mut out, &state)?;
        }
        OutputFormat::Json => {
            let outcome = run_state(&mut io::sink(), &state)?;
            write_json(&mut out, &outcome)?;
        }
    }

    out.flush()?;
    Ok(())
}
