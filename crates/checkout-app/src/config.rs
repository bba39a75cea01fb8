//! # Configuration
//!
//! Environment-driven application settings and the TOML scenario file that
//! describes the cart, customer and payment details to run.

use checkout_core::{Currency, Customer};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Built-in scenario, used when no scenario file is found
pub const SAMPLE_SCENARIO: &str = include_str!("../config/scenario.toml");

/// Where the scenario file is looked for when `CHECKOUT_SCENARIO` is unset
const SCENARIO_PATHS: [&str; 3] = [
    "config/scenario.toml",
    "crates/checkout-app/config/scenario.toml",
    "../config/scenario.toml",
];

/// How the outcome is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Console transcript, one line per event
    #[default]
    Text,
    /// Pretty-printed JSON of the checkout outcome
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Explicit scenario file (`CHECKOUT_SCENARIO`)
    pub scenario_path: Option<PathBuf>,
    /// Invoice strategy override (`CHECKOUT_INVOICE_FORMAT`)
    pub invoice_override: Option<String>,
    /// Payment strategy override (`CHECKOUT_PAYMENT_METHOD`)
    pub payment_override: Option<String>,
    /// Stdout format (`CHECKOUT_OUTPUT`)
    pub output: OutputFormat,
    /// Emit logs as JSON (`CHECKOUT_LOG_FORMAT=json`)
    pub json_logs: bool,
    /// Fallbacks taken while reading the environment, logged once the
    /// subscriber is up
    pub warnings: Vec<String>,
}

impl AppConfig {
    /// Load from environment variables (and `.env` if present)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut warnings = Vec::new();

        let output = match non_empty("CHECKOUT_OUTPUT") {
            Some(value) => OutputFormat::parse(&value).unwrap_or_else(|| {
                warnings.push(format!("Unknown CHECKOUT_OUTPUT {:?}, using text", value));
                OutputFormat::Text
            }),
            None => OutputFormat::Text,
        };

        Self {
            scenario_path: non_empty("CHECKOUT_SCENARIO").map(PathBuf::from),
            invoice_override: non_empty("CHECKOUT_INVOICE_FORMAT"),
            payment_override: non_empty("CHECKOUT_PAYMENT_METHOD"),
            output,
            json_logs: non_empty("CHECKOUT_LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            warnings,
        }
    }
}

/// One `[[items]]` entry
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEntry {
    pub code: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
}

/// `[credit_card]` section
#[derive(Clone, Deserialize)]
pub struct CreditCardConfig {
    pub holder: String,
    pub number: String,
    pub cvv: String,
    pub expiry: String,
}

impl std::fmt::Debug for CreditCardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreditCardConfig")
            .field("holder", &self.holder)
            .field("number", &"[REDACTED]")
            .field("cvv", &"[REDACTED]")
            .field("expiry", &self.expiry)
            .finish()
    }
}

/// `[paypal]` section
#[derive(Clone, Deserialize)]
pub struct PaypalConfig {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for PaypalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaypalConfig")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn default_invoice() -> String {
    "pdf".to_string()
}

fn default_payment() -> String {
    "credit-card".to_string()
}

/// A complete checkout scenario
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub currency: Currency,

    /// Invoice strategy name
    #[serde(default = "default_invoice")]
    pub invoice: String,

    /// Payment strategy name
    #[serde(default = "default_payment")]
    pub payment: String,

    #[serde(default)]
    pub items: Vec<ItemEntry>,

    pub customer: Customer,

    #[serde(default)]
    pub credit_card: Option<CreditCardConfig>,

    #[serde(default)]
    pub paypal: Option<PaypalConfig>,
}

impl ScenarioConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// The built-in sample scenario
    pub fn sample() -> Result<Self, toml::de::Error> {
        Self::from_toml(SAMPLE_SCENARIO)
    }

    /// Read and parse a scenario file
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        Self::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    /// Apply strategy overrides from the app config
    pub fn with_overrides(mut self, config: &AppConfig) -> Self {
        if let Some(invoice) = &config.invoice_override {
            self.invoice = invoice.clone();
        }
        if let Some(payment) = &config.payment_override {
            self.payment = payment.clone();
        }
        self
    }
}

/// Load the scenario named by the config, or the first one found on the
/// default paths, or the built-in sample.
pub fn load_scenario(config: &AppConfig) -> anyhow::Result<ScenarioConfig> {
    let scenario = match &config.scenario_path {
        Some(path) => ScenarioConfig::from_path(path)?,
        None => match SCENARIO_PATHS.iter().map(|p| Path::new(*p)).find(|p| p.is_file()) {
            Some(path) => {
                tracing::info!("Loading scenario from {}", path.display());
                ScenarioConfig::from_path(path)?
            }
            None => {
                tracing::warn!("No scenario file found, using built-in sample");
                ScenarioConfig::sample()
                    .map_err(|e| anyhow::anyhow!("Built-in scenario is invalid: {}", e))?
            }
        },
    };

    Ok(scenario.with_overrides(config))
}
