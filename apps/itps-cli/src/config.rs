//! # Configuration
//!
//! Runtime settings for the `itps` binary.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--rates`, `--tax-rate`, `--out-dir`)
//! 2. Environment variables (`ITPS_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read once at start-up and never changes afterwards.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Serialize;

use itps_core::validation::validate_tax_rate_bps;
use itps_core::TaxRate;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Rate table JSON file. `None` uses the built-in dataset.
    pub rates_path: Option<PathBuf>,

    /// GST rate applied to every quote.
    pub tax_rate: TaxRate,

    /// Where `itps receipt` writes documents.
    pub receipt_dir: PathBuf,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Rates: built-in dataset
    /// - Tax: 18% GST
    /// - Receipts: `<platform data dir>/receipts`, or `./receipts`
    fn default() -> Self {
        AppConfig {
            rates_path: None,
            tax_rate: TaxRate::gst(),
            receipt_dir: default_receipt_dir(),
        }
    }
}

impl AppConfig {
    /// Creates a config from `ITPS_*` environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ITPS_RATES_PATH`: rate table JSON file
    /// - `ITPS_TAX_RATE`: GST percentage (e.g., "18")
    /// - `ITPS_RECEIPT_DIR`: receipt output directory
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("ITPS_RATES_PATH").filter(|p| !p.trim().is_empty()) {
            config.rates_path = Some(PathBuf::from(path));
        }

        if let Some(rate) = lookup("ITPS_TAX_RATE") {
            config.tax_rate = parse_tax_percentage(&rate, "ITPS_TAX_RATE")?;
        }

        if let Some(dir) = lookup("ITPS_RECEIPT_DIR").filter(|d| !d.trim().is_empty()) {
            config.receipt_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Applies command line flags on top of the environment.
    pub fn apply_overrides(
        &mut self,
        rates_path: Option<PathBuf>,
        tax_rate: Option<&str>,
    ) -> Result<(), ConfigError> {
        if let Some(path) = rates_path {
            self.rates_path = Some(path);
        }

        if let Some(rate) = tax_rate {
            self.tax_rate = parse_tax_percentage(rate, "--tax-rate")?;
        }

        Ok(())
    }
}

/// Parses a percentage such as `"18"` or `"12.5"` into a tax rate.
fn parse_tax_percentage(value: &str, source: &str) -> Result<TaxRate, ConfigError> {
    let pct: f64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(source.to_string()))?;

    if !pct.is_finite() || pct < 0.0 {
        return Err(ConfigError::InvalidValue(source.to_string()));
    }

    let rate = TaxRate::from_percentage(pct);
    validate_tax_rate_bps(rate.bps()).map_err(|_| ConfigError::InvalidValue(source.to_string()))?;

    Ok(rate)
}

fn default_receipt_dir() -> PathBuf {
    ProjectDirs::from("in", "indiapost", "itps")
        .map(|dirs| dirs.data_dir().join("receipts"))
        .unwrap_or_else(|| PathBuf::from("receipts"))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.rates_path, None);
        assert_eq!(config.tax_rate, TaxRate::from_bps(1800));
        assert!(config.receipt_dir.ends_with("receipts"));
    }

    #[test]
    fn test_env_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ITPS_RATES_PATH", "/srv/itps/rates.json"),
            ("ITPS_TAX_RATE", "12.5"),
            ("ITPS_RECEIPT_DIR", "/tmp/receipts"),
        ]))
        .unwrap();

        assert_eq!(config.rates_path, Some(PathBuf::from("/srv/itps/rates.json")));
        assert_eq!(config.tax_rate, TaxRate::from_bps(1250));
        assert_eq!(config.receipt_dir, PathBuf::from("/tmp/receipts"));
    }

    #[test]
    fn test_invalid_tax_rate() {
        for bad in ["abc", "-1", "101", "NaN", "inf"] {
            let err = AppConfig::from_lookup(lookup(&[("ITPS_TAX_RATE", bad)])).unwrap_err();
            assert_eq!(err.to_string(), "Invalid value for ITPS_TAX_RATE");
        }
    }

    #[test]
    fn test_flags_override_env() {
        let mut config =
            AppConfig::from_lookup(lookup(&[("ITPS_TAX_RATE", "12")])).unwrap();
        config
            .apply_overrides(Some(PathBuf::from("rates.json")), Some("0"))
            .unwrap();

        assert_eq!(config.rates_path, Some(PathBuf::from("rates.json")));
        assert!(config.tax_rate.is_zero());

        let err = config.apply_overrides(None, Some("x")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for --tax-rate");
    }
}
