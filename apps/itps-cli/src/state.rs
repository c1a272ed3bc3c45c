//! # Application State
//!
//! Everything a command needs, loaded once per invocation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Loading                                        │
//! │                                                                         │
//! │  AppConfig ──► rates_path?                                              │
//! │                  │                                                      │
//! │         ┌────────┴─────────┐                                            │
//! │         ▼                  ▼                                            │
//! │   Some(path)            None                                            │
//! │   read file             RateTable::builtin()                            │
//! │   from_json_str()                                                       │
//! │         │                  │                                            │
//! │         └────────┬─────────┘                                            │
//! │                  ▼                                                      │
//! │            AppState { config, rates }   (read-only afterwards)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;

use tracing::info;

use itps_core::RateTable;

use crate::config::AppConfig;
use crate::error::ApiError;

/// Configuration plus the loaded rate table.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub rates: RateTable,
}

impl AppState {
    /// Loads the rate table named by the config, or the built-in one.
    pub fn load(config: AppConfig) -> Result<Self, ApiError> {
        let rates = match &config.rates_path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|e| ApiError::io("read", path, e))?;
                let table = RateTable::from_json_str(&json)?;
                info!(path = %path.display(), countries = table.len(), "Loaded rate table");
                table
            }
            None => RateTable::builtin()?,
        };

        Ok(AppState::new(config, rates))
    }

    /// Wraps an already loaded table.
    pub fn new(config: AppConfig, rates: RateTable) -> Self {
        AppState { config, rates }
    }
}
