//! # Quote Commands
//!
//! Tariff calculation and the live weight-limit check.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculation Flow                                     │
//! │                                                                         │
//! │  --country "France" --weight "120"                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  itps_core::quote(rates, country, weight, tax_rate)                     │
//! │         │                                                               │
//! │         ├── Err ──► ApiError (VALIDATION_ERROR / NOT_FOUND / ...)       │
//! │         ▼                                                               │
//! │  TariffQuote ──► BreakdownView::from_quote ──► QuoteResponse            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use itps_core::validation::{parse_weight_input, validate_country_selection};
use itps_core::{check_weight_limit, quote, CoreError, TariffQuote};
use itps_receipt::{render_text, BreakdownView};

use crate::error::ApiError;
use crate::state::AppState;

/// A computed quote plus its display rows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub quote: TariffQuote,
    pub view: BreakdownView,
}

impl QuoteResponse {
    pub fn to_text(&self) -> String {
        render_text(&self.quote)
    }
}

/// Calculates the tariff for one packet.
///
/// ## User Workflow
/// ```text
/// $ itps quote --country France --weight 120
/// ITPS Tariff: France · 120 g (max 2 kg)
/// --------------------------------------------------------
/// Base Tariff (First 50g)                        Rs.250.00
///   Rs.250 for first 50g
/// Additional Weight Charge                       Rs.100.00
///   2 x Rs.50 (70g extra → 2 slabs)
/// Subtotal (before GST)                          Rs.350.00
/// GST @ 18%                                       Rs.63.00
/// ========================================================
/// TOTAL PAYABLE                                  Rs.413.00
/// ```
pub fn get_quote(state: &AppState, country: &str, weight: &str) -> Result<QuoteResponse, ApiError> {
    debug!(country = %country, weight = %weight, "get_quote command");

    let quote = quote(&state.rates, country, weight, state.config.tax_rate).map_err(|e| {
        if e.is_input_error() {
            warn!(country = %country, weight = %weight, "Quote rejected: {}", e);
        }
        ApiError::from(e)
    })?;

    let view = BreakdownView::from_quote(&quote);
    Ok(QuoteResponse { quote, view })
}

/// Result of the live weight-limit check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub country: String,
    pub max_weight_label: String,
    /// `None` when the weight is blank or not a whole number.
    pub weight_grams: Option<i64>,
    /// `None` together with `weight_grams`.
    pub within_limit: Option<bool>,
    pub warning: Option<String>,
}

impl CheckResponse {
    pub fn to_text(&self) -> String {
        match (&self.warning, self.weight_grams) {
            (Some(warning), _) => format!("⚠ {}\n", warning),
            (None, Some(_)) => {
                format!("OK (max {} for {})\n", self.max_weight_label, self.country)
            }
            (None, None) => format!(
                "Nothing to check: enter a whole number of grams (max {} for {})\n",
                self.max_weight_label, self.country
            ),
        }
    }
}

/// Checks a weight against the destination's limit without pricing it.
///
/// Mirrors the warning shown while the weight is typed: it only fires for a
/// parseable weight above the maximum. Blank or malformed weights produce no
/// verdict (`weight_grams` is `None`); `quote` rejects them.
pub fn check_weight(state: &AppState, country: &str, weight: &str) -> Result<CheckResponse, ApiError> {
    debug!(country = %country, weight = %weight, "check_weight command");

    let country = validate_country_selection(country).map_err(CoreError::from)?;
    let record = state.rates.find(country)?;

    let weight_grams = parse_weight_input(weight).ok();
    let warning = weight_grams
        .and_then(|grams| check_weight_limit(record, grams).err())
        .map(|e| e.to_string());

    Ok(CheckResponse {
        country: record.country.clone(),
        max_weight_label: record.max_weight_label.clone(),
        weight_grams,
        within_limit: weight_grams.map(|_| warning.is_none()),
        warning,
    })
}
