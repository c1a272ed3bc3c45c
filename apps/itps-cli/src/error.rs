//! # API Error Type
//!
//! Unified error type for `itps` commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the itps CLI                           │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ├── CoreError::CountryNotFound ──────► NOT_FOUND       (exit 3) │
//! │         ├── CoreError::InvalidWeight ────────► VALIDATION_ERROR (exit 2)│
//! │         ├── CoreError::WeightOutOfRange ─────► OUT_OF_RANGE    (exit 4) │
//! │         ├── ConfigError ─────────────────────► CONFIG_ERROR    (exit 5) │
//! │         ├── CoreError::InvalidRateTable .. ──► RATE_TABLE_ERROR (exit 6)│
//! │         ├── ReceiptError ────────────────────► RENDER_ERROR    (exit 7) │
//! │         └── std::io::Error ──────────────────► IO_ERROR        (exit 8) │
//! │                                                                         │
//! │  --json:  {"code": "OUT_OF_RANGE", "message": "Exceeds maximum ..."}    │
//! │  text:    error: Exceeds maximum limit of 2 kg for France               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use serde::Serialize;

use itps_core::CoreError;
use itps_receipt::ReceiptError;

use crate::config::ConfigError;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Country not found: Atlantis"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Country absent from the rate table
    NotFound,

    /// Bad weight or missing country
    ValidationError,

    /// Weight above the destination's maximum
    OutOfRange,

    /// Bad environment variable or flag
    ConfigError,

    /// Rate table could not be loaded
    RateTableError,

    /// Receipt template failed
    RenderError,

    /// File system failure
    IoError,
}

impl ErrorCode {
    /// Process exit status for this class of failure.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::ValidationError => 2,
            ErrorCode::NotFound => 3,
            ErrorCode::OutOfRange => 4,
            ErrorCode::ConfigError => 5,
            ErrorCode::RateTableError => 6,
            ErrorCode::RenderError => 7,
            ErrorCode::IoError => 8,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a file system error naming the path involved.
    pub fn io(action: &str, path: &Path, err: std::io::Error) -> Self {
        tracing::error!(path = %path.display(), error = %err, "{} failed", action);
        ApiError::new(
            ErrorCode::IoError,
            format!("Could not {} {}: {}", action, path.display(), err),
        )
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CountryNotFound(country) => ApiError::not_found("Country", &country),
            CoreError::InvalidWeight(e) => ApiError::validation(e.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            e @ CoreError::WeightOutOfRange { .. } => {
                ApiError::new(ErrorCode::OutOfRange, e.to_string())
            }
            e @ (CoreError::DuplicateCountry(_)
            | CoreError::InvalidRateTable { .. }
            | CoreError::ChargeOverflow { .. }
            | CoreError::RateTableFormat(_)) => {
                tracing::error!("Rate table rejected: {}", e);
                ApiError::new(ErrorCode::RateTableError, e.to_string())
            }
        }
    }
}

/// Converts rendering errors to API errors.
impl From<ReceiptError> for ApiError {
    fn from(err: ReceiptError) -> Self {
        tracing::error!("Receipt rendering failed: {}", err);
        ApiError::new(ErrorCode::RenderError, "Could not generate receipt. Please try again.")
    }
}

/// Converts configuration errors to API errors.
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use itps_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::CountryNotFound("Atlantis".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Country not found: Atlantis");

        let err: ApiError = CoreError::InvalidWeight(ValidationError::Required {
            field: "weight".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "weight is required");

        let err: ApiError = CoreError::WeightOutOfRange {
            country: "France".to_string(),
            weight_grams: 2001,
            max_grams: 2000,
            max_label: "2 kg".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.message, "Exceeds maximum limit of 2 kg for France");

        let err: ApiError = CoreError::DuplicateCountry("France".to_string()).into();
        assert_eq!(err.code, ErrorCode::RateTableError);

        let err: ApiError = CoreError::ChargeOverflow {
            country: "France".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::RateTableError);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Country", "Atlantis");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "NOT_FOUND", "message": "Country not found: Atlantis" })
        );
    }

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let codes = [
            ErrorCode::NotFound,
            ErrorCode::ValidationError,
            ErrorCode::OutOfRange,
            ErrorCode::ConfigError,
            ErrorCode::RateTableError,
            ErrorCode::RenderError,
            ErrorCode::IoError,
        ];
        let mut seen: Vec<u8> = codes.iter().map(|c| c.exit_code()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), codes.len());
        assert!(!seen.contains(&0));
    }
}
