//! # Error Types
//!
//! Domain-specific error types for itps-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  itps-core errors (this file)                                          │
//! │  ├── CoreError        - Lookup, range and rate table failures          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  itps-receipt errors (separate crate)                                  │
//! │  └── ReceiptError     - Template rendering failures                    │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── ApiError         - What the user sees (text or JSON)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → stdout / exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these errors are fatal: the caller re-prompts for input.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Tariff lookup and calculation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The destination country is absent from the rate table.
    ///
    /// Lookup is an exact, case-sensitive match on the dataset key.
    #[error("Country not found in rate table: {0}")]
    CountryNotFound(String),

    /// The weight is missing, non-numeric, not a whole number, or not positive.
    ///
    /// The wrapped [`ValidationError`] tells the cases apart:
    /// - `Required` - nothing was entered
    /// - `InvalidFormat` - text or a fractional number was entered
    /// - `MustBePositive` - zero or a negative number was entered
    #[error("Invalid weight: {0}")]
    InvalidWeight(ValidationError),

    /// The weight exceeds the maximum the destination accepts.
    ///
    /// ## User Workflow
    /// ```text
    /// Destination: France (max 2 kg)
    /// Weight: 2001
    ///      │
    ///      ▼
    /// WeightOutOfRange { country: "France", weight_grams: 2001, max_grams: 2000, .. }
    ///      │
    ///      ▼
    /// UI shows: "Exceeds maximum limit of 2 kg for France"
    /// ```
    #[error("Exceeds maximum limit of {max_label} for {country}")]
    WeightOutOfRange {
        country: String,
        weight_grams: i64,
        max_grams: u32,
        max_label: String,
    },

    /// The same country appears twice in a rate table dataset.
    #[error("Duplicate country in rate table: {0}")]
    DuplicateCountry(String),

    /// A rate table entry has an unusable field.
    #[error("Invalid rate table entry for {country}: {reason}")]
    InvalidRateTable { country: String, reason: String },

    /// A record's charges are too large to compute a total for.
    #[error("Charges for {country} exceed the largest supported amount")]
    ChargeOverflow { country: String },

    /// The rate table dataset is not valid JSON of the expected shape.
    #[error("Rate table is not valid JSON: {0}")]
    RateTableFormat(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// True for errors the user can fix by changing the country or weight.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CoreError::CountryNotFound(_)
                | CoreError::InvalidWeight(_)
                | CoreError::WeightOutOfRange { .. }
                | CoreError::Validation(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before the tariff engine runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., letters in a numeric field).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
