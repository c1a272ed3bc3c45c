//! # Validation Module
//!
//! Input validation for the calculator form: destination and weight.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (CLI arguments / browser form)                     │
//! │  └── Raw text as the user typed it                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Country selected?                                                 │
//! │  └── Weight present, a whole number, positive?                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Tariff engine                                                │
//! │  └── Weight within the destination's maximum?                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use itps_core::validation::{parse_weight_input, validate_country_selection};
//!
//! assert_eq!(parse_weight_input(" 120 ").unwrap(), 120);
//! assert!(validate_country_selection("France").is_ok());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const WEIGHT_FIELD: &str = "weight";
const COUNTRY_FIELD: &str = "country";

// =============================================================================
// Selection Validators
// =============================================================================

/// Validates that a destination was selected.
///
/// Only blank input is rejected here; whether the country exists is the
/// rate table's concern. The name is returned untouched because lookup
/// is an exact match.
pub fn validate_country_selection(country: &str) -> ValidationResult<&str> {
    if country.trim().is_empty() {
        return Err(ValidationError::Required {
            field: COUNTRY_FIELD.to_string(),
        });
    }

    Ok(country)
}

// =============================================================================
// Weight Validators
// =============================================================================

/// Parses the weight field as typed by the user.
///
/// ## Rules
/// - Empty or whitespace → `Required`
/// - Fractional (`"12.5"`) → `InvalidFormat` (weights are whole grams)
/// - Anything else non-numeric → `InvalidFormat`
/// - Zero or negative → `MustBePositive`
/// - Digits too large for `i64` saturate to `i64::MAX`, which every
///   destination's limit rejects
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User types weight: "120"                                              │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_weight_input("120") ← THIS FUNCTION                             │
/// │       │                                                                 │
/// │       ├── ""      → Error: "weight is required"                        │
/// │       ├── "12.5"  → Error: "must be a whole number of grams"           │
/// │       ├── "abc"   → Error: "must be a number of grams"                 │
/// │       ├── "0"     → Error: "weight must be positive"                   │
/// │       │                                                                 │
/// │       └── OK(120) → range check against the destination                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Example
/// ```rust
/// use itps_core::validation::parse_weight_input;
/// use itps_core::ValidationError;
///
/// assert_eq!(parse_weight_input("51"), Ok(51));
/// assert!(matches!(parse_weight_input(""), Err(ValidationError::Required { .. })));
/// assert!(matches!(parse_weight_input("0"), Err(ValidationError::MustBePositive { .. })));
/// ```
pub fn parse_weight_input(input: &str) -> ValidationResult<i64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: WEIGHT_FIELD.to_string(),
        });
    }

    let grams: i64 = match input.parse() {
        Ok(grams) => grams,
        Err(_) if looks_fractional(input) => {
            return Err(ValidationError::InvalidFormat {
                field: WEIGHT_FIELD.to_string(),
                reason: "must be a whole number of grams".to_string(),
            });
        }
        // All digits but too long for i64: saturate so the range check sees it
        Err(_) if is_all_digits(unsigned(input)) => {
            if input.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        }
        Err(_) => {
            return Err(ValidationError::InvalidFormat {
                field: WEIGHT_FIELD.to_string(),
                reason: "must be a number of grams".to_string(),
            });
        }
    };

    validate_weight_grams(grams)
}

/// Validates an already numeric weight.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_weight_grams(grams: i64) -> ValidationResult<i64> {
    if grams <= 0 {
        return Err(ValidationError::MustBePositive {
            field: WEIGHT_FIELD.to_string(),
        });
    }

    Ok(grams)
}

/// `"12.5"`, `"-0.5"`, `"7."`: digits with exactly one decimal point.
fn looks_fractional(input: &str) -> bool {
    match unsigned(input).split_once('.') {
        Some((whole, fraction)) => {
            !(whole.is_empty() && fraction.is_empty())
                && whole.chars().all(|c| c.is_ascii_digit())
                && fraction.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

fn unsigned(input: &str) -> &str {
    input.strip_prefix(&['-', '+'][..]).unwrap_or(input)
}

fn is_all_digits(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}

// =============================================================================
// Rate Validators
// =============================================================================

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_country_selection() {
        assert_eq!(validate_country_selection("France"), Ok("France"));
        assert!(matches!(
            validate_country_selection(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_country_selection("   ").is_err());
    }

    #[test]
    fn test_parse_weight_input_valid() {
        assert_eq!(parse_weight_input("1"), Ok(1));
        assert_eq!(parse_weight_input("120"), Ok(120));
        assert_eq!(parse_weight_input("  2000\n"), Ok(2000));
        assert_eq!(parse_weight_input("+75"), Ok(75));
    }

    #[test]
    fn test_empty_and_non_numeric_are_distinguished() {
        assert!(matches!(
            parse_weight_input(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_weight_input("heavy"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_weight_input("120g"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_fractional_weight_rejected() {
        let err = parse_weight_input("12.5").unwrap_err();
        assert_eq!(
            err.to_string(),
            "weight has invalid format: must be a whole number of grams"
        );
        assert!(matches!(
            parse_weight_input("."),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        assert!(matches!(
            parse_weight_input("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_weight_input("-40"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_weight_grams(0).is_err());
        assert!(validate_weight_grams(1).is_ok());
    }

    #[test]
    fn test_overlong_weight_saturates() {
        assert_eq!(parse_weight_input("99999999999999999999"), Ok(i64::MAX));
        assert_eq!(parse_weight_input("+99999999999999999999"), Ok(i64::MAX));
        assert!(matches!(
            parse_weight_input("-99999999999999999999"),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1800).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }
}
