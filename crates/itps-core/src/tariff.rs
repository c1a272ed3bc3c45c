//! # Tariff Engine
//!
//! Turns a destination's record and a packet weight into itemised charges.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  weight = 120 g, France (Rs.250 first 50g, Rs.50 per extra 50g)        │
//! │                                                                         │
//! │  base            = Rs.250                                               │
//! │  extra weight    = 120 - 50 = 70 g                                      │
//! │  slabs           = ceil(70 / 50) = 2     ← 50g or part thereof          │
//! │  additional      = 2 × Rs.50 = Rs.100                                   │
//! │  subtotal        = Rs.350                                               │
//! │  GST @ 18%       = Rs.63.00                                             │
//! │  total           = Rs.413.00                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure: same input, same output, no side effects.

use crate::error::{CoreError, CoreResult};
use crate::rates::RateTable;
use crate::types::{TariffBreakdown, TariffQuote, TariffRecord, TaxRate};
use crate::validation::{
    parse_weight_input, validate_country_selection, validate_tax_rate_bps, validate_weight_grams,
};
use crate::{ADDITIONAL_SLAB_GRAMS, FIRST_SLAB_GRAMS};

/// Number of 50 gram slabs beyond the first 50 grams, rounded up.
///
/// ## Example
/// ```rust
/// use itps_core::additional_slab_count;
///
/// assert_eq!(additional_slab_count(50), 0);
/// assert_eq!(additional_slab_count(51), 1);
/// assert_eq!(additional_slab_count(100), 1);
/// assert_eq!(additional_slab_count(101), 2);
/// ```
pub fn additional_slab_count(weight_grams: u32) -> u32 {
    weight_grams
        .saturating_sub(FIRST_SLAB_GRAMS)
        .div_ceil(ADDITIONAL_SLAB_GRAMS)
}

/// Checks a weight against the destination's maximum.
///
/// This is the check the form runs while the user is still typing, so it
/// says nothing about zero or negative weights.
pub fn check_weight_limit(record: &TariffRecord, weight_grams: i64) -> CoreResult<()> {
    if !record.accepts(weight_grams) {
        return Err(CoreError::WeightOutOfRange {
            country: record.country.clone(),
            weight_grams,
            max_grams: record.max_weight_grams,
            max_label: record.max_weight_label.clone(),
        });
    }

    Ok(())
}

/// Computes the itemised tariff for a packet.
///
/// ## Errors
/// - `InvalidWeight` if `weight_grams <= 0`
/// - `WeightOutOfRange` if `weight_grams > record.max_weight_grams`
/// - `Validation` if the tax rate is above 100%
/// - `ChargeOverflow` if the record's charges overflow `i64` paise
///
/// ## Example
/// ```rust
/// use itps_core::{compute_tariff, Money, TariffRecord, TaxRate};
///
/// let record = TariffRecord::new("France", 2000, Money::from_rupees(250), Money::from_rupees(50));
/// let breakdown = compute_tariff(&record, 120, TaxRate::gst()).unwrap();
///
/// assert_eq!(breakdown.base_charge, Money::from_rupees(250));
/// assert_eq!(breakdown.additional_charge, Money::from_rupees(100));
/// assert_eq!(breakdown.subtotal, Money::from_rupees(350));
/// assert_eq!(breakdown.tax_amount.to_string(), "Rs.63.00");
/// assert_eq!(breakdown.total.to_string(), "Rs.413.00");
/// ```
pub fn compute_tariff(
    record: &TariffRecord,
    weight_grams: i64,
    tax_rate: TaxRate,
) -> CoreResult<TariffBreakdown> {
    let weight_grams = validate_weight_grams(weight_grams).map_err(CoreError::InvalidWeight)?;
    validate_tax_rate_bps(tax_rate.bps())?;
    check_weight_limit(record, weight_grams)?;

    // 0 < weight <= max_weight_grams, so it fits in u32
    let additional_slab_count = additional_slab_count(weight_grams as u32);

    let overflow = || CoreError::ChargeOverflow {
        country: record.country.clone(),
    };

    let base_charge = record.first_50_charge;
    let additional_charge = record
        .additional_slab_charge
        .checked_mul(additional_slab_count)
        .ok_or_else(overflow)?;
    let subtotal = base_charge
        .checked_add(additional_charge)
        .ok_or_else(overflow)?;
    let tax_amount = subtotal.calculate_tax(tax_rate).ok_or_else(overflow)?;
    let total = subtotal.checked_add(tax_amount).ok_or_else(overflow)?;

    Ok(TariffBreakdown {
        base_charge,
        additional_slab_count,
        additional_charge,
        subtotal,
        tax_rate,
        tax_amount,
        total,
    })
}

/// [`compute_tariff`] at the standard 18% GST.
pub fn compute_gst_tariff(record: &TariffRecord, weight_grams: i64) -> CoreResult<TariffBreakdown> {
    compute_tariff(record, weight_grams, TaxRate::gst())
}

/// Runs a whole calculation from raw form input.
///
/// ## Flow
/// ```text
/// country selected? ──► weight parses? ──► country in table? ──► compute
///        │                    │                   │                  │
///   Validation          InvalidWeight      CountryNotFound    WeightOutOfRange
/// ```
///
/// ## Example
/// ```rust
/// use itps_core::{quote, RateTable, TaxRate};
///
/// let table = RateTable::from_json_str(
///     r#"[{ "country": "France", "maxWeight": "2 kg", "first50": 250, "additional": 50 }]"#,
/// ).unwrap();
///
/// let quote = quote(&table, "France", "120", TaxRate::gst()).unwrap();
/// assert_eq!(quote.extra_weight_grams, 70);
/// assert_eq!(quote.breakdown.total.to_string(), "Rs.413.00");
/// ```
pub fn quote(
    table: &RateTable,
    country: &str,
    weight_input: &str,
    tax_rate: TaxRate,
) -> CoreResult<TariffQuote> {
    let country = validate_country_selection(country)?;
    let weight_grams = parse_weight_input(weight_input).map_err(CoreError::InvalidWeight)?;
    let record = table.find(country)?;
    let breakdown = compute_tariff(record, weight_grams, tax_rate)?;

    // compute_tariff accepted the weight, so it is within the record's u32 limit
    let weight_grams = weight_grams as u32;

    Ok(TariffQuote {
        country: record.country.clone(),
        weight_grams,
        extra_weight_grams: weight_grams.saturating_sub(FIRST_SLAB_GRAMS),
        record: record.clone(),
        breakdown,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::money::Money;

    fn france() -> TariffRecord {
        TariffRecord::new("France", 2000, Money::from_rupees(250), Money::from_rupees(50))
    }

    fn table() -> RateTable {
        RateTable::from_records(vec![
            france(),
            TariffRecord::new("Japan", 5000, Money::from_paise(24550), Money::from_paise(4425)),
        ])
        .unwrap()
    }

    #[test]
    fn test_slab_boundaries() {
        assert_eq!(additional_slab_count(1), 0);
        assert_eq!(additional_slab_count(50), 0);
        assert_eq!(additional_slab_count(51), 1);
        assert_eq!(additional_slab_count(100), 1);
        assert_eq!(additional_slab_count(101), 2);
        assert_eq!(additional_slab_count(2000), 39);
    }

    #[test]
    fn test_scenario_120_grams() {
        let b = compute_tariff(&france(), 120, TaxRate::from_bps(1800)).unwrap();
        assert_eq!(b.base_charge, Money::from_rupees(250));
        assert_eq!(b.additional_slab_count, 2);
        assert_eq!(b.additional_charge, Money::from_rupees(100));
        assert_eq!(b.subtotal, Money::from_rupees(350));
        assert_eq!(b.tax_amount, Money::from_paise(6300));
        assert_eq!(b.total, Money::from_paise(41300));
    }

    #[test]
    fn test_light_packet_has_no_additional_charge() {
        let b = compute_gst_tariff(&france(), 50).unwrap();
        assert_eq!(b.additional_slab_count, 0);
        assert!(b.additional_charge.is_zero());
        assert!(!b.has_additional_slabs());
        assert_eq!(b.subtotal, b.base_charge);
    }

    #[test]
    fn test_weight_at_maximum_is_accepted() {
        assert!(compute_gst_tariff(&france(), 2000).is_ok());
    }

    #[test]
    fn test_weight_over_maximum_is_out_of_range() {
        let err = compute_gst_tariff(&france(), 2001).unwrap_err();
        assert!(matches!(
            err,
            CoreError::WeightOutOfRange { weight_grams: 2001, max_grams: 2000, .. }
        ));
    }

    #[test]
    fn test_zero_weight_is_invalid() {
        let err = compute_gst_tariff(&france(), 0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidWeight(ValidationError::MustBePositive { .. })
        ));
        assert!(compute_gst_tariff(&france(), -10).is_err());
    }

    #[test]
    fn test_tax_rate_above_hundred_percent_rejected() {
        let err = compute_tariff(&france(), 120, TaxRate::from_bps(10001)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_invariants_hold_for_every_weight() {
        let japan = table().find("Japan").unwrap().clone();
        for record in [france(), japan] {
            for weight in 1..=record.max_weight_grams as i64 {
                let b = compute_gst_tariff(&record, weight).unwrap();
                assert_eq!(b.subtotal.paise(), b.base_charge.paise() + b.additional_charge.paise());
                assert_eq!(b.total.paise(), b.subtotal.paise() + b.tax_amount.paise());
                assert_eq!(
                    Some(b.additional_charge),
                    record.additional_slab_charge.checked_mul(b.additional_slab_count)
                );

                // total ≈ subtotal × 1.18 within half a paisa
                let exact = b.subtotal.paise() as f64 * 1.18;
                assert!((b.total.paise() as f64 - exact).abs() <= 0.5 + 1e-6);
            }
        }
    }

    #[test]
    fn test_oversized_charges_report_overflow() {
        let record = TariffRecord::new(
            "X",
            5000,
            Money::from_rupees(250),
            Money::from_rupees(1_000_000_000_000_000),
        );

        // 99 slabs of Rs.10^15 no longer fit in i64 paise
        let err = compute_gst_tariff(&record, 5000).unwrap_err();
        assert!(matches!(err, CoreError::ChargeOverflow { ref country } if country == "X"));
        assert!(!err.is_input_error());

        // Subtotal fits, subtotal plus GST does not
        let record = TariffRecord::new("Y", 2000, Money::from_paise(i64::MAX), Money::zero());
        assert!(compute_tariff(&record, 50, TaxRate::zero()).is_ok());
        assert!(matches!(
            compute_gst_tariff(&record, 50),
            Err(CoreError::ChargeOverflow { .. })
        ));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let first = compute_gst_tariff(&france(), 777).unwrap();
        let second = compute_gst_tariff(&france(), 777).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_check_weight_limit() {
        assert!(check_weight_limit(&france(), 1999).is_ok());
        let err = check_weight_limit(&france(), 2500).unwrap_err();
        assert_eq!(err.to_string(), "Exceeds maximum limit of 2 kg for France");
    }

    #[test]
    fn test_quote_from_form_input() {
        let q = quote(&table(), "France", " 120 ", TaxRate::gst()).unwrap();
        assert_eq!(q.country, "France");
        assert_eq!(q.weight_grams, 120);
        assert_eq!(q.extra_weight_grams, 70);
        assert_eq!(q.record, france());
        assert_eq!(q.breakdown.total, Money::from_rupees(413));

        let light = quote(&table(), "France", "30", TaxRate::gst()).unwrap();
        assert_eq!(light.extra_weight_grams, 0);
    }

    #[test]
    fn test_quote_error_order() {
        let t = table();

        // No country selected beats a bad weight
        assert!(matches!(
            quote(&t, "", "abc", TaxRate::gst()),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));

        // Bad weight is reported before the lookup
        assert!(matches!(
            quote(&t, "Atlantis", "", TaxRate::gst()),
            Err(CoreError::InvalidWeight(ValidationError::Required { .. }))
        ));

        assert!(matches!(
            quote(&t, "Atlantis", "100", TaxRate::gst()),
            Err(CoreError::CountryNotFound(_))
        ));

        assert!(matches!(
            quote(&t, "France", "2001", TaxRate::gst()),
            Err(CoreError::WeightOutOfRange { .. })
        ));

        assert!(quote(&t, "Japan", "4999", TaxRate::gst()).is_ok());
    }

    #[test]
    fn test_quote_weight_beyond_i64_is_out_of_range() {
        let err = quote(&table(), "France", "99999999999999999999", TaxRate::gst()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::WeightOutOfRange { weight_grams: i64::MAX, max_grams: 2000, .. }
        ));
        assert_eq!(err.to_string(), "Exceeds maximum limit of 2 kg for France");
    }
}
