//! # Domain Types
//!
//! Core domain types used throughout the ITPS calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────────┐                     │
//! │  │   TariffRecord      │   │  TariffBreakdown    │                     │
//! │  │  ─────────────────  │   │  ─────────────────  │                     │
//! │  │  country (key)      │──►│  base_charge        │                     │
//! │  │  max_weight_grams   │   │  additional_slabs   │                     │
//! │  │  first_50_charge    │   │  subtotal           │                     │
//! │  │  additional_slab..  │   │  tax_amount, total  │                     │
//! │  └─────────────────────┘   └──────────┬──────────┘                     │
//! │                                       │                                 │
//! │  ┌─────────────────────┐   ┌──────────▼──────────┐                     │
//! │  │      TaxRate        │   │    TariffQuote      │                     │
//! │  │  ─────────────────  │   │  ─────────────────  │                     │
//! │  │  bps (u32)          │   │  country, weight    │                     │
//! │  │  1800 = 18% GST     │   │  record + breakdown │                     │
//! │  └─────────────────────┘   └─────────────────────┘                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::DEFAULT_GST_BPS;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (GST on postal services)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// The 18% GST applied to ITPS postage.
    #[inline]
    pub const fn gst() -> Self {
        TaxRate(DEFAULT_GST_BPS)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::gst()
    }
}

/// `18%`, `12.5%`, `8.25%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let fraction = self.0 % 100;
        if fraction == 0 {
            write!(f, "{}%", whole)
        } else if fraction % 10 == 0 {
            write!(f, "{}.{}%", whole, fraction / 10)
        } else {
            write!(f, "{}.{:02}%", whole, fraction)
        }
    }
}

// =============================================================================
// Tariff Record
// =============================================================================

/// One destination's row in the rate table.
///
/// Loaded once from the dataset and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TariffRecord {
    /// Destination country name; the unique lookup key.
    pub country: String,

    /// Heaviest packet the destination accepts, in grams.
    pub max_weight_grams: u32,

    /// Max weight as the dataset spells it ("2 kg").
    pub max_weight_label: String,

    /// Charge for the first 50 grams.
    pub first_50_charge: Money,

    /// Charge for each further 50 grams or part thereof.
    pub additional_slab_charge: Money,
}

impl TariffRecord {
    /// Creates a record, deriving the label from the gram limit.
    ///
    /// ## Example
    /// ```rust
    /// use itps_core::{Money, TariffRecord};
    ///
    /// let record = TariffRecord::new("Japan", 5000, Money::from_rupees(400), Money::from_rupees(60));
    /// assert_eq!(record.max_weight_label, "5 kg");
    /// ```
    pub fn new(
        country: impl Into<String>,
        max_weight_grams: u32,
        first_50_charge: Money,
        additional_slab_charge: Money,
    ) -> Self {
        TariffRecord {
            country: country.into(),
            max_weight_grams,
            max_weight_label: weight_label(max_weight_grams),
            first_50_charge,
            additional_slab_charge,
        }
    }

    /// Checks whether a packet of this weight may be sent here.
    #[inline]
    pub fn accepts(&self, weight_grams: i64) -> bool {
        weight_grams <= self.max_weight_grams as i64
    }
}

/// Formats a gram limit the way the dataset does: `2 kg`, `500 g`.
pub fn weight_label(grams: u32) -> String {
    if grams >= 1000 && grams % 1000 == 0 {
        format!("{} kg", grams / 1000)
    } else {
        format!("{} g", grams)
    }
}

// =============================================================================
// Tariff Breakdown
// =============================================================================

/// Itemised charges produced by the tariff engine.
///
/// ## Invariants
/// - `subtotal = base_charge + additional_charge`
/// - `tax_amount = subtotal × tax_rate` (rounded half up to the paisa)
/// - `total = subtotal + tax_amount`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TariffBreakdown {
    /// Charge for the first 50 grams.
    pub base_charge: Money,

    /// Number of 50 gram slabs beyond the first 50 grams.
    pub additional_slab_count: u32,

    /// `additional_slab_count × additional_slab_charge`.
    pub additional_charge: Money,

    /// Charges before tax.
    pub subtotal: Money,

    /// Rate the tax was computed at.
    pub tax_rate: TaxRate,

    /// GST on the subtotal.
    pub tax_amount: Money,

    /// Total payable.
    pub total: Money,
}

impl TariffBreakdown {
    /// True when the packet needed slabs beyond the first 50 grams.
    #[inline]
    pub fn has_additional_slabs(&self) -> bool {
        self.additional_slab_count > 0
    }
}

// =============================================================================
// Tariff Quote
// =============================================================================

/// A completed calculation: the inputs, the record used and the result.
///
/// This is what the rendering layers consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TariffQuote {
    /// Destination country.
    pub country: String,

    /// Packet weight in grams.
    pub weight_grams: u32,

    /// Grams beyond the first 50 (zero for light packets).
    pub extra_weight_grams: u32,

    /// Snapshot of the rate table row the quote was computed from.
    pub record: TariffRecord,

    /// The computed charges.
    pub breakdown: TariffBreakdown,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1800);
        assert_eq!(rate.bps(), 1800);
        assert!((rate.percentage() - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        assert_eq!(TaxRate::from_percentage(18.0).bps(), 1800);
        assert_eq!(TaxRate::from_percentage(8.25).bps(), 825);
    }

    #[test]
    fn test_tax_rate_default_is_gst() {
        assert_eq!(TaxRate::default(), TaxRate::from_bps(1800));
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(1800).to_string(), "18%");
        assert_eq!(TaxRate::from_bps(1250).to_string(), "12.5%");
        assert_eq!(TaxRate::from_bps(825).to_string(), "8.25%");
        assert_eq!(TaxRate::zero().to_string(), "0%");
    }

    #[test]
    fn test_weight_label() {
        assert_eq!(weight_label(2000), "2 kg");
        assert_eq!(weight_label(5000), "5 kg");
        assert_eq!(weight_label(500), "500 g");
        assert_eq!(weight_label(2500), "2500 g");
    }

    #[test]
    fn test_record_accepts() {
        let record = TariffRecord::new("France", 2000, Money::from_rupees(250), Money::from_rupees(50));
        assert!(record.accepts(2000));
        assert!(!record.accepts(2001));
    }
}
