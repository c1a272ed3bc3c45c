//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    350 * 0.18 = 62.99999999999999  ❌ WRONG!                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    35000 paise × 1800 bps / 10000 = 6300 paise = Rs.63.00              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use itps_core::money::Money;
//!
//! let base = Money::from_rupees(250);                         // Rs.250.00
//! let slabs = Money::from_rupees(50).checked_mul(2).unwrap(); // Rs.100.00
//! let subtotal = base.checked_add(slabs).unwrap();            // Rs.350.00
//! assert_eq!(subtotal.to_string(), "Rs.350.00");
//! ```
//!
//! Arithmetic is checked: a rate table is user input, so an amount that
//! does not fit in `i64` paise comes back as `None` instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::TaxRate;

/// Prefix used when displaying amounts.
pub const CURRENCY_PREFIX: &str = "Rs.";

// =============================================================================
// Money Type
// =============================================================================

/// Represents a rupee amount in paise (1 rupee = 100 paise).
///
/// ## Design Decisions
/// - **i64 (signed)**: the rate table never holds negatives, but parsed
///   input may, and the loader rejects it with a clear error
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  TariffRecord.first_50_charge ─────────► TariffBreakdown.base_charge    │
/// │                                                                         │
/// │  TariffRecord.additional_slab_charge × slabs ──► additional_charge      │
/// │                                                                         │
/// │  subtotal ──► GST calculation ──► total ──► receipt "Total Payable"     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use itps_core::money::Money;
    ///
    /// let gst = Money::from_paise(6300); // Rs.63.00
    /// assert_eq!(gst.paise(), 6300);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Parses a decimal rupee amount such as `"250"`, `"47.5"` or `"47.50"`.
    ///
    /// At most two fractional digits are accepted. No floating point is
    /// involved, so `"0.1"` is exactly 10 paise.
    ///
    /// ## Example
    /// ```rust
    /// use itps_core::money::Money;
    ///
    /// assert_eq!(Money::parse_rupees("47.5"), Some(Money::from_paise(4750)));
    /// assert_eq!(Money::parse_rupees("250"), Some(Money::from_rupees(250)));
    /// assert_eq!(Money::parse_rupees("1.005"), None);
    /// assert_eq!(Money::parse_rupees("abc"), None);
    /// ```
    pub fn parse_rupees(input: &str) -> Option<Money> {
        let input = input.trim();
        let (negative, digits) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };

        if whole.is_empty() || fraction.len() > 2 {
            return None;
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return None;
        }

        let rupees: i64 = whole.parse().ok()?;
        let paise: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().ok()? * 10,
            _ => fraction.parse().ok()?,
        };

        let total = rupees.checked_mul(100)?.checked_add(paise)?;
        Some(Money(if negative { -total } else { total }))
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole rupee portion.
    ///
    /// ## Example
    /// ```rust
    /// use itps_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(41300).rupees(), 413);
    /// assert_eq!(Money::from_paise(-550).rupees(), -5);
    /// ```
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiplies by a slab count, `None` on overflow.
    #[inline]
    pub fn checked_mul(self, count: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(count)).map(Money)
    }

    /// Calculates tax at the given rate, rounding half up to the paisa.
    ///
    /// Returns `None` if the tax does not fit in `i64` paise.
    ///
    /// ## Implementation
    /// Integer math: `(amount * rate + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use itps_core::money::Money;
    /// use itps_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_rupees(350);
    /// let gst = subtotal.calculate_tax(TaxRate::from_bps(1800)).unwrap();
    /// assert_eq!(gst, Money::from_paise(6300)); // Rs.63.00
    ///
    /// // Rs.0.25 at 18% = 4.5 paise → rounds to 5
    /// let tax = Money::from_paise(25).calculate_tax(TaxRate::from_bps(1800)).unwrap();
    /// assert_eq!(tax.paise(), 5);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Option<Money> {
        // i128 holds any i64 amount times any u32 rate
        let tax_paise = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        i64::try_from(tax_paise).ok().map(Money)
    }

    /// Formats without a zero paise part: `Rs.250` but `Rs.47.50`.
    ///
    /// Used for rate notes such as "Rs.250 for first 50g".
    ///
    /// ## Example
    /// ```rust
    /// use itps_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(250).format_compact(), "Rs.250");
    /// assert_eq!(Money::from_paise(4750).format_compact(), "Rs.47.50");
    /// ```
    pub fn format_compact(&self) -> String {
        if self.paise_part() == 0 {
            let sign = if self.0 < 0 { "-" } else { "" };
            format!("{}{}{}", sign, CURRENCY_PREFIX, self.rupees().abs())
        } else {
            self.to_string()
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Displays money the way the receipt prints it: `Rs.413.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_PREFIX,
            self.rupees().abs(),
            self.paise_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(41350);
        assert_eq!(money.paise(), 41350);
        assert_eq!(money.rupees(), 413);
        assert_eq!(money.paise_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_rupees(413)), "Rs.413.00");
        assert_eq!(format!("{}", Money::from_paise(6300)), "Rs.63.00");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-Rs.5.50");
        assert_eq!(format!("{}", Money::zero()), "Rs.0.00");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(Money::from_rupees(50).format_compact(), "Rs.50");
        assert_eq!(Money::from_paise(5005).format_compact(), "Rs.50.05");
        assert_eq!(Money::from_rupees(-5).format_compact(), "-Rs.5");
    }

    #[test]
    fn test_parse_rupees() {
        assert_eq!(Money::parse_rupees("250"), Some(Money::from_paise(25000)));
        assert_eq!(Money::parse_rupees(" 47.5 "), Some(Money::from_paise(4750)));
        assert_eq!(Money::parse_rupees("0.05"), Some(Money::from_paise(5)));
        assert_eq!(Money::parse_rupees("250.0"), Some(Money::from_paise(25000)));
        assert_eq!(Money::parse_rupees("-3"), Some(Money::from_paise(-300)));

        assert_eq!(Money::parse_rupees(""), None);
        assert_eq!(Money::parse_rupees(".5"), None);
        assert_eq!(Money::parse_rupees("1.005"), None);
        assert_eq!(Money::parse_rupees("1e3"), None);
        assert_eq!(Money::parse_rupees("12,5"), None);
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_rupees(250);
        let b = Money::from_rupees(50);

        assert_eq!(a.checked_add(b), Some(Money::from_rupees(300)));
        assert_eq!(b.checked_mul(3), Some(Money::from_rupees(150)));
        assert_eq!(b.checked_mul(0), Some(Money::zero()));
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let huge = Money::from_paise(i64::MAX);

        assert_eq!(huge.checked_add(Money::from_paise(1)), None);
        assert_eq!(huge.checked_mul(2), None);
        assert_eq!(huge.calculate_tax(TaxRate::from_bps(10000)), Some(huge));
        assert_eq!(huge.calculate_tax(TaxRate::from_bps(20000)), None);
    }

    #[test]
    fn test_gst_on_scenario_subtotal() {
        // Rs.350 at 18% = Rs.63.00 exactly
        let tax = Money::from_rupees(350).calculate_tax(TaxRate::from_bps(1800)).unwrap();
        assert_eq!(tax.paise(), 6300);
    }

    #[test]
    fn test_gst_rounds_half_up() {
        // Rs.47.25 at 18% = 850.5 paise → 851
        let tax = Money::from_paise(4725).calculate_tax(TaxRate::from_bps(1800)).unwrap();
        assert_eq!(tax.paise(), 851);

        // Rs.47.20 at 18% = 849.6 paise → 850
        let tax = Money::from_paise(4720).calculate_tax(TaxRate::from_bps(1800)).unwrap();
        assert_eq!(tax.paise(), 850);
    }

    #[test]
    fn test_zero_rate_yields_zero_tax() {
        let tax = Money::from_rupees(999).calculate_tax(TaxRate::zero()).unwrap();
        assert!(tax.is_zero());
    }
}
