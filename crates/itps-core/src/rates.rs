//! # Rate Table
//!
//! The country → tariff dataset and its lookup.
//!
//! ## Dataset Format
//! The dataset is a JSON array, one entry per destination:
//! ```json
//! [
//!   { "country": "France", "maxWeight": "2 kg", "first50": 250, "additional": 50 }
//! ]
//! ```
//! - `maxWeight` is `<n> kg` or `<n> g`
//! - `first50` / `additional` are rupees, integral or with up to two decimals
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "France" ──► RateTable::find() ──► exact, case-sensitive key match     │
//! │                     │                                                   │
//! │                     ├── hit  → &TariffRecord                            │
//! │                     └── miss → CoreError::CountryNotFound               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::tariff::compute_tariff;
use crate::types::{TariffRecord, TaxRate};

/// Dataset shipped with the crate.
const BUILTIN_DATASET: &str = include_str!("../data/itps_tariffs.json");

// =============================================================================
// Dataset Entry
// =============================================================================

/// One entry exactly as it appears in the JSON dataset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetEntry {
    country: String,
    max_weight: String,
    first50: serde_json::Number,
    additional: serde_json::Number,
}

impl DatasetEntry {
    fn into_record(self) -> CoreResult<TariffRecord> {
        let invalid = |reason: String| CoreError::InvalidRateTable {
            country: self.country.clone(),
            reason,
        };

        if self.country.trim().is_empty() {
            return Err(invalid("country name is empty".to_string()));
        }

        let max_weight_grams = parse_max_weight(&self.max_weight)
            .ok_or_else(|| invalid(format!("unrecognised max weight '{}'", self.max_weight)))?;

        let first_50_charge = parse_charge(&self.first50)
            .ok_or_else(|| invalid(format!("invalid first 50g charge '{}'", self.first50)))?;

        let additional_slab_charge = parse_charge(&self.additional)
            .ok_or_else(|| invalid(format!("invalid additional charge '{}'", self.additional)))?;

        Ok(TariffRecord {
            max_weight_label: self.max_weight.trim().to_string(),
            country: self.country,
            max_weight_grams,
            first_50_charge,
            additional_slab_charge,
        })
    }
}

/// Non-negative rupee amount from a JSON number.
fn parse_charge(number: &serde_json::Number) -> Option<Money> {
    Money::parse_rupees(&number.to_string()).filter(|m| !m.is_negative())
}

/// Parses `"2 kg"`, `"5kg"`, `"1.5 kg"` or `"500 g"` into grams.
///
/// ## Example
/// ```rust
/// use itps_core::rates::parse_max_weight;
///
/// assert_eq!(parse_max_weight("2 kg"), Some(2000));
/// assert_eq!(parse_max_weight("500 g"), Some(500));
/// assert_eq!(parse_max_weight("heavy"), None);
/// ```
pub fn parse_max_weight(label: &str) -> Option<u32> {
    let label = label.trim().to_ascii_lowercase();

    let (amount, grams_per_unit) = if let Some(amount) = label.strip_suffix("kg") {
        (amount.trim(), 1000)
    } else if let Some(amount) = label.strip_suffix('g') {
        (amount.trim(), 1)
    } else {
        return None;
    };

    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    if whole.is_empty() || !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: u32 = whole.parse().ok()?;
    let mut grams = whole.checked_mul(grams_per_unit)?;

    if !fraction.is_empty() {
        // Only kilograms may have a fractional part, down to whole grams
        if grams_per_unit != 1000 || fraction.len() > 3 {
            return None;
        }
        let scaled: u32 = format!("{:0<3}", fraction).parse().ok()?;
        grams = grams.checked_add(scaled)?;
    }

    (grams > 0).then_some(grams)
}

// =============================================================================
// Rate Table
// =============================================================================

/// Immutable country → tariff table.
///
/// Records keep dataset order, which is the order destinations are offered
/// to the user.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    records: Vec<TariffRecord>,
    index: HashMap<String, usize>,
}

impl RateTable {
    /// Builds a table from records, rejecting duplicate countries and
    /// records whose heaviest packet at 100% tax would overflow.
    pub fn from_records(records: Vec<TariffRecord>) -> CoreResult<Self> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if index.insert(record.country.clone(), position).is_some() {
                return Err(CoreError::DuplicateCountry(record.country.clone()));
            }

            let heaviest = i64::from(record.max_weight_grams);
            if let Err(CoreError::ChargeOverflow { country }) =
                compute_tariff(record, heaviest, TaxRate::from_bps(10_000))
            {
                return Err(CoreError::InvalidRateTable {
                    country,
                    reason: "charges too large to total".to_string(),
                });
            }
        }

        Ok(RateTable { records, index })
    }

    /// Parses a dataset in the JSON format described in the module docs.
    ///
    /// ## Example
    /// ```rust
    /// use itps_core::RateTable;
    ///
    /// let table = RateTable::from_json_str(
    ///     r#"[{ "country": "France", "maxWeight": "2 kg", "first50": 250, "additional": 50 }]"#,
    /// ).unwrap();
    /// assert_eq!(table.find("France").unwrap().max_weight_grams, 2000);
    /// ```
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let entries: Vec<DatasetEntry> = serde_json::from_str(json)?;

        let records = entries
            .into_iter()
            .map(DatasetEntry::into_record)
            .collect::<CoreResult<Vec<_>>>()?;

        Self::from_records(records)
    }

    /// The dataset compiled into the crate.
    pub fn builtin() -> CoreResult<Self> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    /// Resolves a country to its record.
    ///
    /// Matching is exact and case-sensitive, like the dataset keys.
    pub fn find(&self, country: &str) -> CoreResult<&TariffRecord> {
        self.get(country)
            .ok_or_else(|| CoreError::CountryNotFound(country.to_string()))
    }

    /// Like [`find`](Self::find) without the error.
    pub fn get(&self, country: &str) -> Option<&TariffRecord> {
        self.index.get(country).map(|&position| &self.records[position])
    }

    /// Country names in dataset order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.country.as_str())
    }

    /// All records in dataset order.
    pub fn records(&self) -> &[TariffRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
