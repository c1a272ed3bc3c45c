//! # itps-core: Pure Tariff Logic for the ITPS Calculator
//!
//! This crate is the **heart** of the ITPS tariff calculator. It contains the
//! rate table, the slab/GST calculation and input validation as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ITPS Calculator Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    itps CLI (apps/itps-cli)                     │   │
//! │  │      countries ──► quote ──► receipt                            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ itps-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  tariff   │  │ validation│  │   │
//! │  │   │  Record   │  │   Money   │  │ Breakdown │  │   rules   │  │   │
//! │  │   │  TaxRate  │  │ GST calc  │  │   Quote   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 itps-receipt (Presentation)                     │   │
//! │  │          on-screen breakdown, HTML receipt document             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TariffRecord, TariffBreakdown, TaxRate)
//! - [`money`] - Money type with integer paise arithmetic (no floating point!)
//! - [`rates`] - Rate table loading and country lookup
//! - [`tariff`] - The tariff engine (slabs, GST, totals)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use itps_core::{compute_tariff, Money, TariffRecord, TaxRate};
//!
//! let record = TariffRecord::new("France", 2000, Money::from_rupees(250), Money::from_rupees(50));
//!
//! let breakdown = compute_tariff(&record, 120, TaxRate::from_bps(1800)).unwrap();
//! assert_eq!(breakdown.additional_slab_count, 2);
//! assert_eq!(breakdown.total, Money::from_rupees(413));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod rates;
pub mod tariff;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use rates::RateTable;
pub use tariff::{
    additional_slab_count, check_weight_limit, compute_gst_tariff, compute_tariff, quote,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Weight covered by the base charge, in grams.
pub const FIRST_SLAB_GRAMS: u32 = 50;

/// Size of every additional slab beyond the first 50 grams.
pub const ADDITIONAL_SLAB_GRAMS: u32 = 50;

/// GST applied to postage: 18% (1800 basis points).
pub const DEFAULT_GST_BPS: u32 = 1800;
