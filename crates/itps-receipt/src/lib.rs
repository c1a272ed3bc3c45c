//! # itps-receipt: Breakdown and Receipt Rendering
//!
//! The presentation side of the ITPS calculator. Nothing here computes a
//! charge; every amount comes from an [`itps_core::TariffQuote`].
//!
//! ## Modules
//!
//! - [`summary`] - On-screen breakdown rows and a plain-text rendering
//! - [`document`] - The receipt: number, issue time, HTML document, file name
//! - [`error`] - Rendering errors
//!
//! ## Example Usage
//!
//! ```rust
//! use itps_core::{quote, RateTable, TaxRate};
//! use itps_receipt::{render_text, Receipt, ReceiptRenderer};
//!
//! let table = RateTable::from_json_str(
//!     r#"[{ "country": "France", "maxWeight": "2 kg", "first50": 250, "additional": 50 }]"#,
//! ).unwrap();
//! let quote = quote(&table, "France", "120", TaxRate::gst()).unwrap();
//!
//! assert!(render_text(&quote).contains("Rs.413.00"));
//!
//! let receipt = Receipt::new(quote);
//! let html = ReceiptRenderer::with_defaults().unwrap().render_html(&receipt).unwrap();
//! assert!(html.contains("Total Payable"));
//! assert_eq!(receipt.file_name(), "ITPS_Receipt_France_120g.html");
//! ```

pub mod document;
pub mod error;
pub mod summary;

pub use document::{safe_file_component, Branding, Receipt, ReceiptRenderer};
pub use error::{ReceiptError, ReceiptResult};
pub use summary::{render_text, BreakdownView, DetailLine, SummaryRow};
