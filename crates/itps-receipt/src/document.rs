//! # Receipt Document
//!
//! A printable record of one calculation.
//!
//! ## Receipt Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TariffQuote ──► Receipt::new()                                         │
//! │                    • receipt_id (UUID v4)                                │
//! │                    • issued_at (UTC, shown in IST)                       │
//! │                         │                                               │
//! │                         ▼                                               │
//! │  ReceiptRenderer::render_html() ──► self-contained HTML, inline styles  │
//! │                         │                                               │
//! │                         ▼                                               │
//! │  Receipt::file_name() ──► ITPS_Receipt_United_Kingdom_120g.html          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, FixedOffset, Offset, Utc};
use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use itps_core::TariffQuote;

use crate::error::ReceiptResult;
use crate::summary::BreakdownView;

const RECEIPT_TEMPLATE_NAME: &str = "receipt.html.jinja";
const RECEIPT_TEMPLATE: &str = include_str!("../templates/receipt.html.jinja");

// =============================================================================
// Branding
// =============================================================================

/// Fixed wording printed on every receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branding {
    /// Issuing agency ("India Post").
    pub agency: String,

    /// Service short name ("ITPS").
    pub service_code: String,

    /// Service full name.
    pub service_name: String,

    /// Footer note on currency and validity.
    pub currency_note: String,

    /// Offset of the time zone receipts are dated in, in minutes east of UTC.
    pub utc_offset_minutes: i32,

    /// Label printed after the issue time.
    pub timezone_label: String,
}

impl Default for Branding {
    fn default() -> Self {
        Branding {
            agency: "India Post".to_string(),
            service_code: "ITPS".to_string(),
            service_name: "International Tracked Packet Service".to_string(),
            currency_note: "Tariffs in INR · Subject to revision".to_string(),
            utc_offset_minutes: 330, // IST, UTC+05:30
            timezone_label: "IST".to_string(),
        }
    }
}

impl Branding {
    /// Falls back to UTC when the configured offset is out of range.
    fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One issued receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub receipt_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub quote: TariffQuote,
}

impl Receipt {
    /// Issues a receipt for a quote, numbered and stamped now.
    pub fn new(quote: TariffQuote) -> Self {
        Receipt::with_timestamp(quote, Utc::now())
    }

    /// Issues a receipt with an explicit timestamp.
    pub fn with_timestamp(quote: TariffQuote, issued_at: DateTime<Utc>) -> Self {
        Receipt {
            receipt_id: Uuid::new_v4(),
            issued_at,
            quote,
        }
    }

    /// Suggested file name: `ITPS_Receipt_<Country>_<weight>g.html`.
    ///
    /// ## Example
    /// ```rust
    /// use itps_core::{quote, RateTable, TaxRate};
    /// use itps_receipt::Receipt;
    ///
    /// let table = RateTable::from_json_str(
    ///     r#"[{ "country": "United Kingdom", "maxWeight": "2 kg", "first50": 265, "additional": 50 }]"#,
    /// ).unwrap();
    /// let receipt = Receipt::new(quote(&table, "United Kingdom", "120", TaxRate::gst()).unwrap());
    /// assert_eq!(receipt.file_name(), "ITPS_Receipt_United_Kingdom_120g.html");
    /// ```
    pub fn file_name(&self) -> String {
        format!(
            "ITPS_Receipt_{}_{}g.html",
            safe_file_component(&self.quote.country),
            self.quote.weight_grams
        )
    }

    /// Issue date and time in the branding's time zone: `18 Oct 2026, 02:30 PM IST`.
    pub fn issued_at_display(&self, branding: &Branding) -> String {
        format!(
            "{} {}",
            self.issued_at
                .with_timezone(&branding.offset())
                .format("%d %b %Y, %I:%M %p"),
            branding.timezone_label
        )
    }
}

/// Replaces every character that is not an ASCII letter or digit with `_`.
///
/// ## Example
/// ```rust
/// use itps_receipt::safe_file_component;
///
/// assert_eq!(safe_file_component("Côte d'Ivoire"), "C_te_d_Ivoire");
/// ```
pub fn safe_file_component(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

// =============================================================================
// Renderer
// =============================================================================

/// Values the template reads, pre-formatted.
#[derive(Debug, Serialize)]
struct ReceiptContext<'a> {
    receipt_id: String,
    issued_at: String,
    country: &'a str,
    weight_grams: u32,
    max_weight_label: &'a str,
    tax_rate: String,
}

/// Renders receipts to HTML.
pub struct ReceiptRenderer {
    env: Environment<'static>,
    branding: Branding,
}

impl ReceiptRenderer {
    /// Creates a renderer with the embedded template.
    pub fn new(branding: Branding) -> ReceiptResult<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template(RECEIPT_TEMPLATE_NAME, RECEIPT_TEMPLATE)?;

        Ok(ReceiptRenderer { env, branding })
    }

    /// Creates a renderer with India Post branding.
    pub fn with_defaults() -> ReceiptResult<Self> {
        Self::new(Branding::default())
    }

    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    /// Renders a receipt as a self-contained HTML document.
    pub fn render_html(&self, receipt: &Receipt) -> ReceiptResult<String> {
        let quote = &receipt.quote;
        debug!(
            receipt_id = %receipt.receipt_id,
            country = %quote.country,
            weight_grams = quote.weight_grams,
            "Rendering receipt"
        );

        let ctx = ReceiptContext {
            receipt_id: receipt.receipt_id.to_string(),
            issued_at: receipt.issued_at_display(&self.branding),
            country: &quote.country,
            weight_grams: quote.weight_grams,
            max_weight_label: &quote.record.max_weight_label,
            tax_rate: quote.breakdown.tax_rate.to_string(),
        };

        let template = self.env.get_template(RECEIPT_TEMPLATE_NAME)?;
        let html = template.render(context! {
            branding => &self.branding,
            receipt => ctx,
            view => BreakdownView::from_quote(quote),
        })?;

        Ok(html)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
