//! # On-Screen Breakdown
//!
//! Row-by-row view of a quote, shared by the terminal output and the
//! receipt document.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Base Tariff (First 50g)                                  Rs.250.00     │
//! │    Rs.250 for first 50g                                                 │
//! │  Additional Weight Charge                                 Rs.100.00     │
//! │    2 x Rs.50 (70g extra → 2 slabs)        ← only when slabs > 0         │
//! │  Subtotal (before GST)                                    Rs.350.00     │
//! │  GST @ 18%                                                 Rs.63.00     │
//! │  ──────────────────────────────────────────────────────────────         │
//! │  TOTAL PAYABLE                                            Rs.413.00     │
//! │                                                                         │
//! │  Calculation detail                                                     │
//! │    Base (first 50g)                                       Rs.250.00     │
//! │    + 2 add. slab(s) x Rs.50                               Rs.100.00     │
//! │    + GST 18% on Rs.350                                     Rs.63.00     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use itps_core::TariffQuote;

/// Width of the plain-text rendering, in columns.
const TEXT_WIDTH: usize = 56;

/// One line item of the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    /// Small print under the label.
    pub note: Option<String>,
    pub amount: String,
}

/// One line of the "Calculation Detail" box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLine {
    pub label: String,
    pub amount: String,
}

/// Display-ready breakdown of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownView {
    pub rows: Vec<SummaryRow>,
    pub total_label: String,
    pub total: String,
    pub detail: Vec<DetailLine>,
}

impl BreakdownView {
    /// Builds the rows for a quote.
    ///
    /// The additional-weight row and its detail line only appear when the
    /// packet needed slabs beyond the first 50 grams.
    pub fn from_quote(quote: &TariffQuote) -> Self {
        let b = &quote.breakdown;
        let record = &quote.record;

        let mut rows = vec![SummaryRow {
            label: "Base Tariff (First 50g)".to_string(),
            note: Some(format!(
                "{} for first 50g",
                record.first_50_charge.format_compact()
            )),
            amount: b.base_charge.to_string(),
        }];

        let mut detail = vec![DetailLine {
            label: "Base (first 50g)".to_string(),
            amount: b.base_charge.to_string(),
        }];

        if b.has_additional_slabs() {
            rows.push(SummaryRow {
                label: "Additional Weight Charge".to_string(),
                note: Some(slab_note(quote)),
                amount: b.additional_charge.to_string(),
            });
            detail.push(DetailLine {
                label: format!(
                    "+ {} add. slab(s) x {}",
                    b.additional_slab_count,
                    record.additional_slab_charge.format_compact()
                ),
                amount: b.additional_charge.to_string(),
            });
        }

        rows.push(SummaryRow {
            label: "Subtotal (before GST)".to_string(),
            note: None,
            amount: b.subtotal.to_string(),
        });
        rows.push(SummaryRow {
            label: format!("GST @ {}", b.tax_rate),
            note: None,
            amount: b.tax_amount.to_string(),
        });

        detail.push(DetailLine {
            label: format!("+ GST {} on {}", b.tax_rate, b.subtotal.format_compact()),
            amount: b.tax_amount.to_string(),
        });

        BreakdownView {
            rows,
            total_label: "Total Payable".to_string(),
            total: b.total.to_string(),
            detail,
        }
    }
}

/// `2 x Rs.50 (70g extra → 2 slabs)`
fn slab_note(quote: &TariffQuote) -> String {
    let slabs = quote.breakdown.additional_slab_count;
    format!(
        "{} x {} ({}g extra → {} slab{})",
        slabs,
        quote.record.additional_slab_charge.format_compact(),
        quote.extra_weight_grams,
        slabs,
        if slabs > 1 { "s" } else { "" }
    )
}

/// Renders a quote as a fixed-width block for the terminal.
pub fn render_text(quote: &TariffQuote) -> String {
    let view = BreakdownView::from_quote(quote);
    let mut out = String::new();

    out.push_str(&format!(
        "ITPS Tariff: {} · {} g (max {})\n",
        quote.country, quote.weight_grams, quote.record.max_weight_label
    ));
    out.push_str(&"-".repeat(TEXT_WIDTH));
    out.push('\n');

    for row in &view.rows {
        push_columns(&mut out, "", &row.label, &row.amount);
        if let Some(note) = &row.note {
            out.push_str(&format!("  {}\n", note));
        }
    }

    out.push_str(&"=".repeat(TEXT_WIDTH));
    out.push('\n');
    push_columns(&mut out, "", &view.total_label.to_uppercase(), &view.total);

    out.push_str("\nCalculation detail\n");
    for line in &view.detail {
        push_columns(&mut out, "  ", &line.label, &line.amount);
    }

    out
}

fn push_columns(out: &mut String, indent: &str, label: &str, amount: &str) {
    let used = indent.chars().count() + label.chars().count();
    let pad = TEXT_WIDTH.saturating_sub(used + amount.chars().count()).max(1);
    out.push_str(&format!("{}{}{}{}\n", indent, label, " ".repeat(pad), amount));
}

// =============================================================================
// Unit Tests
// =============================================================================
