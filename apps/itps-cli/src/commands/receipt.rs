//! # Receipt Commands
//!
//! Exports a quote as an HTML receipt document.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  $ itps receipt --country France --weight 120 --out-dir ./out           │
//! │                                                                         │
//! │  get_quote() ──► Receipt::new() ──► ReceiptRenderer::render_html()      │
//! │                   (uuid, now)                │                          │
//! │                                              ▼                          │
//! │                  ./out/ITPS_Receipt_France_120g.html                    │
//! │                                                                         │
//! │  Receipt 5f0c…e2 written to ./out/ITPS_Receipt_France_120g.html         │
//! │  Total: Rs.413.00                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use itps_receipt::{Receipt, ReceiptRenderer};

use crate::commands::quote::get_quote;
use crate::error::ApiError;
use crate::state::AppState;

/// Where a receipt went.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    pub receipt_id: Uuid,
    pub path: PathBuf,
    pub total: String,
}

impl ReceiptResponse {
    pub fn to_text(&self) -> String {
        format!(
            "Receipt {} written to {}\nTotal: {}\n",
            self.receipt_id,
            self.path.display(),
            self.total
        )
    }
}

/// Calculates a quote and writes its receipt into `out_dir`, or the
/// configured receipt directory when `out_dir` is `None`.
///
/// The directory is created if missing. An existing file with the same name
/// is overwritten.
pub fn export_receipt(
    state: &AppState,
    country: &str,
    weight: &str,
    out_dir: Option<&Path>,
) -> Result<ReceiptResponse, ApiError> {
    debug!(country = %country, weight = %weight, "export_receipt command");

    let quote = get_quote(state, country, weight)?.quote;
    let receipt = Receipt::new(quote);

    let renderer = ReceiptRenderer::with_defaults()?;
    let html = renderer.render_html(&receipt)?;

    let dir = out_dir.unwrap_or(state.config.receipt_dir.as_path());
    fs::create_dir_all(dir).map_err(|e| ApiError::io("create", dir, e))?;

    let path = dir.join(receipt.file_name());
    fs::write(&path, html).map_err(|e| ApiError::io("write", &path, e))?;

    info!(
        receipt_id = %receipt.receipt_id,
        path = %path.display(),
        "Receipt written"
    );

    Ok(ReceiptResponse {
        receipt_id: receipt.receipt_id,
        path,
        total: receipt.quote.breakdown.total.to_string(),
    })
}
