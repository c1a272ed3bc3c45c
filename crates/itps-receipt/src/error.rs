//! Rendering errors.

use thiserror::Error;

/// Errors raised while producing a receipt document.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The embedded template failed to parse or render.
    #[error("Receipt template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Convenience type alias for Results with ReceiptError.
pub type ReceiptResult<T> = Result<T, ReceiptError>;
