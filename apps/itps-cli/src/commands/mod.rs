//! # Commands
//!
//! One module per `itps` subcommand. Each command takes the loaded
//! [`AppState`](crate::state::AppState) and returns a serialisable response
//! or an [`ApiError`](crate::error::ApiError).
//!
//! | Subcommand | Function                          |
//! |------------|-----------------------------------|
//! | countries  | [`countries::list_countries`]     |
//! | quote      | [`quote::get_quote`]              |
//! | check      | [`quote::check_weight`]           |
//! | receipt    | [`receipt::export_receipt`]       |

pub mod countries;
pub mod quote;
pub mod receipt;
