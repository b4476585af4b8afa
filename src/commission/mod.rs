//! Commission module
//!
//! - [`rates`]: validated first/repeat rates
//! - [`preview`]: the best-effort percentage preview

pub mod preview;
pub mod rates;

pub use preview::{CommissionPreview, FALLBACK_PREVIEW, preview_commission};
pub use rates::{CommissionRates, OrderKind, RateError};
