//! HTTP handlers

pub mod commission;
pub mod health;
pub mod pages;

pub use commission::get_commission_preview;
pub use health::{HealthResponse, health_check};
pub use pages::{PageResponse, get_page};
