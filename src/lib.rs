//! OnTheDeal Gateway - public content and commission API
//!
//! Read-only HTTP surface of the OnTheDeal B2B marketplace.
//!
//! # Modules
//!
//! - [`content`] - Content pages and the public visibility gate
//! - [`commission`] - Commission rates, fee calculation and the rate preview
//! - [`store`] - Store traits with PostgreSQL and in-memory backends
//! - [`gateway`] - Axum router, handlers and OpenAPI docs
//! - [`db`] - Connection pool and schema bootstrap
//! - [`config`] - YAML application config
//! - [`logging`] - tracing subscriber setup

pub mod commission;
pub mod config;
pub mod content;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod store;

// Convenient re-exports at crate root
pub use commission::{CommissionPreview, CommissionRates, OrderKind, RateError};
pub use content::{Page, PageStatus};
pub use gateway::state::AppState;
pub use store::{PageStore, SettingsStore, StoreError};
