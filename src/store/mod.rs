//! Store layer
//!
//! Handlers only talk to these traits. `main` constructs the PostgreSQL
//! backend and injects it through `AppState`; tests inject [`MemoryStore`].

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::commission::CommissionRates;
use crate::content::Page;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid stored data: {0}")]
    InvalidData(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Unique-key lookup of content pages
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Returns `Ok(None)` when no page has this slug. Status is not filtered.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, StoreError>;

    /// Connectivity check for the health endpoint
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Singleton read of platform commission settings
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Returns `Ok(None)` when the settings row has not been provisioned.
    async fn commission_rates(&self) -> Result<Option<CommissionRates>, StoreError>;
}
