//! PostgreSQL store backend

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{PageStore, SettingsStore, StoreError};
use crate::commission::CommissionRates;
use crate::content::{Page, PageStatus};
use crate::db::Database;

/// Primary key of the singleton settings row
pub const PLATFORM_SETTINGS_ID: i16 = 1;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn from_database(db: &Database) -> Self {
        Self::new(db.pool().clone())
    }
}

fn page_from_row(r: &PgRow) -> Result<Page, sqlx::Error> {
    Ok(Page {
        id: r.try_get("id")?,
        slug: r.try_get("slug")?,
        title: r.try_get("title")?,
        content: r.try_get("content")?,
        status: PageStatus::from(r.try_get::<String, _>("status")?),
        meta_title: r.try_get("meta_title")?,
        meta_description: r.try_get("meta_description")?,
        created_at: r.try_get("created_at")?,
        updated_at: r.try_get("updated_at")?,
    })
}

/// Validate the stored NUMERIC pair
fn rates_from_numeric(first: Decimal, repeat: Decimal) -> Result<CommissionRates, StoreError> {
    CommissionRates::new(first, repeat).map_err(|e| StoreError::InvalidData(e.to_string()))
}

#[async_trait]
impl PageStore for PgStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, StoreError> {
        let row = sqlx::query(
            r#"SELECT id, slug, title, content, status, meta_title, meta_description,
                      created_at, updated_at
               FROM pages WHERE slug = $1"#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(page_from_row).transpose()?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for PgStore {
    async fn commission_rates(&self) -> Result<Option<CommissionRates>, StoreError> {
        let row = sqlx::query(
            r#"SELECT commission_first_rate, commission_repeat_rate
               FROM platform_settings WHERE id = $1"#,
        )
        .bind(PLATFORM_SETTINGS_ID)
        .fetch_optional(&self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let first: Decimal = r.try_get("commission_first_rate")?;
        let repeat: Decimal = r.try_get("commission_repeat_rate")?;
        rates_from_numeric(first, repeat).map(Some)
    }
}
