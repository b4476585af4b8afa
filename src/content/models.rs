//! Content page model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Publication status of a page
///
/// Only `draft` is gated. Any other stored value is kept verbatim so that
/// statuses added by the admin side round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PageStatus {
    Draft,
    Published,
    Other(String),
}

impl PageStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PageStatus::Draft => "draft",
            PageStatus::Published => "published",
            PageStatus::Other(s) => s,
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, PageStatus::Draft)
    }
}

impl From<String> for PageStatus {
    fn from(v: String) -> Self {
        match v.as_str() {
            "draft" => PageStatus::Draft,
            "published" => PageStatus::Published,
            _ => PageStatus::Other(v),
        }
    }
}

impl From<&str> for PageStatus {
    fn from(v: &str) -> Self {
        PageStatus::from(v.to_string())
    }
}

impl From<PageStatus> for String {
    fn from(s: PageStatus) -> Self {
        match s {
            PageStatus::Other(v) => v,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content page (about, terms, landing copy, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "terms-of-service")]
    pub slug: String,
    #[schema(example = "Terms of Service")]
    pub title: String,
    pub content: String,
    #[schema(value_type = String, example = "published")]
    pub status: PageStatus,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Whether the page may be served on the unauthenticated path
    pub fn is_public(&self) -> bool {
        !self.status.is_draft()
    }
}
