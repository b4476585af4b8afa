//! Public page lookup

use thiserror::Error;

use super::models::Page;
use crate::store::{PageStore, StoreError};

#[derive(Error, Debug)]
pub enum PageLookupError {
    #[error("Slug required")]
    MissingSlug,

    /// Covers both an absent slug and a draft page
    #[error("Page not found")]
    NotFound,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Resolve a page for an unauthenticated caller.
///
/// Drafts are reported exactly like missing slugs.
pub async fn get_public_page(
    store: &dyn PageStore,
    slug: Option<&str>,
) -> Result<Page, PageLookupError> {
    let slug = match slug {
        Some(s) if !s.is_empty() => s,
        _ => return Err(PageLookupError::MissingSlug),
    };

    match store.find_by_slug(slug).await? {
        Some(page) if page.is_public() => Ok(page),
        Some(_) | None => Err(PageLookupError::NotFound),
    }
}
