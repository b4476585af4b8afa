//! In-memory store
//!
//! Used by tests and for running the gateway without PostgreSQL.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::{PageStore, SettingsStore, StoreError};
use crate::commission::CommissionRates;
use crate::content::Page;

#[derive(Default)]
pub struct MemoryStore {
    pages: RwLock<HashMap<String, Page>>,
    rates: RwLock<Option<CommissionRates>>,
    /// Configured behavior
    fail_pages: AtomicBool,
    fail_settings: AtomicBool,
    /// Number of store reads served, for verification
    reads: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages(self, pages: impl IntoIterator<Item = Page>) -> Self {
        for page in pages {
            self.insert_page(page);
        }
        self
    }

    pub fn with_rates(self, rates: CommissionRates) -> Self {
        self.set_rates(Some(rates));
        self
    }

    pub fn insert_page(&self, page: Page) {
        if let Ok(mut pages) = self.pages.write() {
            pages.insert(page.slug.clone(), page);
        }
    }

    pub fn set_rates(&self, rates: Option<CommissionRates>) {
        if let Ok(mut slot) = self.rates.write() {
            *slot = rates;
        }
    }

    pub fn set_fail_pages(&self, fail: bool) {
        self.fail_pages.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_settings(&self, fail: bool) {
        self.fail_settings.store(fail, Ordering::SeqCst);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageStore for MemoryStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_pages.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("simulated page store failure".into()));
        }
        let pages = self
            .pages
            .read()
            .map_err(|_| StoreError::Unavailable("page map poisoned".into()))?;
        Ok(pages.get(slug).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.fail_pages.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("simulated page store failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn commission_rates(&self) -> Result<Option<CommissionRates>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_settings.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "simulated settings store failure".into(),
            ));
        }
        let rates = self
            .rates
            .read()
            .map_err(|_| StoreError::Unavailable("settings slot poisoned".into()))?;
        Ok(*rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping_follows_page_failure_switch() {
        let store = MemoryStore::new();
        assert!(store.ping().await.is_ok());

        store.set_fail_pages(true);
        assert!(matches!(store.ping().await, Err(StoreError::Unavailable(_))));

        // settings failures do not affect the page store check
        store.set_fail_pages(false);
        store.set_fail_settings(true);
        assert!(store.ping().await.is_ok());
    }
}
