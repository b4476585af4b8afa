use std::sync::Arc;

use crate::store::{PageStore, SettingsStore};

/// Gateway shared state
///
/// Store handles are constructed by the caller and injected here, so tests can
/// swap in fakes.
#[derive(Clone)]
pub struct AppState {
    /// Content pages
    pub pages: Arc<dyn PageStore>,
    /// Platform settings (commission rates)
    pub settings: Arc<dyn SettingsStore>,
}

impl AppState {
    pub fn new(pages: Arc<dyn PageStore>, settings: Arc<dyn SettingsStore>) -> Self {
        Self { pages, settings }
    }

    /// Serve both concerns from one backend
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: PageStore + SettingsStore + 'static,
    {
        Self {
            pages: store.clone(),
            settings: store,
        }
    }
}
