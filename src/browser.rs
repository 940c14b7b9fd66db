//! The ambient state a page script sees: the page itself, session-scoped
//! storage, and the current location.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::info;

use crate::page::Page;

/// Session-scoped key/value store. Cloned handles share the same entries.
#[derive(Debug, Clone, Default)]
pub struct SessionStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.lock().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.lock().remove(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Clone)]
pub struct Browser {
    page: Page,
    session: SessionStorage,
    location: Arc<Mutex<String>>,
}

impl Browser {
    #[must_use]
    pub fn new(page: Page, path: &str) -> Self {
        Self {
            page,
            session: SessionStorage::new(),
            location: Arc::new(Mutex::new(path.to_string())),
        }
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn session(&self) -> &SessionStorage {
        &self.session
    }

    #[must_use]
    pub fn location(&self) -> String {
        self.location
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Full navigation: the current page is left behind, session storage
    /// survives.
    pub fn navigate(&self, path: &str) {
        info!("Navigating to {}", path);
        *self.location.lock().unwrap_or_else(PoisonError::into_inner) = path.to_string();
    }
}
