//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::StorefrontConfig;
use crate::store::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The store sits behind a
/// single mutex so every read-modify-write (cart add/remove/list, order
/// placement) runs as one sequential step.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: Mutex<Store>,
}

impl AppState {
    /// Create a new application state with a freshly seeded store.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_store(config, Store::new())
    }

    /// Create application state around a specific store.
    #[must_use]
    pub fn with_store(config: StorefrontConfig, store: Store) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: Mutex::new(store),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Lock the store for the duration of one handler step.
    ///
    /// Every store operation leaves the data consistent, so a poisoned lock
    /// is recovered rather than propagated.
    pub fn store(&self) -> MutexGuard<'_, Store> {
        self.inner
            .store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
