//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::db::Database;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    db: Database,
}

impl AppState {
    /// Create a new application state with an empty store.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                db: Database::new(),
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the store.
    #[must_use]
    pub fn db(&self) -> &Database {
        &self.inner.db
    }
}
