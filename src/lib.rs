pub mod config;
pub mod error;
pub mod rest;
pub mod store;

use std::sync::Arc;

use config::ServiceConfig;
use store::TaskStore;

/// Shared application state passed to every HTTP handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServiceConfig>,
    pub store: Arc<TaskStore>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    /// Build the context with the seeded task store.
    pub fn new(config: Arc<ServiceConfig>) -> Self {
        Self {
            config,
            store: Arc::new(TaskStore::seeded()),
            started_at: std::time::Instant::now(),
        }
    }
}
