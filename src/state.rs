//! Shared application state for all routes. Immutable after startup.

use crate::config::AppConfig;
use crate::repository::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn Store>) -> Self {
        AppState {
            config: Arc::new(config),
            store,
        }
    }
}
