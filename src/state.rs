//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::repositories::UrlStore;

/// Handler state; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    /// Same store the shortener writes to, exposed for health checks.
    pub store: Arc<dyn UrlStore>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>, store: Arc<dyn UrlStore>) -> Self {
        Self { shortener, store }
    }
}
