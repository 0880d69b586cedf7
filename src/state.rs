//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;

#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService>,
    /// Public prefix for short URLs; `None` means "use the Host header".
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(shortener_service: Arc<ShortenerService>, base_url: Option<String>) -> Self {
        Self {
            shortener_service,
            base_url,
        }
    }
}
