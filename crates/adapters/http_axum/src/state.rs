//! Shared application state for axum handlers.

use std::sync::Arc;

/// Settings the dashboard page needs at render time.
#[derive(Debug)]
pub struct DashboardSettings {
    /// Locator of the externally-hosted dashboard loaded by the iframe.
    pub embed_url: String,
}

/// Application state shared across all axum handlers.
///
/// Settings are behind an `Arc` so cloning the state per request stays
/// cheap regardless of what the settings grow to hold.
pub struct AppState {
    /// Dashboard render settings.
    pub dashboard: Arc<DashboardSettings>,
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            dashboard: Arc::clone(&self.dashboard),
        }
    }
}

impl AppState {
    /// Create a new application state from the embed URL.
    pub fn new(embed_url: impl Into<String>) -> Self {
        Self {
            dashboard: Arc::new(DashboardSettings {
                embed_url: embed_url.into(),
            }),
        }
    }
}
