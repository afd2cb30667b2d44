//! Shared handler state

use std::sync::Arc;

use chrono::{DateTime, Utc};
use generation::GenerationService;
use storefront::ConfigManager;

pub struct AppState {
    pub generation: Arc<GenerationService>,
    pub configs: ConfigManager,
    /// Model advertised in responses; "local" when running without a token
    pub model: String,
    pub has_ai: bool,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(generation: Arc<GenerationService>, configs: ConfigManager, has_ai: bool) -> Self {
        let model = if has_ai {
            generation.model().to_string()
        } else {
            "local".to_string()
        };
        Self {
            generation,
            configs,
            model,
            has_ai,
            started_at: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
