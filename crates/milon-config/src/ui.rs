use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct UiConfig {
    /// Quiet period before a completion fetch is issued.
    pub debounce_ms: u64,
    /// Maximum dropdown rows drawn at once.
    pub max_rows: usize,
}

impl UiConfig {
    pub fn new() -> Self {
        let debounce_ms = env::var("MILON_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(200);

        let max_rows = env::var("MILON_MAX_ROWS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8);

        Self {
            debounce_ms,
            max_rows,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}
