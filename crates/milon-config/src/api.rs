use std::env;

use serde::{Deserialize, Serialize};

/// Remote lexicon endpoints and the one lexicon we keep from the unified
/// multi-lexicon response.
#[derive(Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the lexicon API.
    pub base_url: String,
    /// Web origin used to absolutize relative links in entry markup.
    pub web_origin: String,
    /// Name of the lexicon whose entries are kept.
    pub lexicon: String,
    /// Per-request HTTP timeout.
    pub timeout_ms: u64,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("MILON_API_URL")
            .unwrap_or_else(|_| "https://www.sefaria.org".to_string());

        let web_origin = env::var("MILON_WEB_ORIGIN").unwrap_or_else(|_| base_url.clone());

        let lexicon =
            env::var("MILON_LEXICON").unwrap_or_else(|_| "Jastrow Dictionary".to_string());

        let timeout_ms = env::var("MILON_HTTP_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        Self {
            base_url,
            web_origin,
            lexicon,
            timeout_ms,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}
