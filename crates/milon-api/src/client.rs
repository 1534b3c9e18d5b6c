use std::time::Duration;

use milon_config::api::ApiConfig;
use milon_types::{Candidate, DictionaryEntry};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::ApiError;
use crate::{CompletionGateway, LexiconGateway};

/// HTTP client for the Sefaria lexicon API.
///
/// Two endpoints:
/// - `GET /api/words/completion/{query}/{lexicon}`: ranked completion
///   candidates as `[plain, marked?]` string pairs
/// - `GET /api/words/{query}`: dictionary entries across all lexicons
#[derive(Clone)]
pub struct SefariaClient {
    base_url: String,
    lexicon: String,
    client: reqwest::Client,
}

impl SefariaClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            lexicon: config.lexicon.clone(),
            client,
        })
    }

    fn encode(segment: &str) -> String {
        utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
    }
}

#[async_trait::async_trait]
impl CompletionGateway for SefariaClient {
    async fn complete(&self, query: &str) -> Result<Vec<Candidate>, ApiError> {
        let url = format!(
            "{}/api/words/completion/{}/{}",
            self.base_url,
            Self::encode(query),
            Self::encode(&self.lexicon),
        );
        tracing::debug!("completion request: {url}");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let rows: Vec<Vec<String>> = response.json().await?;
        Ok(candidates_from_rows(rows))
    }
}

#[async_trait::async_trait]
impl LexiconGateway for SefariaClient {
    async fn words(&self, query: &str) -> Result<Vec<DictionaryEntry>, ApiError> {
        let url = format!("{}/api/words/{}", self.base_url, Self::encode(query));
        tracing::debug!("lexicon request: {url}");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

/// The completion endpoint answers with rows of one or two spellings:
/// `[plain]` or `[plain, marked]`. Blank rows are skipped.
fn candidates_from_rows(rows: Vec<Vec<String>>) -> Vec<Candidate> {
    rows.into_iter()
        .filter_map(|mut row| {
            if row.is_empty() || row[0].is_empty() {
                return None;
            }
            let marked = if row.len() > 1 && !row[1].is_empty() {
                Some(row.swap_remove(1))
            } else {
                None
            };
            Some(Candidate::new(row.swap_remove(0), marked))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_map_to_candidates_in_order() {
        let rows = vec![
            vec!["abba".to_string(), "אַבָּא".to_string()],
            vec!["abba2".to_string()],
        ];
        let candidates = candidates_from_rows(rows);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].display(), "אַבָּא");
        assert_eq!(candidates[1].display(), "abba2");
    }

    #[test]
    fn blank_rows_are_skipped() {
        let rows = vec![vec![], vec![String::new()], vec!["ok".to_string()]];
        let candidates = candidates_from_rows(rows);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].plain, "ok");
    }

    #[test]
    fn query_segments_are_percent_encoded() {
        assert_eq!(SefariaClient::encode("Jastrow Dictionary"), "Jastrow%20Dictionary");
        assert!(!SefariaClient::encode("אב").contains(|c: char| !c.is_ascii()));
    }
}
