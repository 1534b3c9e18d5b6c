use milon_types::DictionaryEntry;

use crate::LexiconGateway;

/// Wraps the lexicon gateway and narrows its multi-lexicon response to the
/// one designated dictionary. Search never fails visibly: transport and
/// protocol failures are logged and degrade to an empty result.
pub struct LexiconService<G> {
    gateway: G,
    lexicon: String,
}

impl<G: LexiconGateway> LexiconService<G> {
    pub fn new(gateway: G, lexicon: impl Into<String>) -> Self {
        Self {
            gateway,
            lexicon: lexicon.into(),
        }
    }

    pub fn lexicon(&self) -> &str {
        &self.lexicon
    }

    pub async fn search(&self, query: &str) -> Vec<DictionaryEntry> {
        match self.gateway.words(query).await {
            Ok(entries) => {
                let total = entries.len();
                let kept: Vec<_> = entries
                    .into_iter()
                    .filter(|entry| entry.parent_lexicon == self.lexicon)
                    .collect();
                tracing::debug!(
                    "lexicon search {query:?}: kept {}/{total} entries from {:?}",
                    kept.len(),
                    self.lexicon
                );
                kept
            }
            Err(err) => {
                tracing::error!("lexicon search failed for {query:?}: {err}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiError;

    struct FakeGateway {
        entries: Vec<DictionaryEntry>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl LexiconGateway for FakeGateway {
        async fn words(&self, _query: &str) -> Result<Vec<DictionaryEntry>, ApiError> {
            if self.fail {
                return Err(ApiError::Status(reqwest::StatusCode::BAD_GATEWAY));
            }
            Ok(self.entries.clone())
        }
    }

    fn entry(lexicon: &str, headword: &str) -> DictionaryEntry {
        DictionaryEntry {
            headword: headword.to_string(),
            parent_lexicon: lexicon.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn keeps_only_the_designated_lexicon() {
        let gateway = FakeGateway {
            entries: vec![
                entry("Jastrow Dictionary", "אַבָּא"),
                entry("Klein Dictionary", "אב"),
                entry("Jastrow Dictionary", "אֵב"),
            ],
            fail: false,
        };
        let service = LexiconService::new(gateway, "Jastrow Dictionary");
        let found = service.search("אב").await;
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|e| e.parent_lexicon == "Jastrow Dictionary"));
    }

    #[tokio::test]
    async fn failure_degrades_to_empty() {
        let gateway = FakeGateway {
            entries: Vec::new(),
            fail: true,
        };
        let service = LexiconService::new(gateway, "Jastrow Dictionary");
        assert!(service.search("אב").await.is_empty());
    }
}
