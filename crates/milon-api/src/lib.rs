use milon_types::{Candidate, DictionaryEntry};

pub mod client;
pub mod error;
pub mod lexicon;

pub use client::SefariaClient;
pub use error::ApiError;
pub use lexicon::LexiconService;

/// Word-completion endpoint: ranked completion candidates for a partial
/// query, scoped to one target lexicon.
#[async_trait::async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, query: &str) -> Result<Vec<Candidate>, ApiError>;
}

/// Lexicon endpoint: every dictionary entry matching a word, across all
/// lexicon sources.
#[async_trait::async_trait]
pub trait LexiconGateway: Send + Sync {
    async fn words(&self, query: &str) -> Result<Vec<DictionaryEntry>, ApiError>;
}
