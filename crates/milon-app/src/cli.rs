use clap::Parser;
use milon_api::{LexiconService, SefariaClient};
use milon_config::Config;
use milon_core::preprocess;
use milon_core::results::ResultsView;
use milon_render::EntryRenderer;

/// Look up a word in the Jastrow Dictionary.
#[derive(Parser)]
#[command(name = "milon", version, about)]
pub struct Args {
    /// Word to search; omit to start the interactive shell.
    pub word: Option<String>,
}

/// One-shot lookup for scripted use: search, print, exit.
pub async fn run_once(config: &Config, word: &str) -> anyhow::Result<()> {
    let client = SefariaClient::new(&config.api)?;
    let service = LexiconService::new(client, config.api.lexicon.clone());
    let renderer = EntryRenderer::new(&config.api.web_origin)?;

    let query = preprocess::normalize_query(word);
    let entries = service.search(&query).await;
    for line in renderer.render(&ResultsView::from_search(query, entries)) {
        println!("{line}");
    }
    Ok(())
}
