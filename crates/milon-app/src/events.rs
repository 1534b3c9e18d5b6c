use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use milon_api::{CompletionGateway, LexiconService, SefariaClient};
use milon_core::debounce::Debouncer;
use milon_core::preprocess;
use milon_core::results::ResultsView;
use milon_core::suggest::{Key, KeyEffect, SuggestBox, TextEffect};
use milon_render::EntryRenderer;
use milon_types::{AppEvent, InputEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;
use crate::ui::Screen;

/// App's main loop: owns the suggestion coordinator, the results state, and
/// the screen. Gateway calls run on spawned tasks and come back as events on
/// the same channel as terminal input, so all state mutation happens here.
pub async fn event_loop(
    state: Arc<AppState>,
    rx: AsyncReceiver<AppEvent>,
    tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (api_cfg, ui_cfg) = {
        let config = state.config.read().await;
        (config.api.clone(), config.ui.clone())
    };

    let client = Arc::new(SefariaClient::new(&api_cfg)?);
    let service = Arc::new(LexiconService::new(
        client.as_ref().clone(),
        api_cfg.lexicon.clone(),
    ));
    let renderer = EntryRenderer::new(&api_cfg.web_origin)?;

    let mut suggest = SuggestBox::new();
    let mut results = ResultsView::Unsearched;
    let mut debouncer = Debouncer::new(Duration::from_millis(ui_cfg.debounce_ms));

    let mut screen = Screen::new(ui_cfg.max_rows)?;
    screen.draw(&suggest, &renderer.render(&results))?;

    tracing::info!("event loop started");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = debouncer.wait() => {
                debouncer.disarm();
                issue_fetch(&mut suggest, &client, &tx);
            }
            event = rx.recv() => {
                match event? {
                    AppEvent::Input(InputEvent::Quit) => break,
                    AppEvent::Input(input) => {
                        handle_input(input, &mut suggest, &mut debouncer, &service, &tx);
                    }
                    AppEvent::SuggestionsReady { epoch, candidates } => {
                        if !suggest.apply_suggestions(epoch, candidates) {
                            tracing::debug!("stale completion response dropped (epoch {epoch})");
                        }
                    }
                    AppEvent::SuggestionsFailed { epoch } => {
                        let _ = suggest.apply_fetch_failure(epoch);
                    }
                    AppEvent::SearchDone { query, entries } => {
                        results = ResultsView::from_search(query, entries);
                    }
                    AppEvent::Redraw => {}
                }
            }
        }
        screen.draw(&suggest, &renderer.render(&results))?;
    }

    // Teardown: any in-flight response is now guaranteed stale.
    suggest.invalidate();
    debouncer.disarm();
    Ok(())
}

fn handle_input(
    input: InputEvent,
    suggest: &mut SuggestBox,
    debouncer: &mut Debouncer,
    service: &Arc<LexiconService<SefariaClient>>,
    tx: &AsyncSender<AppEvent>,
) {
    match input {
        InputEvent::Char(c) => {
            let mut text = suggest.query().to_string();
            text.push(c);
            edit(text, suggest, debouncer);
        }
        InputEvent::Backspace => {
            let mut text = suggest.query().to_string();
            text.pop();
            edit(text, suggest, debouncer);
        }
        InputEvent::Up => {
            let _ = suggest.on_key(Key::Up);
        }
        InputEvent::Down => {
            let _ = suggest.on_key(Key::Down);
        }
        InputEvent::Escape => {
            let _ = suggest.on_key(Key::Escape);
        }
        InputEvent::Enter => {
            let submitted = match suggest.on_key(Key::Enter) {
                KeyEffect::Submit(query) => Some(query),
                KeyEffect::Ignored => suggest.on_submit(),
                KeyEffect::Handled => None,
            };
            if let Some(query) = submitted {
                // Submission bypasses the debounce entirely.
                debouncer.disarm();
                run_search(query, service.clone(), tx.clone());
            }
        }
        // Quit is intercepted by the caller.
        InputEvent::Quit => {}
    }
}

fn edit(text: String, suggest: &mut SuggestBox, debouncer: &mut Debouncer) {
    match suggest.on_text_change(text) {
        TextEffect::ScheduleFetch => debouncer.arm(),
        TextEffect::Cancel => debouncer.disarm(),
    }
}

/// The debounce timer fired: stamp and spawn a completion fetch. The
/// response carries the stamp back; the coordinator drops it if a newer
/// fetch was issued meanwhile.
fn issue_fetch(suggest: &mut SuggestBox, client: &Arc<SefariaClient>, tx: &AsyncSender<AppEvent>) {
    let query = preprocess::clean(suggest.query());
    if query.is_empty() {
        return;
    }
    let stamp = suggest.begin_fetch();
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        match client.complete(&query).await {
            Ok(candidates) => {
                let _ = tx
                    .send(AppEvent::SuggestionsReady {
                        epoch: stamp,
                        candidates,
                    })
                    .await;
            }
            Err(err) => {
                tracing::warn!("completion fetch failed for {query:?}: {err}");
                let _ = tx.send(AppEvent::SuggestionsFailed { epoch: stamp }).await;
            }
        }
    });
}

fn run_search(
    query: String,
    service: Arc<LexiconService<SefariaClient>>,
    tx: AsyncSender<AppEvent>,
) {
    tokio::spawn(async move {
        let entries = service.search(&query).await;
        let _ = tx.send(AppEvent::SearchDone { query, entries }).await;
    });
}
