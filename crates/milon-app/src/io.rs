use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use kanal::AsyncSender;
use milon_types::{AppEvent, InputEvent};
use tokio_util::sync::CancellationToken;

/// Terminal input reader: decodes crossterm events and forwards them to the
/// event loop.
pub async fn input_loop(tx: AsyncSender<AppEvent>, cancel: CancellationToken) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            maybe = events.next() => match maybe {
                Some(Ok(event)) => {
                    if let Some(app_event) = map_event(event) {
                        tx.send(app_event).await?;
                    }
                }
                Some(Err(err)) => tracing::error!("terminal input error: {err}"),
                None => break,
            },
        }
    }
    Ok(())
}

pub(crate) fn map_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => {
            let input = match code {
                KeyCode::Char('c') | KeyCode::Char('d')
                    if modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    InputEvent::Quit
                }
                KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                    InputEvent::Char(c)
                }
                KeyCode::Backspace => InputEvent::Backspace,
                KeyCode::Up => InputEvent::Up,
                KeyCode::Down => InputEvent::Down,
                KeyCode::Enter => InputEvent::Enter,
                KeyCode::Esc => InputEvent::Escape,
                _ => return None,
            };
            Some(AppEvent::Input(input))
        }
        Event::Resize(_, _) => Some(AppEvent::Redraw),
        _ => None,
    }
}
