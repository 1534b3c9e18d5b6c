//! Autocomplete coordination: debounced fetch-on-type, in-flight request
//! supersession, keyboard-driven selection, suggestion-to-search submission.
//!
//! The coordinator is a plain state machine. It owns no timer and no HTTP
//! client; instead it hands effects back to the caller (arm the debounce
//! timer, run a search) and stamps every fetch with a monotonically
//! increasing epoch. A response is applied only while its stamp equals the
//! current epoch, so a response that resolves after a newer fetch was issued
//! can never overwrite the newer state, whether or not the transport supports
//! real cancellation.

use milon_types::Candidate;

use crate::preprocess;

/// Navigation keys the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
}

/// What the caller must do after a text edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEffect {
    /// Arm (or re-arm) the debounce timer; call [`SuggestBox::begin_fetch`]
    /// when it fires.
    ScheduleFetch,
    /// Text is blank; suggestions were cleared, disarm any pending timer.
    Cancel,
}

/// What the caller must do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEffect {
    /// Key consumed, state updated.
    Handled,
    /// Key not consumed (dropdown closed, or Enter without a selection).
    Ignored,
    /// A candidate was committed; run a lexicon search for this query.
    Submit(String),
}

#[derive(Debug, Default)]
pub struct SuggestBox {
    query: String,
    suggestions: Vec<Candidate>,
    selected: Option<usize>,
    open: bool,
    epoch: u64,
}

impl SuggestBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Candidate] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The dropdown is shown only while it is open and non-empty.
    pub fn is_open(&self) -> bool {
        self.open && !self.suggestions.is_empty()
    }

    /// Text changed. The text itself updates immediately; only the network
    /// call is debounced. Blank text clears suggestions and hides the
    /// dropdown without any fetch.
    pub fn on_text_change(&mut self, text: impl Into<String>) -> TextEffect {
        self.query = text.into();
        if self.query.trim().is_empty() {
            self.suggestions.clear();
            self.open = false;
            self.selected = None;
            // A fetch still in flight for the pre-clear text must land
            // stale; the cleared state is the fresher one.
            self.invalidate();
            TextEffect::Cancel
        } else {
            TextEffect::ScheduleFetch
        }
    }

    /// The debounce timer fired: stamp a new fetch. Returns the stamp the
    /// caller must attach to the response.
    pub fn begin_fetch(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    /// Apply a resolved fetch if its stamp is still current. A stale stamp
    /// mutates nothing. Returns whether the response was applied.
    pub fn apply_suggestions(&mut self, stamp: u64, candidates: Vec<Candidate>) -> bool {
        if stamp != self.epoch {
            return false;
        }
        self.suggestions = candidates;
        self.open = true;
        self.selected = None;
        true
    }

    /// A fetch failed. If still current, clear the list and suppress the
    /// dropdown; failure is never surfaced as a user-facing error.
    pub fn apply_fetch_failure(&mut self, stamp: u64) -> bool {
        if stamp != self.epoch {
            return false;
        }
        self.suggestions.clear();
        self.open = false;
        self.selected = None;
        true
    }

    /// Bump the epoch so any in-flight response lands stale. Called on
    /// teardown and whenever a submission supersedes pending suggestions.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }

    /// Keyboard navigation, active only while the dropdown is visible.
    pub fn on_key(&mut self, key: Key) -> KeyEffect {
        if !self.is_open() {
            return KeyEffect::Ignored;
        }
        match key {
            Key::Down => {
                let last = self.suggestions.len() - 1;
                self.selected = Some(match self.selected {
                    None => 0,
                    Some(i) => i.saturating_add(1).min(last),
                });
                KeyEffect::Handled
            }
            Key::Up => {
                self.selected = match self.selected {
                    None | Some(0) => None,
                    Some(i) => Some(i - 1),
                };
                KeyEffect::Handled
            }
            Key::Escape => {
                // List retained; reopening on the next fetch is fine.
                self.open = false;
                self.selected = None;
                KeyEffect::Handled
            }
            Key::Enter => match self.selected {
                Some(i) => {
                    let display = self.suggestions[i].display().to_string();
                    KeyEffect::Submit(self.select(&display))
                }
                // Fall through to the form-level submit.
                None => KeyEffect::Ignored,
            },
        }
    }

    /// Commit a candidate (click or Enter on a selection). Returns the query
    /// to search, trimmed and lowercased; the input field ends up empty.
    pub fn select(&mut self, display: &str) -> String {
        self.query = display.to_string();
        self.open = false;
        self.suggestions.clear();
        self.selected = None;
        self.invalidate();
        let submitted = preprocess::normalize_query(&self.query);
        self.query.clear();
        submitted
    }

    /// Form submission. A keyboard selection takes precedence over the raw
    /// text; blank text is a no-op.
    pub fn on_submit(&mut self) -> Option<String> {
        if self.query.trim().is_empty() {
            return None;
        }
        if let Some(i) = self.selected
            && let Some(candidate) = self.suggestions.get(i)
        {
            let display = candidate.display().to_string();
            return Some(self.select(&display));
        }
        let submitted = preprocess::normalize_query(&self.query);
        self.query.clear();
        self.suggestions.clear();
        self.open = false;
        self.selected = None;
        self.invalidate();
        Some(submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(n: usize) -> Vec<Candidate> {
        (0..n)
            .map(|i| Candidate::new(format!("word{i}"), Some(format!("מ{i}"))))
            .collect()
    }

    fn populated(n: usize) -> SuggestBox {
        let mut sb = SuggestBox::new();
        sb.on_text_change("wo");
        let stamp = sb.begin_fetch();
        assert!(sb.apply_suggestions(stamp, candidates(n)));
        sb
    }

    #[test]
    fn blank_text_clears_without_fetch() {
        let mut sb = populated(3);
        assert_eq!(sb.on_text_change("   "), TextEffect::Cancel);
        assert!(sb.suggestions().is_empty());
        assert!(!sb.is_open());
        assert_eq!(sb.selected(), None);
    }

    #[test]
    fn stale_response_never_overwrites_fresher_state() {
        let mut sb = SuggestBox::new();
        sb.on_text_change("a");
        let first = sb.begin_fetch();
        sb.on_text_change("ab");
        let second = sb.begin_fetch();

        // Second (fresher) response lands first.
        assert!(sb.apply_suggestions(second, candidates(2)));
        // First response resolves late: dropped, no state mutation.
        assert!(!sb.apply_suggestions(first, candidates(5)));
        assert_eq!(sb.suggestions().len(), 2);
    }

    #[test]
    fn clearing_the_query_discards_an_in_flight_fetch() {
        let mut sb = SuggestBox::new();
        sb.on_text_change("a");
        let stamp = sb.begin_fetch();
        sb.on_text_change("");
        // The response resolves after the clear: dropped, dropdown stays
        // closed over the empty field.
        assert!(!sb.apply_suggestions(stamp, candidates(3)));
        assert!(sb.suggestions().is_empty());
        assert!(!sb.is_open());
        assert_eq!(sb.selected(), None);
    }

    #[test]
    fn stale_failure_is_also_dropped() {
        let mut sb = SuggestBox::new();
        sb.on_text_change("a");
        let first = sb.begin_fetch();
        let second = sb.begin_fetch();
        assert!(sb.apply_suggestions(second, candidates(1)));
        assert!(!sb.apply_fetch_failure(first));
        assert_eq!(sb.suggestions().len(), 1);
    }

    #[test]
    fn failure_clears_and_hides() {
        let mut sb = populated(3);
        let stamp = sb.begin_fetch();
        assert!(sb.apply_fetch_failure(stamp));
        assert!(sb.suggestions().is_empty());
        assert!(!sb.is_open());
    }

    #[test]
    fn invalidate_discards_in_flight_response() {
        let mut sb = SuggestBox::new();
        sb.on_text_change("a");
        let stamp = sb.begin_fetch();
        sb.invalidate();
        assert!(!sb.apply_suggestions(stamp, candidates(1)));
        assert!(sb.suggestions().is_empty());
    }

    #[test]
    fn up_from_free_text_stays_free() {
        let mut sb = populated(3);
        assert_eq!(sb.on_key(Key::Up), KeyEffect::Handled);
        assert_eq!(sb.selected(), None);
    }

    #[test]
    fn down_clamps_at_last() {
        let mut sb = populated(3);
        for _ in 0..5 {
            sb.on_key(Key::Down);
        }
        assert_eq!(sb.selected(), Some(2));
    }

    #[test]
    fn up_steps_back_to_free_text() {
        let mut sb = populated(3);
        sb.on_key(Key::Down);
        sb.on_key(Key::Down);
        sb.on_key(Key::Up);
        assert_eq!(sb.selected(), Some(0));
        sb.on_key(Key::Up);
        assert_eq!(sb.selected(), None);
    }

    #[test]
    fn escape_hides_but_keeps_list() {
        let mut sb = populated(3);
        sb.on_key(Key::Down);
        assert_eq!(sb.on_key(Key::Escape), KeyEffect::Handled);
        assert!(!sb.is_open());
        assert_eq!(sb.selected(), None);
        assert_eq!(sb.suggestions().len(), 3);
    }

    #[test]
    fn keys_ignored_while_closed() {
        let mut sb = SuggestBox::new();
        sb.on_text_change("a");
        assert_eq!(sb.on_key(Key::Down), KeyEffect::Ignored);
    }

    #[test]
    fn enter_with_selection_submits_the_candidate() {
        let mut sb = populated(3);
        sb.on_key(Key::Down);
        sb.on_key(Key::Down);
        match sb.on_key(Key::Enter) {
            KeyEffect::Submit(q) => assert_eq!(q, "מ1"),
            other => panic!("expected Submit, got {other:?}"),
        }
        // Field cleared, dropdown gone, ready for the next search.
        assert_eq!(sb.query(), "");
        assert!(sb.suggestions().is_empty());
        assert!(!sb.is_open());
    }

    #[test]
    fn enter_without_selection_falls_through_to_submit() {
        let mut sb = populated(3);
        assert_eq!(sb.on_key(Key::Enter), KeyEffect::Ignored);
        assert_eq!(sb.on_submit().as_deref(), Some("wo"));
    }

    #[test]
    fn submit_prefers_selection_over_raw_text() {
        let mut sb = populated(2);
        sb.on_key(Key::Down);
        assert_eq!(sb.on_submit().as_deref(), Some("מ0"));
    }

    #[test]
    fn submit_lowercases_and_trims_raw_text() {
        let mut sb = SuggestBox::new();
        sb.on_text_change("  Shalom ");
        assert_eq!(sb.on_submit().as_deref(), Some("shalom"));
        assert_eq!(sb.query(), "");
    }

    #[test]
    fn submit_on_blank_is_noop() {
        let mut sb = SuggestBox::new();
        sb.on_text_change(" ");
        assert_eq!(sb.on_submit(), None);
    }

    #[test]
    fn select_invalidates_pending_fetch() {
        let mut sb = populated(2);
        sb.on_text_change("wor");
        let stamp = sb.begin_fetch();
        let _ = sb.select("מ0");
        assert!(!sb.apply_suggestions(stamp, candidates(9)));
        assert!(sb.suggestions().is_empty());
    }
}
