use crate::entry::DictionaryEntry;

/// One word-completion candidate: the plain spelling plus an optional
/// diacritic-marked (nikkud) spelling. The marked form, when present, is
/// both the display value and the value submitted on selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub plain: String,
    pub marked: Option<String>,
}

impl Candidate {
    pub fn new(plain: impl Into<String>, marked: Option<String>) -> Self {
        Self {
            plain: plain.into(),
            marked,
        }
    }

    /// Display value: the marked spelling when present, the plain one
    /// otherwise.
    pub fn display(&self) -> &str {
        match &self.marked {
            Some(marked) if !marked.is_empty() => marked,
            _ => &self.plain,
        }
    }
}

/// Raw terminal input after key decoding, before any interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    Up,
    Down,
    Enter,
    Escape,
    Quit,
}

/// Events flowing into the app event loop: terminal input plus the
/// completions of the two async gateway calls.
#[derive(Debug, Clone)]
pub enum AppEvent {
    Input(InputEvent),
    /// A completion fetch resolved. `epoch` is the stamp captured when the
    /// fetch was issued; the coordinator drops it if superseded.
    SuggestionsReady {
        epoch: u64,
        candidates: Vec<Candidate>,
    },
    /// A completion fetch failed. Carries only the stamp; the error was
    /// already logged at the call site.
    SuggestionsFailed {
        epoch: u64,
    },
    /// A lexicon search resolved (possibly with zero entries).
    SearchDone {
        query: String,
        entries: Vec<DictionaryEntry>,
    },
    Redraw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefers_marked_form() {
        let c = Candidate::new("abba", Some("אַבָּא".to_string()));
        assert_eq!(c.display(), "אַבָּא");
    }

    #[test]
    fn display_falls_back_to_plain() {
        assert_eq!(Candidate::new("abba", None).display(), "abba");
        assert_eq!(Candidate::new("abba", Some(String::new())).display(), "abba");
    }
}
