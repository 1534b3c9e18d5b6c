use milon_types::DictionaryEntry;

/// Outcome of the most recent lexicon search. "Never searched" and
/// "searched, found nothing" are distinct states, not an overloaded empty
/// list: the first shows the home screen, the second a no-results message.
#[derive(Debug, Clone, Default)]
pub enum ResultsView {
    #[default]
    Unsearched,
    NoMatches {
        query: String,
    },
    Entries {
        query: String,
        entries: Vec<DictionaryEntry>,
    },
}

impl ResultsView {
    /// Each completed search replaces the previous result set wholesale.
    pub fn from_search(query: String, entries: Vec<DictionaryEntry>) -> Self {
        if entries.is_empty() {
            ResultsView::NoMatches { query }
        } else {
            ResultsView::Entries { query, entries }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_is_not_unsearched() {
        let view = ResultsView::from_search("abba".into(), Vec::new());
        assert!(matches!(view, ResultsView::NoMatches { .. }));
        assert!(matches!(ResultsView::default(), ResultsView::Unsearched));
    }

    #[test]
    fn entries_keep_the_query() {
        let view = ResultsView::from_search("abba".into(), vec![DictionaryEntry::default()]);
        match view {
            ResultsView::Entries { query, entries } => {
                assert_eq!(query, "abba");
                assert_eq!(entries.len(), 1);
            }
            other => panic!("expected Entries, got {other:?}"),
        }
    }
}
