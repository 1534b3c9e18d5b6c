pub mod entry;
pub mod types;

pub use entry::{AltHeadword, DictionaryEntry, EntryContent, ParentLexiconDetails, Sense, SenseGrammar};
pub use types::{AppEvent, Candidate, InputEvent};
