//! Pure presentation: dictionary entries to formatted text lines.
//!
//! Every optional field renders only when present; nothing is substituted
//! for absent data. Senses render recursively with no depth limit.

use milon_core::results::ResultsView;
use milon_types::{AltHeadword, DictionaryEntry, Sense};

use crate::error::RenderError;
use crate::fragment;
use crate::home;
use crate::sanitize::Sanitizer;

pub struct EntryRenderer {
    sanitizer: Sanitizer,
}

impl EntryRenderer {
    pub fn new(web_origin: &str) -> Result<Self, RenderError> {
        Ok(Self {
            sanitizer: Sanitizer::new(web_origin)?,
        })
    }

    /// Render the whole results area. The unsearched state shows the home
    /// screen; a completed search with no matches shows a message instead.
    pub fn render(&self, view: &ResultsView) -> Vec<String> {
        match view {
            ResultsView::Unsearched => home::home_screen(),
            ResultsView::NoMatches { query } => {
                vec![format!("No results found for \u{201c}{query}\u{201d}.")]
            }
            ResultsView::Entries { query: _, entries } => {
                let noun = if entries.len() == 1 { "entry" } else { "entries" };
                let mut lines = vec![format!("Found {} {noun}", entries.len()), String::new()];
                for entry in entries {
                    lines.extend(self.entry_card(entry));
                    lines.push(String::new());
                }
                lines
            }
        }
    }

    /// Sanitize a markup-bearing field and flatten it for the terminal.
    fn markup(&self, raw: &str) -> String {
        fragment::flatten(&self.sanitizer.clean(raw))
    }

    fn entry_card(&self, entry: &DictionaryEntry) -> Vec<String> {
        let mut lines = Vec::new();

        let mut header = if entry.parent_lexicon.is_empty() {
            "Unknown Lexicon".to_string()
        } else {
            entry.parent_lexicon.clone()
        };
        if let Some(rid) = &entry.rid {
            header.push_str(&format!(" ({rid})"));
        }
        lines.push(header);
        lines.push("─".repeat(40));

        let mut headword = entry.headword.clone();
        if let Some(suffix) = &entry.headword_suffix {
            headword.push(' ');
            headword.push_str(suffix);
        }
        lines.push(headword);

        let alts: Vec<&str> = entry.alt_headwords.iter().filter_map(AltHeadword::word).collect();
        if !alts.is_empty() {
            lines.push(format!("Also: {}", alts.join(", ")));
        }

        let mut meta = Vec::new();
        if let Some(t) = &entry.transliteration {
            meta.push(t.clone());
        }
        if let Some(p) = &entry.pronunciation {
            meta.push(format!("/{p}/"));
        }
        if let Some(s) = &entry.strong_number {
            meta.push(format!("Strong's: {s}"));
        }
        if !entry.strong_numbers.is_empty() {
            meta.push(format!("Strong's: {}", entry.strong_numbers.join(", ")));
        }
        if !entry.twot.is_empty() {
            meta.push(format!("TWOT: {}", entry.twot.join(", ")));
        }
        if !entry.gk.is_empty() {
            meta.push(format!("GK: {}", entry.gk.join(", ")));
        }
        if let Some(lc) = &entry.language_code {
            meta.push(format!("Lang: {lc}"));
        }
        if let Some(lr) = &entry.language_reference {
            meta.push(self.markup(lr));
        }
        if !meta.is_empty() {
            lines.push(meta.join("  "));
        }

        if let Some(m) = &entry.morphology {
            lines.push(format!("Morphology: {m}"));
        }
        if let Some(m) = &entry.content.morphology {
            lines.push(format!("Morphology: {m}"));
        }

        let mut flags = Vec::new();
        if entry.root {
            flags.push("✓ Root form".to_string());
        }
        if entry.peculiar {
            flags.push("‡ Peculiar to Biblical Aramaic".to_string());
        }
        if entry.all_cited {
            flags.push("† All occurrences cited".to_string());
        }
        if entry.brackets {
            flags.push("[brackets]".to_string());
        }
        if let Some(ordinal) = &entry.ordinal {
            flags.push(format!("Entry {ordinal}"));
        }
        if !flags.is_empty() {
            lines.push(flags.join("  "));
        }

        if let Some(occ) = &entry.occurrences {
            lines.push(format!("Occurs {occ}× in the Bible"));
        }

        if !entry.plural_form.is_empty() {
            lines.push(format!("Plural: {}", entry.plural_form.join(", ")));
        }

        if !entry.content.senses.is_empty() {
            lines.push("Definitions:".to_string());
            for sense in &entry.content.senses {
                self.sense_lines(sense, 1, &mut lines);
            }
        }

        if let Some(notes) = &entry.notes {
            lines.push(format!("Notes: {}", self.markup(notes)));
        }
        if let Some(derivatives) = &entry.derivatives {
            lines.push(format!("Derivatives: {}", self.markup(derivatives)));
        }
        if !entry.refs.is_empty() {
            lines.push(format!("References: {}", entry.refs.join(", ")));
        }
        if !entry.quotes.is_empty() {
            lines.push(entry.quotes.join("; "));
        }

        let mut nav = Vec::new();
        if let Some(prev) = &entry.prev_hw {
            nav.push(format!("← Previous: {prev}"));
        }
        if let Some(next) = &entry.next_hw {
            nav.push(format!("Next: {next} →"));
        }
        if !nav.is_empty() {
            lines.push(nav.join("    "));
        }

        if let Some(details) = &entry.parent_lexicon_details {
            if let Some(source) = &details.source {
                let mut line = format!("Source: {source}");
                if let Some(url) = &details.source_url {
                    line.push_str(&format!(" ({url})"));
                }
                lines.push(line);
            }
            if let Some(attribution) = &details.attribution {
                let mut line = format!("Attribution: {attribution}");
                if let Some(url) = &details.attribution_url {
                    line.push_str(&format!(" ({url})"));
                }
                lines.push(line);
            }
        }

        lines
    }

    fn sense_lines(&self, sense: &Sense, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        let mut parts = Vec::new();

        if let Some(n) = &sense.number {
            parts.push(format!("{n}."));
        }
        if let Some(pre) = &sense.pre_num {
            parts.push(pre.clone());
        }
        if let Some(n) = &sense.num {
            parts.push(format!("{n}."));
        }
        if let Some(grammar) = &sense.grammar {
            let mut g = Vec::new();
            if let Some(m) = &grammar.morphology {
                g.push(format!("[{m}]"));
            }
            if let Some(v) = &grammar.verbal_stem {
                g.push(format!("({v})"));
            }
            if let Some(lc) = &grammar.language_code {
                g.push(format!("{{{lc}}}"));
            }
            if let Some(binyan) = &grammar.binyan_form
                && !binyan.is_empty()
            {
                g.push(binyan.join(", "));
            }
            if !g.is_empty() {
                parts.push(g.join(" "));
            }
        }
        if let Some(form) = &sense.form {
            parts.push(format!("[{form}]"));
        }
        if let Some(plural) = &sense.plural_form {
            parts.push(format!("[plural: {plural}]"));
        }
        if let Some(definition) = &sense.definition {
            parts.push(self.markup(definition));
        }
        if let Some(occ) = &sense.occurences {
            parts.push(format!("(occurs {occ}×)"));
        }
        if sense.all_cited {
            parts.push("†".to_string());
        }
        if let Some(lc) = &sense.language_code {
            parts.push(format!("[{lc}]"));
        }
        if let Some(m) = &sense.morphology {
            parts.push(format!("({m})"));
        }
        if !parts.is_empty() {
            lines.push(format!("{indent}{}", parts.join(" ")));
        }

        if let Some(note) = &sense.note {
            lines.push(format!("{indent}  Note: {}", self.markup(note)));
        }
        if let Some(notes) = &sense.notes {
            lines.push(format!("{indent}  {}", self.markup(notes)));
        }
        if let Some(alternative) = &sense.alternative {
            lines.push(format!("{indent}  Alternative: {alternative}"));
        }

        if let Some(children) = &sense.senses {
            for child in children {
                self.sense_lines(child, depth + 1, lines);
            }
        }
    }
}
