use std::io::{Stdout, Write, stdout};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use milon_core::suggest::SuggestBox;

/// Raw-mode alternate-screen renderer: prompt on top, dropdown under it,
/// results below. Redrawn in full after every event.
pub struct Screen {
    out: Stdout,
    max_rows: usize,
}

impl Screen {
    pub fn new(max_rows: usize) -> std::io::Result<Self> {
        let mut out = stdout();
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self { out, max_rows })
    }

    pub fn draw(&mut self, suggest: &SuggestBox, results: &[String]) -> std::io::Result<()> {
        let (width, height) = terminal::size()?;
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;

        let prompt = format!("Search Jastrow Dictionary: {}\u{258c}", suggest.query());
        queue!(self.out, Print(truncate(&prompt, width)))?;

        let mut row: u16 = 1;
        if suggest.is_open() {
            let first = scroll_offset(suggest.selected(), self.max_rows);
            for (i, candidate) in suggest
                .suggestions()
                .iter()
                .enumerate()
                .skip(first)
                .take(self.max_rows)
            {
                let line = truncate(&format!("  {}", candidate.display()), width);
                queue!(self.out, MoveTo(0, row))?;
                if Some(i) == suggest.selected() {
                    queue!(self.out, Print(line.reverse()))?;
                } else {
                    queue!(self.out, Print(line))?;
                }
                row += 1;
            }
            row += 1;
        }

        for line in results {
            if row >= height {
                break;
            }
            queue!(self.out, MoveTo(0, row), Print(truncate(line, width)))?;
            row += 1;
        }

        self.out.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// First visible dropdown row, keeping the selection inside the window.
fn scroll_offset(selected: Option<usize>, max_rows: usize) -> usize {
    match selected {
        Some(i) if max_rows > 0 && i >= max_rows => i + 1 - max_rows,
        _ => 0,
    }
}

fn truncate(line: &str, width: u16) -> String {
    line.chars().take(width as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_follows_the_selection() {
        assert_eq!(scroll_offset(None, 8), 0);
        assert_eq!(scroll_offset(Some(3), 8), 0);
        assert_eq!(scroll_offset(Some(8), 8), 1);
        assert_eq!(scroll_offset(Some(12), 8), 5);
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("abcdef", 3), "abc");
        // Hebrew with nikkud is multi-byte per char; no byte-boundary panic.
        assert_eq!(truncate("שָׁלוֹם", 3).chars().count(), 3);
    }
}
