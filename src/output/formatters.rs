//! Formatting utilities for terminal output

use crate::core::Word;
use crate::interactive::MAX_ATTEMPTS;

/// Words shown per row in the word grid
pub const GRID_COLUMNS: usize = 4;

/// Format puzzle words as rows of a fixed-width grid
///
/// Words for which `is_dud` returns true are replaced by dots of the same length.
#[must_use]
pub fn format_word_grid<'a, I, F>(words: I, is_dud: F) -> Vec<String>
where
    I: IntoIterator<Item = &'a Word>,
    F: Fn(&Word) -> bool,
{
    let cells: Vec<String> = words
        .into_iter()
        .map(|word| {
            if is_dud(word) {
                ".".repeat(word.len())
            } else {
                word.text().to_string()
            }
        })
        .collect();

    let width = cells.iter().map(String::len).max().unwrap_or(0);

    cells
        .chunks(GRID_COLUMNS)
        .map(|row| {
            row.iter()
                .map(|cell| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Attempt blocks, filled for attempts left: `■ ■ □ □`
///
/// At most [`MAX_ATTEMPTS`] blocks are drawn.
#[must_use]
pub fn attempts_blocks(left: u32, max: u32) -> String {
    let max = max.min(MAX_ATTEMPTS);
    let left = left.min(max);
    let mut blocks = vec!["■"; left as usize];
    blocks.resize(max as usize, "□");
    blocks.join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn word_grid_rows_of_four() {
        let words = words_from_slice(&["root", "host", "code", "data", "disk", "fire"]);
        let rows = format_word_grid(&words, |_| false);

        assert_eq!(rows, vec!["root  host  code  data", "disk  fire"]);
    }

    #[test]
    fn word_grid_hides_duds() {
        let words = words_from_slice(&["root", "host"]);
        let rows = format_word_grid(&words, |w| w.text() == "host");

        assert_eq!(rows, vec!["root  ...."]);
    }

    #[test]
    fn word_grid_empty() {
        let rows = format_word_grid(&Vec::<Word>::new(), |_| false);
        assert!(rows.is_empty());
    }

    #[test]
    fn attempts_blocks_partial() {
        assert_eq!(attempts_blocks(2, 4), "■ ■ □ □");
        assert_eq!(attempts_blocks(0, 3), "□ □ □");
        assert_eq!(attempts_blocks(9, 2), "■ ■");
    }

    #[test]
    fn attempts_blocks_capped_at_max_attempts() {
        let blocks = attempts_blocks(3, u32::MAX);
        assert_eq!(blocks.split(' ').count(), MAX_ATTEMPTS as usize);
        assert!(blocks.starts_with("■ ■ ■ □"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
