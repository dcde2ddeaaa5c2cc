//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use terminal_hacking::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = words_from_lines(&content);

    if words.is_empty() {
        warn!("No usable words in {}", path.as_ref().display());
    }

    Ok(words)
}

/// Parse one word per line, skipping blank lines and invalid entries
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use terminal_hacking::wordlists::loader::words_from_slice;
/// use terminal_hacking::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["root", "admin", "kernel"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "root");
        assert_eq!(words[1].text(), "admin");
        assert_eq!(words[2].text(), "kernel");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["root", "r00t", "", "two words", "admin"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "root");
        assert_eq!(words[1].text(), "admin");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn words_from_lines_trims_and_skips_blank() {
        let content = "  proxy \n\nDAEMON\n\t\nsh3ll\ncache\n";
        let words = words_from_lines(content);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["proxy", "daemon", "cache"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "terminal_hacking_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "socket\nsignal\n\nstream\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[2].text(), "stream");
    }

    #[test]
    fn load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("terminal_hacking_definitely_missing.txt");
        assert!(load_from_file(path).is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
