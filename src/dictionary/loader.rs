//! Dictionary loading utilities
//!
//! Reads plain-text word lists (one word per line) or falls back to the embedded list.

use super::Dictionary;
use crate::core::Word;
use crate::error::LadderError;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load a dictionary from a file
///
/// Lines are trimmed and lowercased; blank lines, lines that are not a single word and
/// lines that are not valid UTF-8 are skipped. No length restriction is applied here.
///
/// # Errors
///
/// Returns `LadderError::DictionaryLoad` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_ladder::dictionary::load_dictionary;
///
/// let dictionary = load_dictionary("dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary, LadderError> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| LadderError::DictionaryLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let mut undecodable = 0_usize;
    let dictionary: Dictionary = content
        .split(|&byte| byte == b'\n')
        .filter_map(|line| {
            let decoded = std::str::from_utf8(line).ok();
            if decoded.is_none() {
                undecodable += 1;
            }
            decoded
        })
        .filter_map(parse_line)
        .collect();

    if undecodable > 0 {
        warn!(path = %path.display(), lines = undecodable, "Skipped lines that are not UTF-8");
    }
    info!(
        path = %path.display(),
        words = dictionary.len(),
        lengths = ?dictionary.lengths().collect::<Vec<_>>(),
        "Loaded dictionary"
    );
    Ok(dictionary)
}

/// Load a dictionary from a file, using the embedded list if the file is unavailable
#[must_use]
pub fn load_dictionary_or_builtin<P: AsRef<Path>>(path: P) -> Dictionary {
    match load_dictionary(path) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            let dictionary = Dictionary::builtin();
            warn!(error = %err, words = dictionary.len(), "Using built-in dictionary");
            dictionary
        }
    }
}

/// Parse a word list, one word per line
#[must_use]
pub fn parse_word_list(content: &str) -> Dictionary {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Word> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Word::new(trimmed).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_word_list_skips_blank_and_invalid_lines() {
        let dictionary = parse_word_list("cat\n\n  Hat  \nno way\nd0g\nstone\ncat\n");
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("hat"));
        assert!(dictionary.contains("stone"));
    }

    #[test]
    fn parse_word_list_keeps_every_length() {
        let dictionary = parse_word_list("a\nab\nabc\nabcd\n");
        assert_eq!(dictionary.lengths().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn load_dictionary_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat\nhat\nhot").unwrap();

        let dictionary = load_dictionary(file.path()).unwrap();
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn load_dictionary_skips_lines_that_are_not_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"cat\nhat\nhot\ncaf\xe9\ndot\r\ndog\n").unwrap();

        let dictionary = load_dictionary(file.path()).unwrap();
        assert_eq!(dictionary.len(), 5);
        assert!(dictionary.contains("dot"));
        assert!(dictionary.contains("dog"));
        assert!(!dictionary.contains("caf"));
    }

    #[test]
    fn load_dictionary_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_dictionary(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(LadderError::DictionaryLoad { .. })));
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let dictionary = load_dictionary_or_builtin(dir.path().join("missing.txt"));
        assert_eq!(dictionary.len(), Dictionary::builtin().len());
    }
}
