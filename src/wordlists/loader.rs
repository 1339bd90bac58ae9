//! Word list loading utilities
//!
//! Word lists are comma-separated 5-letter tokens, on one row or several. Loading is
//! strict: a malformed token fails the whole list rather than being skipped.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for vocabulary loading
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io { path: PathBuf, source: io::Error },
    /// A token is not a valid word
    InvalidWord {
        token: String,
        index: usize,
        source: WordError,
    },
    /// The list holds no words
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::InvalidWord {
                token,
                index,
                source,
            } => write!(f, "Invalid word '{token}' at entry {}: {source}", index + 1),
            Self::Empty => write!(f, "Word list is empty"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidWord { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// Parse comma-separated word text
///
/// Blank tokens (trailing commas, blank lines) are ignored. An input with no tokens
/// parses to an empty list; callers that need words check for that themselves.
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` for the first token that is not a valid word.
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::parse_words;
///
/// let words = parse_words("crane, slate,\nstood").unwrap();
/// assert_eq!(words.len(), 3);
/// assert!(parse_words("crane,sloths").is_err());
/// ```
pub fn parse_words(content: &str) -> Result<Vec<Word>, LoadError> {
    content
        .split([',', '\n', '\r'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            Word::new(token).map_err(|source| LoadError::InvalidWord {
                token: token.to_string(),
                index,
                source,
            })
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, `LoadError::InvalidWord` for a
/// malformed token and `LoadError::Empty` if the file holds no words.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.csv").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content)?;
    if words.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// Invalid entries are skipped; the embedded lists are checked by the
/// `embedded_lists_are_valid_words` test in `wordlists`.
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::words_from_slice;
/// use wordle_assist::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
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
        let input = &["crane", "slate", "stood"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "stood");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_words_handles_rows_and_blanks() {
        let words = parse_words("crane,slate,\n\nstood , spoon,\r\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "stood", "spoon"]);
    }

    #[test]
    fn parse_words_lowercases() {
        let words = parse_words("CRANE").unwrap();
        assert_eq!(words[0].text(), "crane");
    }

    #[test]
    fn parse_words_rejects_bad_token() {
        let err = parse_words("crane,sla,stood").unwrap_err();
        match err {
            LoadError::InvalidWord { token, index, .. } => {
                assert_eq!(token, "sla");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_words_empty_input() {
        assert!(parse_words("").unwrap().is_empty());
        assert!(parse_words(" , ,\n").unwrap().is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_from_file("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.csv"));
    }

    #[test]
    fn load_from_file_round_trips_through_disk() {
        let path = std::env::temp_dir().join(format!("wordle_assist_{}.csv", std::process::id()));
        fs::write(&path, "crane,slate\nstood").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn load_empty_file_is_refused() {
        let path =
            std::env::temp_dir().join(format!("wordle_assist_empty_{}.csv", std::process::id()));
        fs::write(&path, ",\n").unwrap();

        let err = load_from_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, LoadError::Empty));
    }
}
