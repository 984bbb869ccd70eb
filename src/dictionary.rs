//! Dictionary loading
//!
//! Loads the list of forbidden substrings used by the dictionary rule.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read dictionary file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An ordered list of forbidden words.
///
/// Empty entries are kept in place but never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Loads a newline-separated word list from `path`.
    ///
    /// The file is read once, here. Lines are split on `'\n'` only and are
    /// not trimmed, so a word list with CRLF endings keeps the `'\r'`.
    /// An empty file is accepted and produces a dictionary that matches nothing.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read as UTF-8 text
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pwd_policy::Dictionary;
    ///
    /// let dictionary = Dictionary::from_path("assets/pswd-dict.txt")?;
    /// println!("{} forbidden words", dictionary.len());
    /// # Ok::<(), pwd_policy::DictionaryError>(())
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: file not found {}", path.display());
            return Err(DictionaryError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: {} ({})", path.display(), source);
            DictionaryError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let dictionary = Self::from_words(content.split('\n'));

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Dictionary loaded: {} words from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Builds a dictionary from words already in memory.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// All entries in load order, empty ones included.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of non-empty words.
    pub fn len(&self) -> usize {
        self.matchable().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the first non-empty word that occurs in `password`.
    pub fn find_in(&self, password: &str) -> Option<&str> {
        self.matchable().find(|word| password.contains(*word))
    }

    pub fn contains_word_of(&self, password: &str) -> bool {
        self.find_in(password).is_some()
    }

    fn matchable(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|word| !word.is_empty())
    }
}
