//! Root word sources.
//!
//! A round starts by drawing one word from a [`WordSource`]. The list itself
//! may be empty (the session then falls back to [`FALLBACK_ROOT_WORD`]), but a
//! source that cannot be read at all is a configuration error.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use thiserror::Error;

/// Root word used when the source yields no words
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("couldn't load start words from {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Supplies the candidate root words.
pub trait WordSource {
    fn root_words(&self) -> Result<&[String], WordSourceError>;
}

/// Split a newline-delimited resource into words, skipping blank lines
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// An in-memory list of start words
#[derive(Debug, Clone, Default)]
pub struct StartWords {
    words: Vec<String>,
}

impl StartWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parse(content: &str) -> Self {
        Self {
            words: parse_word_list(content),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for StartWords {
    fn root_words(&self) -> Result<&[String], WordSourceError> {
        Ok(&self.words)
    }
}

/// Start words read from a file the first time they are needed.
///
/// A failed read is not cached, so a later call retries.
#[derive(Debug)]
pub struct FileWordSource {
    path: PathBuf,
    words: OnceCell<StartWords>,
}

impl FileWordSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            words: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn root_words(&self) -> Result<&[String], WordSourceError> {
        let words = self.words.get_or_try_init(|| {
            let content =
                std::fs::read_to_string(&self.path).map_err(|source| WordSourceError::Unreadable {
                    path: self.path.clone(),
                    source,
                })?;
            let words = StartWords::parse(&content);
            tracing::info!(
                "Loaded {} start words from {}",
                words.len(),
                self.path.display()
            );
            Ok::<_, WordSourceError>(words)
        })?;

        words.root_words()
    }
}
