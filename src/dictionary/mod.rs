use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tokio::fs;
use anyhow::Result;

/// Language a word is checked against. Only English word lists are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Answers whether a string is a recognized word.
pub trait DictionaryOracle {
    fn is_recognized_word(&self, word: &str, language: Language) -> bool;
}

pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let dictionary = Self::from_words(content.lines());

        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// Build a dictionary from an in-memory word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for Dictionary {
    fn is_recognized_word(&self, word: &str, language: Language) -> bool {
        match language {
            Language::English => self.contains(word),
        }
    }
}
