use crate::{
    dictionary::{DictionaryOracle, Language},
    models::RejectionReason,
    utils::letters::can_spell,
};

pub struct WordValidator;

impl WordValidator {
    /// Check that the word hasn't been accepted already this round
    pub fn is_original(used_words: &[String], word: &str) -> bool {
        let word = word.to_lowercase();
        !used_words.contains(&word)
    }

    /// Ask the dictionary whether the word exists
    pub fn is_real(dictionary: &dyn DictionaryOracle, word: &str) -> bool {
        dictionary.is_recognized_word(word, Language::English)
    }

    /// Check that the word can be spelled from the root word's letters
    pub fn is_possible(root_word: &str, word: &str) -> bool {
        can_spell(root_word, word)
    }

    /// Run all checks in order: originality, realness, then feasibility.
    /// The first failing check decides the rejection reason.
    pub fn validate(
        root_word: &str,
        used_words: &[String],
        dictionary: &dyn DictionaryOracle,
        word: &str,
    ) -> Result<(), RejectionReason> {
        if !Self::is_original(used_words, word) {
            return Err(RejectionReason::AlreadyUsed);
        }
        if !Self::is_real(dictionary, word) {
            return Err(RejectionReason::NotARealWord);
        }
        if !Self::is_possible(root_word, word) {
            return Err(RejectionReason::NotPossible);
        }
        Ok(())
    }
}
