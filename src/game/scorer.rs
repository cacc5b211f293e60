pub struct Scorer;

impl Scorer {
    /// Points for an accepted word: one per letter
    pub fn word_score(word: &str) -> u32 {
        word.chars().count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_word_length() {
        assert_eq!(Scorer::word_score("silk"), 4);
        assert_eq!(Scorer::word_score("a"), 1);
        assert_eq!(Scorer::word_score(""), 0);
    }

    #[test]
    fn test_score_counts_chars_not_bytes() {
        assert_eq!(Scorer::word_score("café"), 4);
    }
}
