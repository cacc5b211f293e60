/// A consumable multiset of letters.
///
/// Built from a root word, letters are removed one occurrence at a time as a
/// candidate word is spelled out. Comparison is case-insensitive; everything
/// is stored lowercase.
#[derive(Debug, Clone)]
pub struct LetterPool {
    remaining: Vec<char>,
}

impl LetterPool {
    pub fn new(word: &str) -> Self {
        Self {
            remaining: word.to_lowercase().chars().collect(),
        }
    }

    /// Remove one occurrence of `letter` from the pool.
    /// Returns false if no occurrence is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                self.remaining.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Consume every letter of `word`, stopping at the first one that is missing
    pub fn take_word(&mut self, word: &str) -> bool {
        word.to_lowercase().chars().all(|letter| self.take(letter))
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Check whether `word` can be spelled using letters of `root`, each at most once
pub fn can_spell(root: &str, word: &str) -> bool {
    LetterPool::new(root).take_word(word)
}
