use std::sync::Arc;

use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use crate::{
    dictionary::DictionaryOracle,
    game::{Scorer, WordValidator},
    models::{GamePhase, GameSnapshot, RejectionReason, RoundStart, Submission},
    words::{WordSource, WordSourceError, FALLBACK_ROOT_WORD},
};

/// A single player's game: the current root word, the words found for it,
/// and the score and turn count across rounds.
///
/// Not meant to be shared; callers feed it one action at a time.
pub struct GameSession {
    words: Arc<dyn WordSource + Send + Sync>,
    dictionary: Arc<dyn DictionaryOracle + Send + Sync>,
    rng: StdRng,
    max_turns: u32,
    root_word: String,
    /// Most recent first, lowercase
    used_words: Vec<String>,
    score: u32,
    turn: u32,
    pending: String,
}

impl GameSession {
    pub fn new(
        words: Arc<dyn WordSource + Send + Sync>,
        dictionary: Arc<dyn DictionaryOracle + Send + Sync>,
        max_turns: u32,
    ) -> Self {
        Self {
            words,
            dictionary,
            rng: StdRng::from_os_rng(),
            max_turns: max_turns.max(1),
            root_word: String::new(),
            used_words: Vec::new(),
            score: 0,
            turn: 0,
            pending: String::new(),
        }
    }

    /// Replace the random source used to pick root words
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Begin the next round, or end the game if the last round was just played.
    ///
    /// On game over the score and turn counter are reset and no round is
    /// started; the next call begins a fresh game.
    pub fn start_round(&mut self) -> Result<RoundStart, WordSourceError> {
        if self.turn == self.max_turns {
            let final_score = self.score;
            tracing::info!("Game over after {} rounds with {} points", self.turn, final_score);
            self.reset();
            return Ok(RoundStart::GameOver { final_score });
        }

        let root_word = self
            .words
            .root_words()?
            .choose(&mut self.rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_ROOT_WORD)
            .to_uppercase();

        self.root_word = root_word.clone();
        self.used_words.clear();
        self.turn += 1;

        tracing::debug!(
            "Round {}/{} started with root word {}",
            self.turn,
            self.max_turns,
            self.root_word
        );

        Ok(RoundStart::Started {
            root_word,
            is_final_round: self.is_final_round(),
        })
    }

    /// Validate a candidate word and score it if it passes.
    ///
    /// Blank input is ignored without touching any state. Otherwise the
    /// pending input is cleared whatever the outcome.
    pub fn submit(&mut self, candidate: &str) -> Result<Submission, RejectionReason> {
        let trimmed = candidate.trim();
        let answer = trimmed.to_lowercase();
        if answer.is_empty() {
            return Ok(Submission::Ignored);
        }

        self.pending.clear();

        if let Err(reason) = WordValidator::validate(
            &self.root_word,
            &self.used_words,
            self.dictionary.as_ref(),
            trimmed,
        ) {
            tracing::debug!("Rejected '{}' for {}: {}", answer, self.root_word, reason.title());
            return Err(reason);
        }

        self.score += Scorer::word_score(&answer);
        self.used_words.insert(0, answer.clone());

        tracing::debug!("Accepted '{}', score is now {}", answer, self.score);

        Ok(Submission::Accepted {
            word: answer,
            score: self.score,
        })
    }

    /// Record what the player has typed so far
    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Submit whatever is currently typed
    pub fn submit_pending(&mut self) -> Result<Submission, RejectionReason> {
        let candidate = self.pending.clone();
        self.submit(&candidate)
    }

    fn reset(&mut self) {
        self.turn = 0;
        self.score = 0;
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// True while playing the last round of the game
    pub fn is_final_round(&self) -> bool {
        self.turn == self.max_turns
    }

    pub fn phase(&self) -> GamePhase {
        if self.turn == 0 {
            GamePhase::Idle
        } else {
            GamePhase::RoundActive
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase(),
            root_word: self.root_word.clone(),
            used_words: self.used_words.clone(),
            score: self.score,
            turn: self.turn,
            max_turns: self.max_turns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dictionary::Dictionary,
        models::DEFAULT_MAX_TURNS,
        words::{FileWordSource, StartWords},
    };

    const WORDS: [&str; 7] = ["silk", "worm", "silkworm", "milk", "room", "act", "cat"];

    fn session_with_roots(roots: &[&str]) -> GameSession {
        let words = Arc::new(StartWords::new(roots.iter().copied()));
        let dictionary = Arc::new(Dictionary::from_words(WORDS));
        GameSession::new(words, dictionary, DEFAULT_MAX_TURNS).with_rng(StdRng::seed_from_u64(7))
    }

    fn started(roots: &[&str]) -> GameSession {
        let mut session = session_with_roots(roots);
        session.start_round().unwrap();
        session
    }

    #[test]
    fn test_start_round_picks_uppercase_root_word() {
        let mut session = session_with_roots(&["silkworm"]);
        assert_eq!(session.phase(), GamePhase::Idle);

        let start = session.start_round().unwrap();
        assert_eq!(
            start,
            RoundStart::Started {
                root_word: "SILKWORM".to_string(),
                is_final_round: false,
            }
        );
        assert_eq!(session.root_word(), "SILKWORM");
        assert_eq!(session.turn(), 1);
        assert_eq!(session.phase(), GamePhase::RoundActive);
    }

    #[test]
    fn test_root_word_comes_from_source() {
        let roots = ["alpha", "beta", "gamma"];
        let mut session = session_with_roots(&roots);
        for _ in 0..DEFAULT_MAX_TURNS {
            session.start_round().unwrap();
            let root = session.root_word().to_lowercase();
            assert!(roots.contains(&root.as_str()), "unexpected root word {}", root);
        }
    }

    #[test]
    fn test_empty_source_falls_back_to_silkworm() {
        let mut session = session_with_roots(&[]);
        session.start_round().unwrap();
        assert_eq!(session.root_word(), "SILKWORM");
    }

    #[test]
    fn test_missing_source_is_an_error_and_leaves_state_alone() {
        let path = std::env::temp_dir().join(format!("missing-{}.txt", uuid::Uuid::new_v4()));
        let mut session = GameSession::new(
            Arc::new(FileWordSource::new(path)),
            Arc::new(Dictionary::empty()),
            DEFAULT_MAX_TURNS,
        );

        assert!(session.start_round().is_err());
        assert_eq!(session.turn(), 0);
        assert_eq!(session.root_word(), "");
    }

    #[test]
    fn test_accepting_a_word() {
        let mut session = started(&["silkworm"]);

        let result = session.submit("silk");
        assert_eq!(
            result,
            Ok(Submission::Accepted {
                word: "silk".to_string(),
                score: 4,
            })
        );
        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words(), ["silk"]);
    }

    #[test]
    fn test_used_words_are_most_recent_first() {
        let mut session = started(&["silkworm"]);
        session.submit("silk").unwrap();
        session.submit("Worm").unwrap();
        assert_eq!(session.used_words(), ["worm", "silk"]);
        assert_eq!(session.score(), 8);
    }

    #[test]
    fn test_repeated_word_is_already_used() {
        let mut session = started(&["silkworm"]);
        session.submit("silk").unwrap();

        assert_eq!(session.submit("silk"), Err(RejectionReason::AlreadyUsed));
        assert_eq!(session.submit(" SILK "), Err(RejectionReason::AlreadyUsed));
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn test_unknown_word_is_not_real_even_if_letters_are_missing() {
        let mut session = started(&["silkworm"]);
        assert_eq!(session.submit("silkx"), Err(RejectionReason::NotARealWord));
        assert_eq!(session.submit("xyzzy"), Err(RejectionReason::NotARealWord));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_real_word_with_missing_letters_is_not_possible() {
        let mut session = started(&["silkworm"]);
        assert_eq!(session.submit("room"), Err(RejectionReason::NotPossible));
    }

    #[test]
    fn test_anagram_of_root_word_is_accepted() {
        let mut session = started(&["cat"]);
        assert!(matches!(session.submit("act"), Ok(Submission::Accepted { .. })));
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let mut session = started(&["silkworm"]);
        session.submit("silk").unwrap();
        let before = session.snapshot();

        for candidate in ["room", "xyzzy", "silk"] {
            let first = session.submit(candidate);
            let second = session.submit(candidate);
            assert!(first.is_err());
            assert_eq!(first, second);
            assert_eq!(session.snapshot(), before);
        }
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let mut session = started(&["silkworm"]);
        session.set_pending("   ");

        assert_eq!(session.submit_pending(), Ok(Submission::Ignored));
        assert_eq!(session.submit(""), Ok(Submission::Ignored));
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
        assert_eq!(session.pending(), "   ");
    }

    #[test]
    fn test_pending_cleared_after_processing() {
        let mut session = started(&["silkworm"]);

        session.set_pending("milk");
        assert!(session.submit_pending().is_ok());
        assert_eq!(session.pending(), "");

        session.set_pending("room");
        assert_eq!(session.submit_pending(), Err(RejectionReason::NotPossible));
        assert_eq!(session.pending(), "");
    }

    #[test]
    fn test_new_round_clears_used_words_but_keeps_score() {
        let mut session = started(&["silkworm"]);
        session.submit("silk").unwrap();

        session.start_round().unwrap();
        assert!(session.used_words().is_empty());
        assert!(!session.root_word().is_empty());
        assert_eq!(session.score(), 4);

        // Words may be found again in a new round
        assert!(session.submit("silk").is_ok());
        assert_eq!(session.score(), 8);
    }

    #[test]
    fn test_game_over_after_max_turns() {
        let mut session = session_with_roots(&["silkworm"]);

        for turn in 1..=DEFAULT_MAX_TURNS {
            let start = session.start_round().unwrap();
            let is_last = turn == DEFAULT_MAX_TURNS;
            assert!(matches!(
                start,
                RoundStart::Started { is_final_round, .. } if is_final_round == is_last
            ));
            session.submit("worm").unwrap();
        }
        assert!(session.is_final_round());

        let end = session.start_round().unwrap();
        assert_eq!(
            end,
            RoundStart::GameOver {
                final_score: 4 * DEFAULT_MAX_TURNS,
            }
        );
        assert_eq!(session.score(), 0);
        assert_eq!(session.turn(), 0);
        assert_eq!(session.phase(), GamePhase::Idle);

        // The next call starts a fresh game
        assert!(matches!(session.start_round().unwrap(), RoundStart::Started { .. }));
        assert_eq!(session.turn(), 1);
    }

    #[test]
    fn test_single_turn_game() {
        let words = Arc::new(StartWords::new(["cat"]));
        let mut session = GameSession::new(words, Arc::new(Dictionary::empty()), 1);

        assert_eq!(
            session.start_round().unwrap(),
            RoundStart::Started {
                root_word: "CAT".to_string(),
                is_final_round: true,
            }
        );
        assert_eq!(
            session.start_round().unwrap(),
            RoundStart::GameOver { final_score: 0 }
        );
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = started(&["silkworm"]);
        session.submit("milk").unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, GamePhase::RoundActive);
        assert_eq!(snapshot.root_word, "SILKWORM");
        assert_eq!(snapshot.used_words, vec!["milk"]);
        assert_eq!(snapshot.score, 4);
        assert_eq!(snapshot.turn, 1);
        assert_eq!(snapshot.max_turns, DEFAULT_MAX_TURNS);
    }
}
