use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of rounds in a full game
pub const DEFAULT_MAX_TURNS: u32 = 10;

/// Why a submitted word was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    #[error("Be more original.")]
    AlreadyUsed,
    #[error("That isn't a real word!")]
    NotARealWord,
    #[error("You can't just make them up! You know.")]
    NotPossible,
}

impl RejectionReason {
    pub fn title(&self) -> &'static str {
        match self {
            RejectionReason::AlreadyUsed => "Already used",
            RejectionReason::NotARealWord => "Word not recognized",
            RejectionReason::NotPossible => "Word not possible",
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Outcome of a submission that was not rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Word accepted; `score` is the session total after adding it
    Accepted { word: String, score: u32 },
    /// Blank input, nothing happened
    Ignored,
}

/// Outcome of asking the session for the next round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStart {
    Started { root_word: String, is_final_round: bool },
    /// The previous round was the last one. Counters are already reset.
    GameOver { final_score: u32 },
}

impl RoundStart {
    pub const GAME_OVER_TITLE: &'static str = "Game over";

    pub fn game_over_message(final_score: u32) -> String {
        format!("You have scored {} points!", final_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Idle,
    RoundActive,
}

/// Read-only view of a session, as shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub root_word: String,
    pub used_words: Vec<String>,
    pub score: u32,
    pub turn: u32,
    pub max_turns: u32,
}
