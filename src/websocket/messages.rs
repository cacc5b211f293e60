use serde::{Deserialize, Serialize};

use crate::models::{GameSnapshot, RejectionReason, RoundStart};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Start the next round, or finish the game after the last one
    NextWord,
    /// Current contents of the text field
    Input {
        text: String,
    },
    /// Submit the current text field contents
    Submit,
    SubmitWord {
        word: String,
    },
}

/// Messages sent from server to client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    RoundStarted {
        root_word: String,
        is_final_round: bool,
    },
    SubmissionAccepted {
        word: String,
        score: u32,
    },
    SubmissionRejected {
        title: String,
        message: String,
    },
    GameOver {
        title: String,
        message: String,
        final_score: u32,
    },
    GameState(GameSnapshot),
    Error {
        message: String,
    },
}

impl From<RoundStart> for ServerMessage {
    fn from(start: RoundStart) -> Self {
        match start {
            RoundStart::Started {
                root_word,
                is_final_round,
            } => ServerMessage::RoundStarted {
                root_word,
                is_final_round,
            },
            RoundStart::GameOver { final_score } => ServerMessage::GameOver {
                title: RoundStart::GAME_OVER_TITLE.to_string(),
                message: RoundStart::game_over_message(final_score),
                final_score,
            },
        }
    }
}

impl From<RejectionReason> for ServerMessage {
    fn from(reason: RejectionReason) -> Self {
        ServerMessage::SubmissionRejected {
            title: reason.title().to_string(),
            message: reason.message(),
        }
    }
}

impl From<GameSnapshot> for ServerMessage {
    fn from(snapshot: GameSnapshot) -> Self {
        ServerMessage::GameState(snapshot)
    }
}
