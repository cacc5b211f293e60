pub mod game;

pub use game::{
    GamePhase, GameSnapshot, RejectionReason, RoundStart, Submission, DEFAULT_MAX_TURNS,
};
