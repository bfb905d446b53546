use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::EngineError;

#[derive(Error, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid Message")]
    InvalidMessage,
    #[error("Player disconnected")]
    Disconnected,
    #[error("Client version '{0}' does not match server version '{1}'")]
    VersionMismatch(String, String),
    #[error("{0}")]
    Message(String),
}

impl From<FrameError> for ProtocolError {
    fn from(e: FrameError) -> Self {
        Self::Message(e.to_string())
    }
}

/// Why an action was turned away. Only the player who sent it is told.
#[derive(Error, Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RejectReason {
    #[error("It is not your turn")]
    NotYourTurn,
    #[error("You can't give a clue to yourself")]
    SelfClue,
    #[error("Malformed action")]
    MalformedAction,
    #[error("No hint tokens remain")]
    HintsExhausted,
    #[error("There is no card at that index")]
    InvalidCardIndex,
    #[error("The game hasn't started yet")]
    GameNotStarted,
    #[error("The game is over")]
    GameOver,
}

impl From<EngineError> for RejectReason {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::SelfClue => Self::SelfClue,
            EngineError::UnknownPlayer(_) => Self::MalformedAction,
            EngineError::HintsExhausted => Self::HintsExhausted,
            EngineError::InvalidCardIndex { .. } => Self::InvalidCardIndex,
            EngineError::GameOver => Self::GameOver,
        }
    }
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Frame exceeded max length")]
    FrameLength,
    #[error("Connection reset by peer")]
    ConnectionReset,
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization Error: {0}")]
    Bincode(#[from] bincode::Error),
}
