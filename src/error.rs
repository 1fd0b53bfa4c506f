use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokerError {
    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    #[error("Invalid suit: {0}")]
    InvalidSuit(char),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Hand must be exactly {expected} cards, got {got}")]
    WrongCardCount { expected: usize, got: usize },

    #[error("Duplicate card in hand: {0}")]
    DuplicateCard(String),

    #[error("No hands to compare")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PokerError {
    /// True for errors caused by a malformed hand string.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            PokerError::InvalidRank(_)
                | PokerError::InvalidSuit(_)
                | PokerError::InvalidCardNotation(_)
                | PokerError::WrongCardCount { .. }
                | PokerError::DuplicateCard(_)
        )
    }
}

pub type PokerResult<T> = Result<T, PokerError>;
