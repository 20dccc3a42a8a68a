use thiserror::Error;

/// Errors that can occur when interpreting card input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("'{0}' is not a valid card symbol")]
    InvalidSymbol(String),
    #[error("card value {0} is outside the range 1..=13")]
    OutOfRange(i64),
    #[error("expected exactly 4 cards, got {0}")]
    WrongCardCount(usize),
}
