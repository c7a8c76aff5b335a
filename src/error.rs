use thiserror::Error;

/// Errors raised while building boards or generating puzzles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    #[error("cell value {0} is out of range")]
    ValueOutOfRange(u8),

    #[error("cell value {0} appears more than once")]
    DuplicateValue(u8),

    #[error("board has no blank cell")]
    MissingBlank,

    #[error("invalid token {0:?}")]
    InvalidToken(String),

    #[error("no solvable shuffle found after {attempts} attempts")]
    ShuffleExhausted { attempts: usize },
}
