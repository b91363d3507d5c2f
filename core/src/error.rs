use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid must be square")]
    InvalidGridShape,
    #[error("Rotation must be a multiple of 90 degrees")]
    InvalidRotation,
    #[error("Puzzle already solved, no new edits are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
