use thiserror::Error;

/// Errors raised while building, positioning or drawing a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("'{0}' is not a chess coordinate, use letters between a and h")]
    InvalidCoordinate(char),

    #[error("rank {0} is outside the board, use ranks between 1 and 8")]
    InvalidRank(u32),

    #[error("'{0}' is not an algebraic square such as \"e4\"")]
    MalformedCoordinate(String),

    #[error("unknown piece identifier '{0}'")]
    UnknownPiece(String),

    #[error("invalid FEN piece placement '{placement}': {reason}")]
    InvalidFen { placement: String, reason: String },

    #[error("no container matches selector '{0}'")]
    ContainerNotFound(String),

    #[error("board has already been drawn into '{0}'")]
    AlreadyDrawn(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
