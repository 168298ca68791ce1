//! Error types surfaced by the rules engine and its move-log helpers.

use crate::game_state::chess_types::PieceKind;

/// Represents all error conditions the engine reports to its caller.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    /// The candidate move is not in the current legal-move set. State is unchanged.
    #[error("invalid move: {notation}")]
    InvalidMove { notation: String },

    /// Coordinates outside `[0, 7]`.
    #[error("malformed square: ({row}, {col})")]
    MalformedSquare { row: i16, col: i16 },

    /// Square or move text that could not be parsed.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// A position diagram that does not describe a playable board.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// A pawn may only become a knight, bishop, rook or queen.
    #[error("invalid promotion piece: {0:?}")]
    InvalidPromotion(PieceKind),

    #[error("move log i/o failed: {0}")]
    MoveLogIo(#[from] std::io::Error),

    #[error("move log is not valid JSON: {0}")]
    MoveLogFormat(#[from] serde_json::Error),
}

pub type ChessResult<T> = Result<T, ChessError>;
