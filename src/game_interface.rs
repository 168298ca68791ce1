//! Entry points for a presentation layer driving a game.
//!
//! A caller starts a game, lists legal moves for highlighting, submits a
//! move as a pair of selected squares, and undoes plies. Everything here is
//! a thin layer over `GameState`'s make/undo and legality filter.

use tracing::{debug, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{GameState, PieceKind, Square};
use crate::moves::chess_move::Move;

/// Outcome of a successful `try_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub notation: String,
    pub is_capture: bool,
    pub gives_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    /// Legal replies for the side now to move.
    pub replies: Vec<Move>,
}

/// Standard starting position.
pub fn new_game() -> GameState {
    GameState::new_game()
}

/// Legal moves for the side to move; refreshes the terminal flags.
pub fn legal_moves(game_state: &mut GameState) -> Vec<Move> {
    game_state.legal_moves()
}

/// Play the legal move from `start` to `end`, if there is one.
///
/// `promotion` picks the promotion piece and defaults to a queen. It is
/// ignored, and not validated, for moves that do not promote. On rejection
/// the state is unchanged.
pub fn try_move(
    game_state: &mut GameState,
    start: Square,
    end: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<AppliedMove> {
    let mut candidate = Move::from_squares(start, end, game_state.board())?;
    if let Some(kind) = promotion.filter(|_| candidate.is_pawn_promotion()) {
        candidate = candidate.with_promotion(kind)?;
    }

    let Some(mv) = game_state
        .legal_moves()
        .into_iter()
        .find(|legal| *legal == candidate)
    else {
        warn!(candidate = %candidate, "rejected move");
        return Err(ChessError::InvalidMove {
            notation: candidate.to_long_algebraic(),
        });
    };

    game_state.make_move(mv);
    let replies = game_state.legal_moves();
    debug!(mv = %mv, ply = game_state.ply(), replies = replies.len(), "applied move");

    Ok(AppliedMove {
        mv,
        notation: mv.to_square_notation(),
        is_capture: mv.is_capture(),
        gives_check: game_state.in_check(),
        is_checkmate: game_state.is_checkmate(),
        is_stalemate: game_state.is_stalemate(),
        replies,
    })
}

/// Outcome of a successful `undo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoneMove {
    pub mv: Move,
    /// Legal moves for the side back on move.
    pub replies: Vec<Move>,
}

/// Take back the last ply and refresh the terminal flags. No-op on an empty history.
pub fn undo(game_state: &mut GameState) -> Option<UndoneMove> {
    let mv = game_state.undo_move()?;
    let replies = game_state.legal_moves();
    debug!(mv = %mv, ply = game_state.ply(), replies = replies.len(), "undid move");
    Some(UndoneMove { mv, replies })
}
