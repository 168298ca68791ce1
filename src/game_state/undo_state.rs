use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single history record for `make_move` / `undo_move`.
///
/// Holds the ply itself plus the snapshot of state that the move cannot
/// reconstruct on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
}
