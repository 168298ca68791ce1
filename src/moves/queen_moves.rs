use crate::game_state::chess_types::{Board, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Union of the rook and bishop rays from `from`.
#[inline]
pub fn queen_attacks(board: &Board, from: Square) -> Vec<Square> {
    let mut out = rook_attacks(board, from);
    out.extend(bishop_attacks(board, from));
    out
}
