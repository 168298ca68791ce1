use crate::game_state::chess_types::{Board, Square};
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Diagonal counterpart of `rook_attacks`.
pub fn bishop_attacks(board: &Board, from: Square) -> Vec<Square> {
    BISHOP_DIRECTIONS
        .iter()
        .flat_map(|&direction| trace_ray(board, from, direction))
        .collect()
}
