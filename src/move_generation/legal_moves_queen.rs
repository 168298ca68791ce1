use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::chess_move::Move;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(game_state: &GameState, from: Square, queen: Piece, out: &mut Vec<Move>) {
    push_targets(game_state, from, queen, queen_attacks(&game_state.board, from), out);
}
