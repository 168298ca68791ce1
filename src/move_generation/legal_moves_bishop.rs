use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, bishop: Piece, out: &mut Vec<Move>) {
    push_targets(game_state, from, bishop, bishop_attacks(&game_state.board, from), out);
}
