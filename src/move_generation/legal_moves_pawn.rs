use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::chess_move::Move;
use crate::moves::pawn_moves::{pawn_attacks, start_row, PROMOTION_KINDS};

pub fn generate_pawn_moves(game_state: &GameState, from: Square, pawn: Piece, out: &mut Vec<Move>) {
    let board = &game_state.board;
    let forward = pawn.color.forward();

    // pushes
    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            push_pawn_move(Move::new(from, one_step, pawn, board), out);

            if from.row() == start_row(pawn.color) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(Move::new(from, two_step, pawn, board));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for to in pawn_attacks(pawn.color, from) {
        if enemy_piece_on(game_state, pawn.color, to).is_some() {
            push_pawn_move(Move::new(from, to, pawn, board), out);
        } else if game_state.en_passant_target == Some(to) {
            out.push(Move::en_passant(from, to, pawn, board));
        }
    }
}

/// One move per promotion choice when the pawn reaches its last row.
fn push_pawn_move(mv: Move, out: &mut Vec<Move>) {
    if mv.is_pawn_promotion() {
        out.extend(PROMOTION_KINDS.iter().map(|&kind| mv.promoting_to(kind)));
    } else {
        out.push(mv);
    }
}
