//! Full legal move generation pipeline.
//!
//! Collects pseudo-legal and castle moves, plays each candidate on the same
//! state, drops those that leave the mover's king attacked, and records
//! checkmate / stalemate when nothing survives.

use tracing::{info, trace};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_king::generate_castle_moves;
use crate::moves::chess_move::Move;

impl GameState {
    /// Every legal move for the side to move.
    ///
    /// Updates the checkmate/stalemate flags as a side effect. Each candidate
    /// is made and immediately undone before the next one is tried.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let saved_en_passant = self.en_passant_target;
        let saved_rights = self.castling_rights;

        let mover = self.side_to_move;
        let mut candidates = self.pseudo_legal_moves();
        generate_castle_moves(
            self,
            self.king_square(mover),
            self.castling_rights,
            mover,
            &mut candidates,
        );

        let mut legal = Vec::with_capacity(candidates.len());
        for mv in candidates {
            self.make_move(mv);
            let exposes_king = self.is_king_in_check(mover);
            self.undo_move();
            if !exposes_king {
                legal.push(mv);
            }
        }

        self.en_passant_target = saved_en_passant;
        self.castling_rights = saved_rights;

        if legal.is_empty() {
            if self.in_check() {
                self.checkmate = true;
                info!(loser = %mover, ply = self.ply(), "checkmate");
            } else {
                self.stalemate = true;
                info!(side = %mover, ply = self.ply(), "stalemate");
            }
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        trace!(side = %mover, count = legal.len(), "generated legal moves");
        legal
    }
}
