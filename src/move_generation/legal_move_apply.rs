//! Reversible move application.
//!
//! `make_move` and `undo_move` are the only mutators of a `GameState`. Board,
//! king cache, castling rights and en-passant target change together inside
//! each call so the state is never observed half-updated.

use tracing::trace;

use crate::game_state::chess_rules::KINGSIDE_CASTLE_COL;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

impl GameState {
    /// Apply an already-validated move.
    pub fn make_move(&mut self, mv: Move) {
        let start = mv.start();
        let end = mv.end();
        let mover = mv.piece_moved();

        self.board.set(start, None);
        self.board.set(end, Some(mv.placed_piece()));

        self.history.push(UndoState {
            mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_target: self.en_passant_target,
        });
        self.side_to_move = self.side_to_move.opposite();

        if mover.kind == PieceKind::King {
            self.king_squares[mover.color.index()] = end;
        }

        // The captured pawn sits beside the start square, not on the destination.
        if mv.is_en_passant() {
            self.board.set(Square::at(start.row(), end.col()), None);
        }

        self.en_passant_target = if mv.is_double_pawn_push() {
            Some(Square::at((start.row() + end.row()) / 2, start.col()))
        } else {
            None
        };

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(end);
            let rook = self.board.set(rook_from, None);
            self.board.set(rook_to, rook);
        }

        self.castling_rights
            .update_for_move(mover, start, end, mv.piece_captured());

        self.checkmate = false;
        self.stalemate = false;

        trace!(mv = %mv, ply = self.history.len(), "made move");
    }

    /// Revert the most recent move. Returns `None` when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let undo = self.history.pop()?;
        let mv = undo.mv;
        let start = mv.start();
        let end = mv.end();
        let mover = mv.piece_moved();

        self.board.set(start, Some(mover));
        self.board.set(end, mv.piece_captured());
        self.side_to_move = self.side_to_move.opposite();

        if mover.kind == PieceKind::King {
            self.king_squares[mover.color.index()] = start;
        }

        if mv.is_en_passant() {
            self.board.set(end, None);
            self.board
                .set(Square::at(start.row(), end.col()), mv.piece_captured());
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(end);
            let rook = self.board.set(rook_to, None);
            self.board.set(rook_from, rook);
        }

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_target = undo.prev_en_passant_target;

        self.checkmate = false;
        self.stalemate = false;

        trace!(mv = %mv, ply = self.history.len(), "undid move");
        Some(mv)
    }
}

/// Rook origin and destination for a castle whose king lands on `king_to`.
fn castle_rook_squares(king_to: Square) -> (Square, Square) {
    let row = king_to.row();
    let col = king_to.col();
    if col == KINGSIDE_CASTLE_COL {
        (Square::at(row, col + 1), Square::at(row, col - 1))
    } else {
        (Square::at(row, col - 2), Square::at(row, col + 1))
    }
}
