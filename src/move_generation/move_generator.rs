//! Pseudo-legal move generation.
//!
//! Scans the board row-major and hands every piece of the side to move to its
//! per-kind generator. No check filtering happens here.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

impl GameState {
    /// Every move obeying piece movement and occupancy for the side to move,
    /// castling excluded. Order is row-major (rank 8 to 1, file a to h).
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        for (from, piece) in self.board.pieces() {
            if piece.color == self.side_to_move {
                generate_piece_moves(self, from, piece, &mut out);
            }
        }
        out
    }
}

/// Dispatch on piece kind.
pub fn generate_piece_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece, out),
        PieceKind::King => generate_king_moves(game_state, from, piece, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_has_twenty_pseudo_legal_moves() {
        let game = GameState::new_game();
        let moves = game.pseudo_legal_moves();
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|mv| mv.piece_moved().color == Color::White));
    }

    #[test]
    fn order_is_row_major() {
        let game = GameState::new_game();
        let moves = game.pseudo_legal_moves();
        assert_eq!(moves[0].to_square_notation(), "a2a3");
        assert_eq!(moves[1].to_square_notation(), "a2a4");
        assert_eq!(moves.last().map(Move::to_square_notation), Some("g1h3".to_owned()));
    }

    #[test]
    fn pseudo_legal_includes_moves_that_leave_king_in_check() {
        // The e2 knight is pinned by the rook on e8.
        let game = GameState::from_diagram(
            [
                "....r..k", "........", "........", "........", "........", "........",
                "....N...", "....K...",
            ],
            Color::White,
            CastlingRights::none(),
        )
        .expect("diagram should parse");
        let moves = game.pseudo_legal_moves();
        assert!(moves.iter().any(|mv| mv.to_square_notation() == "e2c3"));
    }
}
