//! Attack detection.
//!
//! Attacks are found by looking outward from the target square with each
//! piece's movement pattern and checking what sits at the far end. Nothing
//! is made or unmade, so castling rights and the en-passant target are never
//! touched.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

impl GameState {
    /// Whether the side to move has its king attacked.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.is_king_in_check(self.side_to_move)
    }

    #[inline]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opposite())
    }

    /// Whether the side NOT to move attacks `square`.
    ///
    /// Attacks are read outward from `square`, not from the opponent's
    /// pseudo-legal move list. The two agree on occupied squares; on an empty
    /// square a pawn diagonal counts here although no pawn move lands there.
    #[inline]
    pub fn square_under_attack(&self, square: Square) -> bool {
        self.is_square_attacked(square, self.side_to_move.opposite())
    }

    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let board = &self.board;
        let holds = |sq: Square, kinds: &[PieceKind]| {
            board
                .piece_at(sq)
                .is_some_and(|piece| piece.color == attacker && kinds.contains(&piece.kind))
        };

        // A pawn of `attacker` hits `square` from where a defender pawn on `square` would hit.
        if pawn_attacks(attacker.opposite(), square).any(|sq| holds(sq, &[PieceKind::Pawn])) {
            return true;
        }

        if knight_attacks(square).any(|sq| holds(sq, &[PieceKind::Knight])) {
            return true;
        }

        if king_attacks(square).any(|sq| holds(sq, &[PieceKind::King])) {
            return true;
        }

        if bishop_attacks(board, square)
            .into_iter()
            .any(|sq| holds(sq, &[PieceKind::Bishop, PieceKind::Queen]))
        {
            return true;
        }

        rook_attacks(board, square)
            .into_iter()
            .any(|sq| holds(sq, &[PieceKind::Rook, PieceKind::Queen]))
    }
}
