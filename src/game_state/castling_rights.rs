//! Castling availability tracking.
//!
//! Rights only ever go from `true` to `false` while moves are made. Restoring
//! them is the job of the undo stack, which keeps the pre-move snapshot.

use crate::game_state::chess_rules::{KING_HOME_COL, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};

/// Four independent castling flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    fn clear_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    fn clear_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }

    /// Clear the right tied to a rook corner, if `square` is one.
    fn clear_corner(&mut self, color: Color, square: Square) {
        if square.row() != color.back_row() {
            return;
        }
        match square.col() {
            QUEENSIDE_ROOK_COL => self.clear_queenside(color),
            KINGSIDE_ROOK_COL => self.clear_kingside(color),
            _ => {}
        }
    }

    /// Whether `color`'s king and the rook on `rook_col` both stand on their home squares.
    pub fn pieces_at_home(board: &Board, color: Color, rook_col: u8) -> bool {
        let row = color.back_row();
        board.piece_at(Square::at(row, KING_HOME_COL)) == Some(Piece::new(color, PieceKind::King))
            && board.piece_at(Square::at(row, rook_col)) == Some(Piece::new(color, PieceKind::Rook))
    }

    /// Drop every right the board cannot back with a home king and corner rook.
    pub fn restricted_to(mut self, board: &Board) -> Self {
        for color in [Color::White, Color::Black] {
            if !Self::pieces_at_home(board, color, KINGSIDE_ROOK_COL) {
                self.clear_kingside(color);
            }
            if !Self::pieces_at_home(board, color, QUEENSIDE_ROOK_COL) {
                self.clear_queenside(color);
            }
        }
        self
    }

    /// Apply the effect of one ply.
    ///
    /// `captured` is whatever stood on `end` before the move.
    pub fn update_for_move(
        &mut self,
        moved: Piece,
        start: Square,
        end: Square,
        captured: Option<Piece>,
    ) {
        match moved.kind {
            PieceKind::King => {
                if start == Square::at(moved.color.back_row(), KING_HOME_COL) {
                    self.clear_kingside(moved.color);
                    self.clear_queenside(moved.color);
                }
            }
            PieceKind::Rook => self.clear_corner(moved.color, start),
            _ => {}
        }

        if let Some(victim) = captured {
            if victim.kind == PieceKind::Rook {
                self.clear_corner(victim.color, end);
            }
        }
    }
}
