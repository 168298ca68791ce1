//! Mailbox game state.
//!
//! `GameState` owns the 8x8 board, the side to move, cached king squares,
//! castling rights, the en-passant target and the make/undo history. It is
//! mutated only through `make_move` / `undo_move` (see `legal_move_apply`).

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,

    // Denormalized from `board`, updated in the same step as every king move.
    pub(crate) king_squares: [Square; 2],

    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,

    // --- Make/undo stack, doubles as the move log ---
    pub(crate) history: Vec<UndoState>,

    // Valid as of the last `legal_moves` call; cleared by make/undo.
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            for color in [Color::White, Color::Black] {
                let pawn_row = (color.back_row() as i8 + color.forward()) as u8;
                board.set(Square::at(color.back_row(), col), Some(Piece::new(color, kind)));
                board.set(
                    Square::at(pawn_row, col),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }

        Self {
            board,
            side_to_move: Color::White,
            king_squares: [Square::at(7, 4), Square::at(0, 4)],
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            history: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }

    /// Build a position from eight rank strings, rank 8 first.
    ///
    /// Uppercase letters are white pieces, lowercase black, `.` an empty
    /// square. Exactly one king per side is required. Castling rights whose
    /// king or rook is not on its home square are dropped.
    pub fn from_diagram(
        rows: [&str; 8],
        side_to_move: Color,
        castling_rights: CastlingRights,
    ) -> ChessResult<Self> {
        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            if text.chars().count() != 8 {
                return Err(ChessError::InvalidPosition(format!(
                    "row {row} must have 8 squares: {text:?}"
                )));
            }
            for (col, ch) in text.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece = Piece::from_char(ch).ok_or_else(|| {
                    ChessError::InvalidPosition(format!("unknown piece character {ch:?}"))
                })?;
                board.set(Square::at(row as u8, col as u8), Some(piece));
            }
        }

        let mut king_squares = [Square::at(0, 0); 2];
        for color in [Color::White, Color::Black] {
            let kings = board
                .pieces()
                .filter(|(_, piece)| *piece == Piece::new(color, PieceKind::King))
                .count();
            if kings != 1 {
                return Err(ChessError::InvalidPosition(format!(
                    "{color} must have exactly one king, found {kings}"
                )));
            }
            if let Some(square) = board.find_king(color) {
                king_squares[color.index()] = square;
            }
        }

        Ok(Self {
            castling_rights: castling_rights.restricted_to(&board),
            board,
            side_to_move,
            king_squares,
            en_passant_target: None,
            history: Vec::new(),
            checkmate: false,
            stalemate: false,
        })
    }

    /// Same position with an en-passant target set, for positions set up by hand.
    pub fn with_en_passant_target(mut self, target: Option<Square>) -> Self {
        self.en_passant_target = target;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Moves played so far, oldest first.
    pub fn move_log(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator + '_ {
        self.history.iter().map(|undo| &undo.mv)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|undo| &undo.mv)
    }

    /// Number of plies played.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }
}
