//! The move descriptor: one immutable ply.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};
use crate::moves::pawn_moves::promotion_row;

/// One ply: squares, pieces involved and special-move flags.
///
/// Identity is the start/end pair plus the promotion kind, so a move built
/// from two clicked squares compares equal to the generated move it names.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    is_en_passant: bool,
    is_castle: bool,
    is_pawn_promotion: bool,
    promotion: Option<PieceKind>,
}

impl Move {
    /// A plain move or capture, read off `board`.
    ///
    /// Promotion is flagged automatically when a pawn reaches its last row,
    /// defaulting to a queen.
    pub(crate) fn new(start: Square, end: Square, piece_moved: Piece, board: &Board) -> Self {
        let is_pawn_promotion =
            piece_moved.kind == PieceKind::Pawn && end.row() == promotion_row(piece_moved.color);
        Self {
            start,
            end,
            piece_moved,
            piece_captured: board.piece_at(end),
            is_en_passant: false,
            is_castle: false,
            is_pawn_promotion,
            promotion: is_pawn_promotion.then_some(PieceKind::Queen),
        }
    }

    /// En-passant capture; the victim sits beside `start`, not on `end`.
    pub(crate) fn en_passant(start: Square, end: Square, piece_moved: Piece, board: &Board) -> Self {
        let victim_square = Square::at(start.row(), end.col());
        Self {
            piece_captured: board.piece_at(victim_square),
            is_en_passant: true,
            ..Self::new(start, end, piece_moved, board)
        }
    }

    /// King half of a castle; the rook is relocated when the move is made.
    pub(crate) fn castle(start: Square, end: Square, piece_moved: Piece, board: &Board) -> Self {
        Self {
            is_castle: true,
            ..Self::new(start, end, piece_moved, board)
        }
    }

    /// Build a candidate from two selected squares against the current board.
    ///
    /// Special-move flags are inferred from geometry so the result mirrors
    /// what the generator would produce for the same squares.
    pub fn from_squares(start: Square, end: Square, board: &Board) -> ChessResult<Self> {
        let piece_moved = board.piece_at(start).ok_or_else(|| ChessError::InvalidMove {
            notation: format!("{start}{end}"),
        })?;

        let is_diagonal_step = start.col() != end.col();
        let mv = match piece_moved.kind {
            PieceKind::Pawn if is_diagonal_step && board.is_empty(end) => {
                Self::en_passant(start, end, piece_moved, board)
            }
            PieceKind::King
                if start.col() == KING_HOME_COL
                    && start.row() == end.row()
                    && start.col().abs_diff(end.col()) == 2 =>
            {
                Self::castle(start, end, piece_moved, board)
            }
            _ => Self::new(start, end, piece_moved, board),
        };
        Ok(mv)
    }

    /// Same move with a different promotion piece.
    pub fn with_promotion(self, kind: PieceKind) -> ChessResult<Self> {
        if !kind.is_promotion_target() {
            return Err(ChessError::InvalidPromotion(kind));
        }
        Ok(self.promoting_to(kind))
    }

    /// Infallible form of `with_promotion` for kinds already known to be valid.
    pub(crate) fn promoting_to(self, kind: PieceKind) -> Self {
        if !self.is_pawn_promotion {
            return self;
        }
        Self {
            promotion: Some(kind),
            ..self
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.is_castle
    }

    #[inline]
    pub fn is_pawn_promotion(&self) -> bool {
        self.is_pawn_promotion
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    /// Pawn advancing two rows from its starting row.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.start.row().abs_diff(self.end.row()) == 2
    }

    /// Piece that ends up on `end`, accounting for promotion.
    #[inline]
    pub fn placed_piece(&self) -> Piece {
        match self.promotion {
            Some(kind) if self.is_pawn_promotion => Piece::new(self.piece_moved.color, kind),
            _ => self.piece_moved,
        }
    }

    /// Decimal identifier `start_row start_col end_row end_col`, e.g. `6444` for e2e4.
    #[inline]
    pub fn move_id(&self) -> u16 {
        u16::from(self.start.row()) * 1000
            + u16::from(self.start.col()) * 100
            + u16::from(self.end.row()) * 10
            + u16::from(self.end.col())
    }

    /// Four-character file/rank pair, e.g. `e2e4`.
    pub fn to_square_notation(&self) -> String {
        format!("{}{}", self.start, self.end)
    }

    /// Square notation plus a promotion letter when promoting, e.g. `e7e8q`.
    pub fn to_long_algebraic(&self) -> String {
        let mut out = self.to_square_notation();
        if let Some(kind) = self.promotion {
            out.push(kind.to_char());
        }
        out
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id() && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id().hash(state);
        self.promotion.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_algebraic())
    }
}
