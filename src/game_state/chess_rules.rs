//! Canonical chess-rule constants.
//!
//! This module stores the standard starting layout and the home columns of
//! the castling pieces used by move generation and rights tracking.

use crate::game_state::chess_types::PieceKind;

/// Piece kinds on the back rank at the start of the game, file a to h.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: u8 = 4;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KINGSIDE_ROOK_COL: u8 = 7;

/// Column the king lands on when castling kingside / queenside.
pub const KINGSIDE_CASTLE_COL: u8 = 6;
pub const QUEENSIDE_CASTLE_COL: u8 = 2;
