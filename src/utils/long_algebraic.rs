use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::algebraic_to_square;

/// Squares and optional promotion choice parsed from move text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveText {
    pub start: Square,
    pub end: Square,
    pub promotion: Option<PieceKind>,
}

/// Parse `e2e4` or `e7e8q` style text.
pub fn parse_move_text(text: &str) -> ChessResult<MoveText> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid long algebraic move: {text}"
        )));
    }

    let start = algebraic_to_square(&text[0..2])?;
    let end = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch)?),
        None => None,
    };

    Ok(MoveText {
        start,
        end,
        promotion,
    })
}

fn char_to_promotion(ch: char) -> ChessResult<PieceKind> {
    let kind = PieceKind::from_char(ch).ok_or_else(|| {
        ChessError::InvalidAlgebraic(format!("invalid promotion piece character: {ch}"))
    })?;
    if !kind.is_promotion_target() {
        return Err(ChessError::InvalidPromotion(kind));
    }
    Ok(kind)
}
