use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

/// Whether `square` is empty or holds a piece of the other color.
#[inline]
pub fn is_open_to(game_state: &GameState, color: Color, square: Square) -> bool {
    match game_state.board.piece_at(square) {
        Some(occupant) => occupant.color != color,
        None => true,
    }
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, color: Color, square: Square) -> Option<Piece> {
    game_state
        .board
        .piece_at(square)
        .filter(|occupant| occupant.color != color)
}

/// Push a move for every target not occupied by a friendly piece.
///
/// Used for the fixed-offset pieces and for ray output, which already stops
/// at the first blocker.
pub fn push_targets<I>(game_state: &GameState, from: Square, piece: Piece, targets: I, out: &mut Vec<Move>)
where
    I: IntoIterator<Item = Square>,
{
    for to in targets {
        if is_open_to(game_state, piece.color, to) {
            out.push(Move::new(from, to, piece, &game_state.board));
        }
    }
}
