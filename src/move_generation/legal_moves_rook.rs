use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(game_state: &GameState, from: Square, rook: Piece, out: &mut Vec<Move>) {
    push_targets(game_state, from, rook, rook_attacks(&game_state.board, from), out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_in_starting_corner_is_boxed_in() {
        let game = GameState::new_game();
        let a1 = Square::from_algebraic("a1").expect("a1 should parse");
        let mut moves = Vec::new();
        generate_rook_moves(&game, a1, Piece::new(Color::White, PieceKind::Rook), &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn open_rook_reaches_fourteen_squares() {
        let game = GameState::from_diagram(
            [
                "k.......", "........", "........", "........", "...R....", "........",
                "........", ".......K",
            ],
            Color::White,
            CastlingRights::none(),
        )
        .expect("diagram should parse");
        let d4 = Square::from_algebraic("d4").expect("d4 should parse");
        let mut moves = Vec::new();
        generate_rook_moves(&game, d4, Piece::new(Color::White, PieceKind::Rook), &mut moves);
        assert_eq!(moves.len(), 14);
    }
}
