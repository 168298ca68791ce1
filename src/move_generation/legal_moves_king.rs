use crate::game_state::chess_rules::{
    KING_HOME_COL, KINGSIDE_CASTLE_COL, KINGSIDE_ROOK_COL, QUEENSIDE_CASTLE_COL, QUEENSIDE_ROOK_COL,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::king_attacks;

/// Single-step king moves. Castling is generated separately by `generate_castle_moves`.
pub fn generate_king_moves(game_state: &GameState, from: Square, king: Piece, out: &mut Vec<Move>) {
    push_targets(game_state, from, king, king_attacks(from), out);
}

/// Castle moves for `color`'s king on `king_from`, given `rights`.
///
/// The king may not castle out of, through, or into an attacked square. On
/// the queenside the knight-adjacent square must be empty but may be attacked.
/// A right is only honored while its king and rook stand on their home squares.
pub fn generate_castle_moves(
    game_state: &GameState,
    king_from: Square,
    rights: CastlingRights,
    color: Color,
    out: &mut Vec<Move>,
) {
    let attacker = color.opposite();
    let board = &game_state.board;

    if king_from != Square::at(color.back_row(), KING_HOME_COL) {
        return;
    }

    // Cannot castle out of check.
    if game_state.is_square_attacked(king_from, attacker) {
        return;
    }

    let Some(king) = board.piece_at(king_from) else {
        return;
    };

    if rights.kingside(color) && CastlingRights::pieces_at_home(board, color, KINGSIDE_ROOK_COL) {
        let empty = [1, 2];
        let safe = [1, 2];
        if castle_path_clear(game_state, king_from, &empty, &safe, attacker) {
            let to = Square::at(king_from.row(), KINGSIDE_CASTLE_COL);
            out.push(Move::castle(king_from, to, king, board));
        }
    }

    if rights.queenside(color) && CastlingRights::pieces_at_home(board, color, QUEENSIDE_ROOK_COL)
    {
        let empty = [-1, -2, -3];
        let safe = [-1, -2];
        if castle_path_clear(game_state, king_from, &empty, &safe, attacker) {
            let to = Square::at(king_from.row(), QUEENSIDE_CASTLE_COL);
            out.push(Move::castle(king_from, to, king, board));
        }
    }
}

/// Column offsets from the king in `empty` must be unoccupied, those in `safe` unattacked.
fn castle_path_clear(
    game_state: &GameState,
    king_from: Square,
    empty: &[i8],
    safe: &[i8],
    attacker: Color,
) -> bool {
    let all_empty = empty.iter().all(|&d_col| {
        king_from
            .offset(0, d_col)
            .is_some_and(|sq| game_state.board.is_empty(sq))
    });
    all_empty
        && safe.iter().all(|&d_col| {
            king_from
                .offset(0, d_col)
                .is_some_and(|sq| !game_state.is_square_attacked(sq, attacker))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).expect("test square should parse")
    }

    fn castles(game: &GameState) -> Vec<String> {
        let color = game.side_to_move();
        let mut out = Vec::new();
        generate_castle_moves(
            game,
            game.king_square(color),
            game.castling_rights(),
            color,
            &mut out,
        );
        assert!(out.iter().all(Move::is_castle));
        out.iter().map(Move::to_square_notation).collect()
    }

    fn position(rows: [&str; 8], side: Color) -> GameState {
        GameState::from_diagram(rows, side, CastlingRights::all()).expect("diagram should parse")
    }

    #[test]
    fn king_in_corner_has_three_moves() {
        let game = position(
            [
                "....k...", "........", "........", "........", "........", "........",
                "........", ".......K",
            ],
            Color::White,
        );
        let mut out = Vec::new();
        generate_king_moves(&game, sq("h1"), Piece::new(Color::White, PieceKind::King), &mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn both_sides_offered_when_clear() {
        let game = position(
            [
                "r...k..r", "pppppppp", "........", "........", "........", "........",
                "PPPPPPPP", "R...K..R",
            ],
            Color::White,
        );
        assert_eq!(castles(&game), vec!["e1g1", "e1c1"]);

        let mut black = game.clone();
        black.side_to_move = Color::Black;
        assert_eq!(castles(&black), vec!["e8g8", "e8c8"]);
    }

    #[test]
    fn no_castling_out_of_check() {
        let game = position(
            [
                "....k...", "........", "........", "........", "....r...", "........",
                "........", "R...K..R",
            ],
            Color::White,
        );
        assert!(castles(&game).is_empty());
    }

    #[test]
    fn no_castling_through_or_into_attack() {
        // Rook on f8 covers f1, rook on c8 covers c1.
        let game = position(
            [
                "..r.kr..", "........", "........", "........", "........", "........",
                "........", "R...K..R",
            ],
            Color::White,
        );
        assert!(castles(&game).is_empty());
    }

    #[test]
    fn pawn_diagonal_on_empty_transit_square_blocks_castling() {
        // The black pawn on g2 attacks f1 even though f1 is empty.
        let game = position(
            [
                "....k...", "........", "........", "........", "........", "........",
                "......p.", "R...K..R",
            ],
            Color::White,
        );
        assert_eq!(castles(&game), vec!["e1c1"]);
    }

    #[test]
    fn queenside_b_file_may_be_attacked_but_not_occupied() {
        let attacked_b1 = position(
            [
                ".r..k...", "........", "........", "........", "........", "........",
                "........", "R...K..R",
            ],
            Color::White,
        );
        assert_eq!(castles(&attacked_b1), vec!["e1g1", "e1c1"]);

        let occupied_b1 = position(
            [
                "....k...", "........", "........", "........", "........", "........",
                "........", "RN..K..R",
            ],
            Color::White,
        );
        assert_eq!(castles(&occupied_b1), vec!["e1g1"]);
    }

    #[test]
    fn rights_without_pieces_at_home_offer_nothing() {
        let mut bare_kings = position(
            [
                "....k...", "........", "........", "........", "........", "........",
                "........", "....K...",
            ],
            Color::White,
        );
        bare_kings.castling_rights = CastlingRights::all();
        assert!(castles(&bare_kings).is_empty());
        assert!(!bare_kings.legal_moves().iter().any(Move::is_castle));

        let mut displaced_king = position(
            [
                "....k...", "........", "........", "........", "........", "........",
                "........", "R..K...R",
            ],
            Color::White,
        );
        displaced_king.castling_rights = CastlingRights::all();
        assert!(castles(&displaced_king).is_empty());

        let mut missing_rook = position(
            [
                "....k...", "........", "........", "........", "........", "........",
                "........", "R...K...",
            ],
            Color::White,
        );
        missing_rook.castling_rights = CastlingRights::all();
        assert_eq!(castles(&missing_rook), vec!["e1c1"]);
    }

    #[test]
    fn cleared_rights_suppress_castling() {
        let mut game = position(
            [
                "....k...", "........", "........", "........", "........", "........",
                "........", "R...K..R",
            ],
            Color::White,
        );
        game.castling_rights.white_kingside = false;
        assert_eq!(castles(&game), vec!["e1c1"]);
    }
}
