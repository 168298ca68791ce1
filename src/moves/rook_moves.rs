use crate::game_state::chess_types::{Board, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Squares a rook on `from` reaches, stopping at (and including) the first
/// occupied square in each direction.
pub fn rook_attacks(board: &Board, from: Square) -> Vec<Square> {
    ROOK_DIRECTIONS
        .iter()
        .flat_map(|&direction| trace_ray(board, from, direction))
        .collect()
}

/// Walk from `from` (exclusive) in one direction until the edge or the first
/// occupied square, which is included.
pub fn trace_ray(board: &Board, from: Square, (d_row, d_col): (i8, i8)) -> Vec<Square> {
    let mut out = Vec::with_capacity(7);
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        out.push(next);
        if !board.is_empty(next) {
            break;
        }
        current = next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn rook_rays_from_d4_on_empty_board_have_fourteen_squares() {
        let d4 = Square::from_algebraic("d4").expect("d4 should parse");
        assert_eq!(rook_attacks(&Board::empty(), d4).len(), 14);
    }

    #[test]
    fn ray_stops_on_first_blocker() {
        let mut board = Board::empty();
        let d6 = Square::from_algebraic("d6").expect("d6 should parse");
        board.set(d6, Some(Piece::new(Color::Black, PieceKind::Knight)));
        let d4 = Square::from_algebraic("d4").expect("d4 should parse");

        let up: Vec<_> = trace_ray(&board, d4, (-1, 0))
            .into_iter()
            .map(|sq| sq.to_string())
            .collect();
        assert_eq!(up, vec!["d5", "d6"]);
    }
}
