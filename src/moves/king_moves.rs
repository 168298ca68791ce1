use crate::game_state::chess_types::Square;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Adjacent on-board squares, regardless of occupancy.
#[inline]
pub fn king_attacks(from: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::king_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_attacks_from_center_and_corner() {
        let e4 = Square::from_algebraic("e4").expect("e4 should parse");
        let a1 = Square::from_algebraic("a1").expect("a1 should parse");
        assert_eq!(king_attacks(e4).count(), 8);
        assert_eq!(king_attacks(a1).count(), 3);
    }
}
