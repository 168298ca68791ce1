use crate::game_state::chess_types::Square;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board squares a knight on `from` jumps to, regardless of occupancy.
#[inline]
pub fn knight_attacks(from: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::knight_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        let d4 = Square::from_algebraic("d4").expect("d4 should parse");
        assert_eq!(knight_attacks(d4).count(), 8);
    }

    #[test]
    fn knight_attacks_from_corner_has_two_targets() {
        let h1 = Square::from_algebraic("h1").expect("h1 should parse");
        let mut names: Vec<_> = knight_attacks(h1).map(|sq| sq.to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["f2", "g3"]);
    }
}
