use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Promotion choices in generation order; the first is the default.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Bishop,
];

/// Row a pawn of `color` promotes on.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Row a pawn of `color` may advance two squares from.
#[inline]
pub const fn start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Diagonal-forward squares a pawn of `color` on `from` attacks.
pub fn pawn_attacks(color: Color, from: Square) -> impl Iterator<Item = Square> {
    let forward = color.forward();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| from.offset(forward, d_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_pawn_on_a2_attacks_only_b3() {
        let a2 = Square::from_algebraic("a2").expect("a2 should parse");
        let attacks: Vec<_> = pawn_attacks(Color::White, a2).collect();
        assert_eq!(attacks, vec![Square::from_algebraic("b3").expect("b3 should parse")]);
    }

    #[test]
    fn black_pawn_attacks_toward_rank_one() {
        let e7 = Square::from_algebraic("e7").expect("e7 should parse");
        let attacks: Vec<_> = pawn_attacks(Color::Black, e7).map(|sq| sq.to_string()).collect();
        assert_eq!(attacks, vec!["d6", "f6"]);
    }

    #[test]
    fn start_and_promotion_rows_are_opposite_ends() {
        assert_eq!(start_row(Color::White), 6);
        assert_eq!(promotion_row(Color::White), 0);
        assert_eq!(start_row(Color::Black), 1);
        assert_eq!(promotion_row(Color::Black), 7);
    }
}
