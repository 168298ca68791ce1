//! Perft: count leaf nodes of the legal move tree to a fixed depth.
//!
//! Walks the tree with make/undo on one state, so it doubles as a stress test
//! of the reversible move application.

use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game_state.legal_moves() {
        game_state.make_move(mv);

        if depth == 1 {
            total.nodes += 1;
            total.captures += usize::from(mv.is_capture());
            total.en_passant += usize::from(mv.is_en_passant());
            total.castles += usize::from(mv.is_castle());
            total.promotions += usize::from(mv.is_pawn_promotion());
            if game_state.in_check() {
                total.checks += 1;
                if game_state.legal_moves().is_empty() {
                    total.checkmates += 1;
                }
            }
        } else {
            total.merge(perft(game_state, depth - 1));
        }

        game_state.undo_move();
    }

    total
}

/// Leaf counts per root move, in generation order, keyed by long algebraic text.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(String, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for mv in game_state.legal_moves() {
        game_state.make_move(mv);
        let nodes = perft(game_state, depth - 1).nodes;
        game_state.undo_move();
        out.push((mv.to_long_algebraic(), nodes));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{CastlingRights, Color};

    fn kiwipete() -> GameState {
        GameState::from_diagram(
            [
                "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p",
                "PPPBBPPP", "R...K..R",
            ],
            Color::White,
            CastlingRights::all(),
        )
        .expect("diagram should parse")
    }

    fn endgame_position() -> GameState {
        GameState::from_diagram(
            [
                "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........",
                "....P.P.", "........",
            ],
            Color::White,
            CastlingRights::none(),
        )
        .expect("diagram should parse")
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        assert_eq!(
            perft(&mut game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_node_counts() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 1).nodes, 20);
        assert_eq!(perft(&mut game, 2).nodes, 400);

        let depth_three = perft(&mut game, 3);
        assert_eq!(depth_three.nodes, 8902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.checks, 12);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn kiwipete_node_counts() {
        let mut game = kiwipete();
        let depth_one = perft(&mut game, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft(&mut game, 2);
        assert_eq!(depth_two.nodes, 2039);
        assert_eq!(depth_two.captures, 351);
        assert_eq!(depth_two.en_passant, 1);
        assert_eq!(depth_two.castles, 91);
        assert_eq!(depth_two.checks, 3);
    }

    #[test]
    fn endgame_node_counts() {
        let mut game = endgame_position();
        assert_eq!(perft(&mut game, 1).nodes, 14);
        assert_eq!(perft(&mut game, 2).nodes, 191);
        let depth_three = perft(&mut game, 3);
        assert_eq!(depth_three.nodes, 2812);
        assert_eq!(depth_three.en_passant, 2);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divide = perft_divide(&mut game, 2);
        assert_eq!(divide.len(), 20);
        assert!(divide.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divide.iter().map(|(_, nodes)| nodes).sum::<usize>(), 400);
    }
}
