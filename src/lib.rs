//! Crate root module declarations for the good_chess rules engine.
//!
//! This file exposes the board model, move descriptors, legal move
//! generation and the helpers a presentation layer needs (square notation,
//! board rendering and the persistent move log), so the terminal driver,
//! benches and tests can import stable module paths.

pub mod errors;
pub mod game_interface;

pub mod game_state {
    pub mod castling_rights;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod long_algebraic;
    pub mod move_log;
    pub mod render_game_state;
}
