//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the terminal
//! driver. Preferences arrive as a `RenderOptions` value; the engine keeps no
//! display settings of its own.

use crate::game_state::{chess_types::*, game_state::GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Unicode chess glyphs instead of ASCII letters.
    pub unicode: bool,
    /// Draw from black's side.
    pub flipped: bool,
    /// File letters and rank numbers around the board.
    pub coordinates: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unicode: true,
            flipped: false,
            coordinates: true,
        }
    }
}

/// Render the board to a string, one rank per line.
pub fn render_game_state(game_state: &GameState, options: &RenderOptions) -> String {
    let rows: Vec<u8> = if options.flipped {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };
    let cols: Vec<u8> = if options.flipped {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };
    let files: String = cols
        .iter()
        .map(|&col| char::from(b'a' + col).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    if options.coordinates {
        out.push_str("  ");
        out.push_str(&files);
        out.push('\n');
    }

    for &row in &rows {
        let rank = char::from(b'8' - row);
        if options.coordinates {
            out.push(rank);
            out.push(' ');
        }

        let cells: Vec<String> = cols
            .iter()
            .map(|&col| {
                let ch = match game_state.board().piece_at(Square::at(row, col)) {
                    Some(piece) if options.unicode => piece_to_unicode(piece),
                    Some(piece) => piece.to_char(),
                    None if options.unicode => '·',
                    None => '.',
                };
                ch.to_string()
            })
            .collect();
        out.push_str(&cells.join(" "));

        if options.coordinates {
            out.push(' ');
            out.push(rank);
        }
        out.push('\n');
    }

    if options.coordinates {
        out.push_str("  ");
        out.push_str(&files);
    } else {
        out.pop();
    }

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
