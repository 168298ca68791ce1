//! Persistent move log for the presentation layer.
//!
//! Entries are keyed by 1-based ply number and the mover's display name and
//! stored as a JSON array:
//!
//! ```json
//! [{ "number": 1, "player": "White", "move": "e2e4", "timestamp": "..." }]
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Color, GameState};
use crate::moves::chess_move::Move;

/// Logs with fewer plies than this are not worth writing out.
pub const MIN_PLIES_TO_PERSIST: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLogEntry {
    pub number: usize,
    pub player: String,
    #[serde(rename = "move")]
    pub notation: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLog {
    white_name: String,
    black_name: String,
    entries: Vec<MoveLogEntry>,
}

impl MoveLog {
    pub fn new(white_name: impl Into<String>, black_name: impl Into<String>) -> Self {
        Self {
            white_name: white_name.into(),
            black_name: black_name.into(),
            entries: Vec::new(),
        }
    }

    /// Rebuild a log from a game's history, stamping every entry with `now`.
    pub fn from_game(
        game_state: &GameState,
        white_name: impl Into<String>,
        black_name: impl Into<String>,
    ) -> Self {
        let mut log = Self::new(white_name, black_name);
        let now = Utc::now();
        for mv in game_state.move_log() {
            log.push_at(mv, now);
        }
        log
    }

    pub fn push_move(&mut self, mv: &Move) {
        self.push_at(mv, Utc::now());
    }

    fn push_at(&mut self, mv: &Move, timestamp: DateTime<Utc>) {
        let player = match mv.piece_moved().color {
            Color::White => self.white_name.clone(),
            Color::Black => self.black_name.clone(),
        };
        self.entries.push(MoveLogEntry {
            number: self.entries.len() + 1,
            player,
            notation: mv.to_square_notation(),
            timestamp,
        });
    }

    /// Drop the newest entry, mirroring an undo.
    pub fn pop(&mut self) -> Option<MoveLogEntry> {
        self.entries.pop()
    }

    #[inline]
    pub fn entries(&self) -> &[MoveLogEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn worth_persisting(&self) -> bool {
        self.entries.len() >= MIN_PLIES_TO_PERSIST
    }

    pub fn to_json(&self) -> ChessResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ChessResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.entries)?;
        writer.flush()?;
        debug!(path = %path.display(), plies = self.entries.len(), "saved move log");
        Ok(())
    }

    /// Read entries written by `save`.
    pub fn load(path: impl AsRef<Path>) -> ChessResult<Vec<MoveLogEntry>> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessError;

    fn played_game(moves: &[&str]) -> GameState {
        let mut game = GameState::new_game();
        for text in moves {
            let mv = game
                .legal_moves()
                .into_iter()
                .find(|mv| mv.to_square_notation() == *text)
                .unwrap_or_else(|| panic!("{text} should be legal"));
            game.make_move(mv);
        }
        game
    }

    #[test]
    fn entries_alternate_players_and_number_from_one() {
        let game = played_game(&["e2e4", "e7e5", "g1f3"]);
        let log = MoveLog::from_game(&game, "Ana", "Bo");

        let summary: Vec<_> = log
            .entries()
            .iter()
            .map(|e| (e.number, e.player.as_str(), e.notation.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![(1, "Ana", "e2e4"), (2, "Bo", "e7e5"), (3, "Ana", "g1f3")]
        );
        assert!(log.worth_persisting());
    }

    #[test]
    fn json_uses_move_key() {
        let game = played_game(&["d2d4"]);
        let log = MoveLog::from_game(&game, "White", "Black");
        let json = log.to_json().expect("log should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("output should be JSON");
        assert_eq!(value[0]["move"], "d2d4");
        assert_eq!(value[0]["player"], "White");
        assert_eq!(value[0]["number"], 1);
        assert!(!log.worth_persisting());
    }

    #[test]
    fn pop_mirrors_undo() {
        let mut game = played_game(&["e2e4", "e7e5"]);
        let mut log = MoveLog::from_game(&game, "White", "Black");
        game.undo_move();
        let popped = log.pop().expect("entry to pop");
        assert_eq!(popped.notation, "e7e5");
        assert_eq!(log.len(), game.ply());
    }

    #[test]
    fn save_and_load_round_trip() {
        let game = played_game(&["e2e4", "c7c5"]);
        let log = MoveLog::from_game(&game, "White", "Black");
        let path = std::env::temp_dir().join(format!("good_chess_log_{}.json", std::process::id()));

        log.save(&path).expect("log should save");
        let loaded = MoveLog::load(&path).expect("log should load");
        std::fs::remove_file(&path).expect("temp file should be removable");

        assert_eq!(loaded, log.entries());
    }

    #[test]
    fn load_reports_missing_file_and_bad_json() {
        let missing = std::env::temp_dir().join("good_chess_log_does_not_exist.json");
        assert!(matches!(MoveLog::load(&missing), Err(ChessError::MoveLogIo(_))));

        let garbage = std::env::temp_dir().join(format!("good_chess_garbage_{}.json", std::process::id()));
        std::fs::write(&garbage, "not json").expect("temp file should be writable");
        let result = MoveLog::load(&garbage);
        std::fs::remove_file(&garbage).expect("temp file should be removable");
        assert!(matches!(result, Err(ChessError::MoveLogFormat(_))));
    }
}
