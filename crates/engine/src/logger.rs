use crate::board::square_to_algebraic;
use crate::types::{color_name, is_empty, piece_color, piece_type, piece_type_name, GameMove};
use std::fs::File;
use std::io::Write;

/// Accumulates a plain-text record of the game in memory. Logging is
/// observation only and never feeds back into move handling.
#[derive(Debug)]
pub struct GameLogger {
    log_buffer: String,
    move_count: u32,
}

impl GameLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            move_count: 0,
        };

        logger.log("=== Chess Game Log Started ===");
        logger.log(&format!(
            "Date: {}",
            chrono::Local::now().format("%m/%d/%Y %H:%M:%S")
        ));
        logger
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn log_move(&mut self, applied: &GameMove) {
        self.move_count += 1;
        let capture_note = if is_empty(applied.captured_piece) {
            String::new()
        } else {
            format!(" (takes {})", piece_type_name(piece_type(applied.captured_piece)))
        };

        self.log(&format!(
            "{}. {} {} {} -> {}{}",
            self.move_count,
            color_name(piece_color(applied.piece)),
            piece_type_name(piece_type(applied.piece)),
            square_to_algebraic(applied.mv.from),
            square_to_algebraic(applied.mv.to),
            capture_note,
        ));
    }

    pub fn log_rejection(&mut self, input: &str, reason: &str) {
        self.log(&format!("rejected {:?}: {}", input, reason));
    }

    pub fn contents(&self) -> &str {
        &self.log_buffer
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.log_buffer.as_bytes())
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{make_piece, Move, Square, EMPTY, PAWN, ROOK, BLACK, WHITE};

    #[test]
    fn test_log_move_formats_captures() {
        let mut logger = GameLogger::new();
        logger.log_move(&GameMove {
            mv: Move::new(Square::new(4, 1), Square::new(4, 3)),
            piece: make_piece(PAWN, WHITE),
            captured_piece: EMPTY,
        });
        logger.log_move(&GameMove {
            mv: Move::new(Square::new(0, 7), Square::new(0, 0)),
            piece: make_piece(ROOK, BLACK),
            captured_piece: make_piece(ROOK, WHITE),
        });

        let contents = logger.contents();
        assert!(contents.contains("1. white pawn e2 -> e4"));
        assert!(contents.contains("2. black rook a8 -> a1 (takes rook)"));
    }

    #[test]
    fn test_rejections_are_logged_without_numbering() {
        let mut logger = GameLogger::new();
        logger.log_rejection("Qz9", "malformed move text \"Qz9\"");
        logger.log_move(&GameMove {
            mv: Move::new(Square::new(4, 1), Square::new(4, 2)),
            piece: make_piece(PAWN, WHITE),
            captured_piece: EMPTY,
        });

        let contents = logger.contents();
        assert!(contents.contains("rejected \"Qz9\""));
        assert!(contents.contains("1. white pawn e2 -> e3"), "rejections do not consume move numbers");
    }
}
