use crate::setup::{piece_from_name, GameSetup, SetupError};
use crate::types::*;

// Declare submodules
pub mod moves;
pub mod state;

/// Derived lookup from (color, piece type) to the squares currently
/// holding such a piece. Must always match a full board rescan; order
/// within a slot is the insertion order of the last rebuild, and the
/// move resolver relies on nothing beyond "first match wins".
#[derive(Debug, Clone, Default)]
pub struct PieceIndex {
    slots: [Vec<Square>; 12],
}

impl PieceIndex {
    fn slot(color: u8, kind: u8) -> usize {
        let color_offset = if color == WHITE { 0 } else { 6 };
        color_offset + (kind as usize - 1)
    }

    pub fn squares(&self, color: u8, kind: u8) -> &[Square] {
        &self.slots[Self::slot(color, kind)]
    }

    fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    fn insert(&mut self, square: Square, piece: Piece) {
        self.slots[Self::slot(piece_color(piece), piece_type(piece))].push(square);
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    pub squares: [Piece; 64],
    pub current_turn: u8,
    index: PieceIndex,
}

impl Board {
    /// Board with the standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_setup(GameSetup::Initial).expect("built-in setup table is well-formed")
    }

    pub fn from_setup(setup: GameSetup) -> Result<Self, SetupError> {
        Self::from_table(setup.table())
    }

    /// Build a board from a coordinate -> piece name table, e.g.
    /// `("e1", "white_king")`. The piece index picks up the table's
    /// insertion order until the first rebuild.
    pub fn from_table(table: &[(&str, &str)]) -> Result<Self, SetupError> {
        let mut board = Self {
            squares: [EMPTY; 64],
            current_turn: WHITE,
            index: PieceIndex::default(),
        };

        for &(coordinate, name) in table {
            let square = square_from_algebraic(coordinate)
                .ok_or_else(|| SetupError::BadCoordinate(coordinate.to_string()))?;
            let piece = piece_from_name(name)?;
            board.set_piece(square, piece);
            board.index.insert(square, piece);
        }

        Ok(board)
    }

    // Basic board operations
    pub fn get_piece(&self, square: Square) -> Piece {
        self.squares[square.0 as usize]
    }

    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.squares[square.0 as usize] = piece;
    }

    /// Clearing an already-empty square is a no-op.
    pub fn clear_square(&mut self, square: Square) {
        self.squares[square.0 as usize] = EMPTY;
    }

    pub fn is_on_board(file: i8, rank: i8) -> bool {
        file >= 0 && file < BOARD_SIZE as i8 && rank >= 0 && rank < BOARD_SIZE as i8
    }

    /// Squares holding a piece of the given color and type, in piece
    /// index order. These are the move-resolution candidates.
    pub fn pieces_of(&self, color: u8, kind: u8) -> &[Square] {
        self.index.squares(color, kind)
    }

    /// Full rescan of the squares, a1 through h8. Called after every
    /// mutation so the index never drifts from the board.
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        for square_index in 0..(BOARD_SIZE * BOARD_SIZE) {
            let piece = self.squares[square_index as usize];
            if !is_empty(piece) {
                self.index.insert(Square(square_index), piece);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions (outside the impl block)
pub fn square_to_algebraic(square: Square) -> String {
    let file = (b'a' + square.file()) as char;
    let rank = (b'1' + square.rank()) as char;
    format!("{}{}", file, rank)
}

/// Parse an algebraic coordinate like "e4". The file letter is
/// case-normalized; anything off the grid is None.
pub fn square_from_algebraic(text: &str) -> Option<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return None;
    }

    let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
    let rank = bytes[1].wrapping_sub(b'1');

    if file < BOARD_SIZE && rank < BOARD_SIZE {
        Some(Square::new(file, rank))
    } else {
        None
    }
}
