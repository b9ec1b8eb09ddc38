pub const BOARD_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(pub u8);

impl Square {
    pub fn new(file: u8, rank: u8) -> Self {
        Self(rank * BOARD_SIZE + file)
    }

    pub fn file(&self) -> u8 {
        self.0 % BOARD_SIZE
    }

    pub fn rank(&self) -> u8 {
        self.0 / BOARD_SIZE
    }
}

// 4-bit piece representation
// Bits 0-2: piece type (0=empty, 1=pawn, 2=knight, 3=bishop, 4=rook, 5=queen, 6=king)
// Bit 3: color (0=black, 1=white)
pub type Piece = u8;

pub const EMPTY: u8 = 0;

// Piece types (bits 0-2)
pub const PAWN: u8 = 1;
pub const KNIGHT: u8 = 2;
pub const BISHOP: u8 = 3;
pub const ROOK: u8 = 4;
pub const QUEEN: u8 = 5;
pub const KING: u8 = 6;

// Colors (bit 3)
pub const BLACK: u8 = 0;
pub const WHITE: u8 = 8; // 1000 in binary

// The closed set of piece types, in index order
pub const PIECE_TYPES: [u8; 6] = [PAWN, KNIGHT, BISHOP, ROOK, QUEEN, KING];

// Helper functions for piece manipulation
pub fn make_piece(piece_type: u8, color: u8) -> Piece {
    piece_type | color
}

pub fn piece_type(piece: Piece) -> u8 {
    piece & 7 // Extract bits 0-2
}

pub fn piece_color(piece: Piece) -> u8 {
    piece & 8 // Extract bit 3
}

pub fn is_empty(piece: Piece) -> bool {
    piece == EMPTY
}

// Helper function to get opposite color
pub fn opposite_color(color: u8) -> u8 {
    color ^ WHITE
}

// Helper function to check if piece belongs to a given player
pub fn is_piece_color(piece: Piece, color: u8) -> bool {
    !is_empty(piece) && piece_color(piece) == color
}

pub fn color_name(color: u8) -> &'static str {
    if color == WHITE {
        "white"
    } else {
        "black"
    }
}

pub fn piece_type_name(kind: u8) -> &'static str {
    match kind {
        PAWN => "pawn",
        KNIGHT => "knight",
        BISHOP => "bishop",
        ROOK => "rook",
        QUEEN => "queen",
        KING => "king",
        _ => "empty",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Record of a successfully applied move, handed to the display layer
/// so it knows which squares changed.
#[derive(Debug, Clone, Copy)]
pub struct GameMove {
    pub mv: Move,
    pub piece: Piece,
    pub captured_piece: Piece,
}
