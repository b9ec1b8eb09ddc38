use crate::types::*;

/// Which built-in position table a new board starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSetup {
    Initial,
    Empty,
}

impl GameSetup {
    pub fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            GameSetup::Initial => INITIAL_SETUP,
            GameSetup::Empty => &[],
        }
    }
}

/// The standard 32-piece starting position, as coordinate -> piece name
/// pairs. This is the shape the setup data source hands the board.
pub const INITIAL_SETUP: &[(&str, &str)] = &[
    ("a8", "black_rook"),
    ("b8", "black_knight"),
    ("c8", "black_bishop"),
    ("d8", "black_queen"),
    ("e8", "black_king"),
    ("f8", "black_bishop"),
    ("g8", "black_knight"),
    ("h8", "black_rook"),
    ("a7", "black_pawn"),
    ("b7", "black_pawn"),
    ("c7", "black_pawn"),
    ("d7", "black_pawn"),
    ("e7", "black_pawn"),
    ("f7", "black_pawn"),
    ("g7", "black_pawn"),
    ("h7", "black_pawn"),
    ("a1", "white_rook"),
    ("b1", "white_knight"),
    ("c1", "white_bishop"),
    ("d1", "white_queen"),
    ("e1", "white_king"),
    ("f1", "white_bishop"),
    ("g1", "white_knight"),
    ("h1", "white_rook"),
    ("a2", "white_pawn"),
    ("b2", "white_pawn"),
    ("c2", "white_pawn"),
    ("d2", "white_pawn"),
    ("e2", "white_pawn"),
    ("f2", "white_pawn"),
    ("g2", "white_pawn"),
    ("h2", "white_pawn"),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("unknown piece name {0:?}")]
    UnknownPiece(String),
    #[error("bad square coordinate {0:?}")]
    BadCoordinate(String),
}

/// Parse a "<color>_<type>" identifier like "white_pawn".
pub fn piece_from_name(name: &str) -> Result<Piece, SetupError> {
    let (color_str, type_str) = name
        .split_once('_')
        .ok_or_else(|| SetupError::UnknownPiece(name.to_string()))?;

    let color = match color_str {
        "white" => WHITE,
        "black" => BLACK,
        _ => return Err(SetupError::UnknownPiece(name.to_string())),
    };

    let kind = match type_str {
        "pawn" => PAWN,
        "knight" => KNIGHT,
        "bishop" => BISHOP,
        "rook" => ROOK,
        "queen" => QUEEN,
        "king" => KING,
        _ => return Err(SetupError::UnknownPiece(name.to_string())),
    };

    Ok(make_piece(kind, color))
}

/// Inverse of `piece_from_name`, used for logging and display lookups.
pub fn piece_name(piece: Piece) -> String {
    format!(
        "{}_{}",
        color_name(piece_color(piece)),
        piece_type_name(piece_type(piece))
    )
}
