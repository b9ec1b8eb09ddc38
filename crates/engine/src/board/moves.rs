use super::Board;
use crate::types::*;

// Knight offsets: the 8 (±1,±2)/(±2,±1) jumps
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

// King offsets: one step in every direction
const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Squares a piece of the given type and color could move to from
    /// `square` this turn, given current occupancy. Pure: never mutates,
    /// never errors; off-board geometry just drops out of the result.
    pub fn legal_moves(&self, kind: u8, color: u8, square: Square) -> Vec<Square> {
        match kind {
            KNIGHT => self.get_offset_moves(square, color, &KNIGHT_OFFSETS),
            ROOK => self.get_sliding_moves(square, color, &ROOK_DIRECTIONS),
            BISHOP => self.get_sliding_moves(square, color, &BISHOP_DIRECTIONS),
            QUEEN => self.get_queen_moves(square, color),
            KING => self.get_offset_moves(square, color, &KING_OFFSETS),
            PAWN => self.get_pawn_moves(square, color),
            _ => Vec::new(),
        }
    }

    /// Knight and king moves: fixed offsets filtered only by the board
    /// edge and the occupant's color. Intervening pieces never matter.
    fn get_offset_moves(&self, square: Square, color: u8, offsets: &[(i8, i8)]) -> Vec<Square> {
        let file = square.file() as i8;
        let rank = square.rank() as i8;
        let mut moves = Vec::new();

        for &(df, dr) in offsets {
            let new_file = file + df;
            let new_rank = rank + dr;

            if !Self::is_on_board(new_file, new_rank) {
                continue;
            }

            let target_square = Square::new(new_file as u8, new_rank as u8);
            let target_piece = self.get_piece(target_square);

            if is_empty(target_piece) || piece_color(target_piece) != color {
                moves.push(target_square);
            }
        }

        moves
    }

    /// Generate sliding piece moves in the given ray directions
    fn get_sliding_moves(&self, square: Square, color: u8, directions: &[(i8, i8)]) -> Vec<Square> {
        let mut moves = Vec::new();
        let file = square.file() as i8;
        let rank = square.rank() as i8;

        for &(df, dr) in directions {
            for distance in 1..BOARD_SIZE as i8 {
                let new_file = file + df * distance;
                let new_rank = rank + dr * distance;

                if !Self::is_on_board(new_file, new_rank) {
                    break; // Off the board
                }

                let target_square = Square::new(new_file as u8, new_rank as u8);
                let target_piece = self.get_piece(target_square);

                if is_empty(target_piece) {
                    moves.push(target_square); // Empty square, can move
                } else if piece_color(target_piece) != color {
                    moves.push(target_square); // Enemy piece, can capture
                    break; // Can't continue beyond this piece
                } else {
                    break; // Own piece, can't move here or beyond
                }
            }
        }

        moves
    }

    /// Queen moves: union of the rook and bishop rays
    fn get_queen_moves(&self, square: Square, color: u8) -> Vec<Square> {
        let mut moves = self.get_sliding_moves(square, color, &ROOK_DIRECTIONS);
        moves.extend(self.get_sliding_moves(square, color, &BISHOP_DIRECTIONS));
        moves
    }

    /// Generate pawn moves
    fn get_pawn_moves(&self, square: Square, color: u8) -> Vec<Square> {
        let mut moves = Vec::new();
        let file = square.file() as i8;
        let rank = square.rank() as i8;

        // White advances toward higher ranks, black toward lower
        let direction: i8 = if color == WHITE { 1 } else { -1 };

        let forward_rank = rank + direction;
        if Self::is_on_board(file, forward_rank) {
            let forward_square = Square::new(file as u8, forward_rank as u8);

            // Single forward move (only if the square is empty)
            if is_empty(self.get_piece(forward_square)) {
                moves.push(forward_square);

                // Double step only from the home rank, through an empty
                // intermediate square, onto an empty square
                let home_rank = if color == WHITE { 1 } else { BOARD_SIZE as i8 - 2 };
                if rank == home_rank {
                    let double_rank = forward_rank + direction;
                    if Self::is_on_board(file, double_rank) {
                        let double_square = Square::new(file as u8, double_rank as u8);
                        if is_empty(self.get_piece(double_square)) {
                            moves.push(double_square);
                        }
                    }
                }
            }
        }

        // Diagonal moves are captures only, never onto an empty square
        for df in [-1, 1] {
            let new_file = file + df;

            if Self::is_on_board(new_file, forward_rank) {
                let capture_square = Square::new(new_file as u8, forward_rank as u8);
                let target_piece = self.get_piece(capture_square);

                if !is_empty(target_piece) && piece_color(target_piece) != color {
                    moves.push(capture_square);
                }
            }
        }

        moves
    }
}
