use super::Board;
use crate::types::*;

impl Board {
    /// Execute an already-resolved move: overwrite the destination with
    /// the mover (capturing any occupant), clear the origin, flip the
    /// turn, and refresh the piece index. Callers guarantee the move is
    /// legal; this is pure mechanics.
    pub fn apply_move(&mut self, mv: Move) -> GameMove {
        let moving_piece = self.get_piece(mv.from);
        let captured_piece = self.get_piece(mv.to);

        self.set_piece(mv.to, moving_piece);
        self.clear_square(mv.from);

        self.current_turn = opposite_color(self.current_turn);
        self.rebuild_index();

        GameMove {
            mv,
            piece: moving_piece,
            captured_piece,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square_from_algebraic;

    fn sq(name: &str) -> Square {
        square_from_algebraic(name).unwrap()
    }

    #[test]
    fn test_apply_move_relocates_piece_and_flips_turn() {
        let mut board = Board::new();
        let applied = board.apply_move(Move::new(sq("e2"), sq("e4")));

        assert_eq!(applied.piece, make_piece(PAWN, WHITE));
        assert!(is_empty(applied.captured_piece));
        assert!(is_empty(board.get_piece(sq("e2"))));
        assert_eq!(board.get_piece(sq("e4")), make_piece(PAWN, WHITE));
        assert_eq!(board.current_turn, BLACK);
    }

    #[test]
    fn test_apply_move_capture_overwrites_destination() {
        let mut board = Board::from_table(&[("e4", "white_pawn"), ("d5", "black_pawn")]).unwrap();
        let applied = board.apply_move(Move::new(sq("e4"), sq("d5")));

        assert_eq!(applied.captured_piece, make_piece(PAWN, BLACK));
        assert_eq!(board.get_piece(sq("d5")), make_piece(PAWN, WHITE));
        assert!(is_empty(board.get_piece(sq("e4"))));
        assert!(board.pieces_of(BLACK, PAWN).is_empty(), "captured pawn left the index");
        assert_eq!(board.pieces_of(WHITE, PAWN), &[sq("d5")][..]);
    }
}
