use crate::board::{square_from_algebraic, square_to_algebraic, Board};
use crate::logger::GameLogger;
use crate::types::*;

/// Why a submitted move was rejected. Every variant surfaces to the
/// player as the same "invalid move" notice; the detail is for the log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("malformed move text {input:?}")]
    Malformed { input: String },
    #[error("no {piece} can reach {destination}")]
    NoLegalOrigin {
        piece: &'static str,
        destination: String,
    },
}

/// Map a notation letter to a piece type. Case-insensitive. Pawns have
/// no letter; a bare destination square means a pawn move.
fn letter_to_piece(letter: char) -> Option<u8> {
    match letter.to_ascii_uppercase() {
        'K' => Some(KING),
        'Q' => Some(QUEEN),
        'N' => Some(KNIGHT),
        'B' => Some(BISHOP),
        'R' => Some(ROOK),
        _ => None,
    }
}

/// One game: the authoritative board plus the move log. The display
/// layer only ever mutates the game through `submit_move`, and only
/// reads board state back after a move is accepted.
pub struct Game {
    board: Board,
    logger: GameLogger,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            logger: GameLogger::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> u8 {
        self.board.current_turn
    }

    pub fn logger(&self) -> &GameLogger {
        &self.logger
    }

    /// Split raw move text into (piece type, destination). Exactly two
    /// characters is a pawn move to that square; otherwise the first
    /// character is the piece letter and the rest is the destination.
    pub fn parse_move(text: &str) -> Result<(u8, Square), MoveError> {
        let malformed = || MoveError::Malformed {
            input: text.to_string(),
        };

        if text.len() == 2 {
            let destination = square_from_algebraic(text).ok_or_else(malformed)?;
            return Ok((PAWN, destination));
        }

        let mut chars = text.chars();
        let letter = chars.next().ok_or_else(malformed)?;
        let kind = letter_to_piece(letter).ok_or_else(malformed)?;
        let destination = square_from_algebraic(chars.as_str()).ok_or_else(malformed)?;
        Ok((kind, destination))
    }

    /// Find the current player's piece that can execute a move to
    /// `destination`. Candidates are scanned in piece-index order and
    /// the first whose legal-move set contains the destination wins;
    /// ties between same-type pieces are resolved silently by that
    /// order.
    pub fn resolve_origin(&self, kind: u8, destination: Square) -> Result<Square, MoveError> {
        let turn = self.board.current_turn;
        for &candidate in self.board.pieces_of(turn, kind) {
            if self
                .board
                .legal_moves(kind, turn, candidate)
                .contains(&destination)
            {
                return Ok(candidate);
            }
        }

        Err(MoveError::NoLegalOrigin {
            piece: piece_type_name(kind),
            destination: square_to_algebraic(destination),
        })
    }

    /// Parse, resolve, and apply one move. On any rejection the board,
    /// piece index, and turn are left exactly as they were.
    pub fn submit_move(&mut self, text: &str) -> Result<GameMove, MoveError> {
        let result = self.try_submit(text);
        match &result {
            Ok(applied) => self.logger.log_move(applied),
            Err(err) => self.logger.log_rejection(text, &err.to_string()),
        }
        result
    }

    fn try_submit(&mut self, text: &str) -> Result<GameMove, MoveError> {
        let (kind, destination) = Self::parse_move(text)?;
        let origin = self.resolve_origin(kind, destination)?;
        Ok(self.board.apply_move(Move::new(origin, destination)))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::GameSetup;

    fn sq(name: &str) -> Square {
        square_from_algebraic(name).unwrap()
    }

    #[test]
    fn test_parse_pawn_move() {
        assert_eq!(Game::parse_move("e4"), Ok((PAWN, sq("e4"))));
        assert_eq!(Game::parse_move("a1"), Ok((PAWN, sq("a1"))));
    }

    #[test]
    fn test_parse_piece_moves() {
        assert_eq!(Game::parse_move("Nc3"), Ok((KNIGHT, sq("c3"))));
        assert_eq!(Game::parse_move("Qh5"), Ok((QUEEN, sq("h5"))));
        assert_eq!(Game::parse_move("Ra5"), Ok((ROOK, sq("a5"))));
        assert_eq!(Game::parse_move("Bb5"), Ok((BISHOP, sq("b5"))));
        assert_eq!(Game::parse_move("Ke2"), Ok((KING, sq("e2"))));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Game::parse_move("nc3"), Ok((KNIGHT, sq("c3"))));
        assert_eq!(Game::parse_move("NC3"), Ok((KNIGHT, sq("c3"))), "file letter is normalized");
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for input in ["", "e", "e9", "i4", "Xe4", "N", "Nc", "Nc9", "e4e5", "Pe4"] {
            assert!(
                matches!(Game::parse_move(input), Err(MoveError::Malformed { .. })),
                "{:?} should be malformed",
                input
            );
        }
    }

    #[test]
    fn test_opening_pawn_move() {
        // Spec example: "e4" from the start resolves to the e2 pawn
        let mut game = Game::new();
        let applied = game.submit_move("e4").expect("e4 is legal at the start");

        assert_eq!(applied.mv.from, sq("e2"));
        assert_eq!(applied.mv.to, sq("e4"));
        assert!(is_empty(game.board().get_piece(sq("e2"))));
        assert_eq!(game.board().get_piece(sq("e4")), make_piece(PAWN, WHITE));
        assert_eq!(game.current_turn(), BLACK);
    }

    #[test]
    fn test_opening_knight_move() {
        // Spec example: "Nc3" resolves to the b1 knight
        let mut game = Game::new();
        let applied = game.submit_move("Nc3").expect("Nc3 is legal at the start");

        assert_eq!(applied.mv.from, sq("b1"));
        assert!(is_empty(game.board().get_piece(sq("b1"))));
        assert_eq!(game.board().get_piece(sq("c3")), make_piece(KNIGHT, WHITE));
        assert_eq!(game.current_turn(), BLACK);
    }

    #[test]
    fn test_pawn_capture_resolves_via_diagonal_rule() {
        // Spec example: after 1. e4 d5, white's "d5" is a pawn capture
        let mut game = Game::new();
        game.submit_move("e4").unwrap();
        game.submit_move("d5").unwrap();

        let applied = game.submit_move("d5").expect("exd5 resolves because d5 is occupied");
        assert_eq!(applied.mv.from, sq("e4"));
        assert_eq!(applied.captured_piece, make_piece(PAWN, BLACK));
        assert_eq!(game.board().get_piece(sq("d5")), make_piece(PAWN, WHITE));
    }

    #[test]
    fn test_pawn_diagonal_to_empty_square_rejected() {
        let mut game = Game::from_board(
            Board::from_table(&[("e4", "white_pawn"), ("a7", "black_pawn")]).unwrap(),
        );
        // d5 and f5 are empty, so the only pawn move to d5 would be an
        // illegal diagonal onto an empty square
        assert!(matches!(
            game.submit_move("d5"),
            Err(MoveError::NoLegalOrigin { .. })
        ));
    }

    #[test]
    fn test_blocked_queen_rejected() {
        // Spec example: "Qh5" from the start has no clear ray
        let mut game = Game::new();
        let before = game.board().clone();

        let result = game.submit_move("Qh5");
        assert!(matches!(result, Err(MoveError::NoLegalOrigin { .. })));
        assert_eq!(game.board().squares, before.squares, "board unchanged");
        assert_eq!(game.current_turn(), WHITE, "turn unchanged");
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let mut game = Game::new();
        game.submit_move("e4").unwrap();
        let squares_before = game.board().squares;

        for input in ["e4", "Qd6", "Nd4", "zz", "???"] {
            assert!(game.submit_move(input).is_err(), "{:?} must be rejected for black", input);
            assert_eq!(game.board().squares, squares_before);
            assert_eq!(game.current_turn(), BLACK);
        }

        // The game stays interactive after any rejection
        game.submit_move("e5").expect("black can still move");
        assert_eq!(game.current_turn(), WHITE);
    }

    #[test]
    fn test_turn_alternation() {
        let mut game = Game::new();
        for (input, mover) in [("e4", WHITE), ("e5", BLACK), ("Nf3", WHITE), ("Nc6", BLACK)] {
            assert_eq!(game.current_turn(), mover);
            let applied = game.submit_move(input).expect("scripted moves are legal");
            assert_eq!(piece_color(applied.piece), mover);
            assert_eq!(game.current_turn(), opposite_color(mover));
        }
    }

    #[test]
    fn test_wrong_color_piece_never_resolves() {
        let mut game = Game::new();
        game.submit_move("e4").unwrap();
        // White knight could reach c3, but it is black's turn
        assert!(matches!(
            game.submit_move("Nc3"),
            Err(MoveError::NoLegalOrigin { .. })
        ));
    }

    #[test]
    fn test_first_candidate_in_index_order_wins() {
        // Both rooks can reach a3; the table order decides
        let board =
            Board::from_table(&[("a5", "white_rook"), ("a1", "white_rook")]).unwrap();
        let mut game = Game::from_board(board);
        let applied = game.submit_move("Ra3").unwrap();
        assert_eq!(applied.mv.from, sq("a5"), "first index entry is chosen silently");
    }

    #[test]
    fn test_no_pieces_of_requested_type() {
        let mut game = Game::from_board(Board::from_setup(GameSetup::Empty).unwrap());
        assert!(matches!(
            game.submit_move("Qd4"),
            Err(MoveError::NoLegalOrigin { .. })
        ));
    }

    #[test]
    fn test_log_records_accepted_and_rejected_moves() {
        let mut game = Game::new();
        game.submit_move("e4").unwrap();
        let _ = game.submit_move("Qh2");

        let log = game.logger().contents();
        assert!(log.contains("1. white pawn e2 -> e4"), "log was: {}", log);
        assert!(log.contains("rejected"), "log was: {}", log);
    }
}
