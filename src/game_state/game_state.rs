//! Central mutable board state.
//!
//! `GameState` owns the mailbox board, turn and king-location bookkeeping,
//! the en-passant target, the derived check/pin/terminal flags, and the undo
//! stack used by make/undo workflows. It is created once per game and
//! mutated in place; a reset replaces the instance.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{set_piece, Board, Color, Piece, PieceKind, Square};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::check_detection::{Check, Pin};
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,

    // Tracked king locations; never rederived by scanning the board.
    pub white_king: Square,
    pub black_king: Square,

    /// En-passant target, valid for exactly one subsequent ply.
    pub en_passant_square: Option<Square>,

    // Derived fields, recomputed on every call to move generation.
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
    pub checkmate: bool,
    pub stalemate: bool,

    // Make/undo stack.
    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
            // Placeholder locations; `parse_fen` overwrites them from the
            // board layout and rejects positions missing either king.
            white_king: Square::new(7, 4),
            black_king: Square::new(0, 4),
            en_passant_square: None,
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            checkmate: false,
            stalemate: false,
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    #[inline]
    pub fn set_king_square(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king = square,
            Color::Black => self.black_king = square,
        }
    }

    /// Apply `mv` to the board. The caller must pass a move drawn from the
    /// most recent legal-move list; no legality is re-checked here.
    pub fn make_move(&mut self, mv: Move) {
        self.undo_stack.push(UndoState {
            mv,
            prev_en_passant_square: self.en_passant_square,
        });

        set_piece(&mut self.board, mv.start, None);
        set_piece(&mut self.board, mv.end, Some(mv.piece_moved));
        self.side_to_move = self.side_to_move.opposite();

        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mv.piece_moved.color, mv.end);
        }

        // Auto-queen promotion; no promotion choice is offered.
        if mv.is_promotion {
            set_piece(
                &mut self.board,
                mv.end,
                Some(Piece::new(mv.piece_moved.color, PieceKind::Queen)),
            );
        }

        // The en-passant victim sits beside the start square, not on the
        // destination, and is cleared separately.
        if mv.is_en_passant {
            set_piece(&mut self.board, Square::new(mv.start.row, mv.end.col), None);
        }

        let double_advance = mv.piece_moved.kind == PieceKind::Pawn
            && mv.start.row.abs_diff(mv.end.row) == 2;
        self.en_passant_square = if double_advance {
            Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
        } else {
            None
        };
    }

    /// Reverse the most recent move; a defined no-op on empty history.
    pub fn undo_move(&mut self) {
        let Some(record) = self.undo_stack.pop() else {
            return;
        };
        let mv = record.mv;

        set_piece(&mut self.board, mv.start, Some(mv.piece_moved));
        set_piece(&mut self.board, mv.end, mv.piece_captured);
        self.side_to_move = self.side_to_move.opposite();

        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mv.piece_moved.color, mv.start);
        }

        if mv.is_en_passant {
            // The destination was passed over, not occupied; the captured
            // pawn goes back beside the start square.
            set_piece(&mut self.board, mv.end, None);
            set_piece(
                &mut self.board,
                Square::new(mv.start.row, mv.end.col),
                mv.piece_captured,
            );
        }

        self.en_passant_square = record.prev_en_passant_square;

        // The position is no longer assumed terminal.
        self.checkmate = false;
        self.stalemate = false;
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{piece_at, Color, PieceKind, Square};
    use crate::moves::chess_move::Move;

    #[test]
    fn make_then_undo_restores_everything_bit_for_bit() {
        let mut game = GameState::new_game();
        game.make_move(Move::new(Square::new(6, 4), Square::new(4, 4), &game.board));

        let board_before = game.board;
        let side_before = game.side_to_move;
        let kings_before = (game.white_king, game.black_king);
        let ep_before = game.en_passant_square;

        let mv = Move::new(Square::new(1, 3), Square::new(3, 3), &game.board);
        game.make_move(mv);
        game.undo_move();

        assert_eq!(game.board, board_before);
        assert_eq!(game.side_to_move, side_before);
        assert_eq!((game.white_king, game.black_king), kings_before);
        assert_eq!(game.en_passant_square, ep_before);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut game = GameState::new_game();
        let board_before = game.board;
        game.undo_move();
        assert_eq!(game.board, board_before);
        assert_eq!(game.side_to_move, Color::White);
    }

    #[test]
    fn double_advance_sets_en_passant_target_for_one_ply() {
        let mut game = GameState::new_game();
        game.make_move(Move::new(Square::new(6, 4), Square::new(4, 4), &game.board));
        assert_eq!(game.en_passant_square, Some(Square::new(5, 4)));

        game.make_move(Move::new(Square::new(1, 0), Square::new(2, 0), &game.board));
        assert_eq!(game.en_passant_square, None);
    }

    #[test]
    fn promotion_places_a_queen_of_the_moving_color() {
        let mut game =
            GameState::from_fen("8/4P3/8/8/8/8/8/k1K5 w - - 0 1").expect("FEN should parse");
        let push = Move::new(Square::new(1, 4), Square::new(0, 4), &game.board);
        assert!(push.is_promotion);
        game.make_move(push);

        let promoted = piece_at(&game.board, Square::new(0, 4)).expect("queen should be placed");
        assert_eq!(promoted.kind, PieceKind::Queen);
        assert_eq!(promoted.color, Color::White);

        game.undo_move();
        let pawn = piece_at(&game.board, Square::new(1, 4)).expect("pawn should be restored");
        assert_eq!(pawn.kind, PieceKind::Pawn);
        assert_eq!(piece_at(&game.board, Square::new(0, 4)), None);
    }

    #[test]
    fn en_passant_capture_clears_and_restores_the_bypassed_pawn() {
        // White pawn e5, black answers d7d5, white captures e5xd6 e.p.
        let mut game = GameState::from_fen("rnbqkbnr/pppppppp/8/4P3/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
            .expect("FEN should parse");
        game.make_move(Move::new(Square::new(1, 3), Square::new(3, 3), &game.board));
        assert_eq!(game.en_passant_square, Some(Square::new(2, 3)));

        let capture = Move::new_en_passant(Square::new(3, 4), Square::new(2, 3), &game.board);
        let board_before = game.board;
        let ep_before = game.en_passant_square;

        game.make_move(capture);
        assert_eq!(piece_at(&game.board, Square::new(3, 3)), None);
        assert_eq!(
            piece_at(&game.board, Square::new(2, 3)).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );

        game.undo_move();
        assert_eq!(game.board, board_before);
        assert_eq!(game.en_passant_square, ep_before);
    }

    #[test]
    fn king_moves_update_the_tracked_location() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(game.white_king, Square::new(7, 4));

        game.make_move(Move::new(Square::new(7, 4), Square::new(6, 4), &game.board));
        assert_eq!(game.white_king, Square::new(6, 4));

        game.undo_move();
        assert_eq!(game.white_king, Square::new(7, 4));
    }
}
