//! Immutable description of a single ply.
//!
//! A `Move` snapshots the board cells it touches at creation time so that
//! `undo_move` can restore them without rederiving anything. Equality is by
//! start and end square only; two moves with identical endpoints compare
//! equal regardless of capture, promotion, or en-passant metadata, which is
//! what lets a bare endpoint pair from the UI match a generator-produced move.

use crate::game_state::chess_types::{piece_at, Board, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_promotion: bool,
}

impl Move {
    /// Build a plain move from `start` to `end`, reading the moved and
    /// captured pieces off `board`. `start` must hold the moving piece.
    pub fn new(start: Square, end: Square, board: &Board) -> Self {
        let piece_moved =
            piece_at(board, start).expect("move start square must hold the moving piece");
        let piece_captured = piece_at(board, end);
        let is_promotion =
            piece_moved.kind == PieceKind::Pawn && end.row == piece_moved.color.promotion_row();

        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_en_passant: false,
            is_promotion,
        }
    }

    /// Build an en-passant capture. The captured pawn sits beside the start
    /// square, not on the destination, so it is recorded explicitly.
    pub fn new_en_passant(start: Square, end: Square, board: &Board) -> Self {
        let piece_moved =
            piece_at(board, start).expect("move start square must hold the moving piece");
        let captured_pawn = Piece::new(piece_moved.color.opposite(), PieceKind::Pawn);

        Self {
            start,
            end,
            piece_moved,
            piece_captured: Some(captured_pawn),
            is_en_passant: true,
            is_promotion: false,
        }
    }

    /// Long algebraic notation of the endpoints, e.g. `"e2e4"`.
    pub fn notation(&self) -> String {
        format!("{}{}", square_name(self.start), square_name(self.end))
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

// Hash agrees with the endpoint-only equality above.
impl std::hash::Hash for Move {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

fn square_name(square: Square) -> String {
    let file = char::from(b'a' + square.col);
    let rank = char::from(b'8' - square.row);
    format!("{file}{rank}")
}
