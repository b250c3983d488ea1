use crate::game_state::chess_types::Square;
use crate::moves::chess_move::Move;

/// Single undo record for `make_move` / `undo_move`.
///
/// The move itself carries the board cells it touched; the record only adds
/// the state that cannot be rederived from the move, the pre-move en-passant
/// target.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub mv: Move,
    pub prev_en_passant_square: Option<Square>,
}
