//! Move generator trait seam.
//!
//! Search and engine code talk to move generation through this trait so the
//! pipeline can be swapped or instrumented without touching search logic.
//! Generation recomputes the derived check/pin/terminal state, which is why
//! it takes the game state mutably.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub trait MoveGenerator: Send + Sync {
    /// Produce the full legal move list for the side to move, refreshing the
    /// state's `in_check`/`pins`/`checks` fields and setting a terminal flag
    /// when the list is empty.
    fn generate_valid_moves(&self, game: &mut GameState) -> Vec<Move>;
}
