//! Engine abstraction layer used by the terminal front-end.
//!
//! Defines common input parameters and output payloads so different engine
//! strengths can be selected at runtime behind a single trait interface.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Override for the engine's configured search depth.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` only when the position has no legal moves.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move. The game state is borrowed mutably
    /// because search explores it with make/undo, but it is restored exactly
    /// before this returns.
    fn choose_move(
        &mut self,
        game: &mut GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
