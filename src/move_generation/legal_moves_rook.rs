use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(game: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_sliding_moves(game, from, &ROOK_DIRECTIONS, out);
}
