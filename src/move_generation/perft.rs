//! Perft node counting over the legal move generator.
//!
//! Walks the move tree with make/undo and counts leaf nodes. Used by tests
//! and benches to validate generation against known counts. Castling is not
//! modeled, but it cannot occur within three plies of the starting position,
//! so shallow counts match the standard reference values.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_valid_moves;

pub fn perft(game: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_valid_moves(game);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        game.make_move(mv);
        nodes += perft(game, depth - 1);
        game.undo_move();
    }
    nodes
}
