//! King move generation.
//!
//! Each of the eight single-step destinations is validated by tentatively
//! relocating the tracked king location and rerunning the full check scan;
//! the location is restored before the next offset is tried. The board keeps
//! the king on its origin square during the probe, which the detector treats
//! as transparent. This rescan per destination is the dominant cost of move
//! generation near the king. Castling is not modeled.

use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::chess_types::{piece_at, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::check_detection::scan_pins_and_checks;
use crate::moves::chess_move::Move;

pub fn generate_king_moves(game: &mut GameState, from: Square, out: &mut Vec<Move>) {
    let color = game.side_to_move;

    for &offset in &KING_OFFSETS {
        let Some(target) = from.offset(offset, 1) else {
            continue;
        };
        let is_ally = piece_at(&game.board, target).is_some_and(|p| p.color == color);
        if is_ally {
            continue;
        }

        game.set_king_square(color, target);
        if !scan_pins_and_checks(game).in_check {
            out.push(Move::new(from, target, &game.board));
        }
        game.set_king_square(color, from);
    }
}
