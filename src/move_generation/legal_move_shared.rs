//! Helpers shared by the per-piece move generators.

use crate::game_state::chess_types::{piece_at, Direction, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::check_detection::pin_direction_at;
use crate::moves::chess_move::Move;

/// Ray-march a sliding piece along `directions`, stopping at the first
/// occupied square and including it when it holds an enemy piece.
///
/// A pinned slider may only move along its pin axis, in either direction.
pub fn generate_sliding_moves(
    game: &GameState,
    from: Square,
    directions: &[Direction],
    out: &mut Vec<Move>,
) {
    let color = game.side_to_move;
    let pin = pin_direction_at(&game.pins, from);

    for &direction in directions {
        let on_pin_axis = match pin {
            None => true,
            Some(axis) => direction == axis || direction == (-axis.0, -axis.1),
        };
        if !on_pin_axis {
            continue;
        }

        for step in 1..8 {
            let Some(target) = from.offset(direction, step) else {
                break;
            };
            match piece_at(&game.board, target) {
                None => out.push(Move::new(from, target, &game.board)),
                Some(piece) => {
                    if piece.color != color {
                        out.push(Move::new(from, target, &game.board));
                    }
                    break;
                }
            }
        }
    }
}
