//! Pawn move generation.
//!
//! Forward pushes, the double advance from the starting rank, diagonal
//! captures, and en-passant captures are each checked independently against
//! the pin direction: a pinned pawn keeps only the moves that stay on its
//! pin ray. Moves reaching the farthest rank come back flagged promotable
//! (see `Move::new`).

use crate::game_state::chess_types::{piece_at, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::check_detection::pin_direction_at;
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(game: &GameState, from: Square, out: &mut Vec<Move>) {
    let color = game.side_to_move;
    let pin = pin_direction_at(&game.pins, from);
    let advance = (color.pawn_advance(), 0);

    if let Some(one_step) = from.offset(advance, 1) {
        if piece_at(&game.board, one_step).is_none() && (pin.is_none() || pin == Some(advance)) {
            out.push(Move::new(from, one_step, &game.board));

            if from.row == color.pawn_start_row() {
                if let Some(two_steps) = from.offset(advance, 2) {
                    if piece_at(&game.board, two_steps).is_none() {
                        out.push(Move::new(from, two_steps, &game.board));
                    }
                }
            }
        }
    }

    for col_delta in [-1i8, 1] {
        let direction = (color.pawn_advance(), col_delta);
        let Some(target) = from.offset(direction, 1) else {
            continue;
        };
        let on_pin_ray = pin.is_none() || pin == Some(direction);

        match piece_at(&game.board, target) {
            Some(piece) if piece.color != color => {
                if on_pin_ray {
                    out.push(Move::new(from, target, &game.board));
                }
            }
            None if game.en_passant_square == Some(target) => {
                if on_pin_ray {
                    out.push(Move::new_en_passant(from, target, &game.board));
                }
            }
            _ => {}
        }
    }
}
