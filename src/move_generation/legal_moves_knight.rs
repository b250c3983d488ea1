use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::{piece_at, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::check_detection::pin_direction_at;
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(game: &GameState, from: Square, out: &mut Vec<Move>) {
    // A pinned knight is fully immobilized: it cannot move along any line,
    // so the pin direction is never consulted.
    if pin_direction_at(&game.pins, from).is_some() {
        return;
    }

    let color = game.side_to_move;
    for &offset in &KNIGHT_OFFSETS {
        let Some(target) = from.offset(offset, 1) else {
            continue;
        };
        let is_ally = piece_at(&game.board, target).is_some_and(|p| p.color == color);
        if !is_ally {
            out.push(Move::new(from, target, &game.board));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::check_detection::scan_pins_and_checks;

    #[test]
    fn central_knight_has_eight_jumps() {
        let game =
            GameState::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_knight_moves(&game, Square::new(4, 3), &mut moves);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn pinned_knight_generates_no_moves_at_all() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/4r3/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        game.pins = scan_pins_and_checks(&game).pins;

        let mut moves = Vec::new();
        generate_knight_moves(&game, Square::new(6, 4), &mut moves);
        assert!(moves.is_empty());
    }
}
