use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(game: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_sliding_moves(game, from, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::check_detection::scan_pins_and_checks;

    #[test]
    fn central_bishop_reaches_thirteen_squares() {
        let game =
            GameState::from_fen("4k3/8/8/8/3B4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_bishop_moves(&game, Square::new(4, 3), &mut moves);
        assert_eq!(moves.len(), 13);
    }

    #[test]
    fn bishop_pinned_on_a_file_cannot_move() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/4r3/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        game.pins = scan_pins_and_checks(&game).pins;

        let mut moves = Vec::new();
        generate_bishop_moves(&game, Square::new(6, 4), &mut moves);
        assert!(moves.is_empty());
    }
}
