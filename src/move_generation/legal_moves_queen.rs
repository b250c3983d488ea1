use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Queen moves are the union of rook and bishop generation at the same
/// origin; both passes see the same pin, so a pinned queen keeps exactly the
/// rays of its pin axis.
pub fn generate_queen_moves(game: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_rook_moves(game, from, out);
    generate_bishop_moves(game, from, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::check_detection::scan_pins_and_checks;

    #[test]
    fn central_queen_reaches_twenty_seven_squares() {
        let game =
            GameState::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_queen_moves(&game, Square::new(4, 3), &mut moves);
        assert_eq!(moves.len(), 27);
    }

    #[test]
    fn diagonally_pinned_queen_keeps_only_the_pin_diagonal() {
        let mut game =
            GameState::from_fen("4k3/8/8/1b6/8/3Q4/8/5K2 w - - 0 1").expect("FEN should parse");
        game.pins = scan_pins_and_checks(&game).pins;
        assert_eq!(game.pins.len(), 1);

        let mut moves = Vec::new();
        generate_queen_moves(&game, Square::new(5, 3), &mut moves);

        // c4 and the capture on b5, plus the retreat square e2 toward the king.
        assert_eq!(moves.len(), 3);
        assert!(moves
            .iter()
            .all(|m| m.end.row.abs_diff(5) == m.end.col.abs_diff(3)));
    }
}
