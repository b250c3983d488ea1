//! Full legal move generation pipeline.
//!
//! Runs the check/pin detector, then piece-wise pseudo-legal generation, and
//! filters the result by the number of simultaneous checks: with no check
//! every pseudo-legal move stands (pins are already enforced per piece), a
//! single check restricts non-king moves to the squares that block or
//! capture the attacker, and a double check leaves only king moves.

use crate::game_state::chess_types::{piece_at, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::check_detection::{scan_pins_and_checks, Check};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_valid_moves(&self, game: &mut GameState) -> Vec<Move> {
        generate_valid_moves(game)
    }
}

/// Recompute the derived check/pin state and return the legal moves for the
/// side to move. Sets `checkmate`/`stalemate` when the list comes out empty.
pub fn generate_valid_moves(game: &mut GameState) -> Vec<Move> {
    // Snapshot the en-passant target so transient state from move probing
    // never leaks back into the real game.
    let saved_en_passant = game.en_passant_square;

    let scan = scan_pins_and_checks(game);
    game.in_check = scan.in_check;
    game.pins = scan.pins;
    game.checks = scan.checks;

    let king = game.king_square(game.side_to_move);

    let mut moves = if game.in_check {
        if game.checks.len() == 1 {
            let mut moves = generate_all_pseudo_moves(game);
            let resolving = check_resolution_squares(king, game.checks[0]);
            // King moves validated themselves against the rescan; everything
            // else must land on a resolving square.
            moves.retain(|m| {
                m.piece_moved.kind == PieceKind::King || resolving.contains(&m.end)
            });
            moves
        } else {
            let mut moves = Vec::new();
            generate_king_moves(game, king, &mut moves);
            moves
        }
    } else {
        generate_all_pseudo_moves(game)
    };

    if moves.is_empty() {
        if game.in_check {
            game.checkmate = true;
        } else {
            game.stalemate = true;
        }
    }

    game.en_passant_square = saved_en_passant;
    moves
}

/// Squares a non-king move may land on to resolve a single check: the
/// attacker itself for a knight, otherwise the full ray from the king up to
/// and including the attacker.
fn check_resolution_squares(king: Square, check: Check) -> Vec<Square> {
    match check {
        Check::Knight { square, .. } => vec![square],
        Check::Ray { square, direction } => {
            let mut resolving = Vec::new();
            for step in 1..8 {
                let Some(candidate) = king.offset(direction, step) else {
                    break;
                };
                resolving.push(candidate);
                if candidate == square {
                    break;
                }
            }
            resolving
        }
    }
}

fn generate_all_pseudo_moves(game: &mut GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);

    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square::new(row, col);
            let Some(piece) = piece_at(&game.board, from) else {
                continue;
            };
            if piece.color != game.side_to_move {
                continue;
            }

            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(game, from, &mut out),
                PieceKind::Knight => generate_knight_moves(game, from, &mut out),
                PieceKind::Bishop => generate_bishop_moves(game, from, &mut out),
                PieceKind::Rook => generate_rook_moves(game, from, &mut out),
                PieceKind::Queen => generate_queen_moves(game, from, &mut out),
                PieceKind::King => generate_king_moves(game, from, &mut out),
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_valid_moves;
    use crate::game_state::chess_types::{PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::moves::chess_move::Move;

    fn make(game: &mut GameState, from: (u8, u8), to: (u8, u8)) {
        let mv = Move::new(
            Square::new(from.0, from.1),
            Square::new(to.0, to.1),
            &game.board,
        );
        game.make_move(mv);
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let mut game = GameState::new_game();
        let moves = generate_valid_moves(&mut game);
        assert_eq!(moves.len(), 20);
        assert!(!game.in_check);
        assert!(!game.checkmate);
        assert!(!game.stalemate);
    }

    #[test]
    fn fools_mate_is_detected() {
        let mut game = GameState::new_game();
        make(&mut game, (6, 5), (5, 5)); // f2f3
        make(&mut game, (1, 4), (3, 4)); // e7e5
        make(&mut game, (6, 6), (4, 6)); // g2g4
        make(&mut game, (0, 3), (4, 7)); // d8h4#

        let moves = generate_valid_moves(&mut game);
        assert!(moves.is_empty());
        assert!(game.in_check);
        assert!(game.checkmate);
        assert!(!game.stalemate);
    }

    #[test]
    fn stalemate_is_detected() {
        // Black king h8, white queen f7, white king g6: no check, no moves.
        let mut game =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let moves = generate_valid_moves(&mut game);
        assert!(moves.is_empty());
        assert!(!game.in_check);
        assert!(game.stalemate);
        assert!(!game.checkmate);
    }

    #[test]
    fn single_check_restricts_to_block_capture_or_king_moves() {
        // Rook on e4 checks the king on e1; knight c3 can block on e2,
        // nothing can capture, and the king can step aside.
        let mut game =
            GameState::from_fen("4k3/8/8/8/4r3/2N5/8/4K3 w - - 0 1").expect("FEN should parse");
        let moves = generate_valid_moves(&mut game);
        assert!(game.in_check);

        for mv in &moves {
            let resolves = mv.end == Square::new(6, 4) || mv.end == Square::new(4, 4);
            assert!(
                mv.piece_moved.kind == PieceKind::King || resolves,
                "move {} neither blocks, captures, nor moves the king",
                mv.notation()
            );
        }
        assert!(moves
            .iter()
            .any(|m| m.piece_moved.kind == PieceKind::Knight && m.end == Square::new(6, 4)));
    }

    #[test]
    fn double_check_allows_only_king_moves() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/4r3/3n4/8/4K3 w - - 0 1").expect("FEN should parse");
        let moves = generate_valid_moves(&mut game);
        assert!(game.in_check);
        assert_eq!(game.checks.len(), 2);
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.piece_moved.kind == PieceKind::King));
    }

    #[test]
    fn pinned_piece_moves_are_excluded() {
        // Knight e2 is pinned by the rook on e4 and may not move at all;
        // every other white move must leave the e-file shield intact.
        let mut game =
            GameState::from_fen("4k3/8/8/8/4r3/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        let moves = generate_valid_moves(&mut game);
        assert!(moves
            .iter()
            .all(|m| m.piece_moved.kind != PieceKind::Knight));
    }

    #[test]
    fn en_passant_window_lasts_exactly_one_ply() {
        let mut game = GameState::new_game();
        make(&mut game, (6, 4), (4, 4)); // e2e4
        make(&mut game, (1, 0), (2, 0)); // a7a6
        make(&mut game, (4, 4), (3, 4)); // e4e5
        make(&mut game, (1, 3), (3, 3)); // d7d5

        let moves = generate_valid_moves(&mut game);
        assert!(moves.iter().any(|m| m.is_en_passant));

        // Decline the capture; the window closes.
        make(&mut game, (7, 6), (5, 5)); // g1f3
        make(&mut game, (1, 7), (2, 7)); // h7h6
        let moves = generate_valid_moves(&mut game);
        assert!(moves.iter().all(|m| !m.is_en_passant));
    }

    #[test]
    fn en_passant_target_survives_generation() {
        let mut game = GameState::new_game();
        make(&mut game, (6, 4), (4, 4)); // e2e4
        let target_before = game.en_passant_square;
        let _ = generate_valid_moves(&mut game);
        assert_eq!(game.en_passant_square, target_before);
    }
}
