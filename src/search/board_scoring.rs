//! Static position scoring.
//!
//! Search delegates leaf evaluation to the `BoardScorer` trait so heuristics
//! can be swapped without touching search code. Scores are always from
//! white's perspective; the negamax turn multiplier, not the scorer,
//! accounts for whose move it is.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;

/// Score of a delivered checkmate, and the search window bound.
pub const MATE_SCORE: i32 = 2000;

/// Score of a stalemate.
pub const STALEMATE_SCORE: i32 = 0;

pub trait BoardScorer: Send + Sync {
    /// Score from white's perspective: positive favors white.
    fn score(&self, game: &GameState) -> i32;
}

/// Pure material count with terminal-state overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 10,
            PieceKind::King => 0,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game: &GameState) -> i32 {
        // Mate against the side to move is a loss for them.
        if game.checkmate {
            return match game.side_to_move {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }
        if game.stalemate {
            return STALEMATE_SCORE;
        }

        let mut score = 0;
        for row in &game.board {
            for square in row {
                if let Some(piece) = square {
                    let value = Self::piece_value(piece.kind);
                    match piece.color {
                        Color::White => score += value,
                        Color::Black => score -= value,
                    }
                }
            }
        }
        score
    }
}
