//! Negamax search engine.
//!
//! Wraps the fixed-depth alpha-beta search behind the `Engine` trait. When
//! search returns no preferred move (every reply scored at the losing bound)
//! it falls back to a uniformly random legal move rather than resigning.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::MaterialScorer;
use crate::search::negamax::{find_best_move, SEARCH_DEPTH};

pub struct NegamaxEngine {
    move_generator: LegalMoveGenerator,
    scorer: MaterialScorer,
    default_depth: u8,
}

impl NegamaxEngine {
    pub fn new() -> Self {
        Self::with_depth(SEARCH_DEPTH)
    }

    pub fn with_depth(default_depth: u8) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            scorer: MaterialScorer,
            default_depth,
        }
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Rowan Negamax"
    }

    fn choose_move(
        &mut self,
        game: &mut GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        // Depth 0 would never probe the tree, so clamp to at least one ply.
        let depth = params.depth.unwrap_or(self.default_depth).max(1);

        let valid_moves = self.move_generator.generate_valid_moves(game);
        let mut out = EngineOutput::default();
        if valid_moves.is_empty() {
            out.info_lines.push("info string no legal moves".to_string());
            return Ok(out);
        }

        let result = find_best_move(
            game,
            valid_moves.clone(),
            &self.move_generator,
            &self.scorer,
            depth,
        );
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            depth, result.best_score, result.nodes
        ));

        out.best_move = match result.best_move {
            Some(mv) => Some(mv),
            None => {
                // Every line scored at the losing bound; play on randomly.
                out.info_lines
                    .push("info string search had no preference".to_string());
                let mut rng = rand::rng();
                Some(
                    *valid_moves
                        .as_slice()
                        .choose(&mut rng)
                        .ok_or("failed to choose a fallback move")?,
                )
            }
        };
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::NegamaxEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::generate_valid_moves;

    #[test]
    fn takes_a_hanging_queen() {
        // White queen en prise on d4; black queen d8 takes it.
        let mut game = GameState::from_fen("3qk3/8/8/8/3Q4/8/8/4K3 b - - 0 1")
            .expect("FEN should parse");
        let mut engine = NegamaxEngine::new();
        let out = engine
            .choose_move(&mut game, &GoParams { depth: Some(2) })
            .expect("engine should answer");
        assert_eq!(
            out.best_move.expect("black has moves").notation(),
            "d8d4"
        );
    }

    #[test]
    fn reports_no_move_when_mated() {
        let mut game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/K7 b - - 0 1")
            .expect("FEN should parse");
        let mut engine = NegamaxEngine::new();
        let out = engine
            .choose_move(&mut game, &GoParams::default())
            .expect("engine should answer");
        assert!(out.best_move.is_none());
    }

    #[test]
    fn always_answers_with_a_legal_move() {
        let mut game = GameState::new_game();
        let legal = generate_valid_moves(&mut game);
        let mut engine = NegamaxEngine::with_depth(2);
        let out = engine
            .choose_move(&mut game, &GoParams::default())
            .expect("engine should answer");
        assert!(legal.contains(&out.best_move.expect("start position has moves")));
    }
}
