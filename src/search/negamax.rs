//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The root call owns best-move selection and returns it through the result
//! value; the recursion below it is a pure score function. Every move made
//! along any exploration path is undone before returning, including paths
//! abandoned by a beta cutoff, so the shared game state is restored exactly.
//!
//! `negamax_score` is the unpruned reference search: for a fixed depth and
//! move ordering it must return the same score as `alpha_beta_score`, which
//! only ever reduces the number of nodes visited.

use rand::seq::SliceRandom;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};

/// Default search depth in plies.
pub const SEARCH_DEPTH: u8 = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    /// `None` when no move improved the initial bound; the caller must fall
    /// back to a uniformly random legal move.
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

/// Search `depth` plies (clamped to at least 1) and pick a move for the side
/// to move. `valid_moves` is shuffled once so equal-value moves vary between
/// calls; ties below the running best keep the earlier-found move.
pub fn find_best_move(
    game: &mut GameState,
    mut valid_moves: Vec<Move>,
    generator: &dyn MoveGenerator,
    scorer: &dyn BoardScorer,
    depth: u8,
) -> SearchResult {
    let depth = depth.max(1);
    valid_moves.shuffle(&mut rand::rng());

    let multiplier = match game.side_to_move {
        Color::White => 1,
        Color::Black => -1,
    };

    let mut result = SearchResult {
        best_score: -MATE_SCORE,
        ..SearchResult::default()
    };
    let mut alpha = -MATE_SCORE;
    let beta = MATE_SCORE;

    for mv in valid_moves {
        game.make_move(mv);
        let replies = generator.generate_valid_moves(game);
        let score = -alpha_beta_score(
            game,
            &replies,
            generator,
            scorer,
            depth - 1,
            -beta,
            -alpha,
            -multiplier,
            &mut result.nodes,
        );
        game.undo_move();

        if score > result.best_score {
            result.best_score = score;
            result.best_move = Some(mv);
        }
        alpha = alpha.max(result.best_score);
        if result.best_score >= beta {
            break;
        }
    }

    result
}

/// Negamax with alpha-beta pruning. Scores `game` from the perspective of
/// the side `multiplier` represents (+1 white, -1 black). An empty move list
/// scores as the unimproved `-MATE_SCORE` bound.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta_score(
    game: &mut GameState,
    valid_moves: &[Move],
    generator: &dyn MoveGenerator,
    scorer: &dyn BoardScorer,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    multiplier: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return multiplier * scorer.score(game);
    }

    let mut max_score = -MATE_SCORE;
    for &mv in valid_moves {
        game.make_move(mv);
        let replies = generator.generate_valid_moves(game);
        let score = -alpha_beta_score(
            game,
            &replies,
            generator,
            scorer,
            depth - 1,
            -beta,
            -alpha,
            -multiplier,
            nodes,
        );
        game.undo_move();

        max_score = max_score.max(score);
        alpha = alpha.max(max_score);
        if alpha >= beta {
            break;
        }
    }
    max_score
}

/// Unpruned negamax kept as the reference for validating the pruning search.
pub fn negamax_score(
    game: &mut GameState,
    valid_moves: &[Move],
    generator: &dyn MoveGenerator,
    scorer: &dyn BoardScorer,
    depth: u8,
    multiplier: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return multiplier * scorer.score(game);
    }

    let mut max_score = -MATE_SCORE;
    for &mv in valid_moves {
        game.make_move(mv);
        let replies = generator.generate_valid_moves(game);
        let score = -negamax_score(game, &replies, generator, scorer, depth - 1, -multiplier, nodes);
        game.undo_move();
        max_score = max_score.max(score);
    }
    max_score
}
