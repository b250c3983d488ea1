//! Canonical chess-rule constants.
//!
//! Direction tables share one ordering contract: in `RAY_DIRECTIONS` the
//! first four entries are orthogonal and the last four diagonal, with the
//! upward diagonals (toward row 0) at indices 4..=5 and the downward ones at
//! 6..=7. The check/pin detector relies on those index bands.

use crate::game_state::chess_types::Direction;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// All eight ray directions scanned outward from the king.
/// up | left | down | right | up-left | up-right | down-left | down-right
pub const RAY_DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Index band of `RAY_DIRECTIONS` holding the orthogonal rays.
pub const ORTHOGONAL_RAYS: std::ops::RangeInclusive<usize> = 0..=3;

/// Index band of `RAY_DIRECTIONS` holding the diagonal rays.
pub const DIAGONAL_RAYS: std::ops::RangeInclusive<usize> = 4..=7;

/// Diagonals a white pawn attacks the scanned king along (seen from the king).
pub const WHITE_PAWN_ATTACK_RAYS: std::ops::RangeInclusive<usize> = 6..=7;

/// Diagonals a black pawn attacks the scanned king along (seen from the king).
pub const BLACK_PAWN_ATTACK_RAYS: std::ops::RangeInclusive<usize> = 4..=5;

/// Sliding directions for rooks (and the orthogonal half of queens).
pub const ROOK_DIRECTIONS: [Direction; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Sliding directions for bishops (and the diagonal half of queens).
pub const BISHOP_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Knight jump offsets.
pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Single-step king offsets.
pub const KING_OFFSETS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
