//! Pin and check detection by ray casting from the side-to-move's king.
//!
//! Eight rays are marched outward from the tracked king square. The first
//! ally piece on a ray is a candidate pin; a second ally piece aborts the
//! ray. An enemy piece resolves against attacker-type/direction/distance
//! rules into either a direct check or a confirmed pin. Knight checks are
//! probed separately through the jump offsets.

use crate::game_state::chess_rules::{
    BLACK_PAWN_ATTACK_RAYS, DIAGONAL_RAYS, KNIGHT_OFFSETS, ORTHOGONAL_RAYS, RAY_DIRECTIONS,
    WHITE_PAWN_ATTACK_RAYS,
};
use crate::game_state::chess_types::{piece_at, Color, Direction, PieceKind, Square};
use crate::game_state::game_state::GameState;

/// An ally piece shielding its king along one ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: Direction,
}

/// An attacker currently giving check.
///
/// Ray checks carry the unit direction from the king toward the attacker;
/// knight checks carry the jump offset instead, since no ray connects the
/// two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Ray { square: Square, direction: Direction },
    Knight { square: Square, offset: Direction },
}

impl Check {
    #[inline]
    pub fn square(&self) -> Square {
        match self {
            Check::Ray { square, .. } | Check::Knight { square, .. } => *square,
        }
    }
}

/// Result of one detector pass.
#[derive(Debug, Clone, Default)]
pub struct CheckScan {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

/// Scan pins and checks against the side-to-move's king.
///
/// An ally king encountered along a ray is transparent: it is neither a pin
/// candidate nor a blocker. King-move validation relies on this, because it
/// rescans from a tentative king square while the board still holds the king
/// on its original square.
pub fn scan_pins_and_checks(game: &GameState) -> CheckScan {
    let ally = game.side_to_move;
    let enemy = ally.opposite();
    let king = game.king_square(ally);
    let mut scan = CheckScan::default();

    for (ray_index, &direction) in RAY_DIRECTIONS.iter().enumerate() {
        let mut candidate_pin: Option<Pin> = None;

        for step in 1..8 {
            let Some(square) = king.offset(direction, step) else {
                break;
            };
            let Some(piece) = piece_at(&game.board, square) else {
                continue;
            };

            if piece.color == ally {
                if piece.kind == PieceKind::King {
                    continue;
                }
                if candidate_pin.is_none() {
                    candidate_pin = Some(Pin { square, direction });
                } else {
                    // Second ally piece: no pin or check along this ray.
                    break;
                }
            } else {
                if attacks_along_ray(piece.kind, enemy, ray_index, step) {
                    match candidate_pin.take() {
                        None => {
                            scan.in_check = true;
                            scan.checks.push(Check::Ray { square, direction });
                        }
                        Some(pin) => scan.pins.push(pin),
                    }
                }
                // Any enemy piece ends the ray either way.
                break;
            }
        }
    }

    for &offset in &KNIGHT_OFFSETS {
        let Some(square) = king.offset(offset, 1) else {
            continue;
        };
        if let Some(piece) = piece_at(&game.board, square) {
            if piece.color == enemy && piece.kind == PieceKind::Knight {
                scan.in_check = true;
                scan.checks.push(Check::Knight { square, offset });
            }
        }
    }

    scan
}

/// Attacker-type vs ray-direction vs distance rules for sliding-style checks.
fn attacks_along_ray(kind: PieceKind, enemy: Color, ray_index: usize, distance: i8) -> bool {
    match kind {
        PieceKind::Rook => ORTHOGONAL_RAYS.contains(&ray_index),
        PieceKind::Bishop => DIAGONAL_RAYS.contains(&ray_index),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        PieceKind::Pawn => {
            distance == 1
                && match enemy {
                    Color::White => WHITE_PAWN_ATTACK_RAYS.contains(&ray_index),
                    Color::Black => BLACK_PAWN_ATTACK_RAYS.contains(&ray_index),
                }
        }
        PieceKind::Knight => false,
    }
}

/// Pure pin lookup: direction of the pin covering `square`, if any.
#[inline]
pub fn pin_direction_at(pins: &[Pin], square: Square) -> Option<Direction> {
    pins.iter()
        .find(|pin| pin.square == square)
        .map(|pin| pin.direction)
}
