//! Core value types shared across the engine.
//!
//! The board is a plain 8x8 mailbox grid indexed `[row][col]` with row 0 at
//! the top of the printed board (rank 8). Files `a`..`h` map to columns
//! 0..7 and ranks `8`..`1` map to rows 0..7.

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn advance for this color.
    #[inline]
    pub const fn pawn_advance(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color starts on (double-advance eligibility).
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Farthest row for a pawn of this color (promotion rank).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A colored piece occupying a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// 8x8 mailbox board; `None` is an empty square.
pub type Board = [[Option<Piece>; 8]; 8];

/// A `(row delta, col delta)` step used for ray marching and jump offsets.
pub type Direction = (i8, i8);

/// Board coordinate. Row 0 is rank 8, column 0 is file `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Step `times` squares along `direction`, `None` when off the board.
    #[inline]
    pub fn offset(self, direction: Direction, times: i8) -> Option<Square> {
        let row = self.row as i8 + direction.0 * times;
        let col = self.col as i8 + direction.1 * times;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

/// Read the piece on `square`.
#[inline]
pub fn piece_at(board: &Board, square: Square) -> Option<Piece> {
    board[square.row as usize][square.col as usize]
}

/// Overwrite the content of `square`.
#[inline]
pub fn set_piece(board: &mut Board, square: Square, piece: Option<Piece>) {
    board[square.row as usize][square.col as usize] = piece;
}
