//! Coordinate notation conversions.
//!
//! Squares read file-then-rank ("e4"), moves are the start and end squares
//! concatenated ("e2e4"). Promotion and capture are derived from the board,
//! so four characters always describe a move completely.

use crate::game_state::chess_types::Square;

/// Parse a square name such as "e4".
pub fn algebraic_to_square(name: &str) -> Result<Square, String> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("invalid square '{name}': expected two characters"));
    }
    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("invalid square '{name}': file must be a-h"));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("invalid square '{name}': rank must be 1-8"));
    }
    // Row 0 holds rank 8.
    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Render a square as its name such as "e4".
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square.row > 7 || square.col > 7 {
        return Err(format!(
            "square ({}, {}) is off the board",
            square.row, square.col
        ));
    }
    let file = (b'a' + square.col) as char;
    let rank = (b'8' - square.row) as char;
    Ok(format!("{file}{rank}"))
}

/// Parse a four-character move such as "e2e4" into its endpoints.
pub fn parse_move_endpoints(notation: &str) -> Result<(Square, Square), String> {
    if notation.len() != 4 || !notation.is_ascii() {
        return Err(format!(
            "invalid move '{notation}': expected four characters like e2e4"
        ));
    }
    let start = algebraic_to_square(&notation[..2])?;
    let end = algebraic_to_square(&notation[2..])?;
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, parse_move_endpoints, square_to_algebraic};
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_squares_map_to_board_corners() {
        assert_eq!(
            algebraic_to_square("a8").expect("a8 should parse"),
            Square::new(0, 0)
        );
        assert_eq!(
            algebraic_to_square("h1").expect("h1 should parse"),
            Square::new(7, 7)
        );
        assert_eq!(
            algebraic_to_square("e4").expect("e4 should parse"),
            Square::new(4, 4)
        );
    }

    #[test]
    fn square_names_round_trip() {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let square = Square::new(row, col);
                let name = square_to_algebraic(square).expect("on-board square");
                assert_eq!(
                    algebraic_to_square(&name).expect("name should parse back"),
                    square
                );
            }
        }
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_square("i4").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("a").is_err());
        assert!(algebraic_to_square("e44").is_err());
    }

    #[test]
    fn moves_split_into_their_endpoints() {
        let (start, end) = parse_move_endpoints("e2e4").expect("e2e4 should parse");
        assert_eq!(start, Square::new(6, 4));
        assert_eq!(end, Square::new(4, 4));

        assert!(parse_move_endpoints("e2e").is_err());
        assert!(parse_move_endpoints("e2e44").is_err());
        assert!(parse_move_endpoints("x2e4").is_err());
    }
}
