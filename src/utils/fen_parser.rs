//! FEN string parsing.
//!
//! Builds a `GameState` from the six standard FEN fields. Castling rights
//! are accepted but ignored because castling is not modeled; the move
//! clocks are validated and discarded because the state does not track them.

use crate::game_state::chess_types::{set_piece, Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(format!(
            "invalid FEN: expected 6 fields, found {}",
            fields.len()
        ));
    }

    let mut game = GameState::new_empty();
    parse_board_field(&mut game, fields[0])?;

    game.side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(format!("invalid side to move '{other}'")),
    };

    // Castling field: syntax-checked only.
    if fields[2] != "-" && !fields[2].chars().all(|c| "KQkq".contains(c)) {
        return Err(format!("invalid castling field '{}'", fields[2]));
    }

    game.en_passant_square = match fields[3] {
        "-" => None,
        name => Some(algebraic_to_square(name)?),
    };

    fields[4]
        .parse::<u32>()
        .map_err(|_| format!("invalid halfmove clock '{}'", fields[4]))?;
    fields[5]
        .parse::<u32>()
        .map_err(|_| format!("invalid fullmove number '{}'", fields[5]))?;

    Ok(game)
}

/// Fill the board from the piece-placement field and record both king
/// locations. The first rank listed is rank 8, which is row 0.
fn parse_board_field(game: &mut GameState, field: &str) -> Result<(), String> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(format!(
            "invalid FEN board: expected 8 ranks, found {}",
            ranks.len()
        ));
    }

    let mut white_king = None;
    let mut black_king = None;

    for (row, rank) in ranks.iter().enumerate() {
        let mut col: u8 = 0;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(format!("invalid empty-square count '{c}'"));
                }
                // Checked after every run so a malformed rank with many
                // digits errors instead of accumulating past the board.
                col += skip as u8;
                if col > 8 {
                    return Err(format!("rank '{rank}' overflows the board"));
                }
                continue;
            }
            if col >= 8 {
                return Err(format!("rank '{rank}' overflows the board"));
            }

            let piece = piece_from_fen_char(c)?;
            let square = Square::new(row as u8, col);
            set_piece(&mut game.board, square, Some(piece));

            if piece.kind == PieceKind::King {
                let slot = match piece.color {
                    Color::White => &mut white_king,
                    Color::Black => &mut black_king,
                };
                if slot.is_some() {
                    return Err(format!("duplicate {:?} king", piece.color));
                }
                *slot = Some(square);
            }
            col += 1;
        }
        if col != 8 {
            return Err(format!("rank '{rank}' covers {col} files, expected 8"));
        }
    }

    game.white_king = white_king.ok_or("position has no white king")?;
    game.black_king = black_king.ok_or("position has no black king")?;
    Ok(())
}

fn piece_from_fen_char(c: char) -> Result<Piece, String> {
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match c.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        other => return Err(format!("unknown piece character '{other}'")),
    };
    Ok(Piece::new(color, kind))
}
