//! FEN string generation.
//!
//! The mirror of the parser. Castling rights are always emitted as "-" and
//! the clocks as "0 1", since neither is tracked; every other field reflects
//! the live state.

use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game: &GameState) -> String {
    let mut fen = String::new();

    for (row, rank) in game.board.iter().enumerate() {
        let mut empty_run = 0;
        for square in rank {
            match square {
                Some(piece) => {
                    if empty_run > 0 {
                        fen.push(char::from_digit(empty_run, 10).unwrap_or('0'));
                        empty_run = 0;
                    }
                    fen.push(piece_to_fen_char(*piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            fen.push(char::from_digit(empty_run, 10).unwrap_or('0'));
        }
        if row < 7 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match game.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    fen.push_str(" - ");
    match game.en_passant_square {
        Some(square) => {
            // The square came off the board, so rendering cannot fail.
            fen.push_str(&square_to_algebraic(square).unwrap_or_default());
        }
        None => fen.push('-'),
    }

    fen.push_str(" 0 1");
    fen
}

fn piece_to_fen_char(piece: Piece) -> char {
    let lower = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => lower.to_ascii_uppercase(),
        Color::Black => lower,
    }
}
