//! Interactive terminal game: human vs. the negamax engine.
//!
//! Reads moves in coordinate notation ("e2e4") from stdin, applies them when
//! legal, and answers with the engine's reply. `undo` takes back the last
//! full move pair, `reset` starts a fresh game, `quit` exits.

use std::io::{self, BufRead, Write};

use rowan_chess::engines::engine_negamax::NegamaxEngine;
use rowan_chess::engines::engine_trait::{Engine, GoParams};
use rowan_chess::game_state::game_state::GameState;
use rowan_chess::move_generation::legal_move_generator::generate_valid_moves;
use rowan_chess::utils::algebraic::parse_move_endpoints;
use rowan_chess::utils::render_game_state::render_game_state;

fn main() {
    let mut game = GameState::new_game();
    let mut engine = NegamaxEngine::new();

    println!("rowan-chess: you play white, engine plays black");
    println!("commands: <move like e2e4>, undo, reset, quit");
    print_position(&mut game);

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush().ok();

        input.clear();
        let Ok(n) = stdin.lock().read_line(&mut input) else {
            break;
        };
        if n == 0 {
            break;
        }

        match input.trim() {
            "" => {}
            "quit" | "exit" => break,
            "reset" => {
                game = GameState::new_game();
                engine.new_game();
                print_position(&mut game);
            }
            "undo" => {
                // Take back the engine's reply and the player's move.
                game.undo_move();
                game.undo_move();
                print_position(&mut game);
            }
            notation => {
                if let Err(err) = play_turn(&mut game, &mut engine, notation) {
                    println!("{err}");
                }
            }
        }
    }
}

/// Apply the player's move, then let the engine answer unless the game is
/// over. Errors are messages for the player, never fatal.
fn play_turn(
    game: &mut GameState,
    engine: &mut NegamaxEngine,
    notation: &str,
) -> Result<(), String> {
    let (start, end) = parse_move_endpoints(notation)?;

    // Play the generator's copy of the move so the capture, promotion, and
    // en-passant flags are filled in.
    let legal_moves = generate_valid_moves(game);
    let mv = legal_moves
        .iter()
        .find(|mv| mv.start == start && mv.end == end)
        .copied()
        .ok_or_else(|| format!("illegal move '{notation}'"))?;
    game.make_move(mv);

    if game_is_over(game) {
        print_position(game);
        return Ok(());
    }

    let output = engine.choose_move(game, &GoParams::default())?;
    for line in &output.info_lines {
        println!("{line}");
    }
    match output.best_move {
        Some(reply) => {
            println!("engine plays {}", reply.notation());
            game.make_move(reply);
        }
        None => println!("engine has no move"),
    }

    print_position(game);
    Ok(())
}

fn print_position(game: &mut GameState) {
    println!("{}", render_game_state(game));
    // Generation refreshes the check and terminal flags announced below.
    let moves = generate_valid_moves(game);
    if game.checkmate {
        println!("checkmate");
    } else if game.stalemate {
        println!("stalemate");
    } else if game.in_check {
        println!("check ({} legal moves)", moves.len());
    }
}

/// True when the side to move has no legal answer.
fn game_is_over(game: &mut GameState) -> bool {
    generate_valid_moves(game).is_empty()
}
