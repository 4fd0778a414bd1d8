//! Terminal front end for two players sharing one keyboard.
//!
//! Renders the board, prompts each side for a move as a pair of square
//! names, reports why a rejected move was refused, and hands the turn
//! to the other player. All game state lives in `hotseat-session`; this
//! binary is presentation only.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use hotseat_core::{File, Rank, Square};
use hotseat_session::Game;

/// Two-player chess at a single terminal.
#[derive(Parser)]
#[command(name = "hotseat")]
#[command(about = "Two-player chess at a single terminal")]
struct Args {
    /// Keep previous turns on screen instead of clearing between moves
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new();

    println!("Enter squares as 'a1' through 'h8'; 'resign' or 'quit' to stop.");
    while game.winner().is_none() {
        render(&game);
        if !turn_loop(&mut game, &mut lines)? {
            return Ok(());
        }
        if !args.plain {
            clear_screen();
        }
    }

    render(&game);
    if let Some(winner) = game.winner() {
        println!("{} wins by resignation.", winner);
    }
    Ok(())
}

/// Prompts until one move is accepted. Returns `false` on quit or end
/// of input.
fn turn_loop(
    game: &mut Game,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    loop {
        let Some(from) = prompt(lines, "Move from ")? else {
            return Ok(false);
        };
        match from.as_str() {
            "quit" => return Ok(false),
            "resign" => {
                game.resign();
                return Ok(true);
            }
            _ => {}
        }
        let Some(to) = prompt(lines, "Move to ")? else {
            return Ok(false);
        };
        match game.try_move_named(&from, &to) {
            Ok(()) => return Ok(true),
            Err(e) => println!("Illegal move: {}", e),
        }
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_ascii_lowercase())),
        None => Ok(None),
    }
}

fn render(game: &Game) {
    println!("Turn {}: {} to move", game.turn(), game.side_to_move());
    println!("  +-----------------+");
    for rank in Rank::ALL.into_iter().rev() {
        print!("{} |", rank);
        for file in File::ALL {
            match game.board().piece_at(Square::new(file, rank)) {
                Some((piece, color)) => print!(" {}", piece.to_char(color)),
                None => print!(" ."),
            }
        }
        println!(" |");
    }
    println!("  +-----------------+");
    println!("    a b c d e f g h");

    if !game.captured().is_empty() {
        let taken: String = game
            .captured()
            .iter()
            .map(|&(piece, color)| piece.to_char(color))
            .collect();
        println!("Captured: {}", taken);
    }
}

fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}
