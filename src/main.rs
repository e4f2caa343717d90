//! # Connect Four Terminal Front-End
//!
//! Line-oriented presentation layer over the rules engine. Renders the
//! grid with chip glyphs, prompts each player for a column, and reports
//! the turn outcome until the game ends in a win or a draw.
//!
//! ## Usage
//! Run with `cargo run --release`. Player names are prompted for unless
//! given with `--first-name`/`--second-name`; set `RUST_LOG=debug` for
//! engine logs on stderr.

use clap::Parser;
use colored::Colorize;
use connect_four::{Board, GameSession, Mark, Outcome, Player, PlayerPair, COLS, ROWS};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

const EMPTY_CELL: &str = "⚪";
const RED_CHIP: &str = "🔴";
const YELLOW_CHIP: &str = "🟡";

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Name for player 1 (red); prompted for when omitted
    #[clap(long)]
    first_name: Option<String>,

    /// Name for player 2 (yellow); prompted for when omitted
    #[clap(long)]
    second_name: Option<String>,

    /// Disable colorized output
    #[clap(long)]
    no_color: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut lines = io::stdin().lock().lines();

    println!("{}", "Welcome to Connect Four!".bright_blue());
    let Some(players) = setup_players(&args, &mut lines)? else {
        return Ok(());
    };

    let mut session = GameSession::new(players.first().mark(), players.second().mark());
    play_game(&mut session, &players, &mut lines)?;

    println!("{}", "Thanks for playing Connect Four!".bright_blue());
    Ok(())
}

/// Builds the player pair from flags or interactive prompts
///
/// Returns `None` when stdin is exhausted before both names are read.
fn setup_players(
    args: &Args,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<PlayerPair>> {
    let Some(first) = read_name(&args.first_name, 1, RED_CHIP, lines)? else {
        return Ok(None);
    };
    let Some(second) = read_name(&args.second_name, 2, YELLOW_CHIP, lines)? else {
        return Ok(None);
    };

    match PlayerPair::new(
        Player::new(first, Mark::Red),
        Player::new(second, Mark::Yellow),
    ) {
        Ok(players) => Ok(Some(players)),
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            std::process::exit(1);
        }
    }
}

fn read_name(
    preset: &Option<String>,
    number: u8,
    chip: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<String>> {
    if let Some(name) = preset {
        return Ok(Some(name.clone()));
    }
    println!("Enter name for Player {number} ({chip}):");
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Runs the turn loop until a win, a draw, or stdin closing
fn play_game(
    session: &mut GameSession,
    players: &PlayerPair,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<()> {
    loop {
        render_board(session.board());
        let player = players.by_mark(session.current_mark());
        println!("{}'s turn ({}).", player.name(), chip_for(player.mark()));

        let Some(column) = read_column(lines)? else {
            return Ok(());
        };

        match session.play_turn(column) {
            Outcome::Won => {
                render_board(session.board());
                let winner = players.by_mark(session.current_mark());
                println!("{}", format!("{} wins!", winner.name()).green());
                return Ok(());
            }
            Outcome::Draw => {
                render_board(session.board());
                println!("{}", "It's a draw!".yellow());
                return Ok(());
            }
            Outcome::Invalid => {
                println!("{}", "Invalid move. Try again.".red());
            }
            Outcome::Continue => {}
        }
    }
}

/// Prompts until a single digit 0-6 is entered; `None` on EOF
fn read_column(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<usize>> {
    loop {
        print!("Enter column number (0-6): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        let input = line.trim();
        match input.parse::<usize>() {
            Ok(column) if input.len() == 1 && column < COLS => return Ok(Some(column)),
            _ => println!(
                "{}",
                "Invalid input. Please enter a number between 0 and 6.".red()
            ),
        }
    }
}

fn render_board(board: &Board) {
    println!("\n{}", "0  1  2  3  4  5  6".bright_blue());
    let grid = board.grid();
    for row in 0..ROWS {
        let line = (0..COLS)
            .map(|column| chip_for_cell(grid[column][row]))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{line}");
    }
    println!();
}

fn chip_for_cell(cell: Option<Mark>) -> &'static str {
    match cell {
        Some(mark) => chip_for(mark),
        None => EMPTY_CELL,
    }
}

fn chip_for(mark: Mark) -> &'static str {
    match mark {
        Mark::Red => RED_CHIP,
        Mark::Yellow => YELLOW_CHIP,
    }
}
