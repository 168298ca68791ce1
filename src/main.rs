use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use good_chess::errors::ChessResult;
use good_chess::game_interface::{self, AppliedMove};
use good_chess::game_state::chess_types::GameState;
use good_chess::move_generation::perft::{perft, perft_divide};
use good_chess::utils::long_algebraic::parse_move_text;
use good_chess::utils::move_log::MoveLog;
use good_chess::utils::render_game_state::{render_game_state, RenderOptions};

/// Two-player chess in the terminal.
#[derive(Debug, Parser)]
#[command(name = "good_chess", version, about)]
struct Args {
    /// Where the move log is written when the session ends.
    #[arg(long, default_value = ".moves_log.json")]
    log: PathBuf,

    #[arg(long, default_value = "White")]
    white_name: String,

    #[arg(long, default_value = "Black")]
    black_name: String,

    /// Letters instead of chess glyphs.
    #[arg(long)]
    ascii: bool,

    /// Draw the board from black's side.
    #[arg(long)]
    flip: bool,

    /// Print per-move perft counts for the starting position and exit.
    #[arg(long, value_name = "DEPTH")]
    perft: Option<u8>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let result = match args.perft {
        Some(depth) => run_perft(depth),
        None => run_session(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "good_chess exited with an error");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_perft(depth: u8) -> ChessResult<()> {
    let mut game = GameState::new_game();
    for (mv, nodes) in perft_divide(&mut game, depth) {
        println!("{mv}: {nodes}");
    }
    let counts = perft(&mut game, depth);
    println!();
    println!("Nodes searched: {}", counts.nodes);
    Ok(())
}

fn run_session(args: &Args) -> ChessResult<()> {
    let options = RenderOptions {
        unicode: !args.ascii,
        flipped: args.flip,
        ..RenderOptions::default()
    };

    let mut game = game_interface::new_game();
    let mut log = MoveLog::new(args.white_name.as_str(), args.black_name.as_str());
    let mut legal = game_interface::legal_moves(&mut game);

    print_board(&game, &options, legal.len());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "undo" => match game_interface::undo(&mut game) {
                Some(undone) => {
                    log.pop();
                    println!("took back {}", undone.mv);
                    legal = undone.replies;
                }
                None => println!("nothing to undo"),
            },
            "moves" => {
                let listed: Vec<String> = legal.iter().map(|mv| mv.to_long_algebraic()).collect();
                println!("{}", listed.join(" "));
                continue;
            }
            text => {
                let parsed = match parse_move_text(text) {
                    Ok(parsed) => parsed,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                match game_interface::try_move(&mut game, parsed.start, parsed.end, parsed.promotion)
                {
                    Ok(applied) => {
                        log.push_move(&applied.mv);
                        report(&applied);
                        legal = applied.replies;
                    }
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                }
            }
        }

        print_board(&game, &options, legal.len());
    }

    if log.worth_persisting() {
        log.save(&args.log)?;
        info!(path = %args.log.display(), plies = log.len(), "move log written");
    }
    Ok(())
}

fn report(applied: &AppliedMove) {
    if applied.is_checkmate {
        println!("{} checkmate", applied.notation);
    } else if applied.is_stalemate {
        println!("{} stalemate", applied.notation);
    } else if applied.gives_check {
        println!("{} check", applied.notation);
    }
}

fn print_board(game: &GameState, options: &RenderOptions, legal_count: usize) {
    println!("{}", render_game_state(game, options));
    if legal_count > 0 {
        print!("{} to move> ", game.side_to_move());
    }
    if let Err(err) = io::stdout().flush() {
        warn!(%err, "could not flush prompt");
    }
}
