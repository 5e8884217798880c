//! Console driver for a Kalah session.
//!
//! ```text
//! play [--names A B] [--seed N] [--auto] [--verbose] [--json]
//! ```
//!
//! Interactive mode reads moves as `<player> <pit>` lines from stdin (`quit`
//! to stop). `--auto` plays random legal moves for both seats instead.

use std::error::Error;
use std::io::{self, BufRead, Write};

use rust_mancala::{Game, GameRng, Move, MoveReport, PlayConfig, RulesEngine};
use tracing::{info, Level};

type BoxError = Box<dyn Error + Send + Sync>;

fn init_logging(config: &PlayConfig) -> Result<(), BoxError> {
    let level = if config.verbose { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr);

    if config.json_logs {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    }
}

fn show(report: &MoveReport) {
    println!("{}: {:?} -> {}", report.mv, report.outcome, report.board);
    if let Some(capture) = report.capture {
        println!("  captured {} at pit {}", capture.captured, capture.pit);
    }
    if let Some(next) = report.next_seat() {
        println!("  next: {next}");
    }
}

fn autoplay(game: &mut Game, seed: u64) -> Result<(), BoxError> {
    let mut rng = GameRng::new(seed);
    info!(seed, "random playout");
    for report in game.playout(&mut rng)? {
        show(&report);
    }
    Ok(())
}

fn interactive(game: &mut Game) -> Result<(), BoxError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    game.print_board();
    print!("move> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        match line {
            "" => {}
            "quit" | "q" => break,
            _ => match line.parse::<Move>() {
                Ok(mv) => match game.apply_move(mv) {
                    Ok(report) => {
                        show(&report);
                        game.print_board();
                    }
                    Err(err) => println!("{err}"),
                },
                Err(err) => println!("{err}"),
            },
        }

        if game.has_ended() {
            break;
        }
        print!("move> ");
        stdout.flush()?;
    }
    Ok(())
}

fn main() -> Result<(), BoxError> {
    let config = PlayConfig::from_args(std::env::args().skip(1))?;
    init_logging(&config)?;

    let mut game = Game::new();
    for name in &config.names {
        game.create_player(name.as_str())?;
    }

    if config.autoplay {
        autoplay(&mut game, config.seed)?;
    } else {
        interactive(&mut game)?;
    }

    game.print_board();
    println!("{}", game.winner());
    Ok(())
}
