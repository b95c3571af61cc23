//! go-arena: play Go matches between random, greedy and human players.
//!
//! ## Usage
//!
//! - `go-arena` - One 5x5 match, random vs random
//! - `go-arena -n 9 --p1 greedy --p2 random -t 100` - 100 matches on 9x9
//! - `go-arena --p1 manual` - Play Black yourself
//!
//! Set `RUST_LOG=debug` to trace every move.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use go_arena::config::MatchConfig;
use go_arena::constants::{DEFAULT_SIZE, DEFAULT_TIMES};
use go_arena::game::MatchError;
use go_arena::policy::PolicyKind;
use go_arena::series::run_series;

/// Referee Go matches between two players
#[derive(Parser)]
#[command(name = "go-arena")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Size of the board (n x n)
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Black player: manual, random, greedy, my
    #[arg(long, visible_alias = "p1", default_value = "random")]
    player1: PolicyKind,

    /// White player: manual, random, greedy, my
    #[arg(long, visible_alias = "p2", default_value = "random")]
    player2: PolicyKind,

    /// Number of matches to play
    #[arg(short, long, default_value_t = DEFAULT_TIMES)]
    times: usize,

    /// Turn limit per match (default: 3 * n * n)
    #[arg(long)]
    max_moves: Option<usize>,

    /// Seed for the random players, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final board of every match
    #[arg(long)]
    show_board: bool,
}

impl From<Cli> for MatchConfig {
    fn from(cli: Cli) -> Self {
        MatchConfig {
            size: cli.size,
            black: cli.player1,
            white: cli.player2,
            times: cli.times,
            max_moves: cli.max_moves,
            seed: cli.seed,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let show_board = cli.show_board;
    let config = MatchConfig::from(cli);
    config.validate().context("invalid match configuration")?;

    let show_board = show_board
        || config.black == PolicyKind::Manual
        || config.white == PolicyKind::Manual;

    let mut rng = config.rng();
    let mut black = config.black.build(rng.fork());
    let mut white = config.white.build(rng.fork());

    println!("X stands for black, O stands for white.");
    let outcome = run_series(&config, black.as_mut(), white.as_mut(), |game, result| {
        if show_board {
            println!("--- match {}: {} ---", game + 1, result.outcome);
            print!("{}", result.board);
        }
    });

    let report = match outcome {
        Ok(report) => report,
        Err(MatchError::Cancelled) => return Ok(()),
        Err(e) => return Err(e).context("match aborted"),
    };

    println!();
    print!("{report}");
    println!();
    Ok(())
}
