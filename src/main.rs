//! xoxoxo: tic-tac-toe against a minimax engine.
//!
//! ## Usage
//!
//! - `xoxoxo` - Play on the terminal (you move first)
//! - `xoxoxo play --computer-first` - Let the engine open
//! - `xoxoxo analyze "XX./.O./..O"` - Score every move in a position
//! - `xoxoxo selfplay --games 500` - Engine against a random opponent

use std::io;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use xoxoxo::board::{Board, Player};
use xoxoxo::console::Console;
use xoxoxo::constants::CELL_LABELS;
use xoxoxo::rules::outcome;
use xoxoxo::search::analyze;
use xoxoxo::selfplay::{self, SelfPlayConfig};

/// xoxoxo: tic-tac-toe against an engine that never loses
#[derive(Parser)]
#[command(name = "xoxoxo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine on the terminal
    Play {
        /// Let the engine make the first move of every round
        #[arg(long)]
        computer_first: bool,
    },
    /// Score every available move in a position
    Analyze {
        /// Nine cells, e.g. "XO./.X./..O" (X engine, O human, . empty)
        board: String,
        /// Analyze for the human (O) instead of the engine
        #[arg(long)]
        human: bool,
    },
    /// Play the engine against a random opponent
    Selfplay {
        /// Number of rounds
        #[arg(long, default_value_t = 100)]
        games: u32,
        /// Seed for the random opponent
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Some(Commands::Play { computer_first }) => run_play(computer_first),
        Some(Commands::Analyze { board, human }) => run_analyze(&board, human),
        Some(Commands::Selfplay { games, seed }) => run_selfplay(games, seed),
        None => run_play(false),
    }
}

fn init_logging(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_play(computer_first: bool) -> Result<()> {
    let opener = if computer_first {
        Player::Computer
    } else {
        Player::Human
    };
    info!(?opener, "starting console session");

    let mut console = Console::new(opener);
    console
        .run(io::stdin().lock(), io::stdout())
        .context("console session failed")
}

fn run_analyze(text: &str, human: bool) -> Result<()> {
    let board = Board::parse(text).with_context(|| format!("cannot read board '{text}'"))?;
    let result = outcome(&board);
    if result.is_over() {
        bail!("nothing to analyze, the game is over ({result:?})");
    }

    let to_move = if human {
        Player::Human
    } else {
        Player::Computer
    };
    let analysis = analyze(&board, to_move);

    println!("{board}\n");
    println!("{to_move} to move");
    for mv in &analysis.candidates {
        println!("  {}  {:>3}", CELL_LABELS[mv.index], mv.score);
    }
    println!(
        "best: {} (score {}, {} positions searched)",
        CELL_LABELS[analysis.best.index], analysis.best.score, analysis.stats.nodes
    );
    Ok(())
}

fn run_selfplay(games: u32, seed: u64) -> Result<()> {
    let tally = selfplay::run(&SelfPlayConfig { games, seed }).context("self-play failed")?;
    println!("{} rounds against a random opponent (seed {seed})", tally.games());
    println!("{tally}");
    Ok(())
}
