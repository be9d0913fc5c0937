// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! pegsolve - search a peg solitaire board for a winning (or best) sequence.

use anyhow::{Context, Result};
use clap::Parser;
use peg_search::rules::{layout, Layout};
use peg_search::{CapacityPolicy, PegSolitaire, SearchConfig, SearchEngine, SearchSession};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pegsolve")]
#[command(version, about = "Depth-first peg solitaire solver", long_about = None)]
struct Cli {
    /// Built-in starting board
    #[arg(long, value_enum, default_value = "english", conflicts_with = "board")]
    layout: Layout,

    /// Read the starting board from a file (`o` peg, `.` hole, `#` off-board)
    #[arg(long)]
    board: Option<PathBuf>,

    /// Maximum number of node expansions
    #[arg(long, default_value_t = SearchConfig::DEFAULT_BUDGET)]
    budget: u64,

    /// Initial visited-table slots
    #[arg(long, default_value_t = SearchConfig::DEFAULT_VISITED_CAPACITY)]
    visited_capacity: usize,

    /// Fail instead of growing when the visited table fills up
    #[arg(long)]
    fixed_capacity: bool,

    /// Print the board after every move
    #[arg(long)]
    show_boards: bool,

    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let start = match &cli.board {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading board {}", path.display()))?;
            layout::parse_layout(&text)?
        }
        None => cli.layout.state()?,
    };

    let policy = if cli.fixed_capacity {
        CapacityPolicy::Fixed
    } else {
        CapacityPolicy::Grow
    };
    let config = SearchConfig::default()
        .with_budget(cli.budget)
        .with_visited_capacity(cli.visited_capacity)
        .with_capacity_policy(policy);

    let engine = SearchEngine::new(PegSolitaire, config);
    let mut session = SearchSession::new();
    let termination = engine.find_solution(&mut session, &start)?;

    println!("{}", start);
    println!("Result:           {}", termination);
    println!("Expanded nodes:   {}", session.expanded);
    println!("Generated nodes:  {}", session.generated);
    println!("Remaining pegs:   {}", session.best_piece_count);
    println!("Statistics:       {}", session.statistics);

    if session.best_solution.is_empty() {
        println!("No move improved on the starting board.");
        return Ok(());
    }
    let solution = &session.best_solution;
    println!("Moves ({}):", solution.len());
    if !cli.show_boards {
        print!("{}", solution);
        return Ok(());
    }
    for (i, (position, mv)) in solution.steps().enumerate() {
        println!("{:>3}. {} {}", i + 1, position, mv);
        println!("{}", solution.states()[i + 1]);
    }
    Ok(())
}
