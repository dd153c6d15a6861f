use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use connect4_solver::config::AppConfig;
use connect4_solver::game::{GameOutcome, GameState, WIDTH};
use connect4_solver::solver::Solver;

/// Play Connect Four against a perfect-play solver.
#[derive(Parser)]
#[command(name = "connect4-solver", about = "Play Connect Four against a perfect-play solver")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Let the human make the first move
    #[arg(long)]
    human_first: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let mut solver = Solver::with_config(&config.solver);
    let mut state = GameState::initial();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut human_turn = cli.human_first;

    println!("{state}");
    while !state.is_terminal() {
        let col = if human_turn {
            prompt_column(&mut lines, &state)?
        } else {
            let col = solver
                .best_move(state.position())
                .expect("a non-terminal position always has a playable column");
            info!("searched {} nodes", solver.nodes());
            println!("Solver plays column {col}");
            col
        };
        state = state.apply_move(col)?;
        println!("{state}");
        human_turn = !human_turn;
    }

    match state.outcome() {
        Some(GameOutcome::Winner(player)) => println!("{} wins!", player.name()),
        Some(GameOutcome::Draw) => println!("Draw."),
        None => unreachable!("loop exits only on a terminal state"),
    }

    Ok(())
}

fn prompt_column(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    state: &GameState,
) -> Result<usize> {
    loop {
        print!("Your move (0-{}): ", WIDTH - 1);
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => anyhow::bail!("stdin closed before the game ended"),
        };
        match line.trim().parse::<usize>() {
            Ok(col) if col < WIDTH && state.position().can_play(col) => return Ok(col),
            _ => println!("Column full or invalid, try again."),
        }
    }
}
