//! Rewind Tic-Tac-Toe - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind_tictactoe::{Board, Config, evaluate, replay, run_tui};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command.unwrap_or(Command::Play {
        log_file: None,
        no_highlight: false,
        no_coordinates: false,
    }) {
        Command::Play {
            log_file,
            no_highlight,
            no_coordinates,
        } => {
            let mut config = config;
            if let Some(log_file) = log_file {
                config = config.with_log_file(log_file);
            }
            if no_highlight {
                config = config.with_highlight_winning_line(false);
            }
            if no_coordinates {
                config = config.with_show_coordinates(false);
            }
            run_play(config)
        }
        Command::Replay { moves, jump, json } => run_replay(&config, &moves, jump, json),
        Command::Evaluate { board } => run_evaluate(&config, &board),
    }
}

/// `RUST_LOG` if set, the configured filter otherwise.
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to a file so output does not corrupt the terminal.
fn init_file_logging(config: &Config, path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn init_stderr_logging(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the interactive terminal game
fn run_play(config: Config) -> Result<()> {
    init_file_logging(&config, config.log_file())?;
    info!(?config, "Starting Rewind Tic-Tac-Toe");
    run_tui(config)
}

/// Replay a move list and print the result
#[instrument(skip(config))]
fn run_replay(config: &Config, moves: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    init_stderr_logging(config);

    let mut report = replay(moves);
    if let Some(step) = jump {
        report = report.jump_to(step)?;
    }

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text(*config.show_coordinates()));
    }
    Ok(())
}

/// Evaluate a single board and print its verdict
#[instrument(skip(config))]
fn run_evaluate(config: &Config, board: &str) -> Result<()> {
    init_stderr_logging(config);

    let board: Board = board.parse()?;
    let verdict = evaluate(&board);
    info!(%board, %verdict, "Evaluated board");

    println!("{}", board.display());
    match verdict.winning_line() {
        Some(line) => println!("{} on {:?}", verdict, line.indices()),
        None => println!("{}", verdict),
    }
    Ok(())
}
