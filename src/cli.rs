//! Command-line interface for rewind_tictactoe.

use clap::{Parser, Subcommand};
use rewind_tictactoe::Position;
use std::path::PathBuf;

/// Rewind Tic-Tac-Toe - two-player tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, global = true, default_value = "rewind_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Log file (overrides the config file)
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Do not highlight the winning line
        #[arg(long)]
        no_highlight: bool,

        /// Hide move coordinates in the history list
        #[arg(long)]
        no_coordinates: bool,
    },

    /// Replay a comma-separated list of cells and print the result
    Replay {
        /// Cell indices (0-8) or position names, e.g. `0,center,1,8,top-right`
        #[arg(value_delimiter = ',', required = true, value_parser = parse_cell)]
        moves: Vec<usize>,

        /// View this step instead of the latest
        #[arg(long)]
        jump: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the verdict for a board such as `XXX/OO./...`
    Evaluate {
        /// Board string: X, O, and `.`/`-`/`_` for empty; rows may be separated by `/`
        board: String,
    },
}

/// Parses one replay cell: a position name or index.
///
/// Numbers past the board are passed through so the replay reports them
/// as rejected moves.
fn parse_cell(s: &str) -> Result<usize, String> {
    match Position::from_label_or_number(s) {
        Some(pos) => Ok(pos.to_index()),
        None => s
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is neither a cell index nor a position name", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let cli = Cli::try_parse_from(["rewind_tictactoe"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("rewind_tictactoe.toml"));
    }

    #[test]
    fn test_replay_moves_are_comma_separated() {
        let cli =
            Cli::try_parse_from(["rewind_tictactoe", "replay", "0,4,1", "--jump", "2"]).unwrap();
        match cli.command {
            Some(Command::Replay { moves, jump, json }) => {
                assert_eq!(moves, vec![0, 4, 1]);
                assert_eq!(jump, Some(2));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rewind_tictactoe",
            "evaluate",
            "XXX/OO./...",
            "--config",
            "x.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("x.toml"));
    }

    #[test]
    fn test_replay_accepts_position_names() {
        let cli = Cli::try_parse_from(["rewind_tictactoe", "replay", "center,Top-left,9"]).unwrap();
        match cli.command {
            Some(Command::Replay { moves, .. }) => assert_eq!(moves, vec![4, 0, 9]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_replay_rejects_unknown_cell() {
        assert!(Cli::try_parse_from(["rewind_tictactoe", "replay", "0,middle"]).is_err());
    }
}
