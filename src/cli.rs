//! Command-line interface for tictactoe_rewind.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Play tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start with the move list sorted newest-first
    #[arg(long)]
    pub descending: bool,

    /// Log file path (tracing output goes to a file to keep the TUI clean)
    #[arg(long, default_value = "tictactoe_rewind.log")]
    pub log_file: PathBuf,
}
