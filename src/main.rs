//! Tic-tac-toe Rewind - terminal client.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    tictactoe_rewind::run_tui(!cli.descending, &cli.log_file)
}
