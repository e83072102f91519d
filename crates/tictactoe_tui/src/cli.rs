//! Command-line interface for tictactoe_tui.

use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Character drawn in empty squares
    #[arg(long)]
    pub empty_glyph: Option<char>,
}
