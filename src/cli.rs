use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "billiards league rating and ranking")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Validate a JSON league snapshot and store it in the database
    Import {
        /// Path to the snapshot file
        file: PathBuf,
        /// Drop the stored league before importing
        #[arg(long)]
        replace: bool,
    },
    /// Print the current ranking
    Ranking {
        /// Show only the first N players
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print a player's rating history and recent trend
    Timeline {
        /// Player id
        player_id: String,
        /// Number of most recent tournaments in the trend (default 5)
        #[arg(short, long = "trend-limit")]
        trend_limit: Option<usize>,
        /// Moving average window (default 3)
        #[arg(short, long)]
        window: Option<usize>,
    },
    /// Generate a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}
