use anyhow::Result;

use league_ranking::cli::Command;
use league_ranking::{
    handle_completions, handle_import, handle_ranking, handle_serve, handle_timeline, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Import { file, replace } => handle_import(file, *replace),
        Command::Ranking { limit } => handle_ranking(*limit),
        Command::Timeline {
            player_id,
            trend_limit,
            window,
        } => handle_timeline(player_id, *trend_limit, *window),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
