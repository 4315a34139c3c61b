pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod rating;
pub mod services;

use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::{AppConfig, TrendSettings};
use crate::services::import::{ImportMode, ImportService};
use crate::services::report::ReportService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_import(file: &Path, replace: bool) -> Result<()> {
    let config = AppConfig::new();
    let service = ImportService::new(&config)?;
    let mode = if replace { ImportMode::Replace } else { ImportMode::Merge };
    let summary = service.run(file, mode)?;
    println!(
        "Imported {} players, {} tournaments, {} results ({} unresolved)",
        summary.players, summary.tournaments, summary.results, summary.unresolved_results
    );
    Ok(())
}

pub fn handle_ranking(limit: Option<usize>) -> Result<()> {
    let config = AppConfig::new();
    ReportService::new(&config)?.print_ranking(limit)
}

pub fn handle_timeline(player_id: &str, trend_limit: Option<usize>, window: Option<usize>) -> Result<()> {
    let config = AppConfig::new();
    let trend = TrendSettings::with_overrides(trend_limit, window);
    ReportService::new(&config)?.print_timeline(player_id, &trend)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
