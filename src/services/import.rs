use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::AppConfig;
use crate::database::{self, DbPool};
use crate::domain::{LeagueSnapshot, Player};
use crate::errors::{snapshot_context, ValidationError};
use crate::rating::collation::{NameCollator, DEFAULT_LOCALE};

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    pub players: usize,
    pub tournaments: usize,
    pub results: usize,
    /// Results pointing at ids missing from the player list
    pub unresolved_results: usize,
}

/// What happens to the league already in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Upsert on top of the stored league
    Merge,
    /// Drop the stored league first
    Replace,
}

/// Loads a JSON league snapshot, checks the invariants the rating engine
/// relies on and stores it.
pub struct ImportService {
    pool: DbPool,
    locale: String,
}

impl ImportService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            pool: database::create_pool(&config.database_path)?,
            locale: config.rating.collation_locale.clone(),
        })
    }

    pub fn with_pool(pool: DbPool) -> Self {
        Self {
            pool,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    pub fn run(&self, path: &Path, mode: ImportMode) -> Result<ImportSummary> {
        info!("=== Starting Import ===");

        let snapshot = read_snapshot(path)?;
        info!(
            "  → Read {} players and {} tournaments from {}",
            snapshot.players.len(),
            snapshot.tournaments.len(),
            path.display()
        );

        let summary = self.import_snapshot(&snapshot, mode)?;

        info!("=== Import Complete ===");
        Ok(summary)
    }

    pub fn import_snapshot(&self, snapshot: &LeagueSnapshot, mode: ImportMode) -> Result<ImportSummary> {
        let collator = NameCollator::new(&self.locale);
        let summary = validate_snapshot(snapshot, &collator)?;
        if summary.unresolved_results > 0 {
            warn!(
                "{} results reference unknown players and will not be ranked",
                summary.unresolved_results
            );
        }

        self.persist(snapshot, mode, &collator)?;
        info!(
            "  → Stored {} players, {} tournaments, {} results",
            summary.players, summary.tournaments, summary.results
        );
        Ok(summary)
    }

    fn persist(&self, snapshot: &LeagueSnapshot, mode: ImportMode, collator: &NameCollator) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start import transaction")?;

        match mode {
            ImportMode::Merge => database::setup::ensure_schema(&tx)?,
            ImportMode::Replace => {
                info!("  → Replacing the stored league");
                database::setup::reset_database(&tx)?
            }
        }

        let stored = database::players::list_all(&tx)?;
        validate_against_stored(&stored, &snapshot.players, collator)?;

        for player in &snapshot.players {
            database::players::upsert_player(&tx, player)?;
        }
        for tournament in &snapshot.tournaments {
            database::tournaments::upsert_tournament(&tx, tournament)?;
        }

        tx.commit().context("Failed to commit import")
    }
}

pub fn read_snapshot(path: &Path) -> Result<LeagueSnapshot> {
    let path_str = path.display().to_string();
    let json = fs::read_to_string(path).with_context(|| snapshot_context(&path_str))?;

    serde_json::from_str(&json).with_context(|| snapshot_context(&path_str))
}

/// Rejects snapshots the engine must never see; counts what it accepts.
pub fn validate_snapshot(
    snapshot: &LeagueSnapshot,
    collator: &NameCollator,
) -> Result<ImportSummary, ValidationError> {
    let player_ids = validate_players(snapshot, collator)?;
    validate_tournaments(snapshot)?;

    let results = snapshot.tournaments.iter().map(|t| t.results.len()).sum();
    let unresolved_results = snapshot
        .tournaments
        .iter()
        .flat_map(|t| t.results.iter())
        .filter(|r| !player_ids.contains(r.player_id.as_str()))
        .count();

    Ok(ImportSummary {
        players: snapshot.players.len(),
        tournaments: snapshot.tournaments.len(),
        results,
        unresolved_results,
    })
}

/// Incoming players must not share a name with stored players they do not
/// replace. A stored player whose id is re-imported takes the incoming name.
pub fn validate_against_stored(
    stored: &[Player],
    incoming: &[Player],
    collator: &NameCollator,
) -> Result<(), ValidationError> {
    let incoming_ids: HashSet<&str> = incoming.iter().map(|p| p.id.as_str()).collect();
    let names: Vec<&str> = stored
        .iter()
        .filter(|p| !incoming_ids.contains(p.id.as_str()))
        .chain(incoming)
        .map(|p| p.name.as_str())
        .collect();

    check_name_clashes(&names, collator)
}

fn validate_players<'a>(
    snapshot: &'a LeagueSnapshot,
    collator: &NameCollator,
) -> Result<HashSet<&'a str>, ValidationError> {
    let mut ids = HashSet::new();

    for player in &snapshot.players {
        if player.id.trim().is_empty() {
            return Err(ValidationError::EmptyPlayerId {
                name: player.name.clone(),
            });
        }
        if !ids.insert(player.id.as_str()) {
            return Err(ValidationError::DuplicatePlayerId(player.id.clone()));
        }
    }

    let names: Vec<&str> = snapshot.players.iter().map(|p| p.name.as_str()).collect();
    check_name_clashes(&names, collator)?;

    Ok(ids)
}

/// Names equal under the league collation would tie in the ranking
fn check_name_clashes(names: &[&str], collator: &NameCollator) -> Result<(), ValidationError> {
    match collator.clashes(names).first() {
        Some((existing, name)) => Err(ValidationError::DuplicatePlayerName {
            name: name.to_string(),
            existing: existing.to_string(),
        }),
        None => Ok(()),
    }
}

fn validate_tournaments(snapshot: &LeagueSnapshot) -> Result<(), ValidationError> {
    let mut ids = HashSet::new();

    for tournament in &snapshot.tournaments {
        if tournament.id.trim().is_empty() {
            return Err(ValidationError::EmptyTournamentId {
                name: tournament.name.clone(),
            });
        }
        if !ids.insert(tournament.id.as_str()) {
            return Err(ValidationError::DuplicateTournamentId(tournament.id.clone()));
        }

        let mut seen = HashSet::new();
        for result in &tournament.results {
            if !seen.insert(result.player_id.as_str()) {
                return Err(ValidationError::DuplicateResult {
                    tournament_id: tournament.id.clone(),
                    player_id: result.player_id.clone(),
                });
            }
        }
    }

    Ok(())
}
