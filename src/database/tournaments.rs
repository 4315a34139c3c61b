use std::collections::HashMap;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::{Tournament, TournamentId, TournamentResult};

/// Inserts or replaces a tournament together with its full result list.
/// Callers wanting atomicity should pass a transaction.
pub fn upsert_tournament(conn: &Connection, tournament: &Tournament) -> Result<()> {
    let sql = "INSERT INTO tournaments (id, name, date, created_at) VALUES (?1, ?2, ?3, ?4) \
               ON CONFLICT(id) DO UPDATE SET name = excluded.name, date = excluded.date, created_at = excluded.created_at";

    conn.execute(
        sql,
        params![tournament.id, tournament.name, tournament.date, tournament.created_at],
    )
    .with_context(|| format!("Failed to upsert tournament {}", tournament.id))?;

    replace_results(conn, &tournament.id, &tournament.results)
}

fn replace_results(conn: &Connection, tournament_id: &str, results: &[TournamentResult]) -> Result<()> {
    conn.execute("DELETE FROM results WHERE tournament_id = ?1", params![tournament_id])
        .context("Failed to clear tournament results")?;

    let mut stmt = conn.prepare(
        "INSERT INTO results (tournament_id, player_id, position, points, saldo) VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    for (position, result) in results.iter().enumerate() {
        stmt.execute(params![
            tournament_id,
            result.player_id,
            position as i64,
            result.points(),
            result.saldo()
        ])
        .with_context(|| format!("Failed to insert result for player {}", result.player_id))?;
    }

    Ok(())
}

/// All tournaments in insertion order, each with its results in the order
/// they were recorded.
pub fn list_all(conn: &Connection) -> Result<Vec<Tournament>> {
    let mut tournaments = list_headers(conn)?;
    let mut results = load_results(conn)?;

    for tournament in &mut tournaments {
        tournament.results = results.remove(&tournament.id).unwrap_or_default();
    }

    Ok(tournaments)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let total: i64 = conn
        .query_row("SELECT COUNT(*) FROM tournaments", [], |row| row.get(0))
        .context("Failed to count tournaments")?;
    Ok(total as usize)
}

fn list_headers(conn: &Connection) -> Result<Vec<Tournament>> {
    let sql = "SELECT id, name, date, created_at FROM tournaments ORDER BY rowid";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Tournament {
                id: row.get(0)?,
                name: row.get(1)?,
                date: row.get(2)?,
                created_at: row.get(3)?,
                results: Vec::new(),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list tournaments")?;

    Ok(rows)
}

fn load_results(conn: &Connection) -> Result<HashMap<TournamentId, Vec<TournamentResult>>> {
    let sql = "SELECT tournament_id, player_id, points, saldo FROM results ORDER BY tournament_id, position";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            TournamentResult {
                player_id: row.get(1)?,
                points: row.get(2)?,
                saldo: row.get(3)?,
            },
        ))
    })?;

    let mut grouped: HashMap<TournamentId, Vec<TournamentResult>> = HashMap::new();
    for row in rows {
        let (tournament_id, result) = row.context("Failed to read tournament result")?;
        grouped.entry(tournament_id).or_default().push(result);
    }

    Ok(grouped)
}
