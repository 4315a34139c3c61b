use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::Player;

pub fn upsert_player(conn: &Connection, player: &Player) -> Result<()> {
    let sql = "INSERT INTO players (id, name) VALUES (?1, ?2) ON CONFLICT(id) DO UPDATE SET name = excluded.name";

    conn.execute(sql, params![player.id, player.name])
        .with_context(|| format!("Failed to upsert player {}", player.id))?;
    Ok(())
}

pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = "SELECT id, name FROM players ORDER BY rowid";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
