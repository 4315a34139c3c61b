pub mod connection;
pub mod players;
pub mod setup;
pub mod tournaments;

use anyhow::Result;
use rusqlite::Connection;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};

use crate::domain::LeagueSnapshot;

/// Reads the whole league into memory for one engine run
pub fn load_snapshot(conn: &Connection) -> Result<LeagueSnapshot> {
    Ok(LeagueSnapshot {
        players: players::list_all(conn)?,
        tournaments: tournaments::list_all(conn)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Player, Tournament, TournamentResult};
    use chrono::NaiveDate;

    fn setup() -> DbConn {
        let pool = create_memory_pool().unwrap();
        let conn = get_connection(&pool).unwrap();
        setup::ensure_schema(&conn).unwrap();
        conn
    }

    fn tournament(id: &str, results: Vec<TournamentResult>) -> Tournament {
        Tournament {
            id: id.to_string(),
            name: format!("Night {id}"),
            date: NaiveDate::from_ymd_opt(2024, 9, 12).unwrap(),
            created_at: 1_726_000_000_000,
            results,
        }
    }

    #[test]
    fn test_snapshot_round_trip_keeps_order() {
        let conn = setup();
        players::upsert_player(&conn, &Player { id: "p2".into(), name: "Zita".into() }).unwrap();
        players::upsert_player(&conn, &Player { id: "p1".into(), name: "Ákos".into() }).unwrap();
        let results = vec![
            TournamentResult::new("p2", 30.0, -4.5),
            TournamentResult::new("p1", 55.0, 12.0),
        ];
        tournaments::upsert_tournament(&conn, &tournament("t9", results.clone())).unwrap();
        tournaments::upsert_tournament(&conn, &tournament("t1", vec![])).unwrap();

        let snapshot = load_snapshot(&conn).unwrap();

        let player_ids: Vec<&str> = snapshot.players.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(player_ids, vec!["p2", "p1"]);
        assert_eq!(snapshot.tournaments[0].id, "t9");
        assert_eq!(snapshot.tournaments[0].results, results);
        assert_eq!(snapshot.tournaments[0].date, NaiveDate::from_ymd_opt(2024, 9, 12).unwrap());
        assert_eq!(snapshot.tournaments[0].created_at, 1_726_000_000_000);
        assert!(snapshot.tournaments[1].results.is_empty());
    }

    #[test]
    fn test_upsert_replaces_results() {
        let conn = setup();
        tournaments::upsert_tournament(
            &conn,
            &tournament("t1", vec![TournamentResult::new("a", 1.0, 0.0), TournamentResult::new("b", 2.0, 0.0)]),
        )
        .unwrap();
        tournaments::upsert_tournament(&conn, &tournament("t1", vec![TournamentResult::new("c", 3.0, 1.0)]))
            .unwrap();

        let stored = tournaments::list_all(&conn).unwrap();

        assert_eq!(tournaments::count(&conn).unwrap(), 1);
        assert_eq!(stored[0].results, vec![TournamentResult::new("c", 3.0, 1.0)]);
    }

    #[test]
    fn test_player_rename_keeps_one_row() {
        let conn = setup();
        players::upsert_player(&conn, &Player { id: "p1".into(), name: "Old".into() }).unwrap();
        players::upsert_player(&conn, &Player { id: "p1".into(), name: "New".into() }).unwrap();

        let stored = players::list_all(&conn).unwrap();

        assert_eq!(stored, vec![Player { id: "p1".into(), name: "New".into() }]);
    }
}
