use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::coercion::{lenient_number, lenient_timestamp, normalize_number};

pub type PlayerId = String;
pub type TournamentId = String;

/// League member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// One player's outcome in one tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResult {
    pub player_id: PlayerId,
    #[serde(default, deserialize_with = "lenient_number")]
    pub points: f64,
    /// Signed balance, may be negative
    #[serde(default, deserialize_with = "lenient_number")]
    pub saldo: f64,
}

impl TournamentResult {
    pub fn new(player_id: impl Into<PlayerId>, points: f64, saldo: f64) -> Self {
        Self {
            player_id: player_id.into(),
            points,
            saldo,
        }
    }

    pub fn points(&self) -> f64 {
        normalize_number(self.points)
    }

    pub fn saldo(&self) -> f64 {
        normalize_number(self.saldo)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    #[serde(default)]
    pub name: String,
    pub date: NaiveDate,
    /// Creation timestamp (epoch millis), orders tournaments sharing a date
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: i64,
    pub results: Vec<TournamentResult>,
}

impl Tournament {
    pub fn result_for(&self, player_id: &str) -> Option<&TournamentResult> {
        self.results.iter().find(|r| r.player_id == player_id)
    }
}

/// Read-only lookup from player id to player
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: HashMap<PlayerId, Player>,
}

impl PlayerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_players<I>(players: I) -> Self
    where
        I: IntoIterator<Item = Player>,
    {
        let players = players
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();
        Self { players }
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.get(id)
    }
}

/// Everything the engine needs: the player directory plus the tournament list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
}

impl LeagueSnapshot {
    pub fn directory(&self) -> PlayerDirectory {
        PlayerDirectory::from_players(self.players.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_deserializes_camel_case() {
        let json = r#"{
            "id": "t1",
            "name": "Spring Open",
            "date": "2024-03-02",
            "createdAt": 1709370000000,
            "results": [
                {"playerId": "a", "points": 100, "saldo": 10},
                {"playerId": "b", "points": "80", "saldo": -5}
            ]
        }"#;

        let tournament: Tournament = serde_json::from_str(json).unwrap();

        assert_eq!(tournament.date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(tournament.created_at, 1709370000000);
        assert_eq!(tournament.results.len(), 2);
        assert_eq!(tournament.result_for("b").unwrap().points, 80.0);
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let json = r#"{"id": "t1", "date": "2024-03-02",
            "results": [{"playerId": "a", "points": null}]}"#;

        let tournament: Tournament = serde_json::from_str(json).unwrap();
        let result = &tournament.results[0];

        assert_eq!(result.points, 0.0);
        assert_eq!(result.saldo, 0.0);
        assert_eq!(tournament.created_at, 0);
        assert_eq!(tournament.name, "");
    }

    #[test]
    fn test_tournament_without_results_is_rejected() {
        let json = r#"{"id": "t1", "date": "2024-03-02"}"#;
        assert!(serde_json::from_str::<Tournament>(json).is_err());
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let json = r#"{"id": "t1", "date": "next tuesday", "results": []}"#;
        assert!(serde_json::from_str::<Tournament>(json).is_err());
    }

    #[test]
    fn test_accessors_normalize_non_finite_values() {
        let result = TournamentResult::new("a", f64::NAN, f64::INFINITY);
        assert_eq!(result.points(), 0.0);
        assert_eq!(result.saldo(), 0.0);
    }

    #[test]
    fn test_snapshot_directory_lookup() {
        let snapshot = LeagueSnapshot {
            players: vec![Player {
                id: "a".to_string(),
                name: "Anna".to_string(),
            }],
            tournaments: vec![],
        };

        let directory = snapshot.directory();

        assert_eq!(directory.get("a").unwrap().name, "Anna");
        assert!(directory.get("zzz").is_none());
    }
}
