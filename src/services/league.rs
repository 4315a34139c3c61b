use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::config::{RatingSettings, TrendSettings};
use crate::database::{self, DbPool};
use crate::domain::{LeagueSnapshot, Player};
use crate::rating::{self, RankingEntry, TimelinePoint, Trend};

/// A player's full history plus the recent trend
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTimeline {
    pub player: Player,
    pub points: Vec<TimelinePoint>,
    pub trend: Trend,
}

/// Feeds fresh database snapshots to the rating engine. Nothing is cached:
/// each call reads the league and recomputes from scratch.
#[derive(Clone)]
pub struct LeagueService {
    pool: DbPool,
    rating: RatingSettings,
}

impl LeagueService {
    pub fn new(pool: DbPool, rating: RatingSettings) -> Self {
        Self { pool, rating }
    }

    pub fn snapshot(&self) -> Result<LeagueSnapshot> {
        let conn = database::get_connection(&self.pool)?;
        database::setup::ensure_schema(&conn)?;
        database::load_snapshot(&conn)
    }

    pub fn ranking(&self) -> Result<Vec<RankingEntry>> {
        let snapshot = self.snapshot()?;
        Ok(ranking_for(&snapshot, &self.rating))
    }

    /// `None` when the player id is not in the league
    pub fn player_timeline(&self, player_id: &str, trend: &TrendSettings) -> Result<Option<PlayerTimeline>> {
        let snapshot = self.snapshot()?;
        Ok(timeline_for(&snapshot, player_id, &self.rating, trend))
    }
}

pub fn ranking_for(snapshot: &LeagueSnapshot, settings: &RatingSettings) -> Vec<RankingEntry> {
    let ranking = rating::compute_ranking(&snapshot.tournaments, &snapshot.directory(), settings);
    info!(
        "Ranked {} of {} players over {} tournaments",
        ranking.len(),
        snapshot.players.len(),
        snapshot.tournaments.len()
    );
    ranking
}

pub fn timeline_for(
    snapshot: &LeagueSnapshot,
    player_id: &str,
    settings: &RatingSettings,
    trend: &TrendSettings,
) -> Option<PlayerTimeline> {
    let player = snapshot.players.iter().find(|p| p.id == player_id)?.clone();
    let points = rating::get_player_timeline(player_id, &snapshot.tournaments, settings);
    let trend = rating::build_trend(&points, trend);

    Some(PlayerTimeline {
        player,
        points,
        trend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Tournament, TournamentResult};
    use chrono::NaiveDate;

    fn seeded_service() -> LeagueService {
        let pool = database::create_memory_pool().unwrap();
        {
            let conn = database::get_connection(&pool).unwrap();
            database::setup::ensure_schema(&conn).unwrap();
            for (id, name) in [("x", "Xénia"), ("y", "Yvett")] {
                database::players::upsert_player(
                    &conn,
                    &Player {
                        id: id.to_string(),
                        name: name.to_string(),
                    },
                )
                .unwrap();
            }
            database::tournaments::upsert_tournament(
                &conn,
                &Tournament {
                    id: "t1".to_string(),
                    name: "Opening".to_string(),
                    date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                    created_at: 0,
                    results: vec![
                        TournamentResult::new("x", 100.0, 10.0),
                        TournamentResult::new("y", 80.0, -5.0),
                    ],
                },
            )
            .unwrap();
        }
        LeagueService::new(pool, RatingSettings::default())
    }

    #[test]
    fn test_ranking_from_database() {
        let ranking = seeded_service().ranking().unwrap();

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].name, "Xénia");
    }

    #[test]
    fn test_timeline_for_known_and_unknown_players() {
        let service = seeded_service();

        let timeline = service
            .player_timeline("y", &TrendSettings::default())
            .unwrap()
            .unwrap();
        assert_eq!(timeline.player.name, "Yvett");
        assert_eq!(timeline.points.len(), 1);
        assert_eq!(timeline.trend.points.len(), 1);

        assert!(service
            .player_timeline("nobody", &TrendSettings::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_empty_database_ranks_nobody() {
        let service = LeagueService::new(database::create_memory_pool().unwrap(), RatingSettings::default());
        assert!(service.ranking().unwrap().is_empty());
    }
}
