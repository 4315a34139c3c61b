use log::debug;

use super::aggregate::PlayerAggregate;
use super::baseline::compute_baseline;
use super::context::build_contexts;
use super::score::result_score;
use super::types::TimelinePoint;
use crate::config::RatingSettings;
use crate::domain::Tournament;

/// Replays a player's tournaments in chronological order, emitting the
/// cumulative rating after each one. Contexts and the baseline come from the
/// full tournament list, exactly as the ranking sees them.
pub fn get_player_timeline(
    player_id: &str,
    tournaments: &[Tournament],
    settings: &RatingSettings,
) -> Vec<TimelinePoint> {
    let contexts = build_contexts(tournaments, settings);
    let baseline = compute_baseline(tournaments, settings);

    let mut aggregate = PlayerAggregate::default();
    let timeline: Vec<TimelinePoint> = chronological(tournaments)
        .into_iter()
        .filter_map(|tournament| {
            let result = tournament.result_for(player_id)?;
            let context = contexts.get(&tournament.id).copied().unwrap_or_default();
            aggregate.record(result, &context, settings);

            Some(TimelinePoint {
                tournament_id: tournament.id.clone(),
                tournament_name: tournament.name.clone(),
                date: tournament.date,
                points: result.points(),
                saldo: result.saldo(),
                tournament_score: result_score(result, settings),
                rating: aggregate.rating(baseline, settings),
            })
        })
        .collect();

    debug!("Timeline for {} has {} points", player_id, timeline.len());
    timeline
}

/// Sorted by date, then creation time. The sort is stable, so full ties keep
/// their input order.
pub fn chronological(tournaments: &[Tournament]) -> Vec<&Tournament> {
    let mut ordered: Vec<&Tournament> = tournaments.iter().collect();
    ordered.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Player, PlayerDirectory, TournamentResult};
    use crate::rating::compute_ranking;
    use chrono::NaiveDate;

    fn tournament(id: &str, date: (i32, u32, u32), created_at: i64, results: Vec<(&str, f64, f64)>) -> Tournament {
        Tournament {
            id: id.to_string(),
            name: format!("Cup {id}"),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            created_at,
            results: results
                .into_iter()
                .map(|(p, points, saldo)| TournamentResult::new(p, points, saldo))
                .collect(),
        }
    }

    fn history() -> Vec<Tournament> {
        vec![
            tournament("late", (2024, 6, 1), 5, vec![("x", 70.0, 3.0), ("y", 75.0, 8.0)]),
            tournament("early", (2024, 1, 15), 9, vec![("x", 100.0, 10.0), ("y", 80.0, -5.0)]),
            tournament("same-day-b", (2024, 3, 3), 2, vec![("x", 40.0, -30.0), ("z", 60.0, 30.0)]),
            tournament("same-day-a", (2024, 3, 3), 1, vec![("y", 90.0, 2.0), ("z", 50.0, -2.0)]),
        ]
    }

    #[test]
    fn test_points_follow_date_then_creation_order() {
        let settings = RatingSettings::default();
        let ids: Vec<String> = get_player_timeline("x", &history(), &settings)
            .into_iter()
            .map(|p| p.tournament_id)
            .collect();

        assert_eq!(ids, vec!["early", "same-day-b", "late"]);

        let tournaments = history();
        let ordered: Vec<&str> = chronological(&tournaments).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ordered, vec!["early", "same-day-a", "same-day-b", "late"]);
    }

    #[test]
    fn test_point_fields() {
        let settings = RatingSettings::default();
        let timeline = get_player_timeline("x", &history(), &settings);
        let second = &timeline[1];

        assert_eq!(second.tournament_name, "Cup same-day-b");
        assert_eq!(second.points, 40.0);
        assert_eq!(second.saldo, -30.0);
        assert_eq!(second.tournament_score, 37.5);
    }

    #[test]
    fn test_last_point_matches_ranking_rating() {
        let settings = RatingSettings::default();
        let tournaments = history();
        let players = PlayerDirectory::from_players(
            ["x", "y", "z"].iter().map(|id| Player {
                id: id.to_string(),
                name: id.to_uppercase(),
            }),
        );

        let ranking = compute_ranking(&tournaments, &players, &settings);

        for entry in &ranking {
            let timeline = get_player_timeline(&entry.player_id, &tournaments, &settings);
            let last = timeline.last().unwrap();
            assert!((last.rating - entry.rating).abs() < 1e-9);
            assert_eq!(timeline.len() as u32, entry.participations);
        }
    }

    #[test]
    fn test_only_first_point_is_shrunk() {
        let settings = RatingSettings::default();
        let tournaments = history();
        let baseline = compute_baseline(&tournaments, &settings);
        let contexts = build_contexts(&tournaments, &settings);

        let timeline = get_player_timeline("x", &tournaments, &settings);

        let mut aggregate = PlayerAggregate::default();
        let first = &tournaments[1];
        aggregate.record(first.result_for("x").unwrap(), &contexts[&first.id], &settings);
        let shrunk = aggregate.adjusted_rating(&settings) / 3.0 + baseline * 2.0 / 3.0;
        assert!((timeline[0].rating - shrunk).abs() < 1e-9);

        let second = &tournaments[2];
        aggregate.record(second.result_for("x").unwrap(), &contexts[&second.id], &settings);
        assert!((timeline[1].rating - aggregate.adjusted_rating(&settings)).abs() < 1e-9);
    }

    #[test]
    fn test_player_without_results_has_empty_timeline() {
        let settings = RatingSettings::default();
        assert!(get_player_timeline("nobody", &history(), &settings).is_empty());
        assert!(get_player_timeline("x", &[], &settings).is_empty());
    }
}
