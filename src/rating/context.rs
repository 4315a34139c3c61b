use log::debug;

use super::score::result_score;
use super::types::{ContextMap, TournamentContext};
use crate::config::RatingSettings;
use crate::domain::Tournament;

pub fn build_contexts(tournaments: &[Tournament], settings: &RatingSettings) -> ContextMap {
    let contexts: ContextMap = tournaments
        .iter()
        .map(|t| (t.id.clone(), tournament_context(t, settings)))
        .collect();

    debug!("Built contexts for {} tournaments", contexts.len());
    contexts
}

pub fn tournament_context(tournament: &Tournament, settings: &RatingSettings) -> TournamentContext {
    let scores: Vec<f64> = tournament
        .results
        .iter()
        .map(|r| result_score(r, settings))
        .collect();

    if scores.is_empty() {
        return TournamentContext::default();
    }

    let mean = calculate_mean(&scores);
    TournamentContext {
        mean,
        std: calculate_std_dev(&scores, mean),
        size_weight: calculate_size_weight(scores.len(), settings),
    }
}

fn calculate_mean(scores: &[f64]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Population standard deviation. Identical scores short-circuit to an exact
/// zero so rounding in the mean cannot fake a spread.
fn calculate_std_dev(scores: &[f64], mean: f64) -> f64 {
    let first = scores[0];
    if scores.iter().all(|&s| s == first) {
        return 0.0;
    }

    let variance = scores.iter().map(|&s| (s - mean).powi(2)).sum::<f64>() / scores.len() as f64;
    variance.sqrt()
}

fn calculate_size_weight(participants: usize, settings: &RatingSettings) -> f64 {
    (participants as f64 / settings.reference_field_size)
        .sqrt()
        .min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TournamentResult;
    use chrono::NaiveDate;

    fn tournament(id: &str, results: Vec<(&str, f64, f64)>) -> Tournament {
        Tournament {
            id: id.to_string(),
            name: format!("Tournament {id}"),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            created_at: 0,
            results: results
                .into_iter()
                .map(|(p, points, saldo)| TournamentResult::new(p, points, saldo))
                .collect(),
        }
    }

    #[test]
    fn test_two_player_context() {
        let settings = RatingSettings::default();
        let t = tournament("t1", vec![("x", 100.0, 10.0), ("y", 80.0, -5.0)]);

        let ctx = tournament_context(&t, &settings);

        assert!((ctx.mean - 90.25).abs() < 1e-9);
        assert!((ctx.std - 10.75).abs() < 1e-9);
        assert!((ctx.size_weight - (2.0_f64 / 16.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_tournament_context() {
        let settings = RatingSettings::default();
        let ctx = tournament_context(&tournament("t0", vec![]), &settings);
        assert_eq!(ctx, TournamentContext::default());
    }

    #[test]
    fn test_single_participant_has_no_spread() {
        let settings = RatingSettings::default();
        let ctx = tournament_context(&tournament("t1", vec![("x", 70.0, 3.0)]), &settings);

        assert_eq!(ctx.std, 0.0);
        assert!((ctx.mean - 70.3).abs() < 1e-9);
        assert_eq!(ctx.size_weight, 0.25);
    }

    #[test]
    fn test_identical_scores_have_exactly_zero_spread() {
        let settings = RatingSettings::default();
        let t = tournament("t1", vec![("a", 0.1, 1.0), ("b", 0.1, 1.0), ("c", 0.1, 1.0)]);

        assert_eq!(tournament_context(&t, &settings).std, 0.0);
    }

    #[test]
    fn test_size_weight_saturates_at_reference_size() {
        let settings = RatingSettings::default();
        let results: Vec<(&str, f64, f64)> = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j",
            "k", "l", "m", "n", "o", "p", "q", "r", "s", "t"]
            .iter()
            .enumerate()
            .map(|(i, p)| (*p, i as f64, 0.0))
            .collect();

        let ctx = tournament_context(&tournament("big", results), &settings);

        assert_eq!(ctx.size_weight, 1.0);
    }

    #[test]
    fn test_build_contexts_keys_by_id() {
        let settings = RatingSettings::default();
        let tournaments = vec![
            tournament("t1", vec![("x", 1.0, 0.0)]),
            tournament("t2", vec![]),
        ];

        let contexts = build_contexts(&tournaments, &settings);

        assert_eq!(contexts.len(), 2);
        assert_eq!(contexts["t2"].size_weight, 0.0);
    }
}
