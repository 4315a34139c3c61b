use std::collections::BTreeMap;

use log::debug;

use super::contribution::relative_contribution;
use super::score::{capped_saldo, result_score};
use super::types::{ContextMap, TournamentContext};
use crate::config::RatingSettings;
use crate::domain::{PlayerId, Tournament, TournamentResult};

/// Ordered by player id so every pass over the map is reproducible
pub type AggregateMap = BTreeMap<PlayerId, PlayerAggregate>;

/// Running totals for one player
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerAggregate {
    pub participations: u32,
    pub points_total: f64,
    /// Uncapped, shown in tables and used as a tie-break
    pub saldo_total_raw: f64,
    /// Capped per result, used by the rating formula
    pub saldo_total_for_rating: f64,
    pub relative_total: f64,
}

impl PlayerAggregate {
    pub fn record(
        &mut self,
        result: &TournamentResult,
        context: &TournamentContext,
        settings: &RatingSettings,
    ) {
        let score = result_score(result, settings);

        self.participations += 1;
        self.points_total += result.points();
        self.saldo_total_raw += result.saldo();
        self.saldo_total_for_rating += capped_saldo(result.saldo(), settings);
        self.relative_total += relative_contribution(score, context, settings);
    }

    pub fn average(&self) -> f64 {
        if self.participations == 0 {
            return 0.0;
        }
        self.points_total / self.participations as f64
    }

    /// Bounded bonus for sustained participation
    pub fn experience_factor(&self, settings: &RatingSettings) -> f64 {
        let n = self.participations as f64;
        1.0 + ((1.0 + n).ln() * settings.experience_slope).min(settings.experience_cap)
    }

    pub fn raw_rating(&self, settings: &RatingSettings) -> f64 {
        let adjusted_saldo_term = self.saldo_total_for_rating * settings.saldo_factor;
        (self.average() + adjusted_saldo_term) * self.experience_factor(settings)
    }

    pub fn adjusted_rating(&self, settings: &RatingSettings) -> f64 {
        if self.participations == 0 {
            return 0.0;
        }
        let relative_adjustment = self.relative_total / self.participations as f64;
        self.raw_rating(settings) + relative_adjustment
    }

    /// Final rating. Only a player with exactly one participation is shrunk
    /// toward `baseline`; every other sample size keeps its adjusted rating.
    pub fn rating(&self, baseline: f64, settings: &RatingSettings) -> f64 {
        let adjusted = self.adjusted_rating(settings);
        if self.participations != 1 {
            return adjusted;
        }

        let weight = self.shrinkage_weight(settings);
        adjusted * weight + baseline * (1.0 - weight)
    }

    /// `n / (n + K)`
    pub fn shrinkage_weight(&self, settings: &RatingSettings) -> f64 {
        let n = self.participations as f64;
        n / (n + settings.shrinkage_strength)
    }
}

/// One pass over every result, accumulating per-player totals against the
/// precomputed tournament contexts.
pub fn aggregate_players(
    tournaments: &[Tournament],
    contexts: &ContextMap,
    settings: &RatingSettings,
) -> AggregateMap {
    let mut aggregates = AggregateMap::new();

    for tournament in tournaments {
        let context = contexts.get(&tournament.id).copied().unwrap_or_default();

        for result in &tournament.results {
            aggregates
                .entry(result.player_id.clone())
                .or_default()
                .record(result, &context, settings);
        }
    }

    debug!("Aggregated results for {} players", aggregates.len());
    aggregates
}
