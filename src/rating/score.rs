use crate::config::RatingSettings;
use crate::domain::{normalize_number, TournamentResult};

/// Clamps a saldo into `[-saldo_cap, saldo_cap]`.
pub fn capped_saldo(saldo: f64, settings: &RatingSettings) -> f64 {
    normalize_number(saldo)
        .max(-settings.saldo_cap)
        .min(settings.saldo_cap)
}

/// Points plus a fraction of the capped saldo; the unit every in-tournament
/// comparison is made in.
pub fn tournament_score(points: f64, saldo: f64, settings: &RatingSettings) -> f64 {
    normalize_number(points) + capped_saldo(saldo, settings) * settings.saldo_factor
}

pub fn result_score(result: &TournamentResult, settings: &RatingSettings) -> f64 {
    tournament_score(result.points(), result.saldo(), settings)
}
