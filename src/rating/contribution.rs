use super::types::TournamentContext;
use crate::config::RatingSettings;

/// Capped z-score of `score` within its tournament, scaled by the field's
/// confidence weight. Zero when the field has no spread.
pub fn relative_contribution(
    score: f64,
    context: &TournamentContext,
    settings: &RatingSettings,
) -> f64 {
    if context.std <= 0.0 {
        return 0.0;
    }

    let z_score = ((score - context.mean) / context.std)
        .max(-settings.z_score_cap)
        .min(settings.z_score_cap);

    z_score * settings.z_score_scale * context.size_weight
}
