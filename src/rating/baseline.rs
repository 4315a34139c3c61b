use log::debug;

use super::score::result_score;
use crate::config::RatingSettings;
use crate::domain::Tournament;

/// League-wide average tournament score over every participation, the anchor
/// single-result players are pulled toward. Zero when nobody has played.
pub fn compute_baseline(tournaments: &[Tournament], settings: &RatingSettings) -> f64 {
    let (total, count) = tournaments
        .iter()
        .flat_map(|t| t.results.iter())
        .fold((0.0, 0usize), |(total, count), r| {
            (total + result_score(r, settings), count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    let baseline = total / count as f64;
    debug!("Baseline {:.3} over {} participations", baseline, count);
    baseline
}
