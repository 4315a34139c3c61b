use super::types::{TimelinePoint, Trend, TrendPoint};
use crate::config::TrendSettings;

/// Trailing moving average aligned index-for-index with `series`. Early
/// positions average over the values available so far. A window of zero is
/// treated as one.
pub fn compute_moving_average(series: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);

    (0..series.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &series[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Keeps the most recent `trend_limit` timeline points and smooths their
/// ratings. The limit is clamped to the timeline length and the window to the
/// limit; both are reported back on the returned [`Trend`].
pub fn build_trend(timeline: &[TimelinePoint], settings: &TrendSettings) -> Trend {
    if timeline.is_empty() {
        return Trend::default();
    }

    let trend_limit = settings.trend_limit.clamp(1, timeline.len());
    let window = settings.window.clamp(1, trend_limit);
    let tail = &timeline[timeline.len() - trend_limit..];

    let ratings: Vec<f64> = tail.iter().map(|p| p.rating).collect();
    let averages = compute_moving_average(&ratings, window);

    let points = tail
        .iter()
        .zip(averages)
        .map(|(point, moving_average)| TrendPoint {
            tournament_id: point.tournament_id.clone(),
            date: point.date,
            rating: point.rating,
            moving_average,
        })
        .collect();

    Trend {
        trend_limit,
        window,
        points,
    }
}
