use std::cmp::Ordering;

use log::debug;

use super::aggregate::aggregate_players;
use super::baseline::compute_baseline;
use super::collation::NameCollator;
use super::context::build_contexts;
use super::types::RankingEntry;
use crate::config::RatingSettings;
use crate::domain::{PlayerDirectory, Tournament};

/// Rates every known player with at least one result and orders them best
/// first. Results of players missing from `players` still shape the
/// tournament contexts and the baseline, they just never get an entry.
pub fn compute_ranking(
    tournaments: &[Tournament],
    players: &PlayerDirectory,
    settings: &RatingSettings,
) -> Vec<RankingEntry> {
    let contexts = build_contexts(tournaments, settings);
    let baseline = compute_baseline(tournaments, settings);
    let aggregates = aggregate_players(tournaments, &contexts, settings);

    let mut entries: Vec<RankingEntry> = aggregates
        .into_iter()
        .filter(|(_, aggregate)| aggregate.participations >= 1)
        .filter_map(|(player_id, aggregate)| {
            let player = players.get(&player_id)?;
            Some(RankingEntry {
                name: player.name.clone(),
                participations: aggregate.participations,
                average: aggregate.average(),
                saldo_total_raw: aggregate.saldo_total_raw,
                rating: aggregate.rating(baseline, settings),
                player_id,
            })
        })
        .collect();

    let collator = NameCollator::new(&settings.collation_locale);
    entries.sort_by(|a, b| compare_entries(a, b, &collator));

    debug!("Ranked {} players", entries.len());
    entries
}

/// Rating, then raw saldo, then participations (all descending), then name.
pub fn compare_entries(a: &RankingEntry, b: &RankingEntry, collator: &NameCollator) -> Ordering {
    descending(a.rating, b.rating)
        .then_with(|| descending(a.saldo_total_raw, b.saldo_total_raw))
        .then_with(|| b.participations.cmp(&a.participations))
        .then_with(|| collator.compare(&a.name, &b.name))
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
