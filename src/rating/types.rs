use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{PlayerId, TournamentId};

pub type ContextMap = HashMap<TournamentId, TournamentContext>;

/// Spread of tournament scores within one tournament.
///
/// `std` is exactly zero when the field has at most one participant or when
/// every participant scored the same.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TournamentContext {
    pub mean: f64,
    pub std: f64,
    pub size_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub participations: u32,
    pub average: f64,
    pub saldo_total_raw: f64,
    pub rating: f64,
}

/// A player's standing right after one of their tournaments
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub date: NaiveDate,
    pub points: f64,
    pub saldo: f64,
    pub tournament_score: f64,
    /// Cumulative rating as of this tournament
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub tournament_id: TournamentId,
    pub date: NaiveDate,
    pub rating: f64,
    pub moving_average: f64,
}

/// Tail of a timeline with its trailing moving average
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub trend_limit: usize,
    pub window: usize,
    pub points: Vec<TrendPoint>,
}
