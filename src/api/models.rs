use serde::{Deserialize, Serialize};

use crate::rating::{RankingEntry, TimelinePoint, Trend};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankingItem {
    pub rank: usize,
    pub player_id: String,
    pub name: String,
    pub participations: u32,
    pub average: f64,
    pub saldo_total_raw: f64,
    pub rating: f64,
}

impl RankingItem {
    pub fn from_entry(rank: usize, entry: RankingEntry) -> Self {
        Self {
            rank,
            player_id: entry.player_id,
            name: entry.name,
            participations: entry.participations,
            average: entry.average,
            saldo_total_raw: entry.saldo_total_raw,
            rating: entry.rating,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub items: Vec<RankingItem>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    pub player_id: String,
    pub name: String,
    pub points: Vec<TimelinePoint>,
    pub trend: Trend,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineParams {
    pub trend_limit: Option<usize>,
    pub window: Option<usize>,
}
