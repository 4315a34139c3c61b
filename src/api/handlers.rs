use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{RankingItem, RankingResponse, TimelineParams, TimelineResponse};
use crate::config::TrendSettings;
use crate::services::league::LeagueService;

pub struct AppState {
    pub league: LeagueService,
    /// Defaults for requests that leave trend parameters out
    pub trend: TrendSettings,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn get_ranking(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let ranking = match state.league.ranking() {
        Ok(ranking) => ranking,
        Err(e) => {
            log::error!("Ranking failed: {:?}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response();
        }
    };

    let total = ranking.len();
    let items = ranking
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankingItem::from_entry(i + 1, entry))
        .collect();

    Json(RankingResponse { items, total }).into_response()
}

pub async fn get_player_timeline(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
    Query(params): Query<TimelineParams>,
) -> impl IntoResponse {
    let trend = TrendSettings {
        trend_limit: params.trend_limit.unwrap_or(state.trend.trend_limit),
        window: params.window.unwrap_or(state.trend.window),
    };

    match state.league.player_timeline(&player_id, &trend) {
        Ok(Some(timeline)) => Json(TimelineResponse {
            player_id: timeline.player.id,
            name: timeline.player.name,
            points: timeline.points,
            trend: timeline.trend,
        })
        .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, format!("Player {} not found", player_id)).into_response(),
        Err(e) => {
            log::error!("Timeline for {} failed: {:?}", player_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response()
        }
    }
}
