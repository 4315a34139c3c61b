use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{get_player_timeline, get_ranking, health, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/ranking", get(get_ranking))
        .route("/api/players/:id/timeline", get(get_player_timeline))
        .with_state(state)
}
