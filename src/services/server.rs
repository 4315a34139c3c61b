use anyhow::Result;
use axum::Router;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::AppConfig;
use crate::database;
use crate::services::league::LeagueService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let app = self.build_app()?;

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {} (database: {})", addr, self.config.database_path);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Opens the database, makes sure the schema exists and wires the routes
    pub fn build_app(&self) -> Result<Router> {
        let pool = database::create_pool(&self.config.database_path)?;
        {
            let conn = database::get_connection(&pool)?;
            database::setup::ensure_schema(&conn)?;
        }

        let state = Arc::new(AppState {
            league: LeagueService::new(pool, self.config.rating.clone()),
            trend: self.config.trend,
        });

        Ok(create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()))
    }
}
