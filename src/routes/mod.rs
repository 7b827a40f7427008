use axum::{
    routing::get,
    Router,
};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{Sqlite, SqlitePool};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::Result;

pub mod health;
pub mod players;

/// Shared handler state; the pool is the storage-session factory.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Checks out a storage session for the current request.
    ///
    /// The connection goes back to the pool when the guard is dropped,
    /// whichever way the handler exits.
    pub async fn session(&self) -> Result<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(health::root))
        .route("/health", get(health::health_check))

        // Player endpoints
        .route(
            "/players/",
            get(players::list_players).post(players::create_player),
        )
        .route(
            "/players/{id}",
            get(players::get_player)
                .put(players::update_player)
                .delete(players::delete_player),
        )

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
