use axum::{http::StatusCode, response::Json};
use serde::Serialize;

pub const ONLINE_STATUS: &str = "Players API online!";

#[derive(Serialize)]
pub struct RootResponse {
    status: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: i64,
}

// GET / - Reachability check, never touches storage
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: ONLINE_STATUS,
    })
}

pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    (StatusCode::OK, Json(response))
}
