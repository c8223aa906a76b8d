//! API layer - HTTP 路由

mod products;

use axum::{Json, Router, extract::State, routing::get};
use inv_adapter_postgres::check_connection;
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// 组装服务的全部路由
pub fn routes(state: AppState) -> Router {
    Router::new()
        .merge(products::product_routes())
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: Vec<ServiceCheck>,
}

#[derive(Debug, Serialize)]
pub struct ServiceCheck {
    pub name: String,
    pub healthy: bool,
}

async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let db = check_connection(&state.pool).await;
    if let Err(e) = &db {
        warn!(error = %e, "Readiness check failed");
    }

    let healthy = db.is_ok();
    Json(ReadinessResponse {
        ready: healthy,
        checks: vec![ServiceCheck {
            name: "postgres".to_string(),
            healthy,
        }],
    })
}
