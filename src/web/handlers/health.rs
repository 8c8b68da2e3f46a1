//! Health check HTTP handlers
//!
//! `/health` reports database connectivity, `/ready` gates traffic on it and
//! `/live` only proves the process answers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::database::Database;
use crate::web::{
    AppState,
    responses::{DatabaseHealth, HealthResponse},
};

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_health = check_database_health(&state.database).await;
    Json(HealthResponse::new(db_health))
}

/// Readiness check, 503 while the database is unreachable
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    let db_health = check_database_health(&state.database).await;

    if db_health.is_connected() {
        Json(serde_json::json!({
            "status": "ready",
            "timestamp": chrono::Utc::now()
        }))
        .into_response()
    } else {
        StatusCode::SERVICE_UNAVAILABLE.into_response()
    }
}

/// Liveness check
pub async fn liveness_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "timestamp": chrono::Utc::now()
    }))
}

async fn check_database_health(database: &Database) -> DatabaseHealth {
    match database.ping().await {
        Ok(()) => DatabaseHealth {
            status: "connected".to_string(),
            backend: database.database_type().to_string(),
            error: None,
        },
        Err(e) => {
            warn!("Database health check failed: {:#}", e);
            DatabaseHealth {
                status: "disconnected".to_string(),
                backend: database.database_type().to_string(),
                error: Some(e.to_string()),
            }
        }
    }
}
