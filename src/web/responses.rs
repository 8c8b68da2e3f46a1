//! HTTP response types for the non-GraphQL endpoints

use serde::{Deserialize, Serialize};

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub database: DatabaseHealth,
}

/// Database health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseHealth {
    pub status: String,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DatabaseHealth {
    pub fn is_connected(&self) -> bool {
        self.status == "connected"
    }
}

impl HealthResponse {
    pub fn new(database: DatabaseHealth) -> Self {
        let status = if database.is_connected() {
            "healthy"
        } else {
            "unhealthy"
        };

        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now(),
            database,
        }
    }
}
