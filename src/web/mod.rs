//! Web layer module
//!
//! This module provides the HTTP interface for the job board. GraphQL carries
//! all domain traffic; the remaining routes are operational health checks.
//!
//! # Architecture
//!
//! - **Handlers**: the GraphQL endpoint, GraphiQL page and health checks
//! - **Responses**: JSON bodies of the health checks
//! - **Middleware**: request logging

use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

use crate::{
    config::Config,
    database::Database,
    graphql::{JobBoardSchema, build_schema},
    services::JobBoardService,
};

pub mod handlers;
pub mod middleware;
pub mod responses;

pub use responses::{DatabaseHealth, HealthResponse};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub config: Config,
    pub schema: JobBoardSchema,
}

impl AppState {
    /// Wire the service and schema on top of an already migrated database
    pub fn new(database: Database, config: Config) -> Self {
        let service = JobBoardService::from_database(&database);
        let schema = build_schema(service, &config.graphql);
        Self {
            database,
            config,
            schema,
        }
    }
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(state: AppState) -> Result<Self> {
        let addr: SocketAddr =
            format!("{}:{}", state.config.web.host, state.config.web.port).parse()?;
        let app = create_router(state);

        Ok(Self { app, addr })
    }

    /// Serve with a notification when the server is actually listening or fails to bind.
    ///
    /// Shuts down gracefully on SIGTERM or Ctrl+C.
    pub async fn serve_with_signal(
        self,
        ready_signal: tokio::sync::oneshot::Sender<Result<()>>,
    ) -> Result<()> {
        match tokio::net::TcpListener::bind(&self.addr).await {
            Ok(listener) => {
                let _ = ready_signal.send(Ok(()));

                axum::serve(listener, self.app)
                    .with_graceful_shutdown(shutdown_signal())
                    .await?;
                Ok(())
            }
            Err(bind_error) => {
                let bind_err_msg = format!("Failed to bind to {}: {}", self.addr, bind_error);
                let _ = ready_signal.send(Err(anyhow::anyhow!("{}", bind_err_msg)));
                Err(anyhow::anyhow!("{}", bind_err_msg))
            }
        }
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Create the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let graphql_route = if state.config.graphql.graphiql {
        get(handlers::graphql::graphiql).post(handlers::graphql::graphql_handler)
    } else {
        post(handlers::graphql::graphql_handler)
    };

    Router::new()
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/live", get(handlers::health::liveness_check))
        .route(&state.config.graphql.path, graphql_route)
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(
            middleware::request_logging_middleware,
        ))
        .with_state(state)
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM, shutting down gracefully");
            }
            _ = sigint.recv() => {
                tracing::info!("Received SIGINT (Ctrl+C), shutting down gracefully");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, shutting down gracefully");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::json;
    use tracing_test::traced_test;

    async fn test_server() -> TestServer {
        let database = Database::new_in_memory()
            .await
            .expect("Failed to create test database");
        TestServer::new(create_router(AppState::new(database, Config::default())))
            .expect("Failed to create test server")
    }

    #[tokio::test]
    #[traced_test]
    async fn test_request_logs_name_graphql_operation() {
        let server = test_server().await;

        server
            .post("/graphql")
            .json(&json!({
                "query": "query ListJobs { allJobPosts { id } }",
                "operationName": "ListJobs"
            }))
            .await
            .assert_status_ok();

        assert!(logs_contain("operation=ListJobs"));
        assert!(logs_contain("HTTP request completed"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_unnamed_operation_is_logged_as_anonymous() {
        let server = test_server().await;

        server
            .post("/graphql")
            .json(&json!({ "query": "{ jobPostById(id: 1) { id } }" }))
            .await
            .assert_status_ok();

        assert!(logs_contain("operation=anonymous"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_health_requests_carry_no_operation() {
        let server = test_server().await;

        server.get("/live").await.assert_status_ok();

        assert!(logs_contain("/live"));
        assert!(!logs_contain("operation="));
    }
}
