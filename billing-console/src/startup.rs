//! Application startup and lifecycle management.

use crate::config::Settings;
use crate::handlers::{billing, health, metrics};
use crate::services::{init_metrics, LicenseClient, UsageClient};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use console_core::error::AppError;
use console_core::middleware::{http_metrics_middleware, request_id_middleware};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub license_client: Arc<LicenseClient>,
    pub usage_client: Arc<UsageClient>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(settings: Settings) -> Result<Self, AppError> {
        init_metrics();

        let state = AppState {
            license_client: Arc::new(LicenseClient::new(settings.licensing_service.clone())),
            usage_client: Arc::new(UsageClient::new(settings.usage_service.clone())),
        };

        let addr = format!("{}:{}", settings.server.host, settings.server.port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!(error = %e, addr = %addr, "Failed to bind HTTP listener");
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port = port, "Billing console listener bound");

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        tracing::info!(
            service = "billing-console",
            version = env!("CARGO_PKG_VERSION"),
            port = self.port,
            "Service ready to accept connections"
        );

        axum::serve(self.listener, router).await
    }
}

/// Build the HTTP router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/api/v1/billing/summary", get(billing::billing_summary))
        .route("/api/v1/billing/status", get(billing::billing_status))
        .route(
            "/api/v1/billing/portal",
            post(billing::create_portal_session),
        )
        .route("/api/v1/workspace/status", get(billing::workspace_status))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
