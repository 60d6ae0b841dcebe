//! Application startup and lifecycle management.

use crate::config::AdvisorConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::providers::groq::{GroqChatProvider, GroqConfig};
use crate::services::providers::ChatProvider;
use crate::services::AdvisorService;
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AdvisorConfig,
    pub advisor: AdvisorService,
    pub provider: Arc<dyn ChatProvider>,
}

/// Health check endpoint for Docker/K8s liveness probes.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.provider.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "advisor-service",
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "service": "advisor-service",
                "error": e.to_string()
            })),
        ),
    }
}

/// Readiness check endpoint for K8s readiness probes.
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.provider.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Build the router with CORS and request tracing layers.
pub fn build_router(state: AppState) -> Router {
    let origins = state
        .config
        .security
        .allowed_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>().unwrap_or_else(|e| {
                tracing::error!("Invalid CORS origin '{}': {}. Using fallback.", o, e);
                HeaderValue::from_static("*")
            })
        })
        .collect::<Vec<HeaderValue>>();

    Router::new()
        .route("/", get(handlers::advice::root))
        .route(
            "/get_medical_advice",
            post(handlers::advice::get_medical_advice),
        )
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: AdvisorConfig) -> Result<Self, AppError> {
        let groq_config = GroqConfig {
            api_key: config.provider.api_key.clone(),
            model: config.model.text_model.clone(),
        };
        let provider: Arc<dyn ChatProvider> = Arc::new(GroqChatProvider::new(groq_config));

        tracing::info!(
            model = %config.model.text_model,
            "Initialized Groq chat provider"
        );

        let advisor = AdvisorService::new(provider.clone(), config.model.temperature);

        let state = AppState {
            config: config.clone(),
            advisor,
            provider,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.http.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

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

    /// Run the application until stopped or a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
