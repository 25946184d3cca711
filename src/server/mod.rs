//! HTTP server exposing the pixel mapping API
//!
//! Builds the axum router (routes, CORS, static files, body limit) and runs
//! it until Ctrl-C.

mod responses;
mod routes;
mod upload;

use std::path::Path;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use log::{info, warn};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::api::PixelMapper;
use crate::config::ServerConfig;
use crate::errors::PixelResult;

pub use routes::{AppState, FormatList, COORDINATES_FIELD, REGION_FIELD};
pub use upload::{UploadForm, FILE_FIELD};

/// Build the application router for a configuration
pub fn build_router(config: &ServerConfig) -> Router {
    let state = AppState {
        mapper: Arc::new(
            PixelMapper::new(config.decode_options()).with_max_region_pixels(config.max_region_pixels),
        ),
    };

    let mut router = Router::new()
        .route("/", get(routes::root))
        .route("/formats", get(routes::formats))
        .route("/upload", post(routes::upload))
        .route("/extract-pixels", post(routes::extract_pixels))
        .route("/extract-region", post(routes::extract_region))
        .route("/region-stats", post(routes::region_stats))
        .route("/export-pixels", post(routes::export_pixels));

    if Path::new(&config.static_dir).is_dir() {
        info!("Serving static files from {}", config.static_dir);
        router = router.nest_service("/static", ServeDir::new(&config.static_dir));
    } else {
        warn!("Static directory {} not found, /static is disabled", config.static_dir);
    }

    router
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(middleware::from_fn(log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind to the configured address and serve until shutdown
pub async fn serve(config: ServerConfig) -> PixelResult<()> {
    let addr = config.socket_addr()?;
    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Pixel Mapper Pro listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    info!("{} {} -> {}", method, path, response.status().as_u16());
    response
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
