//! Static bundle server.
//!
//! Serves the compiled web bundle with a fallback to `index.html` for client
//! routes, so deep links like `/contacts?tab=2` load the app.

use std::borrow::Cow;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rust_embed::RustEmbed;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{self, ServeConfig};

/// Web bundle embedded at build time (`dx build` output copied to `dist/`).
#[derive(RustEmbed)]
#[folder = "dist/"]
#[allow_missing = true]
struct Bundle;

const INDEX: &str = "index.html";

#[derive(Clone)]
struct ServeState {
    dist_dir: PathBuf,
}

/// Initialize logging, load configuration and serve until shutdown.
pub async fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keaz_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Keaz dashboard v{}", env!("KEAZ_VERSION"));

    let config = config::load_config()?;
    tracing::info!(
        "Configuration loaded, port: {}, dist: {}",
        config.port,
        config.dist_dir.display()
    );

    let app = router(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// HTTP routes: health check plus the bundle with SPA fallback.
pub fn router(config: &ServeConfig) -> Router {
    let state = Arc::new(ServeState {
        dist_dir: config.dist_dir.clone(),
    });

    Router::new()
        .route("/healthz", get(healthz))
        .fallback(static_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("KEAZ_VERSION"),
        "git_sha": env!("KEAZ_GIT_SHA"),
    }))
}

async fn static_handler(State(state): State<Arc<ServeState>>, uri: Uri) -> Response {
    let path = match uri.path().trim_start_matches('/') {
        "" => INDEX,
        path => path,
    };

    if let Some(response) = asset_response(&state.dist_dir, path).await {
        return response;
    }

    // Paths without an extension are client routes
    if Path::new(path).extension().is_none() {
        if let Some(response) = asset_response(&state.dist_dir, INDEX).await {
            return response;
        }
        tracing::warn!("No {} in the embedded bundle or {}", INDEX, state.dist_dir.display());
    }

    (StatusCode::NOT_FOUND, "Not found").into_response()
}

async fn asset_response(dist_dir: &Path, path: &str) -> Option<Response> {
    let body = load_asset(dist_dir, path).await?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(([(header::CONTENT_TYPE, mime.as_ref().to_string())], body.into_owned()).into_response())
}

/// Embedded bundle first, then the bundle directory on disk.
async fn load_asset(dist_dir: &Path, path: &str) -> Option<Cow<'static, [u8]>> {
    if let Some(file) = Bundle::get(path) {
        return Some(file.data);
    }

    let relative = safe_relative(path)?;
    match tokio::fs::read(dist_dir.join(relative)).await {
        Ok(bytes) => Some(Cow::Owned(bytes)),
        Err(e) => {
            tracing::trace!("Asset {} not on disk: {}", path, e);
            None
        }
    }
}

/// Relative path below the bundle root, or `None` if it escapes it.
fn safe_relative(path: &str) -> Option<PathBuf> {
    let candidate = Path::new(path);
    candidate
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
        .then(|| candidate.to_path_buf())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
