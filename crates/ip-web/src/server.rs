//! Static file server for the Trunk-built site

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use http::StatusCode;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};

/// Routes: `/healthz`, then files under `site_root`, then `index.html` for
/// anything else so client-side routes resolve.
pub fn router(site_root: &Path) -> Router {
    let index = ServeFile::new(site_root.join("index.html"));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(site_root).fallback(index))
        .layer(CompressionLayer::new())
}

async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

pub async fn serve(addr: SocketAddr, site_root: &Path) -> Result<()> {
    if !site_root.join("index.html").exists() {
        leptos::logging::warn!(
            "No index.html under {} (run `trunk build` first?)",
            site_root.display()
        );
    }

    let app = router(site_root);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    leptos::logging::log!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
