mod assets;
mod config;
mod content;
mod errors;
mod models;
mod page;
mod render;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assets::AssetPaths;
use crate::config::Config;
use crate::content::SiteContent;
use crate::page::build_page;
use crate::render::HtmlRenderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("cv_site={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV site v{}", env!("CARGO_PKG_VERSION"));
    info!("Site root: {}", config.site_root.display());

    // Assets are loaded and the page composed once; requests only read the result.
    let paths = AssetPaths::under(&config.site_root);
    let mut renderer = HtmlRenderer::new();
    build_page(&paths, &SiteContent::authored(), &mut renderer)
        .context("Failed to build the CV page")?;
    let page = renderer.finish().context("Failed to finish the CV page")?;
    info!(
        "Rendered page ({} bytes of HTML, {} linked files)",
        page.html.len(),
        page.files.len()
    );

    let app = build_router(AppState::new(page)).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.host, config.port);
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
