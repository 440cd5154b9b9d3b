use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare `cargo run` serves the site from the crate directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the stylesheet, resume and profile photo are resolved against.
    pub site_root: PathBuf,
    pub host: IpAddr,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let site_root = lookup("SITE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));

        let host = lookup("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("HOST must be a valid IP address")?;

        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Config {
            site_root,
            host,
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
