use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only a malformed `PORT` fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON profile file. `None` means the profile bundled into the binary.
    pub profile_path: Option<PathBuf>,
    /// Directory holding the photo, resume PDF and project images.
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            profile_path: optional_env("PROFILE_PATH").map(PathBuf::from),
            assets_dir: optional_env("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("assets")),
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
