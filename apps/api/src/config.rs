use anyhow::{Context, Result};

/// Origins the known frontends are served from; always allowed.
/// `ALLOWED_ORIGINS` (comma-separated) extends this list per deployment.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://job-matcher-app-dusky.vercel.app",
    "http://localhost:3000",
    "https://localhost:3000",
];

/// Application configuration loaded from environment variables.
/// Everything has a default; startup only fails on values that cannot parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut allowed_origins: Vec<String> = DEFAULT_ALLOWED_ORIGINS
            .iter()
            .map(|origin| origin.to_string())
            .collect();

        if let Ok(extra) = std::env::var("ALLOWED_ORIGINS") {
            allowed_origins.extend(
                extra
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(|origin| origin.to_string()),
            );
        }

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            allowed_origins,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
