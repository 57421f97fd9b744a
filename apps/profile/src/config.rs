use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::store::PersistPolicy;

/// Host configuration loaded from environment variables (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one JSON file per profile key.
    pub data_dir: PathBuf,
    pub persist_max_retries: u32,
    pub persist_backoff_ms: u64,
    /// Template used for the startup preview.
    pub resume_template: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_dir: PathBuf::from(env_or("PROFILE_DATA_DIR", "./profile-data")),
            persist_max_retries: env_or("PERSIST_MAX_RETRIES", "2")
                .parse::<u32>()
                .context("PERSIST_MAX_RETRIES must be a non-negative integer")?,
            persist_backoff_ms: env_or("PERSIST_BACKOFF_MS", "100")
                .parse::<u64>()
                .context("PERSIST_BACKOFF_MS must be a non-negative integer")?,
            resume_template: env_or("RESUME_TEMPLATE", "Professional"),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn persist_policy(&self) -> PersistPolicy {
        PersistPolicy {
            max_retries: self.persist_max_retries,
            base_backoff: Duration::from_millis(self.persist_backoff_ms),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
