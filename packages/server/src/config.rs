use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Default request body limit (16 MiB)
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openai_api_key: String,
    pub openai_model: String,
    /// Root directory of the local object store (one directory per bucket)
    pub storage_root: PathBuf,
    /// Bucket used by `GET /info` and `/health` when none is given
    pub default_bucket: String,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY must be set")?,
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            storage_root: env::var("STORAGE_ROOT")
                .unwrap_or_else(|_| "./data".to_string())
                .into(),
            default_bucket: env::var("DEFAULT_BUCKET")
                .context("DEFAULT_BUCKET must be set")?,
            max_upload_bytes: match env::var("MAX_UPLOAD_BYTES") {
                Ok(value) => value
                    .parse()
                    .context("MAX_UPLOAD_BYTES must be a valid number")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}
