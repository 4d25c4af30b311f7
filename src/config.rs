use std::{env, path::PathBuf};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_HIGH_SCORE_PATH: &str = "garden-highscore.json";

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub high_score_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            bind_addr: non_empty("GARDEN_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            high_score_path: non_empty("GARDEN_HIGH_SCORE_PATH")
                .unwrap_or_else(|| DEFAULT_HIGH_SCORE_PATH.into())
                .into(),
        }
    }
}
