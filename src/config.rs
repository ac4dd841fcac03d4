use chrono::Duration;
use std::{env, path::PathBuf};

/// Process-wide configuration, read once at startup and never mutated.
///
/// Every value has a development default so the server starts with no
/// environment at all; production deployments are expected to override at
/// least `JWT_SECRET`.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_lifetime: Duration,
    /// question bank consumed once by the seed loader
    pub question_bank: PathBuf,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://xuetang.db?mode=rwc".to_owned()),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-very-secret-key-for-project".to_owned()),
            token_lifetime: Duration::hours(24),
            question_bank: env::var_os("QUESTION_BANK")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("tiku.json")),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_owned()),
        }
    }
}
