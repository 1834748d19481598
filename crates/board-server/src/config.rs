use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use board_db::DEFAULT_READER_POOL_SIZE;

/// Process settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub db_readers: usize,
    pub dev_routes: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BOARD_HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = match lookup("BOARD_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("BOARD_PORT is not a valid port: {raw}"))?,
            None => 8000,
        };

        let db_path = lookup("DB_DATABASE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("board.db"));

        let db_readers = match lookup("DB_READERS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DB_READERS is not a number: {raw}"))?,
            None => DEFAULT_READER_POOL_SIZE,
        };
        if db_readers == 0 {
            bail!("DB_READERS must be at least 1");
        }

        let dev_routes = match lookup("BOARD_DEV_ROUTES") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("BOARD_DEV_ROUTES is not a boolean: {raw}"))?,
            None => true,
        };

        Ok(Self {
            host,
            port,
            db_path,
            db_readers,
            dev_routes,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
