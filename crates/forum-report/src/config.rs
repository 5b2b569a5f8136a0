use anyhow::{Context, Result};
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "questions.db";
const DEFAULT_LIMIT: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: PathBuf,
    pub limit: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("FORUM_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let limit = match lookup("FORUM_REPORT_LIMIT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("FORUM_REPORT_LIMIT is not a number: {raw:?}"))?,
            None => DEFAULT_LIMIT,
        };

        Ok(Self {
            db_path: PathBuf::from(db_path),
            limit,
        })
    }
}
