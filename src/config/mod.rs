use anyhow::{anyhow, Result};
use std::str::FromStr;

use crate::app::ids::IdStrategy;

pub const DEFAULT_MAX_TEXT_CHARS: usize = 1000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub id_strategy: IdStrategy,
    pub max_text_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so callers other than
    /// the process environment (tests, embedders) can supply values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_text_chars: usize = env_or_parse(&lookup, "FEED_MAX_TEXT_CHARS", "1000")?;
        if max_text_chars == 0 {
            return Err(anyhow!("invalid FEED_MAX_TEXT_CHARS: must be at least 1"));
        }

        Ok(Self {
            id_strategy: env_or_parse(&lookup, "FEED_ID_STRATEGY", IdStrategy::default().as_str())?,
            max_text_chars,
        })
    }
}

fn env_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn env_or_parse<F, T>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let value = env_or(lookup, key, default);
    value
        .trim()
        .parse::<T>()
        .map_err(|err| anyhow!("invalid {}: {}", key, err))
}
