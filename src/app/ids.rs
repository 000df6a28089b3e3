use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ulid::Ulid;
use uuid::Uuid;

/// How the store mints ids for new posts and responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Ulid,
    Sequential,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uuid => "uuid",
            Self::Ulid => "ulid",
            Self::Sequential => "sequential",
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(Self::Uuid),
            "ulid" => Ok(Self::Ulid),
            "sequential" => Ok(Self::Sequential),
            other => Err(format!(
                "unknown id strategy '{}', expected uuid, ulid or sequential",
                other
            )),
        }
    }
}

/// Store-owned id source. Ids are unique across the whole store and are
/// never handed out twice, even after the record they named is deleted.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    strategy: IdStrategy,
    next_post: u64,
    next_response: u64,
}

impl IdAllocator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            next_post: 1,
            next_response: 1,
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    pub fn next_post_id(&mut self) -> String {
        match self.strategy {
            IdStrategy::Sequential => {
                let id = format!("P{}", self.next_post);
                self.next_post += 1;
                id
            }
            _ => self.random_id(),
        }
    }

    pub fn next_response_id(&mut self) -> String {
        match self.strategy {
            IdStrategy::Sequential => {
                let id = format!("R{}", self.next_response);
                self.next_response += 1;
                id
            }
            _ => self.random_id(),
        }
    }

    fn random_id(&self) -> String {
        match self.strategy {
            IdStrategy::Ulid => Ulid::new().to_string(),
            _ => Uuid::new_v4().to_string(),
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
