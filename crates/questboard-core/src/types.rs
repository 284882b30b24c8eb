//! Core types for Questboard

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ulid::Ulid;

/// Opaque quest identifier.
///
/// Providers may use any string; fresh ids are ULIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestId(pub String);

impl QuestId {
    /// Create a new QuestId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for QuestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for QuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for QuestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// How a quest's reward is granted.
///
/// Wire tags match exactly; anything other than `"LuckyDraw"` or `"FCFS"`
/// (including the empty string) is read as [`RewardMethod::Leaderboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RewardMethod {
    /// Random allocation among completers
    LuckyDraw,
    /// First come, first served
    Fcfs,
    /// Ranking based; also the fallback for unrecognized tags
    #[default]
    Leaderboard,
}

impl RewardMethod {
    /// Wire tag for this method
    pub fn tag(&self) -> &'static str {
        match self {
            RewardMethod::LuckyDraw => "LuckyDraw",
            RewardMethod::Fcfs => "FCFS",
            RewardMethod::Leaderboard => "Leaderboard",
        }
    }

    /// Parse a wire tag, falling back to Leaderboard
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "LuckyDraw" => RewardMethod::LuckyDraw,
            "FCFS" => RewardMethod::Fcfs,
            "Leaderboard" => RewardMethod::Leaderboard,
            other => {
                tracing::debug!(tag = other, "unrecognized reward method, using Leaderboard");
                RewardMethod::Leaderboard
            }
        }
    }
}

impl From<String> for RewardMethod {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<RewardMethod> for String {
    fn from(method: RewardMethod) -> Self {
        method.tag().to_string()
    }
}

impl std::fmt::Display for RewardMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Reward attached to a quest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// How the reward is granted
    #[serde(default)]
    pub method: RewardMethod,
    /// Allocation size or number of winners; any JSON number, shown as written
    pub amount: serde_json::Number,
    /// Display name of the whitelisted collection
    pub collection_name: String,
}

/// A single step the drawer lists for a quest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A displayable campaign with a reward and an expiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    /// Unique identifier, also the completion lookup key
    pub id: QuestId,
    pub title: String,
    pub description: String,
    /// Background image URL
    pub display_image: String,
    /// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (midnight UTC)
    #[serde(deserialize_with = "deserialize_expiry")]
    pub expires_on: DateTime<Utc>,
    pub reward: Reward,
    /// Steps shown in the task drawer
    #[serde(default)]
    pub tasks: Vec<QuestTask>,
}

impl Quest {
    /// Create a quest with a fresh id and no tasks
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        display_image: impl Into<String>,
        expires_on: DateTime<Utc>,
        reward: Reward,
    ) -> Self {
        Self {
            id: QuestId::new(),
            title: title.into(),
            description: description.into(),
            display_image: display_image.into(),
            expires_on,
            reward,
            tasks: Vec::new(),
        }
    }

    /// Builder-style id override
    pub fn with_id(mut self, id: impl Into<QuestId>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder-style task list
    pub fn with_tasks(mut self, tasks: Vec<QuestTask>) -> Self {
        self.tasks = tasks;
        self
    }
}

/// Parse an expiry given either as RFC 3339 or as a calendar date.
pub fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn deserialize_expiry<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_expiry(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid expiry date: {raw}")))
}
