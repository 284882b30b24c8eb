//! Display rules for a quest card.
//!
//! Everything here is a pure function of a quest and its completion flag,
//! so the Dioxus card and the CLI print identical text.

use chrono::{DateTime, Utc};
use serde_json::Number;

use crate::types::{Reward, RewardMethod};

/// Format an expiry as `D Month YYYY` (e.g. `5 March 2024`).
///
/// The calendar date is taken in UTC and month names are English.
pub fn format_expiry(expires_on: DateTime<Utc>) -> String {
    expires_on.format("%-d %B %Y").to_string()
}

/// The reward block of a card: exactly one layout per method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardSummary {
    /// "Chance to Win ... Whitelist" over "Allocation ..."
    LuckyDraw { collection_name: String, amount: Number },
    /// "First ... to complete." over "Gets ... Whitelist"
    Fcfs { collection_name: String, amount: Number },
    /// Single muted line "Leaderboard: ..."
    Leaderboard { collection_name: String, amount: Number },
}

impl RewardSummary {
    pub fn for_reward(reward: &Reward) -> Self {
        let collection_name = reward.collection_name.clone();
        let amount = reward.amount.clone();
        match reward.method {
            RewardMethod::LuckyDraw => RewardSummary::LuckyDraw { collection_name, amount },
            RewardMethod::Fcfs => RewardSummary::Fcfs { collection_name, amount },
            RewardMethod::Leaderboard => RewardSummary::Leaderboard { collection_name, amount },
        }
    }

    /// Primary line of the reward block
    pub fn headline(&self) -> String {
        match self {
            RewardSummary::LuckyDraw { collection_name, .. } => {
                format!("Chance to Win {} Whitelist", collection_name)
            }
            RewardSummary::Fcfs { amount, .. } => format!("First {} to complete.", amount),
            RewardSummary::Leaderboard { collection_name, amount } => {
                format!("Leaderboard: {} {}", amount, collection_name)
            }
        }
    }

    /// Highlighted second line, absent for the leaderboard layout
    pub fn detail(&self) -> Option<String> {
        match self {
            RewardSummary::LuckyDraw { amount, .. } => Some(format!("Allocation {}", amount)),
            RewardSummary::Fcfs { collection_name, .. } => {
                Some(format!("Gets {} Whitelist", collection_name))
            }
            RewardSummary::Leaderboard { .. } => None,
        }
    }

    /// All lines in display order
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(self.headline()).chain(self.detail()).collect()
    }
}

/// Bottom row of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardFooter {
    /// Check icon; expiry is hidden
    Completed,
    /// "Expires on: ..." with the formatted date
    Expires(String),
}

impl CardFooter {
    pub fn new(completed: bool, expires_on: DateTime<Utc>) -> Self {
        if completed {
            CardFooter::Completed
        } else {
            CardFooter::Expires(format_expiry(expires_on))
        }
    }

    /// Plain-text rendition used outside the graphical card
    pub fn text(&self) -> String {
        match self {
            CardFooter::Completed => "\u{2713} Completed".to_string(),
            CardFooter::Expires(date) => format!("Expires on: {}", date),
        }
    }
}
