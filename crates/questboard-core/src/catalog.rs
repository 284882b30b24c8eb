//! Read-only quest catalog.
//!
//! Quests and the current user's completions are loaded from a JSON file:
//!
//! ```json
//! {
//!   "quests": [ { "id": "q-1", "title": "...", "reward": { ... }, ... } ],
//!   "completed": ["q-1"]
//! }
//! ```
//!
//! The catalog doubles as the [`CompletionLookup`] the desktop app hands to
//! its cards.

use std::collections::HashSet;
use std::path::Path;

use chrono::{Duration, Utc};
use futures::future::BoxFuture;
use parking_lot::RwLock;
use serde::Deserialize;

use crate::error::{QuestError, QuestResult};
use crate::lookup::CompletionLookup;
use crate::types::{Quest, QuestId, QuestTask, Reward, RewardMethod};

#[derive(Deserialize)]
struct CatalogFile {
    quests: Vec<Quest>,
    #[serde(default)]
    completed: Vec<QuestId>,
}

/// In-memory quest list plus completion set
#[derive(Debug, Default)]
pub struct QuestCatalog {
    quests: Vec<Quest>,
    completed: RwLock<HashSet<QuestId>>,
}

impl QuestCatalog {
    /// Build a catalog from quests and the ids already completed
    pub fn new(quests: Vec<Quest>, completed: impl IntoIterator<Item = QuestId>) -> Self {
        Self {
            quests,
            completed: RwLock::new(completed.into_iter().collect()),
        }
    }

    /// Parse a catalog document
    pub fn from_json(json: &str) -> QuestResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::new(file.quests, file.completed))
    }

    /// Read and parse a catalog file
    pub fn load(path: impl AsRef<Path>) -> QuestResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            quests = catalog.quests.len(),
            "Loaded quest catalog"
        );
        Ok(catalog)
    }

    /// Built-in demo catalog: one quest per reward method, the first completed
    pub fn sample() -> Self {
        let soon = Utc::now() + Duration::days(14);
        let later = Utc::now() + Duration::days(45);

        let quests = vec![
            Quest::new(
                "Genesis Explorer",
                "Bridge your first asset and say hello in the community channel.",
                "https://images.unsplash.com/photo-1462331940025-496dfbfc7564",
                soon,
                Reward {
                    method: RewardMethod::LuckyDraw,
                    amount: 100.into(),
                    collection_name: "Nebula Keys".to_string(),
                },
            )
            .with_id("genesis-explorer")
            .with_tasks(vec![
                task("bridge", "Bridge an asset", "Move any token onto the network."),
                task("hello", "Say hello", "Post an introduction in the community channel."),
            ]),
            Quest::new(
                "Early Minter",
                "Mint a pass before the gates close.",
                "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa",
                later,
                Reward {
                    method: RewardMethod::Fcfs,
                    amount: 250.into(),
                    collection_name: "Orbit Pass".to_string(),
                },
            )
            .with_id("early-minter")
            .with_tasks(vec![task("mint", "Mint a pass", "")]),
            Quest::new(
                "Season Climber",
                "Climb the weekly rankings by completing daily tasks.",
                "https://images.unsplash.com/photo-1451187580459-43490279c0fa",
                later,
                Reward {
                    method: RewardMethod::Leaderboard,
                    amount: 10.into(),
                    collection_name: "Crest Badges".to_string(),
                },
            )
            .with_id("season-climber"),
        ];

        Self::new(quests, [QuestId::from("genesis-explorer")])
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn get(&self, id: &QuestId) -> Option<&Quest> {
        self.quests.iter().find(|q| &q.id == id)
    }

    /// Record a completion for the current user
    pub fn mark_completed(&self, id: &QuestId) -> QuestResult<()> {
        if self.get(id).is_none() {
            return Err(QuestError::QuestNotFound(id.to_string()));
        }
        self.completed.write().insert(id.clone());
        Ok(())
    }

    fn completed_now(&self, id: &QuestId) -> QuestResult<bool> {
        if self.get(id).is_none() {
            return Err(QuestError::QuestNotFound(id.to_string()));
        }
        Ok(self.completed.read().contains(id))
    }
}

impl CompletionLookup for QuestCatalog {
    fn is_quest_completed<'a>(&'a self, id: &'a QuestId) -> BoxFuture<'a, QuestResult<bool>> {
        Box::pin(async move { self.completed_now(id) })
    }
}

fn task(id: &str, title: &str, description: &str) -> QuestTask {
    QuestTask {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}
