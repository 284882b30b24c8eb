//! Completion lookup boundary.
//!
//! The card does not know where completion status lives. It asks whatever
//! [`CompletionLookup`] the app put in context.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::QuestResult;
use crate::types::QuestId;

/// Asynchronous "has the current user completed this quest?" check.
pub trait CompletionLookup: Send + Sync {
    fn is_quest_completed<'a>(&'a self, id: &'a QuestId) -> BoxFuture<'a, QuestResult<bool>>;
}

/// Lookup shared between every card on screen
pub type SharedLookup = Arc<dyn CompletionLookup>;
