//! One-shot completion check for a quest card.
//!
//! A card asks for its completion status once, when it is created. The
//! answer can arrive after the card is gone, so each check carries a
//! cancellation token the card trips when it is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::lookup::CompletionLookup;
use crate::types::QuestId;

/// Result of a single completion check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Lookup answered true
    Completed,
    /// Lookup answered false
    Incomplete,
    /// Lookup errored; already logged
    Failed,
    /// Owner went away before the answer arrived
    Cancelled,
}

impl CompletionOutcome {
    /// Whether the card should switch to its completed state
    pub fn is_completed(&self) -> bool {
        matches!(self, CompletionOutcome::Completed)
    }
}

/// Guard that lets a check start at most once per owner.
///
/// Cloning shares the guard.
#[derive(Debug, Clone, Default)]
pub struct CompletionCheck {
    started: Arc<AtomicBool>,
    cancel: CancellationToken,
}

impl CompletionCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the single run. Returns the token to race against, or `None`
    /// if a run was already claimed.
    pub fn begin(&self) -> Option<CancellationToken> {
        if self.started.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(self.cancel.clone())
    }

    pub fn has_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    /// Discard any in-flight result
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Ask `lookup` about `id`, racing `cancel`.
///
/// Failures are logged and reported as [`CompletionOutcome::Failed`]; there
/// is no retry.
pub async fn check_completion(
    lookup: &dyn CompletionLookup,
    id: &QuestId,
    cancel: &CancellationToken,
) -> CompletionOutcome {
    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::debug!(quest = %id, "Completion check cancelled");
            return CompletionOutcome::Cancelled;
        }
        result = lookup.is_quest_completed(id) => result,
    };

    if cancel.is_cancelled() {
        return CompletionOutcome::Cancelled;
    }

    match result {
        Ok(true) => {
            tracing::debug!(quest = %id, "Quest completed");
            CompletionOutcome::Completed
        }
        Ok(false) => CompletionOutcome::Incomplete,
        Err(e) => {
            tracing::warn!(quest = %id, error = %e, "Completion lookup failed");
            CompletionOutcome::Failed
        }
    }
}
