//! Questboard Core Library
//!
//! Quest data model, reward dispatch and the completion lookup boundary.
//!
//! ## Overview
//!
//! A quest is a campaign with a reward and an expiry date. The UI shows one
//! card per quest and asks a [`CompletionLookup`] once per card whether the
//! current user has already completed it. Everything the card displays is
//! derived here so the desktop app and the CLI render the same text.
//!
//! ## Quick Start
//!
//! ```ignore
//! use questboard_core::{CardFooter, QuestCatalog, RewardSummary};
//!
//! let catalog = QuestCatalog::sample();
//! for quest in catalog.quests() {
//!     let summary = RewardSummary::for_reward(&quest.reward);
//!     println!("{}: {}", quest.title, summary.headline());
//!     println!("{}", CardFooter::new(false, quest.expires_on).text());
//! }
//! ```

pub mod catalog;
pub mod completion;
pub mod display;
pub mod error;
pub mod lookup;
pub mod types;

// Re-exports
pub use catalog::QuestCatalog;
pub use completion::{check_completion, CompletionCheck, CompletionOutcome};
pub use display::{format_expiry, CardFooter, RewardSummary};
pub use error::{QuestError, QuestResult};
pub use lookup::{CompletionLookup, SharedLookup};
pub use types::*;
