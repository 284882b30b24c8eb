//! Questboard UI Components
//!
//! Dioxus components for browsing quests:
//!
//! - [`QuestCard`]: one quest with its reward and expiry, checks completion
//!   once when it mounts
//! - [`QuestCardView`]: the stateless markup behind a card
//! - [`TaskDrawer`]: side panel listing the selected quest's tasks
//!
//! Cards read their [`questboard_core::SharedLookup`] from context; provide
//! one with `use_context_provider` above the first card.

pub mod components;
pub mod context;

pub use components::*;
pub use context::use_completion_lookup;
