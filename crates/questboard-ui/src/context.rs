//! Completion lookup context.
//!
//! ## Usage
//!
//! ```ignore
//! // In the app shell
//! let lookup: SharedLookup = Arc::new(catalog);
//! use_context_provider(|| lookup);
//!
//! // In a card
//! let lookup = use_completion_lookup();
//! ```

use dioxus::prelude::*;
use questboard_core::SharedLookup;

/// Hook to access the completion lookup from context.
pub fn use_completion_lookup() -> SharedLookup {
    use_context::<SharedLookup>()
}
