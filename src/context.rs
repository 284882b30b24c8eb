//! Catalog context for Questboard.
//!
//! The app shell loads one [`QuestCatalog`] and shares it two ways: as the
//! concrete catalog for listing quests, and as the [`SharedLookup`] every
//! quest card asks for completion status.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! provide_catalog(load_catalog(get_catalog_path().as_deref()));
//!
//! // In child components
//! let catalog = use_catalog();
//! ```

use std::path::Path;
use std::sync::Arc;

use dioxus::prelude::*;
use questboard_core::{QuestCatalog, SharedLookup};

/// Catalog shared across the component tree
pub type SharedCatalog = Arc<QuestCatalog>;

pub use crate::get_catalog_path;

/// Load the catalog at `path`, or the sample catalog.
///
/// A catalog that fails to load is logged and replaced by the sample.
pub fn load_catalog(path: Option<&Path>) -> SharedCatalog {
    let Some(path) = path else {
        return Arc::new(QuestCatalog::sample());
    };
    match QuestCatalog::load(path) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            tracing::error!("Failed to load catalog {:?}: {}", path, e);
            Arc::new(QuestCatalog::sample())
        }
    }
}

/// Provide the catalog and its completion lookup to all descendants.
pub fn provide_catalog(catalog: SharedCatalog) {
    let lookup: SharedLookup = catalog.clone();
    use_context_provider(|| catalog);
    use_context_provider(|| lookup);
}

/// Hook to access the quest catalog from context.
pub fn use_catalog() -> SharedCatalog {
    use_context::<SharedCatalog>()
}
