use dioxus::prelude::*;

use crate::context::{get_catalog_path, load_catalog, provide_catalog};
use crate::pages::QuestBoard;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Quest board with every quest in the catalog
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    QuestBoard {},
}

/// Root application component.
///
/// Provides global styles, catalog context, and routing.
#[component]
pub fn App() -> Element {
    let catalog = use_hook(|| load_catalog(get_catalog_path().as_deref()));
    provide_catalog(catalog);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
