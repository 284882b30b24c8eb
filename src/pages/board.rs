//! Quest board - every quest in the catalog as a card grid.
//!
//! Owns the drawer state the cards write to: `open_tasks` and the
//! selected quest.

use dioxus::prelude::*;
use questboard_core::Quest;
use questboard_ui::{QuestCard, TaskDrawer};

use crate::context::use_catalog;

/// Whether the drawer is open on `quest` rather than on some other card.
fn drawer_open_for(open: bool, selected: Option<&Quest>, quest: &Quest) -> bool {
    open && selected.is_some_and(|s| s.id == quest.id)
}

/// Quest board page component.
#[component]
pub fn QuestBoard() -> Element {
    let catalog = use_catalog();
    let mut open_tasks = use_signal(|| false);
    let mut selected = use_signal(|| Option::<Quest>::None);

    let quests = catalog.quests().to_vec();
    let count = quests.len();

    rsx! {
        main { class: "quest-board",
            header { class: "quest-board__header",
                h1 { class: "page-title", "Quests" }
                span { class: "quest-board__count", "{count} available" }
            }

            if quests.is_empty() {
                p { class: "empty-state", "No quests right now" }
            } else {
                div { class: "quest-grid",
                    {quests.into_iter().map(|quest| {
                        let key = quest.id.to_string();
                        let expanded = drawer_open_for(open_tasks(), selected.read().as_ref(), &quest);
                        rsx! {
                            QuestCard {
                                key: "{key}",
                                quest,
                                open_tasks: expanded,
                                set_open_tasks: move |open| open_tasks.set(open),
                                set_quest: move |quest: Quest| {
                                    tracing::debug!("Selected quest {}", quest.id);
                                    selected.set(Some(quest));
                                },
                            }
                        }
                    })}
                }
            }

            TaskDrawer {
                open: open_tasks(),
                quest: selected(),
                set_open_tasks: move |open| open_tasks.set(open),
            }
        }
    }
}
