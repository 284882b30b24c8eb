//! Task Drawer Component
//!
//! Side panel listing the tasks of the quest the user clicked. Open state
//! belongs to the parent; the drawer only asks to be closed.

use dioxus::prelude::*;
use questboard_core::Quest;

/// Properties for the TaskDrawer component
#[derive(Clone, PartialEq, Props)]
pub struct TaskDrawerProps {
    /// Parent-owned open flag
    pub open: bool,
    /// Quest whose tasks are listed
    #[props(default)]
    pub quest: Option<Quest>,
    /// Called with `false` when the close button is pressed
    pub set_open_tasks: EventHandler<bool>,
}

/// Slide-in task list for the selected quest
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TaskDrawer {
///         open: open_tasks(),
///         quest: selected(),
///         set_open_tasks: move |open| open_tasks.set(open),
///     }
/// }
/// ```
#[component]
pub fn TaskDrawer(props: TaskDrawerProps) -> Element {
    let set_open_tasks = props.set_open_tasks;

    let Some(quest) = props.quest.filter(|_| props.open) else {
        return rsx! {
            aside { class: "task-drawer", "aria-hidden": "true" }
        };
    };

    let title = quest.title.clone();

    rsx! {
        aside { class: "task-drawer task-drawer--open", "aria-hidden": "false",
            header { class: "task-drawer__header",
                h2 { class: "task-drawer__title", "{title}" }
                button {
                    class: "task-drawer__close",
                    "aria-label": "Close tasks",
                    onclick: move |_| set_open_tasks.call(false),
                    "\u{2715}"
                }
            }
            if quest.tasks.is_empty() {
                p { class: "task-drawer__empty", "No tasks yet" }
            } else {
                ol { class: "task-drawer__list",
                    {quest.tasks.iter().map(|task| {
                        let id = task.id.clone();
                        let task_title = task.title.clone();
                        let description = task.description.clone();
                        rsx! {
                            li { key: "{id}", class: "task-drawer__item",
                                span { class: "task-drawer__item-title", "{task_title}" }
                                if !description.is_empty() {
                                    p { class: "task-drawer__item-description", "{description}" }
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}
