//! Check Icon Component
//!
//! Filled circle with a tick, shown on completed quest cards.

use dioxus::prelude::*;

const CHECK_CIRCLE_PATH: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z";

/// Fixed-size completion check mark
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CheckIcon { size: 35 }
/// }
/// ```
#[component]
pub fn CheckIcon(
    /// Edge length in pixels
    #[props(default = 35)]
    size: u32,
) -> Element {
    rsx! {
        svg {
            class: "check-icon",
            width: "{size}",
            height: "{size}",
            "viewBox": "0 0 24 24",
            role: "img",
            "aria-label": "Completed",
            path { d: CHECK_CIRCLE_PATH, fill: "currentColor" }
        }
    }
}
