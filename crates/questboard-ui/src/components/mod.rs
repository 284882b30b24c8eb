//! Reusable quest UI components

mod check_icon;
mod quest_card;
mod task_drawer;

pub use check_icon::*;
pub use quest_card::*;
pub use task_drawer::*;
