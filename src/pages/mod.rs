//! Page components for Questboard.

mod board;

pub use board::QuestBoard;
