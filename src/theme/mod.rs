//! Styling for Questboard.

mod styles;

pub use styles::GLOBAL_STYLES;
