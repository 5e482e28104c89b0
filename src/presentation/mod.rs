//! Presentation layer rendering load results.

/// Console output.
pub mod console;

pub use console::ConsoleRenderer;
