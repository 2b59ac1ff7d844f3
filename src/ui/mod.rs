//! Terminal rendering: styles, layout, boxed tables and prompts.

pub mod layout;
pub mod paint;
pub mod prompt;
pub mod screen;
mod table;

pub use layout::{Layout, Section};
pub use paint::{ColorSpec, Paint, StyleError, StyleToken};
pub use prompt::{SelectPrompt, yes_no};
pub use screen::{Screen, TermScreen};
pub use table::{BorderGlyphs, TableError, TableOptions, TableRenderer, log_table};
