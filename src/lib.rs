//! Boxed, colorized key/value tables for the terminal.
//!
//! ```no_run
//! use logtable::ui::{TableOptions, log_table};
//!
//! log_table(TableOptions {
//!     title: "Status".to_string(),
//!     clear_screen: false,
//!     ..TableOptions::default()
//! })?;
//! # Ok::<(), logtable::ui::TableError>(())
//! ```

pub mod config;
pub mod ui;
