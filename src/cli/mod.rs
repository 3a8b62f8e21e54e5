//! CLI module
//!
//! Command-line interface for exploring a collection.
//!
//! # Commands
//!
//! - `explore` - Interactive menu-driven session (default)
//! - `page` - Print one page as JSON
//! - `get` - Print one record as JSON
//! - `dump` - Load everything and export to CSV or JSON

mod commands;
mod menu;
mod render;
mod repl;
mod runner;

pub use commands::{Cli, Commands};
pub use menu::{parse_menu_input, resolve_pending, MenuInput, PendingArgument};
pub use render::{render_menu_header, render_outcome, MENU};
pub use repl::Repl;
pub use runner::Runner;

#[cfg(test)]
mod tests;
