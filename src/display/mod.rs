//! Terminal display module
//!
//! Builds ordered display rows and renders them as tables with automatic
//! TTY detection.

mod formatter;
mod rows;
mod terminal;

pub use formatter::print_table;
pub use rows::{build_search_rows, build_world_clock_rows};
