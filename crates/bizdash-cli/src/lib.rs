// NOTE: bizdash CLI layout
//
// Handlers own the page-level state (QueryState, data source, dialogs) and
// call into bizdash-core for everything that decides what a list shows.
// The presentation layer only converts core outputs into view models and
// paints them (console text/JSON/CSV, or the ratatui browser).
//
// The local JSON file stands in for the dashboard's REST collaborator:
// reads are paged and searched in memory, edits and deletes are written
// back to the file.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod source;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
