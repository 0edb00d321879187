//! CLI module
//!
//! Command-line interface for querying the USAJOBS API.
//!
//! # Actions
//!
//! - `search` - Current job announcements
//! - `historicjoa` - Historic job announcements
//! - `announcementtext` - Historic announcement text
//!
//! Responses are printed as JSON, one page per line unless `--prettify`.

mod commands;
mod runner;

pub use commands::{Action, Cli};
pub use runner::Runner;
