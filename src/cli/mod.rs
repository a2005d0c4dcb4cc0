//! CLI module
//!
//! Command-line interface for fetching paginated collections.
//!
//! # Commands
//!
//! - `fetch` - Fetch any Link-paginated JSON array collection
//! - `users` - Fetch a course roster as `{id, name, login_id}` records
//! - `content-type` - Check whether a Content-Type value is accepted

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputArgs, SourceArgs};
pub use runner::Runner;
