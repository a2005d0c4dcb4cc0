//! CLI commands and argument parsing

use crate::pagination::NextUrlMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Fetch a paginated REST collection as one JSON array
#[derive(Parser, Debug)]
#[command(name = "pagechain")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every page of a collection and print the merged array
    Fetch {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fetch the user roster of a course
    Users {
        /// Course code
        #[arg(long)]
        course: Option<u64>,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check whether a Content-Type header value is accepted as text
    ContentType {
        /// Header value, e.g. "application/json; charset=utf-8"
        value: String,
    },
}

/// Where to fetch from; each flag overrides the config file
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Seed URL of the first page
    #[arg(long)]
    pub url: Option<String>,

    /// API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Resource path appended to the base URL
    #[arg(long)]
    pub path: Option<String>,

    /// Bearer token (falls back to PAGECHAIN_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Extra request header as NAME:VALUE (repeatable)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// How next links become request URLs
    #[arg(long, value_enum)]
    pub next_url: Option<NextUrlMode>,

    /// Fail if the chain needs more than this many pages
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Whole-chain timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// User agent override
    #[arg(long)]
    pub user_agent: Option<String>,
}

/// Where and how to write the merged array
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}
