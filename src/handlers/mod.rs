//! Command handler modules
//!
//! One function per CLI subcommand. Handlers talk to the repository through
//! the [`Repository`](crate::repository::Repository) trait and only deal with
//! presentation and confirmation.

pub mod config;
pub mod query;
pub mod remove;

pub use config::handle_config;
pub use query::{
    handle_branch_tags, handle_branches, handle_clone, handle_fetch, handle_tag_branches,
    handle_tags,
};
pub use remove::{handle_remove_branch, handle_remove_tag};

use anyhow::{Context, Result};

/// How list results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One entry per line
    Plain,
    /// A JSON array of strings
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        }
    }
}

/// Render a list of refs in the requested format
pub fn render_list(items: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(items.join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(items).context("Failed to serialize output")
        }
    }
}

/// Whether stdin and stdout are both attached to a terminal
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout)
}
