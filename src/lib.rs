//! # gitrefs
//!
//! Query and prune the branches and tags of a git repository by driving the
//! `git` command-line tool.
//!
//! ## Overview
//!
//! [`repository::GitRepository`] turns each operation (clone, fetch, list
//! branches, remove a branch or tag, map tags to branches and back, list
//! tags) into one or more git commands, runs them through an injected
//! [`executor::CommandExecutor`] and parses the captured stdout into lists of
//! strings. Errors from the executor are returned unchanged; nothing is
//! retried or cached.
//!
//! ```no_run
//! use std::sync::Arc;
//! use gitrefs::executor::SystemExecutor;
//! use gitrefs::repository::{GitRepository, Repository};
//!
//! let repo = GitRepository::new(
//!     "https://example.com/team/app.git",
//!     Arc::new(SystemExecutor::new()),
//! );
//! repo.fetch()?;
//! for branch in repo.tag_branches("v1.4.0")? {
//!     println!("{branch}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Platform-aware configuration directory and the stored CLI defaults.
pub mod config;

/// The [`CommandExecutor`](executor::CommandExecutor) capability and its
/// process-backed implementation.
pub mod executor;

/// Subcommand handlers for the `gitrefs` binary.
pub mod handlers;

/// Console logging setup and the log file of destructive operations.
pub mod logger;

/// Splitting and normalization of git's textual output.
pub mod output;

/// Repository operations built on top of an executor.
pub mod repository;
