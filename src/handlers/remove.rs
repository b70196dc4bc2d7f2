//! Branch and tag removal handlers
//!
//! Removal touches `origin`, so both handlers ask for confirmation unless
//! `--yes` is given, and record what they did in the log file. The log file
//! never changes the outcome reported for the removal itself.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use inquire::Confirm;

use super::is_interactive;
use crate::logger;
use crate::repository::Repository;

fn confirm_removal(kind: &str, name: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    if !is_interactive() {
        bail!("Refusing to remove {kind} '{name}' without confirmation. Pass --yes to proceed.");
    }

    Confirm::new(&format!("Remove {kind} '{name}' locally and on origin?"))
        .with_default(false)
        .with_help_message("This cannot be undone from here")
        .prompt()
        .context("Failed to get confirmation")
}

fn record_removal(message: &str) {
    if let Err(e) = logger::log_to_file(message) {
        log::warn!("Could not record '{message}' in the log file: {e:#}");
    }
}

/// Handle remove-branch command
pub fn handle_remove_branch(repo: &dyn Repository, branch: &str, assume_yes: bool) -> Result<()> {
    if !confirm_removal("branch", branch, assume_yes)? {
        println!("{}", "Removal cancelled.".yellow());
        return Ok(());
    }

    if let Err(e) = repo.remove_branch(branch) {
        record_removal(&format!("remove-branch {branch} failed: {e}"));
        return Err(e);
    }

    record_removal(&format!("removed branch {branch}"));
    println!("{} Removed branch {}", "✓".green(), branch.bold());
    Ok(())
}

/// Handle remove-tag command
pub fn handle_remove_tag(repo: &dyn Repository, tag: &str, assume_yes: bool) -> Result<()> {
    if !confirm_removal("tag", tag, assume_yes)? {
        println!("{}", "Removal cancelled.".yellow());
        return Ok(());
    }

    if let Err(e) = repo.remove_tag(tag) {
        record_removal(&format!("remove-tag {tag} failed: {e}"));
        return Err(e);
    }

    record_removal(&format!("removed tag {tag}"));
    println!("{} Removed tag {}", "✓".green(), tag.bold());
    Ok(())
}
