//! Clone, fetch and listing handlers

use anyhow::Result;
use colored::Colorize;

use super::{render_list, OutputFormat};
use crate::repository::Repository;

fn print_list(title: &str, items: &[String], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Plain {
        if items.is_empty() {
            println!("{}", format!("No {title} found").dimmed());
            return Ok(());
        }
        log::info!("{} {}", items.len(), title);
    }

    println!("{}", render_list(items, format)?);
    Ok(())
}

/// Handle clone command
pub fn handle_clone(repo: &dyn Repository, url: &str) -> Result<()> {
    println!("{} {}", "Cloning".cyan(), url);
    repo.clone_repo()?;
    println!("{} Cloned {}", "✓".green(), url);
    Ok(())
}

/// Handle fetch command
pub fn handle_fetch(repo: &dyn Repository) -> Result<()> {
    repo.fetch()?;
    println!("{} Fetched origin", "✓".green());
    Ok(())
}

/// Handle branches command
pub fn handle_branches(repo: &dyn Repository, format: OutputFormat) -> Result<()> {
    let branches = repo.branch_list()?;
    print_list("remote branches", &branches, format)
}

/// Handle tag-branches command
pub fn handle_tag_branches(repo: &dyn Repository, tag: &str, format: OutputFormat) -> Result<()> {
    let branches = repo.tag_branches(tag)?;
    print_list(&format!("branches containing {tag}"), &branches, format)
}

/// Handle branch-tags command
pub fn handle_branch_tags(repo: &dyn Repository, branch: &str, format: OutputFormat) -> Result<()> {
    let tags = repo.branch_tags(branch)?;
    print_list(&format!("tags for {branch}"), &tags, format)
}

/// Handle tags command
///
/// With `dates`, each line carries the tag's creation date and tags are
/// ordered newest first; otherwise only names are printed.
pub fn handle_tags(repo: &dyn Repository, dates: bool, format: OutputFormat) -> Result<()> {
    let tags = if dates {
        repo.all_tags()?
    } else {
        repo.all_tags_list()?
    };
    print_list("tags", &tags, format)
}
