//! Configuration command handler

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{AppConfig, ConfigManager};

/// Handle config command
///
/// Without `show`, stores any given values; with `show`, prints the
/// current configuration after applying them. An unreadable config file is
/// replaced by defaults here, so this command can repair it.
pub fn handle_config(url: Option<String>, workdir: Option<PathBuf>, show: bool) -> Result<()> {
    let changed = url.is_some() || workdir.is_some();
    let stored = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable configuration: {e:#}");
        AppConfig::default()
    });
    let config = stored.with_overrides(url, workdir);

    if changed {
        config.save()?;
        println!(
            "{} Saved {}",
            "✓".green(),
            ConfigManager::config_file_path()?.display()
        );
    }

    if show || !changed {
        println!("{}", "Current configuration:".bold());
        println!(
            "  url:     {}",
            config.url.as_deref().unwrap_or("(not set)")
        );
        println!(
            "  workdir: {}",
            config
                .workdir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(current directory)".to_string())
        );
    }

    Ok(())
}
