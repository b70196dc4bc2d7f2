use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "gitrefs";

/// Cross-platform configuration directory manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the main configuration directory path following platform conventions:
    /// - Linux: $XDG_CONFIG_HOME/gitrefs or ~/.config/gitrefs
    /// - macOS: ~/Library/Application Support/gitrefs
    /// - Windows: %APPDATA%\gitrefs
    pub fn config_dir() -> Result<PathBuf> {
        #[cfg(target_os = "linux")]
        {
            if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
                Ok(PathBuf::from(xdg_config).join(APP_DIR))
            } else {
                let home = dirs::home_dir().context("Failed to get home directory")?;
                Ok(home.join(".config").join(APP_DIR))
            }
        }

        #[cfg(target_os = "macos")]
        {
            let home = dirs::home_dir().context("Failed to get home directory")?;
            Ok(home.join("Library").join("Application Support").join(APP_DIR))
        }

        #[cfg(target_os = "windows")]
        {
            Ok(dirs::config_dir()
                .context("Failed to get Windows config directory")?
                .join(APP_DIR))
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
        {
            let home = dirs::home_dir().context("Failed to get home directory")?;
            Ok(home.join(".gitrefs"))
        }
    }

    /// Get the config file path (config.toml)
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the log file path
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("gitrefs.log"))
    }

    /// Ensure the configuration directory exists
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;
        Ok(config_dir)
    }
}

/// Persistent defaults for the command-line tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Repository URL used by `clone`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Directory git commands run in (defaults to the current directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workdir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let config_path = ConfigManager::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = ConfigManager::config_file_path()?;
        ConfigManager::ensure_config_dir()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Apply command-line overrides on top of the stored values
    pub fn with_overrides(mut self, url: Option<String>, workdir: Option<PathBuf>) -> Self {
        if url.is_some() {
            self.url = url;
        }
        if workdir.is_some() {
            self.workdir = workdir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_config_paths() {
        let config_dir = ConfigManager::config_dir().unwrap();
        assert!(config_dir.to_string_lossy().contains("gitrefs"));

        let config_file = ConfigManager::config_file_path().unwrap();
        assert!(config_file.to_string_lossy().ends_with("config.toml"));

        let log = ConfigManager::log_file_path().unwrap();
        assert!(log.to_string_lossy().ends_with("gitrefs.log"));
    }

    #[test]
    #[serial]
    #[cfg(target_os = "linux")]
    fn test_xdg_config_home_respected() {
        std::env::set_var("XDG_CONFIG_HOME", "/tmp/test-xdg-config");
        let config_dir = ConfigManager::config_dir().unwrap();
        assert!(config_dir.to_string_lossy().contains("/tmp/test-xdg-config/gitrefs"));
        std::env::remove_var("XDG_CONFIG_HOME");
    }

    #[test]
    #[serial]
    #[cfg(target_os = "linux")]
    fn test_load_missing_config_returns_default() {
        let temp = TempDir::new().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", temp.path());

        let config = AppConfig::load().unwrap();
        assert_eq!(config, AppConfig::default());

        std::env::remove_var("XDG_CONFIG_HOME");
    }

    #[test]
    #[serial]
    #[cfg(target_os = "linux")]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", temp.path());

        let config = AppConfig {
            url: Some("git@example.com:team/app.git".to_string()),
            workdir: Some(PathBuf::from("/srv/app")),
        };
        config.save().unwrap();

        let written = fs::read_to_string(ConfigManager::config_file_path().unwrap()).unwrap();
        assert!(written.contains("url = \"git@example.com:team/app.git\""));
        assert_eq!(AppConfig::load().unwrap(), config);

        std::env::remove_var("XDG_CONFIG_HOME");
    }

    #[test]
    fn test_overrides_win_over_stored_values() {
        let stored = AppConfig {
            url: Some("https://example.com/old.git".to_string()),
            workdir: Some(PathBuf::from("/a")),
        };

        let merged = stored.with_overrides(Some("https://example.com/new.git".to_string()), None);
        assert_eq!(merged.url.as_deref(), Some("https://example.com/new.git"));
        assert_eq!(merged.workdir, Some(PathBuf::from("/a")));
    }
}
