//! Command execution for git operations.
//!
//! The repository adapter never spawns processes itself. It hands a
//! [`GitCommand`] to a [`CommandExecutor`], which lets tests substitute a
//! recording executor for the real `git` binary.

use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A program and its arguments, kept as a list instead of a shell string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    program: String,
    args: Vec<String>,
    /// Script and positional parameters when this runs through `sh -c`.
    script: Option<(String, Vec<String>)>,
}

impl GitCommand {
    /// Build `git <args...>`.
    pub fn git<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: "git".to_string(),
            args: args.into_iter().map(Into::into).collect(),
            script: None,
        }
    }

    /// Build `sh -c <script> sh <params...>`.
    ///
    /// Values reach the script only as positional parameters (`"$1"`, `"$2"`, ...),
    /// so branch and tag names are never spliced into shell source.
    pub fn shell<I, S>(script: &str, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let params: Vec<String> = params.into_iter().map(Into::into).collect();

        let mut args = vec!["-c".to_string(), script.to_string(), "sh".to_string()];
        args.extend(params.iter().cloned());

        Self {
            program: "sh".to_string(),
            args,
            script: Some((script.to_string(), params)),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((script, params)) = &self.script {
            let mut rendered = script.clone();
            for (i, param) in params.iter().enumerate() {
                rendered = rendered.replace(&format!("\"${}\"", i + 1), param);
            }
            return write!(f, "{rendered}");
        }

        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Runs a command and returns its captured standard output.
///
/// `Err` is returned only when the command could not be started or exited
/// with a non-zero status. The output is returned as captured, trailing
/// newline included.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, command: &GitCommand) -> Result<String>;
}

/// Executor backed by [`std::process::Command`].
#[derive(Debug, Clone, Default)]
pub struct SystemExecutor {
    workdir: Option<PathBuf>,
}

impl SystemExecutor {
    /// Executor that runs commands in the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor that runs every command inside `path`.
    pub fn in_dir(path: &Path) -> Self {
        Self {
            workdir: Some(path.to_path_buf()),
        }
    }

    /// Check whether a `git` binary can be started.
    pub fn is_git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl CommandExecutor for SystemExecutor {
    fn execute(&self, command: &GitCommand) -> Result<String> {
        log::debug!("Running: {command}");

        let mut process = Command::new(command.program());
        process.args(command.args());
        if let Some(dir) = &self.workdir {
            process.current_dir(dir);
        }

        let output = process
            .output()
            .with_context(|| format!("Failed to run '{command}'"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::warn!("'{}' exited with {}", command, output.status);
            return Err(anyhow!("{} failed: {}", command, stderr.trim_end()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
