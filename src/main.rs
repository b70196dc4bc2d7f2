use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use gitrefs::config::AppConfig;
use gitrefs::executor::SystemExecutor;
use gitrefs::handlers::{self, OutputFormat};
use gitrefs::logger;
use gitrefs::repository::GitRepository;

#[derive(Parser)]
#[command(name = "gitrefs")]
#[command(about = "Query and prune branches and tags of a git repository", long_about = None)]
#[command(version)]
struct Cli {
    /// Repository URL (overrides the configured one)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Directory to run git in (overrides the configured one)
    #[arg(long, global = true)]
    workdir: Option<PathBuf>,

    /// Print lists as JSON arrays
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone the repository URL
    Clone,

    /// Fetch from origin, pruning deleted branches
    Fetch,

    /// List remote branches with their last commit time, newest first
    Branches,

    /// Delete a branch locally and on origin
    RemoveBranch {
        /// Branch name
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete a tag on origin
    RemoveTag {
        /// Tag name
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List branches that contain a tag or commit
    TagBranches {
        /// Tag name or commit
        tag: String,
    },

    /// Describe a branch in terms of the most recent tags
    BranchTags {
        /// Branch name
        branch: String,
    },

    /// List all tags
    Tags {
        /// Include creation dates, newest first
        #[arg(long)]
        dates: bool,
    },

    /// Show or update stored settings
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    logger::init_logger()?;
    if let Err(e) = logger::rotate_log_if_needed() {
        log::warn!("Could not rotate log file: {e}");
    }

    let cli = Cli::parse();

    if let Commands::Config { show } = cli.command {
        return handlers::handle_config(cli.url, cli.workdir, show);
    }

    let config = AppConfig::load()?.with_overrides(cli.url.clone(), cli.workdir.clone());
    let executor = match &config.workdir {
        Some(dir) => SystemExecutor::in_dir(dir),
        None => SystemExecutor::new(),
    };
    let url = config.url.clone().unwrap_or_default();
    let repo = GitRepository::new(url.clone(), Arc::new(executor));
    let format = OutputFormat::from_json_flag(cli.json);

    match cli.command {
        Commands::Clone => {
            if url.is_empty() {
                bail!("No repository URL. Pass --url or run 'gitrefs config --url <URL>' first");
            }
            handlers::handle_clone(&repo, &url)?;
        }
        Commands::Fetch => handlers::handle_fetch(&repo)?,
        Commands::Branches => handlers::handle_branches(&repo, format)?,
        Commands::RemoveBranch { name, yes } => handlers::handle_remove_branch(&repo, &name, yes)?,
        Commands::RemoveTag { name, yes } => handlers::handle_remove_tag(&repo, &name, yes)?,
        Commands::TagBranches { tag } => handlers::handle_tag_branches(&repo, &tag, format)?,
        Commands::BranchTags { branch } => handlers::handle_branch_tags(&repo, &branch, format)?,
        Commands::Tags { dates } => handlers::handle_tags(&repo, dates, format)?,
        Commands::Config { .. } => {}
    }

    Ok(())
}
