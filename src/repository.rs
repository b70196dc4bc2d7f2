//! Repository operations expressed as git commands.
//!
//! [`GitRepository`] builds one [`GitCommand`] per step, hands it to its
//! executor and turns the captured output into lists of ref names. Executor
//! errors are returned exactly as received.

use anyhow::Result;
use std::sync::Arc;

use crate::executor::{CommandExecutor, GitCommand};
use crate::output;

/// Name of the remote every push, fetch and branch lookup targets.
const REMOTE: &str = "origin";

/// How many of the most recent tagged commits `branch_tags` describes.
const DESCRIBE_MAX_COUNT: usize = 150;

const BRANCH_LIST_SCRIPT: &str = "for branch in $(git branch -r | grep -v HEAD); do \
printf \"%s\\t%s\\n\" \"$(git show --format=\"%ci %cr\" \"$branch\" | head -n 1)\" \"$branch\"; \
done | sort -r";

const TAG_LIST_SCRIPT: &str = "git tag --list | xargs -n1 echo";

/// High-level operations on a git repository.
pub trait Repository: Send + Sync {
    /// Clone the repository URL into the working directory.
    fn clone_repo(&self) -> Result<()>;

    /// Fetch from `origin`, pruning deleted remote branches.
    fn fetch(&self) -> Result<()>;

    /// Remote branches with their last commit time, newest first.
    fn branch_list(&self) -> Result<Vec<String>>;

    /// Delete a branch locally, then on `origin`.
    fn remove_branch(&self, branch_name: &str) -> Result<()>;

    /// Delete a tag on `origin`.
    fn remove_tag(&self, tag_name: &str) -> Result<()>;

    /// Branches (local and remote) that contain a tag or commit.
    fn tag_branches(&self, tag_id: &str) -> Result<Vec<String>>;

    /// Tags describing a branch among the most recent tagged commits.
    fn branch_tags(&self, branch_name: &str) -> Result<Vec<String>>;

    /// All tag names, one per entry.
    fn all_tags_list(&self) -> Result<Vec<String>>;

    /// All tags as `"<creation date> <name>"`, newest first.
    fn all_tags(&self) -> Result<Vec<String>>;
}

/// [`Repository`] implementation that drives the git CLI through an executor.
pub struct GitRepository {
    url: String,
    executor: Arc<dyn CommandExecutor>,
}

impl GitRepository {
    pub fn new(url: impl Into<String>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            url: url.into(),
            executor,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn run(&self, command: GitCommand) -> Result<String> {
        self.executor.execute(&command)
    }

    fn run_lines(&self, command: GitCommand) -> Result<Vec<String>> {
        let output = self.run(command)?;
        Ok(output::split_lines(&output))
    }
}

impl Repository for GitRepository {
    fn clone_repo(&self) -> Result<()> {
        log::debug!("Cloning {}", self.url);
        self.run(GitCommand::git(["clone", self.url.as_str()]))?;
        Ok(())
    }

    fn fetch(&self) -> Result<()> {
        log::debug!("Fetching {REMOTE}");
        self.run(GitCommand::git(["fetch", "--prune", REMOTE]))?;
        Ok(())
    }

    fn branch_list(&self) -> Result<Vec<String>> {
        log::debug!("Listing remote branches");
        self.run_lines(GitCommand::shell(BRANCH_LIST_SCRIPT, Vec::<String>::new()))
    }

    fn remove_branch(&self, branch_name: &str) -> Result<()> {
        log::debug!("Removing branch {branch_name}");
        self.run(GitCommand::git(["branch", "--delete", branch_name]))?;
        self.run(GitCommand::git(["push", REMOTE, "--delete", branch_name]))?;
        Ok(())
    }

    fn remove_tag(&self, tag_name: &str) -> Result<()> {
        log::debug!("Removing tag {tag_name}");
        // The second push is usually a no-op once the first succeeded; both are kept.
        let refspec = format!(":{tag_name}");
        self.run(GitCommand::git(["push", REMOTE, refspec.as_str()]))?;
        self.run(GitCommand::git(["push", "--delete", REMOTE, tag_name]))?;
        Ok(())
    }

    fn tag_branches(&self, tag_id: &str) -> Result<Vec<String>> {
        log::debug!("Listing branches containing {tag_id}");
        let output = self.run(GitCommand::git(["branch", "-a", "--contains", tag_id]))?;
        Ok(output::parse_contains_output(&output))
    }

    fn branch_tags(&self, branch_name: &str) -> Result<Vec<String>> {
        log::debug!("Describing {branch_name} by tag");
        let script = format!(
            "git describe --tags $(git rev-list --tags --max-count={DESCRIBE_MAX_COUNT}) \"$1\""
        );
        self.run_lines(GitCommand::shell(&script, [branch_name]))
    }

    fn all_tags_list(&self) -> Result<Vec<String>> {
        log::debug!("Listing tag names");
        self.run_lines(GitCommand::shell(TAG_LIST_SCRIPT, Vec::<String>::new()))
    }

    fn all_tags(&self) -> Result<Vec<String>> {
        log::debug!("Listing tags by creation date");
        self.run_lines(GitCommand::git([
            "for-each-ref",
            "--sort=-creatordate",
            "--format",
            "%(creatordate:iso8601) %(refname:short)",
            "refs/tags",
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::Mutex;

    /// Replies with canned output and remembers what it was asked to run.
    struct Canned {
        reply: Mutex<Vec<Result<String>>>,
        seen: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(reply: Vec<Result<String>>) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(reply),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl CommandExecutor for Canned {
        fn execute(&self, command: &GitCommand) -> Result<String> {
            self.seen.lock().unwrap().push(command.to_string());
            self.reply.lock().unwrap().remove(0)
        }
    }

    #[test]
    fn test_branch_tags_renders_describe_command() {
        let exec = Canned::new(vec![Ok("v1.2-3-gabc\n".to_string())]);
        let repo = GitRepository::new("u", exec.clone());

        assert_eq!(repo.branch_tags("develop").unwrap(), vec!["v1.2-3-gabc"]);
        assert_eq!(
            exec.seen.lock().unwrap()[0],
            "git describe --tags $(git rev-list --tags --max-count=150) develop"
        );
    }

    #[test]
    fn test_remove_tag_uses_colon_refspec_first() {
        let exec = Canned::new(vec![Err(anyhow!("rejected")), Ok(String::new())]);
        let repo = GitRepository::new("u", exec.clone());

        assert!(repo.remove_tag("v1.0").is_err());
        assert_eq!(*exec.seen.lock().unwrap(), vec!["git push origin :v1.0"]);
    }

    #[test]
    fn test_url_accessor() {
        let repo = GitRepository::new("https://example.com/r.git", Canned::new(vec![]));
        assert_eq!(repo.url(), "https://example.com/r.git");
    }
}
