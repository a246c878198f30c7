use crate::domain::{match_pattern, WorkingTreeStatus};
use crate::error::{BumpError, Result};
use crate::git::{CommandFailure, CommandRunner};

/// The git subcommands used by the bump workflow
pub struct GitCommands<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> GitCommands<R> {
    pub fn new(runner: R) -> Self {
        GitCommands { runner }
    }

    /// Classify the working tree via `git status --porcelain`
    pub fn status(&self) -> Result<WorkingTreeStatus> {
        let output = self.runner.run(&["status", "--porcelain"])?;
        Ok(WorkingTreeStatus::from_porcelain(&output))
    }

    /// `git describe --long` against tags starting with `prefix`
    ///
    /// The raw failure is returned so the caller can try the next prefix.
    pub fn describe(&self, prefix: &str) -> std::result::Result<String, CommandFailure> {
        let pattern = match_pattern(prefix);
        let output = self
            .runner
            .run(&["describe", "--long", "--match", pattern.as_str()])?;
        Ok(output.trim_end().to_string())
    }

    /// Create an annotated tag on HEAD
    pub fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.runner
            .run(&["tag", "--annotate", "--message", message, name])
            .map_err(BumpError::TagCreationFailure)?;
        Ok(())
    }

    /// Short name of the checked out branch (`HEAD` when detached)
    pub fn current_branch(&self) -> Result<String> {
        let output = self.runner.run(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(output.trim_end().to_string())
    }

    /// Remote configured for `branch` via `branch.<name>.remote`
    pub fn branch_remote(&self, branch: &str) -> Result<String> {
        let key = format!("branch.{}.remote", branch);
        let output = self.runner.run(&["config", key.as_str()]).map_err(|failure| {
            log::debug!("{}", failure);
            BumpError::NoRemoteConfigured(branch.to_string())
        })?;

        let remote = output.trim_end();
        if remote.is_empty() {
            return Err(BumpError::NoRemoteConfigured(branch.to_string()));
        }
        Ok(remote.to_string())
    }

    /// Push a single tag to `remote`
    pub fn push_tag(&self, remote: &str, tag: &str) -> Result<()> {
        self.runner
            .run(&["push", remote, tag])
            .map_err(BumpError::PushFailure)?;
        Ok(())
    }
}
