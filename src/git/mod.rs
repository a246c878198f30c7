//! Git command-line access layer
//!
//! Every interaction with the repository goes through the [CommandRunner]
//! trait: an argument list goes in, captured stdout or a [CommandFailure]
//! comes out. The concrete implementations are:
//!
//! - [runner::GitCli]: spawns the real `git` executable
//! - [mock::MockRunner]: replays scripted outputs for tests
//!
//! [commands::GitCommands] builds the handful of subcommands the bump
//! workflow needs on top of any runner.
//!
//! ```rust
//! # use git_tag_bump::git::{CommandRunner, GitCommands};
//! # fn example<R: CommandRunner>(runner: &R) -> git_tag_bump::Result<()> {
//! let git = GitCommands::new(runner);
//! let branch = git.current_branch()?;
//! println!("on {}", branch);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod mock;
pub mod runner;

pub use commands::GitCommands;
pub use mock::MockRunner;
pub use runner::GitCli;

use std::fmt;

/// A git invocation that exited unsuccessfully or could not be spawned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    /// The full command line, program name included
    pub command: Vec<String>,
    /// Exit code, `None` if the process never ran or was killed by a signal
    pub status: Option<i32>,
    /// Diagnostic text captured from stderr
    pub stderr: String,
}

impl CommandFailure {
    /// Build a failure for `git <args>`
    pub fn new(args: &[&str], status: Option<i32>, stderr: impl Into<String>) -> Self {
        let mut command = Vec::with_capacity(args.len() + 1);
        command.push("git".to_string());
        command.extend(args.iter().map(|arg| arg.to_string()));

        CommandFailure {
            command,
            status,
            stderr: stderr.into(),
        }
    }

    /// The attempted command as a shell-like line
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$ {}", self.command_line())?;

        let stderr = self.stderr.trim_end();
        if !stderr.is_empty() {
            write!(f, "\n{}", stderr)?;
        }

        Ok(())
    }
}

impl std::error::Error for CommandFailure {}

/// Narrow capability for running git subcommands
///
/// Implementations run `git` with the given arguments and block until it
/// exits. The returned stdout is untrimmed.
pub trait CommandRunner: Send + Sync {
    /// Run `git <args>`
    ///
    /// # Returns
    /// * `Ok(String)` - Captured stdout of a zero exit status
    /// * `Err(CommandFailure)` - Non-zero exit, or the process could not start
    fn run(&self, args: &[&str]) -> Result<String, CommandFailure>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, args: &[&str]) -> Result<String, CommandFailure> {
        (**self).run(args)
    }
}
