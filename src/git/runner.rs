use crate::git::{CommandFailure, CommandRunner};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs the real `git` executable
pub struct GitCli {
    work_dir: Option<PathBuf>,
}

impl GitCli {
    /// Run git in the current working directory
    pub fn new() -> Self {
        GitCli { work_dir: None }
    }

    /// Run git inside `path` (like `git -C <path>`)
    pub fn in_dir<P: AsRef<Path>>(path: P) -> Self {
        GitCli {
            work_dir: Some(path.as_ref().to_path_buf()),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for GitCli {
    fn run(&self, args: &[&str]) -> Result<String, CommandFailure> {
        log::debug!("$ git {}", args.join(" "));

        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = &self.work_dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|e| {
            CommandFailure::new(args, None, format!("Cannot run git: {}", e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            log::debug!("git exited with {:?}: {}", output.status.code(), stderr.trim_end());
            return Err(CommandFailure::new(args, output.status.code(), stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
