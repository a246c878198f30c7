use thiserror::Error;

use crate::git::CommandFailure;

/// Unified error type for git-tag-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Git repository is in dirty state")]
    DirtyRepository,

    /// No tag matched any of the candidate prefixes
    #[error("{0}")]
    DescribeFailure(CommandFailure),

    #[error("Can not parse `git describe` output: {0}")]
    UnparseableDescriptor(String),

    #[error("Commit has tag already: {0}")]
    AlreadyTagged(String),

    #[error("{0}")]
    TagCreationFailure(CommandFailure),

    #[error("Git branch `{0}` has no remote")]
    NoRemoteConfigured(String),

    #[error("{0}")]
    PushFailure(CommandFailure),

    #[error("Git command failed: {0}")]
    Command(CommandFailure),

    #[error("Version error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-tag-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::Version(msg.into())
    }

    /// Create a descriptor parse error for the given describe output
    pub fn unparseable(descriptor: impl Into<String>) -> Self {
        BumpError::UnparseableDescriptor(descriptor.into())
    }
}

impl From<CommandFailure> for BumpError {
    fn from(failure: CommandFailure) -> Self {
        BumpError::Command(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(stderr: &str) -> CommandFailure {
        CommandFailure {
            command: vec!["git".to_string(), "push".to_string(), "origin".to_string()],
            status: Some(1),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn test_dirty_repository_display() {
        assert_eq!(
            BumpError::DirtyRepository.to_string(),
            "Git repository is in dirty state"
        );
    }

    #[test]
    fn test_already_tagged_names_tag() {
        let err = BumpError::AlreadyTagged("v1.4".to_string());
        assert_eq!(err.to_string(), "Commit has tag already: v1.4");
    }

    #[test]
    fn test_no_remote_names_branch() {
        let err = BumpError::NoRemoteConfigured("feature/x".to_string());
        assert_eq!(err.to_string(), "Git branch `feature/x` has no remote");
    }

    #[test]
    fn test_unparseable_includes_descriptor() {
        let err = BumpError::unparseable("1.x-3-gabc");
        assert!(err.to_string().contains("1.x-3-gabc"));
    }

    #[test]
    fn test_push_failure_is_verbatim() {
        let err = BumpError::PushFailure(failure("fatal: 'origin' does not appear to be a git repository"));
        assert_eq!(
            err.to_string(),
            "$ git push origin\nfatal: 'origin' does not appear to be a git repository"
        );
    }

    #[test]
    fn test_command_failure_converts_to_generic_command_error() {
        let err: BumpError = failure("boom").into();
        assert!(matches!(err, BumpError::Command(_)));
        assert!(err.to_string().starts_with("Git command failed: $ git push origin"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: BumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_version_constructor() {
        assert!(BumpError::version("overflow").to_string().contains("Version"));
    }
}
