//! Main bump workflow
//!
//! Kept separate from `main.rs` so the workflow can be driven with any
//! [CommandRunner], including a scripted one in tests.

use std::io::Write;

use crate::config::BumpConfig;
use crate::domain::{tag_name_for, TagDescriptor, VersionPart};
use crate::error::{BumpError, Result};
use crate::git::{CommandFailure, CommandRunner, GitCommands};

/// Arguments for the bump workflow
///
/// Mirrors the CLI arguments without depending on clap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BumpWorkflowArgs {
    /// Version component to increment
    pub part: VersionPart,

    /// Push the new tag to the branch's remote
    pub push: bool,

    /// Compute and print the tag without creating or pushing it
    pub dry_run: bool,
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    /// The new tag name
    pub tag: String,

    /// The tag the new version was computed from
    pub previous_tag: String,

    pub part: VersionPart,

    /// False in dry-run mode
    pub created: bool,

    /// Remote the tag was pushed to, if any
    pub pushed_to: Option<String>,
}

/// Bump the latest version tag
///
/// 1. Refuse to run with tracked changes in the working tree
/// 2. Describe HEAD against each candidate prefix until one matches
/// 3. Parse the descriptor and refuse an already tagged commit
/// 4. Create the bumped annotated tag and write its name to `out`
/// 5. Optionally push it to the current branch's remote
///
/// A tag created in step 4 is left in place if step 5 fails.
pub fn run_bump_workflow<R: CommandRunner>(
    args: BumpWorkflowArgs,
    config: &BumpConfig,
    runner: R,
    out: &mut dyn Write,
) -> Result<BumpOutcome> {
    let git = GitCommands::new(runner);

    let status = git.status()?;
    if !status.is_clean() {
        for entry in &status.dirty_entries {
            log::debug!("tracked change: {}", entry);
        }
        return Err(BumpError::DirtyRepository);
    }

    let descriptor = describe_latest(&git, &config.prefixes)?;
    log::info!(
        "Found tag {} ({} commits ago)",
        descriptor.tag_name(),
        descriptor.commits_since_tag
    );

    if descriptor.is_tagged_commit() {
        return Err(BumpError::AlreadyTagged(descriptor.tag_name()));
    }

    let new_version = descriptor.version.bump(args.part)?;
    let new_tag = tag_name_for(&descriptor.prefix, &new_version);

    let mut outcome = BumpOutcome {
        tag: new_tag.clone(),
        previous_tag: descriptor.tag_name(),
        part: args.part,
        created: false,
        pushed_to: None,
    };

    if args.dry_run {
        log::info!("Dry run: not creating tag {}", new_tag);
        writeln!(out, "{}", new_tag)?;
        return Ok(outcome);
    }

    git.create_annotated_tag(&new_tag, &config.tag_message)?;
    outcome.created = true;
    writeln!(out, "{}", new_tag)?;

    if args.push {
        let branch = git.current_branch()?;
        let remote = git.branch_remote(&branch)?;
        log::info!("Pushing {} to {}", new_tag, remote);
        git.push_tag(&remote, &new_tag)?;
        outcome.pushed_to = Some(remote);
    }

    Ok(outcome)
}

/// Describe HEAD against the candidate prefixes in order
fn describe_latest<R: CommandRunner>(
    git: &GitCommands<R>,
    prefixes: &[String],
) -> Result<TagDescriptor> {
    let mut last_failure: Option<CommandFailure> = None;

    for prefix in prefixes {
        match git.describe(prefix) {
            Ok(output) => return TagDescriptor::parse(prefix, &output),
            Err(failure) => {
                log::debug!("no tag with prefix {:?}: {}", prefix, failure.stderr.trim_end());
                last_failure = Some(failure);
            }
        }
    }

    let failure = last_failure
        .unwrap_or_else(|| CommandFailure::new(&["describe"], None, "no tag prefixes configured"));
    Err(BumpError::DescribeFailure(failure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRunner;

    fn clean_runner() -> MockRunner {
        let mut runner = MockRunner::new();
        runner.respond(&["status", "--porcelain"], "");
        runner
    }

    #[test]
    fn test_falls_back_to_unprefixed_tags() {
        let mut runner = clean_runner();
        runner
            .fail(&["describe", "--long", "--match", "v[0-9]*.[0-9]*"], "fatal: No names found")
            .respond(&["describe", "--long", "--match", "[0-9]*.[0-9]*"], "0.3-2-gbeef\n")
            .respond(&["tag", "--annotate", "--message", "Version", "0.4"], "");

        let mut out = Vec::new();
        let outcome =
            run_bump_workflow(BumpWorkflowArgs::default(), &BumpConfig::default(), &runner, &mut out)
                .unwrap();

        assert_eq!(outcome.tag, "0.4");
        assert_eq!(outcome.previous_tag, "0.3");
        assert_eq!(String::from_utf8(out).unwrap(), "0.4\n");
    }

    #[test]
    fn test_describe_failure_reports_last_attempt() {
        let mut runner = clean_runner();
        runner
            .fail(&["describe", "--long", "--match", "v[0-9]*.[0-9]*"], "fatal: v failure")
            .fail(&["describe", "--long", "--match", "[0-9]*.[0-9]*"], "fatal: No names found\n");

        let err = run_bump_workflow(
            BumpWorkflowArgs::default(),
            &BumpConfig::default(),
            &runner,
            &mut Vec::new(),
        )
        .unwrap_err();

        assert!(matches!(err, BumpError::DescribeFailure(_)));
        assert_eq!(
            err.to_string(),
            "$ git describe --long --match [0-9]*.[0-9]*\nfatal: No names found"
        );
    }

    #[test]
    fn test_empty_prefix_list_is_describe_failure() {
        let runner = clean_runner();
        let config = BumpConfig {
            prefixes: Vec::new(),
            ..BumpConfig::default()
        };

        let err = run_bump_workflow(BumpWorkflowArgs::default(), &config, &runner, &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, BumpError::DescribeFailure(_)));
    }

    #[test]
    fn test_dry_run_creates_nothing() {
        let mut runner = clean_runner();
        runner.respond(&["describe", "--long", "--match", "v[0-9]*.[0-9]*"], "v3.1.4-7-g1a2b3c\n");

        let args = BumpWorkflowArgs {
            part: VersionPart::Patch,
            push: true,
            dry_run: true,
        };
        let mut out = Vec::new();
        let outcome = run_bump_workflow(args, &BumpConfig::default(), &runner, &mut out).unwrap();

        assert_eq!(outcome.tag, "v3.1.5");
        assert!(!outcome.created);
        assert_eq!(outcome.pushed_to, None);
        assert_eq!(String::from_utf8(out).unwrap(), "v3.1.5\n");
        assert!(runner.calls().iter().all(|call| !call.starts_with("tag") && !call.starts_with("push")));
    }

    #[test]
    fn test_custom_message_is_used() {
        let mut runner = clean_runner();
        runner
            .respond(&["describe", "--long", "--match", "v[0-9]*.[0-9]*"], "v1.0-1-gabc\n")
            .respond(&["tag", "--annotate", "--message", "Release", "v1.1"], "");

        let config = BumpConfig::with_overrides(Vec::new(), Some("Release".to_string()));
        let outcome =
            run_bump_workflow(BumpWorkflowArgs::default(), &config, &runner, &mut Vec::new()).unwrap();

        assert!(outcome.created);
    }
}
