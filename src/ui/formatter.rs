//! Formatting functions for user-facing messages.
//!
//! Everything here goes to stderr: stdout is reserved for the tag name so the
//! tool can be used in scripts (`TAG=$(git-tag-bump patch)`).

use console::style;

use crate::cli::BumpOutcome;

/// Format an error message with a red `ERROR:` label.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Format a success message with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Format a status message with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Print an error message.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

pub fn display_success(message: &str) {
    eprintln!("{}", format_success(message));
}

pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}

/// Summarise a finished bump.
///
/// Shows the tag transition and, when applicable, where it was pushed or a
/// hint for pushing it manually.
pub fn display_outcome(outcome: &BumpOutcome) {
    let transition = format!(
        "{} → {} ({})",
        outcome.previous_tag,
        style(&outcome.tag).green(),
        outcome.part
    );

    if !outcome.created {
        display_status(&format!("Dry run: would tag {}", transition));
        return;
    }

    match &outcome.pushed_to {
        Some(remote) => display_success(&format!("Tagged {} and pushed to {}", transition, remote)),
        None => {
            display_success(&format!("Tagged {}", transition));
            display_status(&format!(
                "Push it with: git push <remote> {}",
                outcome.tag
            ));
        }
    }
}
