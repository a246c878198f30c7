//! User interface module - terminal output for the bump command.

pub mod formatter;

pub use formatter::{display_error, display_outcome, display_status, display_success};
