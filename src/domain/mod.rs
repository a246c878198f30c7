//! Domain logic - pure rules independent of running git

pub mod status;
pub mod tag;
pub mod version;

pub use status::WorkingTreeStatus;
pub use tag::{match_pattern, tag_name_for, TagDescriptor};
pub use version::{Version, VersionPart};
