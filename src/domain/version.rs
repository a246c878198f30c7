use crate::error::{BumpError, Result};
use std::fmt;

/// Version number recovered from a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Bump the requested component, resetting the ones below it
    pub fn bump(&self, part: VersionPart) -> Result<Self> {
        let overflow = || BumpError::version(format!("cannot bump {} of {}", part, self));

        let bumped = match part {
            VersionPart::Major => Version {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            VersionPart::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            VersionPart::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            },
        };

        Ok(bumped)
    }
}

/// Renders `major.minor`, with `.patch` only when patch is nonzero
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.patch != 0 {
            write!(f, ".{}", self.patch)?;
        }
        Ok(())
    }
}

/// Which version component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum VersionPart {
    Major,
    #[default]
    Minor,
    Patch,
}

impl fmt::Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionPart::Major => "major",
            VersionPart::Minor => "minor",
            VersionPart::Patch => "patch",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionPart::Major).unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionPart::Minor).unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionPart::Patch).unwrap(), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_patch_from_zero() {
        let v = Version::new(2, 0, 0);
        assert_eq!(v.bump(VersionPart::Patch).unwrap(), Version::new(2, 0, 1));
    }

    #[test]
    fn test_version_bump_overflow() {
        let v = Version::new(u64::MAX, 0, 0);
        assert!(v.bump(VersionPart::Major).is_err());
        assert_eq!(v.bump(VersionPart::Minor).unwrap(), Version::new(u64::MAX, 1, 0));
    }

    #[test]
    fn test_version_display_omits_zero_patch() {
        assert_eq!(Version::new(1, 2, 0).to_string(), "1.2");
        assert_eq!(Version::new(0, 0, 0).to_string(), "0.0");
    }

    #[test]
    fn test_version_display_with_patch() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
    }

    #[test]
    fn test_version_part_default_is_minor() {
        assert_eq!(VersionPart::default(), VersionPart::Minor);
    }

    #[test]
    fn test_version_part_display() {
        assert_eq!(VersionPart::Major.to_string(), "major");
        assert_eq!(VersionPart::Patch.to_string(), "patch");
    }
}
