use crate::domain::version::Version;
use crate::error::{BumpError, Result};

const DESCRIPTOR_PATTERN: &str = r"^(?P<version>(?P<major>\d+)\.(?P<minor>\d+)(?:\.(?P<patch>\d+))?)-(?P<commits>\d+)-g[0-9a-f]+$";

/// Nearest matching tag plus the distance to it, as reported by `git describe --long`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDescriptor {
    /// The candidate prefix that matched, possibly empty
    pub prefix: String,
    /// Version text exactly as it appears in the tag name
    pub version_text: String,
    pub version: Version,
    pub commits_since_tag: u64,
}

impl TagDescriptor {
    /// Parse describe output that was produced for tags starting with `prefix`
    ///
    /// Expected shape after the prefix: `<major>.<minor>[.<patch>]-<commits>-g<hash>`.
    /// A missing patch component is read as 0.
    pub fn parse(prefix: &str, describe_output: &str) -> Result<Self> {
        let stripped = describe_output
            .trim_end()
            .strip_prefix(prefix)
            .unwrap_or_else(|| describe_output.trim_end());

        let re = regex::Regex::new(DESCRIPTOR_PATTERN)
            .map_err(|e| BumpError::version(format!("invalid descriptor pattern: {}", e)))?;
        let captures = re
            .captures(stripped)
            .ok_or_else(|| BumpError::unparseable(stripped))?;

        let number = |name: &str| -> Result<u64> {
            match captures.name(name) {
                Some(m) => m
                    .as_str()
                    .parse::<u64>()
                    .map_err(|_| BumpError::unparseable(stripped)),
                None => Ok(0),
            }
        };

        let version = Version::new(number("major")?, number("minor")?, number("patch")?);
        let commits_since_tag = number("commits")?;

        Ok(TagDescriptor {
            prefix: prefix.to_string(),
            version_text: captures["version"].to_string(),
            version,
            commits_since_tag,
        })
    }

    /// Name of the tag this descriptor was computed against
    pub fn tag_name(&self) -> String {
        format!("{}{}", self.prefix, self.version_text)
    }

    /// Whether the described commit carries the tag itself
    pub fn is_tagged_commit(&self) -> bool {
        self.commits_since_tag == 0
    }
}

/// Render a tag name for `version` with the given prefix
pub fn tag_name_for(prefix: &str, version: &Version) -> String {
    format!("{}{}", prefix, version)
}

/// `git describe --match` glob selecting version tags with `prefix`
pub fn match_pattern(prefix: &str) -> String {
    format!("{}[0-9]*.[0-9]*", prefix)
}
