/// Prefixes tried, in order, when looking for the latest version tag.
pub const DEFAULT_PREFIXES: &[&str] = &["v", ""];

/// Message stored in the annotated tag.
pub const DEFAULT_TAG_MESSAGE: &str = "Version";

/// Tagging settings for a bump run.
///
/// There is no configuration file; values come from command-line flags and
/// fall back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpConfig {
    /// Candidate tag prefixes, first match wins
    pub prefixes: Vec<String>,

    /// Annotated tag message
    pub tag_message: String,
}

impl Default for BumpConfig {
    fn default() -> Self {
        BumpConfig {
            prefixes: DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect(),
            tag_message: DEFAULT_TAG_MESSAGE.to_string(),
        }
    }
}

impl BumpConfig {
    /// Apply command-line overrides on top of the defaults.
    ///
    /// An empty `prefixes` list keeps the default candidates.
    pub fn with_overrides(prefixes: Vec<String>, tag_message: Option<String>) -> Self {
        let mut config = BumpConfig::default();

        if !prefixes.is_empty() {
            config.prefixes = prefixes;
        }
        if let Some(message) = tag_message {
            config.tag_message = message;
        }

        config
    }
}
