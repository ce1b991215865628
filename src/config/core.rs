use serde::{Deserialize, Serialize};

/// Root configuration structure, as read from `.enforce-methods.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EnforceConfig {
    /// File discovery and scheduling
    #[serde(default)]
    pub run: RunConfig,

    /// Signature matching options
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Untyped plugin settings, decoded by the plugin at construction
    #[serde(default)]
    pub settings: toml::Table,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Analyze `_test.go` files
    #[serde(default = "default_tests")]
    pub tests: bool,

    /// Glob patterns for paths to skip
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Worker threads for package analysis, 0 means all cores
    #[serde(default)]
    pub jobs: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tests: default_tests(),
            exclude: Vec::new(),
            jobs: 0,
        }
    }
}

fn default_tests() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MatchingConfig {
    /// Import path the `ResourceMapping` element type must come from.
    /// Unset means any qualifier is accepted.
    #[serde(default)]
    pub resource_mapping_package: Option<String>,
}
