use std::fs;
use std::path::{Path, PathBuf};

use super::core::EnforceConfig;
use crate::errors::{Error, Result};
use tracing::debug;

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".enforce-methods.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> Result<EnforceConfig> {
    toml::from_str::<EnforceConfig>(contents)
        .map_err(|e| Error::configuration(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))
}

/// Read and parse a configuration file
pub fn load_config_file(path: &Path) -> Result<EnforceConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = parse_config(&contents)?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Generate a directory and its ancestors, nearest first
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest config file at or above `start`
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Resolve the configuration for a run.
///
/// An explicit path must exist and parse. Otherwise the nearest
/// `.enforce-methods.toml` above `start` is used; if there is none the
/// defaults apply. A discovered file that fails to parse is still an error.
/// Returns the config together with the file it came from.
pub fn load_config(
    explicit: Option<&Path>,
    start: &Path,
) -> Result<(EnforceConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        return Ok((load_config_file(path)?, Some(path.to_path_buf())));
    }

    match find_config_file(start) {
        Some(path) => Ok((load_config_file(&path)?, Some(path))),
        None => {
            debug!(
                depth = MAX_TRAVERSAL_DEPTH,
                "no config file found, using defaults"
            );
            Ok((EnforceConfig::default(), None))
        }
    }
}

/// Commented default configuration written by `init`
pub fn default_config_template() -> &'static str {
    r#"# enforce-methods configuration

[run]
# Analyze _test.go files
tests = true
# Glob patterns for paths to skip
exclude = []
# Worker threads, 0 = all cores
jobs = 0

[matching]
# Require the ResourceMapping element type to come from this import path.
# resource_mapping_package = "example.com/project/types"

# Plugin settings, decoded when the checker is constructed
[settings]
# one = ""
# two = [{ name = "" }]
# three = { name = "" }
"#
}
