//! Configuration for enforce-methods.
//!
//! - `core`: the typed shape of `.enforce-methods.toml`
//! - `loader`: config file discovery and parsing
//! - `settings`: the plugin's own settings, decoded from an untyped payload

mod core;
mod loader;
pub mod settings;

pub use self::core::{EnforceConfig, MatchingConfig, RunConfig};
pub use loader::{
    default_config_template, directory_ancestors, find_config_file, load_config,
    load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use settings::{Element, Settings};
