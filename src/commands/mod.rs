//! CLI command implementations.
//!
//! - **check**: run the analyzers over Go packages and report findings
//! - **init**: write a default `.enforce-methods.toml`

pub mod check;
pub mod init;

pub use check::{handle_check, run_check, CheckConfig};
pub use init::init_config;
