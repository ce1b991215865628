// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod plugin;

// Re-export commonly used types
pub use crate::core::{CheckResults, CheckSummary, Diagnostic, GoAst};

pub use crate::errors::{Error, Result};

pub use crate::config::{EnforceConfig, Settings};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::analyzers::{analyze_package, Analyzer, EnforceMethodsAnalyzer};

pub use crate::plugin::{EnforceMethodsPlugin, LinterPlugin, LoadMode};

pub use crate::commands::run_check;
