use crate::config::EnforceConfig;
use crate::formatting::ColorMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "enforce-methods")]
#[command(
    about = "Checks that every Go struct has Validate() and GetResourceMappings() methods",
    long_about = None
)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the implicit `check` command
    #[command(flatten)]
    pub check: CheckArgs,

    /// When to color text output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check Go packages for the required methods (default)
    Check(CheckArgs),

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files or directories to check
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Configuration file (defaults to the nearest .enforce-methods.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip _test.go files
    #[arg(long = "no-tests")]
    pub no_tests: bool,

    /// Glob pattern for paths to skip (repeatable)
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    /// Worker threads, 0 = all cores
    #[arg(short = 'j', long = "jobs", env = "ENFORCE_METHODS_JOBS")]
    pub jobs: Option<usize>,

    /// Import path the ResourceMapping element type must come from
    #[arg(long = "resource-mapping-package")]
    pub resource_mapping_package: Option<String>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl CheckArgs {
    /// Layer command-line flags over values from the config file
    pub fn apply_overrides(&self, config: &mut EnforceConfig) {
        if self.no_tests {
            config.run.tests = false;
        }
        config.run.exclude.extend(self.exclude.iter().cloned());
        if let Some(jobs) = self.jobs {
            config.run.jobs = jobs;
        }
        if let Some(package) = &self.resource_mapping_package {
            config.matching.resource_mapping_package = Some(package.clone());
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Text,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Text => crate::io::output::OutputFormat::Text,
        }
    }
}

/// Process exit status
///
/// - `Success` (0): no issues found
/// - `Failure` (1): the check ran and found issues
/// - `Error` (2): the run could not complete, e.g. a bad config file
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_issues(has_issues: bool) -> Self {
        if has_issues {
            Self::Failure
        } else {
            Self::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
