use anyhow::{Context, Result};
use enforce_methods::cli::{self, CheckArgs, Commands, ExitStatus};
use enforce_methods::commands::{self, CheckConfig};
use enforce_methods::config::load_config;
use enforce_methods::formatting::{apply_color_mode, ColorMode};
use enforce_methods::observability::{init_logging, install_panic_hook};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    install_panic_hook();
    let cli = cli::parse_args();

    let result = match cli.command {
        Some(Commands::Init { force }) => {
            init_logging(0);
            commands::init::init_config(force).map(|()| false)
        }
        Some(Commands::Check(args)) => run_check(args, cli.color),
        None => run_check(cli.check, cli.color),
    };

    let status = match result {
        Ok(has_issues) => ExitStatus::from_issues(has_issues),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitStatus::Error
        }
    };
    status.into()
}

/// Directory the config file search starts from
fn config_search_start(paths: &[PathBuf]) -> PathBuf {
    let first = paths
        .first()
        .map(PathBuf::as_path)
        .unwrap_or(Path::new("."));
    let dir = if first.is_file() {
        first.parent().unwrap_or(Path::new("."))
    } else {
        first
    };
    std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}

fn run_check(args: CheckArgs, color: ColorMode) -> Result<bool> {
    init_logging(args.verbosity);
    apply_color_mode(color, args.output.is_some());

    let paths = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    let (mut config, source) = load_config(args.config.as_deref(), &config_search_start(&paths))
        .context("Failed to load configuration")?;
    if let Some(source) = &source {
        info!(path = %source.display(), "using config file");
    }
    args.apply_overrides(&mut config);

    commands::handle_check(CheckConfig {
        paths,
        config,
        format: args.format.into(),
        output: args.output,
    })
}
