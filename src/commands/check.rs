//! The `check` command: discover Go packages, run the analyzers over each
//! one and write the findings.

use crate::analyzers::{analyze_package, go};
use crate::config::{EnforceConfig, Settings};
use crate::core::{sort_diagnostics, CheckResults, CheckSummary, GoAst};
use crate::errors::{Error, Result};
use crate::io::{self, OutputFormat};
use crate::observability::{
    increment_processed, set_current_file, set_current_package, set_phase, set_progress,
    AnalysisPhase,
};
use crate::plugin::{EnforceMethodsPlugin, LinterPlugin};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn};

pub struct CheckConfig {
    pub paths: Vec<PathBuf>,
    pub config: EnforceConfig,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Files of one directory sharing one `package` clause
#[derive(Debug)]
pub struct GoPackage {
    pub dir: PathBuf,
    pub name: String,
    pub files: Vec<GoAst>,
}

/// Parsed files plus the number of files dropped for syntax errors
pub struct ParsedFiles {
    pub asts: Vec<GoAst>,
    pub skipped: usize,
}

/// Every `.go` file under `paths`, each listed once
pub fn discover_files(paths: &[PathBuf], config: &EnforceConfig) -> Result<Vec<PathBuf>> {
    let _phase = set_phase(AnalysisPhase::FileDiscovery);
    let mut files = BTreeSet::new();

    for path in paths {
        let found = io::find_go_files(path, config.run.tests, &config.run.exclude)?;
        debug!(path = %path.display(), files = found.len(), "discovered go files");
        files.extend(found);
    }

    Ok(files.into_iter().collect())
}

fn parse_file(path: &Path) -> Result<Option<GoAst>> {
    let _file = set_current_file(path);
    let content = io::read_file(path)?;
    let ast = go::parse_source(&content, path)
        .map_err(|e| Error::parse(path, 0, 0, e.to_string()))?;

    if let Some(node) = go::parser::first_error_node(&ast.tree) {
        let err = Error::parse(
            path,
            go::parser::node_line(&node),
            go::parser::node_column(&node),
            "syntax error, file skipped",
        );
        warn!("{err}");
        return Ok(None);
    }

    Ok(Some(ast))
}

/// Read and parse `files`; files with syntax errors are skipped with a warning
pub fn parse_files(files: &[PathBuf]) -> Result<ParsedFiles> {
    let _phase = set_phase(AnalysisPhase::Parsing);

    let parsed = files
        .par_iter()
        .map(|path| {
            let _phase = set_phase(AnalysisPhase::Parsing);
            parse_file(path)
        })
        .collect::<Result<Vec<_>>>()?;

    let total = parsed.len();
    let asts: Vec<GoAst> = parsed.into_iter().flatten().collect();
    Ok(ParsedFiles {
        skipped: total - asts.len(),
        asts,
    })
}

/// Group files by directory and package clause, ordered by directory
pub fn group_packages(asts: Vec<GoAst>) -> Vec<GoPackage> {
    let mut groups: BTreeMap<(PathBuf, String), Vec<GoAst>> = BTreeMap::new();

    for ast in asts {
        let dir = ast
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        groups
            .entry((dir, ast.package.clone()))
            .or_default()
            .push(ast);
    }

    groups
        .into_iter()
        .map(|((dir, name), mut files)| {
            files.sort_by(|a, b| a.path.cmp(&b.path));
            GoPackage { dir, name, files }
        })
        .collect()
}

fn build_plugin(config: &EnforceConfig) -> Result<EnforceMethodsPlugin> {
    let payload = Settings::payload_from_toml(&config.settings)?;
    Ok(EnforceMethodsPlugin::new(payload)?.with_matching(config.matching.clone()))
}

fn thread_pool(jobs: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| Error::configuration(format!("Failed to start {jobs} worker threads: {e}")))
}

/// Run every analyzer over the Go packages under `paths`
pub fn run_check(paths: &[PathBuf], config: &EnforceConfig) -> Result<CheckResults> {
    let plugin = build_plugin(config)?;
    let analyzers = plugin.build_analyzers()?;
    debug!(load_mode = %plugin.load_mode(), analyzers = analyzers.len(), "plugin ready");

    let files = discover_files(paths, config)?;
    let parsed = parse_files(&files)?;
    let file_count = parsed.asts.len();
    let packages = group_packages(parsed.asts);
    info!(
        packages = packages.len(),
        files = file_count,
        skipped = parsed.skipped,
        "analyzing"
    );

    set_progress(0, packages.len());
    let pool = thread_pool(config.run.jobs)?;
    let per_package = pool.install(|| {
        packages
            .par_iter()
            .map(|package| {
                let _span = info_span!(
                    "package",
                    name = %package.name,
                    dir = %package.dir.display()
                )
                .entered();
                let _package = set_current_package(&package.dir);
                let diagnostics = analyze_package(&analyzers, &package.files);
                increment_processed();
                diagnostics
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let mut diagnostics: Vec<_> = per_package.into_iter().flatten().collect();
    sort_diagnostics(&mut diagnostics);

    Ok(CheckResults {
        project_paths: paths.to_vec(),
        timestamp: chrono::Utc::now(),
        summary: CheckSummary {
            packages: packages.len(),
            files: file_count,
            skipped_files: parsed.skipped,
            issues: diagnostics.len(),
        },
        diagnostics,
    })
}

/// Run the check and write the report. Returns whether issues were found.
pub fn handle_check(config: CheckConfig) -> anyhow::Result<bool> {
    let results = run_check(&config.paths, &config.config)?;

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    let mut writer = io::create_writer(config.format, config.output.as_deref())?;
    writer.write_results(&results)?;

    Ok(results.has_issues())
}
