//! Panic hook printing a crash report.
//!
//! The report names what the crashing thread was doing (phase, package,
//! file), how far the run got, where the panic happened, and includes a
//! backtrace when `RUST_BACKTRACE` is set.

use super::context::{get_current_context, get_progress, AnalysisContext};
use std::fmt::Write as _;
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE_WIDTH: usize = 72;
const MAX_VALUE_WIDTH: usize = 60;

/// Install the crash-report hook. Call early in `main()`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let (processed, total) = get_progress();
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
        let report = crash_report(
            &panic_message(info),
            location,
            &get_current_context(),
            processed,
            total,
        );
        eprintln!("\n{report}");
        if std::env::var_os("RUST_BACKTRACE").is_some() {
            eprintln!("{}", std::backtrace::Backtrace::capture());
        }
    }));
}

/// Render the crash report text
fn crash_report(
    message: &str,
    location: Option<String>,
    context: &AnalysisContext,
    processed: usize,
    total: usize,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    let mut field = |label: &str, value: &str| {
        let _ = writeln!(out, "  {label:<10} {}", truncate(value, MAX_VALUE_WIDTH));
    };

    field("panic", message);
    if let Some(location) = &location {
        field("at", location);
    }
    field(
        "phase",
        &context
            .phase
            .map_or_else(|| "(before analysis)".to_string(), |p| p.to_string()),
    );
    if let Some(metadata) = Span::current().metadata() {
        field("span", metadata.name());
    }
    if let Some(package) = &context.current_package {
        field("package", &package.display().to_string());
    }
    if let Some(file) = &context.current_file {
        field("file", &file.display().to_string());
    }
    if total > 0 {
        field("progress", &format!("{processed}/{total} packages"));
    }

    let mut report = format!(
        "{rule}\nenforce-methods {VERSION} crashed ({}, {})\n{rule}\n{out}",
        std::env::consts::OS,
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
    );
    if std::env::var_os("RUST_BACKTRACE").is_none() {
        report.push_str("  Run with RUST_BACKTRACE=1 for a stack trace\n");
    }
    report.push_str(&rule);
    report.push_str("\nThis is a bug in enforce-methods, not in the code being checked.");
    if let Some(file) = &context.current_file {
        let _ = write!(
            report,
            "\nPlease include the file {} when reporting it.",
            file.display()
        );
    }
    report
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
