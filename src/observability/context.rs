//! Thread-local context tracking for crash reports.
//!
//! Records which phase of a check run is active and which file or package
//! is being processed. Uses thread-local storage for per-thread context
//! (works with rayon parallel iterators) and atomic counters for global
//! package progress.
//!
//! Context guards use RAII for automatic cleanup on drop.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static PACKAGES_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static PACKAGES_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<AnalysisContext> =
        const { RefCell::new(AnalysisContext::new()) };
}

/// Context snapshot for the current operation.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    pub phase: Option<AnalysisPhase>,
    pub current_file: Option<PathBuf>,
    /// Directory of the package being analyzed
    pub current_package: Option<PathBuf>,
}

impl AnalysisContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_file: None,
            current_package: None,
        }
    }
}

/// Stages of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Discovering Go files and grouping them into packages
    FileDiscovery,
    /// Parsing source files into syntax trees
    Parsing,
    /// Registering struct declarations
    Collection,
    /// Matching method declarations to structs
    Scanning,
    /// Emitting diagnostics for missing methods
    Reporting,
    /// Writing the report
    OutputGeneration,
}

impl std::fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileDiscovery => write!(f, "file_discovery"),
            Self::Parsing => write!(f, "parsing"),
            Self::Collection => write!(f, "collection"),
            Self::Scanning => write!(f, "scanning"),
            Self::Reporting => write!(f, "reporting"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: AnalysisContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(apply: impl FnOnce(&mut AnalysisContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current analysis phase.
///
/// Returns a guard that restores the previous phase on drop.
#[must_use]
pub fn set_phase(phase: AnalysisPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

/// Set the current file being parsed or analyzed.
#[must_use]
pub fn set_current_file(path: impl Into<PathBuf>) -> ContextGuard {
    let path = path.into();
    update(|ctx| ctx.current_file = Some(path))
}

/// Set the package directory being analyzed.
#[must_use]
pub fn set_current_package(dir: impl Into<PathBuf>) -> ContextGuard {
    let dir = dir.into();
    update(|ctx| ctx.current_package = Some(dir))
}

/// Set the progress counters (processed and total packages).
pub fn set_progress(processed: usize, total: usize) {
    PACKAGES_PROCESSED.store(processed, Ordering::Relaxed);
    PACKAGES_TOTAL.store(total, Ordering::Relaxed);
}

/// Increment the processed package count. Safe from parallel iterators.
pub fn increment_processed() {
    PACKAGES_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

#[must_use]
pub fn get_current_context() -> AnalysisContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        PACKAGES_PROCESSED.load(Ordering::Relaxed),
        PACKAGES_TOTAL.load(Ordering::Relaxed),
    )
}

/// Reset the current thread's context to empty.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = AnalysisContext::new();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_guard_restores_previous() {
        reset_context();

        let _collect = set_phase(AnalysisPhase::Collection);
        {
            let _scan = set_phase(AnalysisPhase::Scanning);
            assert_eq!(get_current_context().phase, Some(AnalysisPhase::Scanning));
        }

        assert_eq!(get_current_context().phase, Some(AnalysisPhase::Collection));
    }

    #[test]
    fn test_nested_context_guards() {
        reset_context();

        let _phase = set_phase(AnalysisPhase::Parsing);
        let _pkg = set_current_package("/src/requests");
        let _file = set_current_file("/src/requests/example.go");

        let ctx = get_current_context();
        assert_eq!(ctx.phase, Some(AnalysisPhase::Parsing));
        assert_eq!(ctx.current_package, Some(PathBuf::from("/src/requests")));
        assert_eq!(
            ctx.current_file,
            Some(PathBuf::from("/src/requests/example.go"))
        );
    }

    #[test]
    fn test_progress_tracking() {
        set_progress(0, 10);
        increment_processed();
        increment_processed();

        let (processed, total) = get_progress();
        assert_eq!(processed, 2);
        assert_eq!(total, 10);
    }

    #[test]
    fn test_analysis_phase_display() {
        assert_eq!(AnalysisPhase::FileDiscovery.to_string(), "file_discovery");
        assert_eq!(AnalysisPhase::Collection.to_string(), "collection");
        assert_eq!(AnalysisPhase::Scanning.to_string(), "scanning");
        assert_eq!(AnalysisPhase::Reporting.to_string(), "reporting");
        assert_eq!(
            AnalysisPhase::OutputGeneration.to_string(),
            "output_generation"
        );
    }

    #[test]
    fn test_empty_context_by_default() {
        reset_context();

        let ctx = get_current_context();
        assert!(ctx.phase.is_none());
        assert!(ctx.current_file.is_none());
        assert!(ctx.current_package.is_none());
    }
}
