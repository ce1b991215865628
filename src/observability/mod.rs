//! Observability infrastructure: logging setup, crash reports and context
//! tracking.
//!
//! - **Logging**: `tracing` subscriber writing to stderr, filtered by
//!   `RUST_LOG` or the `-v` count
//! - **Panic Hook**: structured crash reports with context
//! - **Context Tracking**: thread-local phase, package and file tracking
//! - **Progress Tracking**: atomic counters for packages analyzed
//!
//! ```ignore
//! use enforce_methods::observability::{set_phase, set_current_file, AnalysisPhase};
//!
//! let _phase = set_phase(AnalysisPhase::Parsing);
//! for file in files {
//!     let _file_guard = set_current_file(&file);
//!     // If a panic occurs here, the crash report shows phase and file
//!     parse_file(&file)?;
//! }
//! ```

pub mod context;
pub mod logging;
pub mod panic_hook;

pub use context::{
    get_current_context, get_progress, increment_processed, reset_context, set_current_file,
    set_current_package, set_phase, set_progress, AnalysisContext, AnalysisPhase, ContextGuard,
};
pub use logging::{default_filter, init_logging};
pub use panic_hook::install_panic_hook;
