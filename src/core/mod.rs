pub mod ast;

use crate::common::Position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use ast::GoAst;

/// A single finding reported by an analyzer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub analyzer: String,
    pub position: Position,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        analyzer: impl Into<String>,
        position: Position,
        message: impl Into<String>,
    ) -> Self {
        Self {
            analyzer: analyzer.into(),
            position,
            message: message.into(),
        }
    }
}

/// Totals for one check run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    pub packages: usize,
    pub files: usize,
    pub skipped_files: usize,
    pub issues: usize,
}

/// Everything a check run produced, in reporting order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub project_paths: Vec<PathBuf>,
    pub timestamp: DateTime<Utc>,
    pub diagnostics: Vec<Diagnostic>,
    pub summary: CheckSummary,
}

impl CheckResults {
    pub fn has_issues(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Order diagnostics by position. The sort is stable, so findings at the
/// same position keep the order their analyzer reported them in.
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by(|a, b| a.position.cmp(&b.position));
}
