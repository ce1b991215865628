use crate::common::Position;
use crate::core::{ast::GoAst, Diagnostic};
use crate::errors::Result;
use tracing::{debug, debug_span};

pub mod enforce_methods;
pub mod go;

pub use enforce_methods::EnforceMethodsAnalyzer;
pub use go::{GoType, TypesInfo};

/// Receives the findings of an analyzer run
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// One analyzer run over one package.
///
/// Bundles the parsed files, the package type information and the sink
/// diagnostics are reported to.
pub struct Pass<'a> {
    analyzer: &'static str,
    pub files: &'a [GoAst],
    pub types_info: &'a TypesInfo<'a>,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> Pass<'a> {
    pub fn new(
        analyzer: &'static str,
        files: &'a [GoAst],
        types_info: &'a TypesInfo<'a>,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            analyzer,
            files,
            types_info,
            sink,
        }
    }

    /// Report a finding at `position`
    pub fn report(&mut self, position: Position, message: impl Into<String>) {
        self.sink
            .report(Diagnostic::new(self.analyzer, position, message));
    }
}

pub trait Analyzer: Send + Sync {
    fn name(&self) -> &'static str;
    fn doc(&self) -> &'static str;
    fn run(&self, pass: &mut Pass<'_>) -> Result<()>;
}

/// Run every analyzer over the files of one package.
///
/// Each call owns its type information and sink, so separate packages can
/// be analyzed concurrently.
pub fn analyze_package(
    analyzers: &[Box<dyn Analyzer>],
    files: &[GoAst],
) -> Result<Vec<Diagnostic>> {
    let types_info = TypesInfo::from_package(files);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    for analyzer in analyzers {
        let _span = debug_span!("analyzer", name = analyzer.name()).entered();
        let before = diagnostics.len();
        {
            let mut pass = Pass::new(analyzer.name(), files, &types_info, &mut diagnostics);
            analyzer.run(&mut pass)?;
        }
        debug!(
            reported = diagnostics.len() - before,
            files = files.len(),
            "analyzer finished"
        );
    }

    Ok(diagnostics)
}
