//! The `enforceMethods` analyzer.
//!
//! Every struct declared in a package must have
//!
//! - `Validate() error`
//! - `GetResourceMappings() []types.ResourceMapping`
//!
//! declared on a value receiver. The run is three sequential passes over
//! the package: [`collector`] registers struct declarations, [`scanner`]
//! attributes method declarations to them using [`matchers`], and
//! [`reporter`] emits one diagnostic per capability still missing.

pub mod collector;
pub mod matchers;
pub mod registry;
pub mod reporter;
pub mod scanner;

use crate::analyzers::{Analyzer, Pass};
use crate::errors::Result;
use crate::observability::{set_phase, AnalysisPhase};
use tracing::debug;

pub use registry::{Registry, StructRecord};
pub use scanner::MappingOrigin;

pub const ANALYZER_NAME: &str = "enforceMethods";
pub const ANALYZER_DOC: &str =
    "Confirms that each struct implements Validator interface and has GetResourceMappings method";

pub const VALIDATE_METHOD: &str = "Validate";
pub const RESOURCE_MAPPINGS_METHOD: &str = "GetResourceMappings";

#[derive(Debug, Clone, Default)]
pub struct EnforceMethodsAnalyzer {
    origin: MappingOrigin,
}

impl EnforceMethodsAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the resource-mapping element type to come from `origin`
    pub fn with_origin(mut self, origin: MappingOrigin) -> Self {
        self.origin = origin;
        self
    }
}

impl Analyzer for EnforceMethodsAnalyzer {
    fn name(&self) -> &'static str {
        ANALYZER_NAME
    }

    fn doc(&self) -> &'static str {
        ANALYZER_DOC
    }

    fn run(&self, pass: &mut Pass<'_>) -> Result<()> {
        let mut registry = {
            let _phase = set_phase(AnalysisPhase::Collection);
            collector::collect_structs(pass.files)
        };

        {
            let _phase = set_phase(AnalysisPhase::Scanning);
            scanner::scan_methods(pass.files, pass.types_info, &mut registry, &self.origin);
        }

        let _phase = set_phase(AnalysisPhase::Reporting);
        let reported = reporter::report_missing(pass, &registry);
        debug!(structs = registry.len(), reported, "enforceMethods finished");

        Ok(())
    }
}
