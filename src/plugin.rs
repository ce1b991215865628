//! Plugin surface the host constructs the checker through.
//!
//! There is no global registry: a host builds [`EnforceMethodsPlugin`]
//! directly from its settings payload, asks it for analyzers and for the
//! load mode it needs.

use crate::analyzers::enforce_methods::{EnforceMethodsAnalyzer, MappingOrigin};
use crate::analyzers::Analyzer;
use crate::config::{MatchingConfig, Settings};
use crate::errors::Result;
use std::fmt;
use tracing::debug;

/// What the host has to load before running the analyzers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Syntax trees only
    Syntax,
    /// Syntax trees plus full type information
    TypesInfo,
}

impl LoadMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadMode::Syntax => "syntax",
            LoadMode::TypesInfo => "typesinfo",
        }
    }
}

impl fmt::Display for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait LinterPlugin: Send + Sync {
    fn build_analyzers(&self) -> Result<Vec<Box<dyn Analyzer>>>;
    fn load_mode(&self) -> LoadMode;
}

#[derive(Debug, Clone)]
pub struct EnforceMethodsPlugin {
    settings: Settings,
    matching: MatchingConfig,
}

impl EnforceMethodsPlugin {
    /// Decode `settings` and build the plugin.
    ///
    /// Fails when the payload does not decode, before any analysis runs.
    pub fn new(settings: serde_json::Value) -> Result<Self> {
        let settings = Settings::decode(settings)?;
        debug!(?settings, "decoded plugin settings");
        Ok(Self {
            settings,
            matching: MatchingConfig::default(),
        })
    }

    pub fn with_matching(mut self, matching: MatchingConfig) -> Self {
        self.matching = matching;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl LinterPlugin for EnforceMethodsPlugin {
    fn build_analyzers(&self) -> Result<Vec<Box<dyn Analyzer>>> {
        let origin = match &self.matching.resource_mapping_package {
            Some(path) => MappingOrigin::Package(path.clone()),
            None => MappingOrigin::TrailingName,
        };
        let analyzer: Box<dyn Analyzer> =
            Box::new(EnforceMethodsAnalyzer::new().with_origin(origin));
        Ok(vec![analyzer])
    }

    fn load_mode(&self) -> LoadMode {
        LoadMode::Syntax
    }
}
