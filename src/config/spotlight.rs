//! Spotlight command configuration

use std::path::PathBuf;

use super::missing_field;
use crate::cli::OutputFormat;

#[derive(Debug, Clone)]
pub struct SpotlightConfig {
    pub node: String,
    pub manifests: Vec<PathBuf>,
    pub format: OutputFormat,
    pub max_cycles: Option<usize>,
    pub cycle_limit: Option<usize>,
}

impl SpotlightConfig {
    pub fn builder() -> SpotlightConfigBuilder {
        SpotlightConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SpotlightConfigBuilder {
    node: Option<String>,
    manifests: Option<Vec<PathBuf>>,
    format: Option<OutputFormat>,
    max_cycles: Option<Option<usize>>,
    cycle_limit: Option<Option<usize>>,
}

impl SpotlightConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, node: String) -> Self {
        self.node = Some(node);
        self
    }

    pub fn with_manifests(mut self, manifests: Vec<PathBuf>) -> Self {
        self.manifests = Some(manifests);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_cycle_limit(mut self, cycle_limit: Option<usize>) -> Self {
        self.cycle_limit = Some(cycle_limit);
        self
    }
}

impl crate::common::ConfigBuilder for SpotlightConfigBuilder {
    type Config = SpotlightConfig;

    fn build(self) -> Result<Self::Config, crate::error::FerrisCircuitsError> {
        Ok(SpotlightConfig {
            node: self.node.ok_or_else(|| missing_field("node"))?,
            manifests: self.manifests.ok_or_else(|| missing_field("manifests"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            max_cycles: self.max_cycles.ok_or_else(|| missing_field("max_cycles"))?,
            cycle_limit: self
                .cycle_limit
                .ok_or_else(|| missing_field("cycle_limit"))?,
        })
    }
}
