//! Inspect command configuration

use std::path::PathBuf;

use super::missing_field;
use crate::cli::OutputFormat;

/// Configuration for the inspect command
///
/// This struct contains all options for detecting and reporting dependency
/// cycles in a component graph.
#[derive(Debug, Clone)]
pub struct CheckCyclesConfig {
    /// Graph manifests merged into the analyzed graph
    pub manifests: Vec<PathBuf>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
    /// Maximum number of cycles to detect (None = unbounded)
    pub cycle_limit: Option<usize>,
}

impl CheckCyclesConfig {
    pub fn builder() -> CheckCyclesConfigBuilder {
        CheckCyclesConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckCyclesConfigBuilder {
    manifests: Option<Vec<PathBuf>>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    max_cycles: Option<Option<usize>>,
    cycle_limit: Option<Option<usize>>,
}

impl CheckCyclesConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifests(mut self, manifests: Vec<PathBuf>) -> Self {
        self.manifests = Some(manifests);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
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

impl crate::common::ConfigBuilder for CheckCyclesConfigBuilder {
    type Config = CheckCyclesConfig;

    fn build(self) -> Result<Self::Config, crate::error::FerrisCircuitsError> {
        Ok(CheckCyclesConfig {
            manifests: self.manifests.ok_or_else(|| missing_field("manifests"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing_field("error_on_cycles"))?,
            max_cycles: self.max_cycles.ok_or_else(|| missing_field("max_cycles"))?,
            cycle_limit: self
                .cycle_limit
                .ok_or_else(|| missing_field("cycle_limit"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_missing_field_is_reported() {
        let error = CheckCyclesConfig::builder()
            .with_manifests(vec![PathBuf::from("graph.toml")])
            .with_format(OutputFormat::Json)
            .build()
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Configuration error: Missing required field: error_on_cycles"
        );
    }
}
