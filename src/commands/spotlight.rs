//! Spotlight command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpotlightConfig;
use crate::error::FerrisCircuitsError;

impl FromCommand for SpotlightConfig {
    fn from_command(command: Commands) -> Result<Self, FerrisCircuitsError> {
        match command {
            Commands::Spotlight {
                node,
                manifests,
                format,
                cycle_display,
                detection,
            } => SpotlightConfig::builder()
                .with_node(node)
                .with_manifests(manifests.manifests)
                .with_format(format.format)
                .with_max_cycles(cycle_display.max_cycles)
                .with_cycle_limit(detection.cycle_limit)
                .build(),
            _ => Err(FerrisCircuitsError::ConfigurationError {
                message: "Invalid command type for SpotlightConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpotlightConfig);

/// Execute the spotlight command for analyzing cycles through a specific node
pub fn execute_spotlight_command(command: Commands) -> Result<()> {
    let config = SpotlightConfig::from_command(command)
        .wrap_err("Failed to parse spotlight command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spotlight::SpotlightExecutor;
    SpotlightExecutor::execute(config)
}
