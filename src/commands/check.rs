//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckCyclesConfig;
use crate::error::FerrisCircuitsError;

impl FromCommand for CheckCyclesConfig {
    fn from_command(command: Commands) -> Result<Self, FerrisCircuitsError> {
        match command {
            Commands::Inspect {
                manifests,
                format,
                cycle_display,
                detection,
                error_on_cycles,
            } => CheckCyclesConfig::builder()
                .with_manifests(manifests.manifests)
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_max_cycles(cycle_display.max_cycles)
                .with_cycle_limit(detection.cycle_limit)
                .build(),
            _ => Err(FerrisCircuitsError::ConfigurationError {
                message: "Invalid command type for CheckCyclesConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckCyclesConfig);

/// Execute the inspect command for detecting dependency cycles
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckCyclesConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};

    #[test]
    fn test_config_from_inspect_command() {
        let cli = Cli::try_parse_from([
            "ferris-circuits",
            "inspect",
            "graph.toml",
            "--max-cycles",
            "3",
        ])
        .unwrap();

        let config = CheckCyclesConfig::try_from(cli.command).unwrap();

        assert_eq!(config.manifests.len(), 1);
        assert_eq!(config.format, OutputFormat::Human);
        assert_eq!(config.max_cycles, Some(3));
        assert_eq!(config.cycle_limit, None);
        assert!(!config.error_on_cycles);
    }

    #[test]
    fn test_wrong_command_is_rejected() {
        let cli =
            Cli::try_parse_from(["ferris-circuits", "spotlight", "a", "graph.toml"]).unwrap();

        assert!(matches!(
            CheckCyclesConfig::from_command(cli.command),
            Err(FerrisCircuitsError::ConfigurationError { .. })
        ));
    }
}
