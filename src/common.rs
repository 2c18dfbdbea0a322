//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Graph manifest arguments shared by all commands
#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// Graph manifests to load (TOML, or JSON with a .json extension)
    #[arg(value_name = "MANIFEST", required = true)]
    pub manifests: Vec<PathBuf>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "FERRIS_CIRCUITS_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "FERRIS_CIRCUITS_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

/// Detection budget arguments
#[derive(Args, Debug, Clone)]
pub struct DetectionArgs {
    /// Stop detection after this many cycles (unbounded by default)
    #[arg(long, env = "FERRIS_CIRCUITS_CYCLE_LIMIT")]
    pub cycle_limit: Option<usize>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::FerrisCircuitsError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(
        command: crate::cli::Commands,
    ) -> Result<Self, crate::error::FerrisCircuitsError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::FerrisCircuitsError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
