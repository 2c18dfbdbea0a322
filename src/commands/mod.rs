//! Command implementations for ferris-circuits CLI
//!
//! - inspect: Inspect the component graph for dependency cycles
//! - spotlight: Put a spotlight on cycles passing through a specific node

pub mod check;
pub mod spotlight;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => check::execute_check_command(command),
        Commands::Spotlight { .. } => spotlight::execute_spotlight_command(command),
    }
}
