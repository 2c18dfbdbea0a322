use clap::{Parser, Subcommand};

use crate::common::{CycleDisplayArgs, DetectionArgs, FormatArgs, ManifestArgs};

#[derive(Parser)]
#[command(
    name = "ferris-circuits",
    about = "🎡 Enumerate every elementary dependency cycle in a component graph",
    long_about = "ferris-circuits reads component graphs from TOML or JSON manifests and lists \
                  every elementary cycle (a cycle that visits no component twice) using \
                  Johnson's algorithm. Parallel edges with different attachments are reported \
                  as distinct cycles.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the component graph for dependency cycles
    ///
    /// Loads and merges the given graph manifests, then reports every
    /// elementary cycle found.
    #[command(
        long_about = "Detect dependency cycles in a component graph. All manifests are merged \
                      into one graph; every elementary circuit is reported exactly once, \
                      starting at its earliest-declared node. Use --cycle-limit to bound the \
                      search on dense graphs, where the number of cycles can grow exponentially."
    )]
    Inspect {
        #[command(flatten)]
        manifests: ManifestArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        #[command(flatten)]
        detection: DetectionArgs,

        /// Exit with error code if cycles found
        #[arg(long, env = "FERRIS_CIRCUITS_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Put a spotlight on cycles passing through a specific node
    ///
    /// Runs the same detection as `inspect` but only reports the cycles
    /// that visit the given node.
    #[command(
        long_about = "Analyze the dependency cycles passing through a specific node. Detection \
                      runs over the whole graph; the report is filtered to cycles that visit \
                      the named node, making it easier to see how one component participates \
                      in cycles."
    )]
    Spotlight {
        /// Name of the node to analyze
        #[arg(value_name = "NODE", env = "FERRIS_CIRCUITS_NODE")]
        node: String,

        #[command(flatten)]
        manifests: ManifestArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        #[command(flatten)]
        detection: DetectionArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}
