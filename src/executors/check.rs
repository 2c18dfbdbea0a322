//! Inspect command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::CheckCyclesConfig;
use crate::executors::{CommandExecutor, load_and_detect};
use crate::reports::generate_report;

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckCyclesConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking for dependency cycles...\n",
            style("🎡").cyan()
        );
        if let Some(limit) = config.cycle_limit {
            eprintln!(
                "  {} Cycle limit: {}",
                style("→").dim(),
                style(limit).yellow()
            );
        }

        let (graph, detector) = load_and_detect(&config.manifests, config.cycle_limit)?;

        if graph.is_empty() {
            eprintln!("{} The component graph is empty", style("ℹ").blue());
        }

        let report = generate_report(config.format, config.max_cycles, &detector)
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && detector.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
