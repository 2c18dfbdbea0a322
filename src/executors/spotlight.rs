//! Spotlight command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::SpotlightConfig;
use crate::error::FerrisCircuitsError;
use crate::executors::{CommandExecutor, load_and_detect};
use crate::reports::generate_report;
use crate::utils::string::pluralize;

pub struct SpotlightExecutor;

impl CommandExecutor for SpotlightExecutor {
    type Config = SpotlightConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Analyzing cycles involving node '{}'...\n",
            style("🔦").cyan(),
            style(&config.node).bold()
        );

        let (graph, mut detector) = load_and_detect(&config.manifests, config.cycle_limit)?;

        if !graph.contains_node(&config.node) {
            return Err(FerrisCircuitsError::ConfigurationError {
                message: format!("node '{}' does not appear in any manifest", config.node),
            })
            .wrap_err("Failed to put a spotlight on the node");
        }

        detector.retain_cycles(|cycle| cycle.contains_node(&config.node));

        if detector.has_cycles() {
            eprintln!(
                "\n{} Found {} {} involving '{}':",
                style("⚠").yellow(),
                detector.cycle_count(),
                pluralize("cycle", detector.cycle_count()),
                style(&config.node).bold()
            );
        } else {
            eprintln!(
                "{} No cycles found involving node '{}'",
                style("✓").green(),
                style(&config.node).bold()
            );
        }

        let report = generate_report(config.format, config.max_cycles, &detector)
            .wrap_err("Failed to generate report for node spotlight")?;
        print!("{report}");

        Ok(())
    }
}
