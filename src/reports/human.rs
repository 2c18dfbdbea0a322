//! Human-readable console report generation

use std::fmt::{Display, Write};

use console::style;

use super::{ReportGenerator, describe_edge, describe_nodes};
use crate::detector::CycleDetector;
use crate::error::FerrisCircuitsError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report<N: Display, A: Display>(
        &self,
        detector: &CycleDetector<N, A>,
    ) -> Result<String, FerrisCircuitsError> {
        let mut output = String::new();

        if !detector.has_cycles() {
            write!(
                output,
                "\n{} No dependency cycles detected! Your components have a clean dependency \
                 structure.\n",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        let total_cycles = detector.cycle_count();
        write!(
            output,
            "\n{} Found {} dependency {}:\n\n",
            style("❌").red().bold(),
            style(total_cycles).red().bold(),
            pluralize("cycle", total_cycles)
        )?;

        let shown = self.max_cycles.unwrap_or(total_cycles).min(total_cycles);

        for (i, cycle) in detector.cycles().iter().take(shown).enumerate() {
            writeln!(
                output,
                "{} Cycle #{} ({} {})",
                style("🔄").yellow(),
                i + 1,
                cycle.len(),
                pluralize("edge", cycle.len())
            )?;
            writeln!(
                output,
                "  {} {}",
                style("📦").blue(),
                style(describe_nodes(&cycle.nodes())).bold()
            )?;

            writeln!(
                output,
                "\n  {} Dependencies creating this cycle:",
                style("🔗").cyan()
            )?;
            for edge in cycle.edges() {
                writeln!(
                    output,
                    "    {} {}",
                    style("→").dim(),
                    style(describe_edge(edge)).yellow()
                )?;
            }
            writeln!(output)?;
        }

        if shown < total_cycles {
            writeln!(
                output,
                "\n{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(shown).yellow(),
                style(total_cycles).yellow()
            )?;
        }

        if detector.limit_reached() {
            writeln!(
                output,
                "\n{} The cycle limit was reached; more cycles may exist. Raise --cycle-limit \
                 to search further.",
                style("⚠").yellow().bold()
            )?;
        }

        writeln!(
            output,
            "\n{} To break these cycles, you need to remove at least one dependency from each \
             cycle.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Focus on the edges that appear in the most cycles for maximum impact.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
