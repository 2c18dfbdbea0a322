//! GitHub Actions format report generation

use std::fmt::{Display, Write};

use super::{ReportGenerator, describe_edge, describe_nodes};
use crate::detector::CycleDetector;
use crate::error::FerrisCircuitsError;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report<N: Display, A: Display>(
        &self,
        detector: &CycleDetector<N, A>,
    ) -> Result<String, FerrisCircuitsError> {
        let mut output = String::new();

        if !detector.has_cycles() {
            writeln!(
                output,
                "::notice title=Dependency Check::No dependency cycles detected! ✅"
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Dependency Cycles::Found {} dependency cycle{}",
            detector.cycle_count(),
            if detector.cycle_count() == 1 { "" } else { "s" }
        )?;

        for (i, cycle) in detector.cycles().iter().enumerate() {
            writeln!(
                output,
                "::warning title=Cycle {}::Nodes: {}",
                i + 1,
                describe_nodes(&cycle.nodes())
            )?;

            for edge in cycle.edges() {
                writeln!(output, "::notice::  {}", describe_edge(edge))?;
            }
        }

        if detector.limit_reached() {
            writeln!(
                output,
                "::warning title=Cycle Limit::The cycle limit was reached; more cycles may exist."
            )?;
        }

        writeln!(
            output,
            "::notice title=Recommendation::To break these cycles, remove at least one \
             dependency from each cycle."
        )?;

        Ok(output)
    }
}
