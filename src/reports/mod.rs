//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions workflow commands

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use std::fmt::Display;

use crate::cli::OutputFormat;
use crate::core::Edge;
use crate::detector::CycleDetector;
use crate::error::FerrisCircuitsError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from cycle detection results
    fn generate_report<N: Display, A: Display>(
        &self,
        detector: &CycleDetector<N, A>,
    ) -> Result<String, FerrisCircuitsError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;

/// Generate a report in the requested format
pub fn generate_report<N: Display, A: Display>(
    format: OutputFormat,
    max_cycles: Option<usize>,
    detector: &CycleDetector<N, A>,
) -> Result<String, FerrisCircuitsError> {
    match format {
        OutputFormat::Human => HumanReportGenerator::new(max_cycles).generate_report(detector),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(detector),
        OutputFormat::Junit => JunitReportGenerator::new().generate_report(detector),
        OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(detector),
    }
}

/// Render an edge as `from → to`, followed by its attachment in parentheses
/// unless the attachment renders empty
pub(crate) fn describe_edge<N: Display, A: Display>(edge: &Edge<N, A>) -> String {
    let attachment = edge.attachment().to_string();
    if attachment.is_empty() {
        format!("{} → {}", edge.from(), edge.to())
    } else {
        format!("{} → {} ({attachment})", edge.from(), edge.to())
    }
}

/// Render the nodes of a cycle as `a → b → c → a`
pub(crate) fn describe_nodes<N: Display>(nodes: &[&N]) -> String {
    let mut names: Vec<String> = nodes.iter().map(|node| node.to_string()).collect();
    if let Some(first) = names.first().cloned() {
        names.push(first);
    }
    names.join(" → ")
}
