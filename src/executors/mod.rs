//! Command executors that handle the actual logic for each command

pub mod check;
pub mod spotlight;

use std::path::PathBuf;

use miette::{Result, WrapErr};

use crate::detector::CycleDetector;
use crate::graph::{Graph, load_graph};
use crate::progress::ProgressReporter;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Load the merged graph from `manifests` and run cycle detection over it
///
/// Progress goes to stderr when it is an interactive terminal.
pub(crate) fn load_and_detect(
    manifests: &[PathBuf],
    cycle_limit: Option<usize>,
) -> Result<(Graph<String, String>, CycleDetector<String, String>)> {
    let mut progress = ProgressReporter::for_terminal();

    if let Some(p) = progress.as_mut() {
        p.start_loading(manifests.len());
    }
    let graph = load_graph(manifests).wrap_err("Failed to load the component graph")?;
    if let Some(p) = progress.as_mut() {
        p.finish_loading(graph.node_count(), graph.edge_count());
    }

    if let Some(p) = progress.as_mut() {
        p.start_cycle_detection();
    }
    let mut detector = match cycle_limit {
        Some(limit) => CycleDetector::with_cycle_limit(limit),
        None => CycleDetector::new(),
    };
    detector.detect_cycles(&graph);
    if let Some(p) = progress.as_mut() {
        p.finish_cycle_detection(detector.cycle_count(), detector.limit_reached());
    }

    Ok((graph, detector))
}
