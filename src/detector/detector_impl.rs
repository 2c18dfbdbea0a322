use std::hash::Hash;

use log::{debug, trace, warn};

use super::components::ComponentFinder;
use super::indexer::IndexedGraph;
use super::johnson::CircuitEnumerator;
use crate::core::Cycle;
use crate::graph::Graph;

/// Detector for finding every elementary circuit of a [`Graph`]
///
/// Runs Johnson's algorithm: repeatedly take the strongly connected component
/// with the least vertex order in the subgraph induced by the vertices not yet
/// exhausted, enumerate the circuits through that least vertex, then move the
/// bound past it.
pub struct CycleDetector<N, A> {
    cycles: Vec<Cycle<N, A>>,
    cycle_limit: Option<usize>,
    limit_reached: bool,
}

impl<N, A> Default for CycleDetector<N, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, A> CycleDetector<N, A> {
    /// Create a detector without a cycle budget
    pub fn new() -> Self {
        Self {
            cycles: Vec::new(),
            cycle_limit: None,
            limit_reached: false,
        }
    }

    /// Create a detector that stops after finding `limit` cycles
    ///
    /// The number of elementary circuits can grow exponentially with the graph
    /// size; the limit bounds the work for dense graphs.
    pub fn with_cycle_limit(limit: usize) -> Self {
        Self {
            cycle_limit: Some(limit),
            ..Self::new()
        }
    }

    /// Get all detected cycles, in discovery order
    pub fn cycles(&self) -> &[Cycle<N, A>] {
        &self.cycles
    }

    pub fn into_cycles(self) -> Vec<Cycle<N, A>> {
        self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Whether the cycle budget stopped detection before all cycles were found
    pub fn limit_reached(&self) -> bool {
        self.limit_reached
    }

    /// Add a cycle to the detector (used for filtered results)
    pub fn add_cycle(&mut self, cycle: Cycle<N, A>) {
        self.cycles.push(cycle);
    }

    /// Keep only the cycles matching `predicate`, preserving discovery order
    pub fn retain_cycles(&mut self, predicate: impl FnMut(&Cycle<N, A>) -> bool) {
        self.cycles.retain(predicate);
    }
}

impl<N, A> CycleDetector<N, A>
where
    N: Eq + Hash + Clone,
    A: PartialEq + Clone,
{
    /// Detect all cycles in the graph, replacing any previous results
    pub fn detect_cycles(&mut self, graph: &Graph<N, A>) {
        self.cycles.clear();
        self.limit_reached = false;

        let indexed = IndexedGraph::new(graph);
        let node_count = indexed.len();
        let mut finder = ComponentFinder::new(&indexed);
        let mut enumerator = CircuitEnumerator::new(&indexed);

        let mut bound = 0;
        while bound < node_count {
            let Some(component) = finder.find_least_scc(bound) else {
                debug!("no strongly connected component with a circuit above order {bound}");
                break;
            };
            let start = component.min();
            assert!(
                start >= bound,
                "component minimum {start} lies below the search bound {bound}"
            );
            debug!(
                "enumerating circuits through order {start} in a component of {} vertices",
                component.len()
            );

            let budget = self
                .cycle_limit
                .map(|limit| limit.saturating_sub(self.cycles.len()));
            let circuits = enumerator.enumerate_circuits(&component, budget);
            trace!(
                "found {} circuits through order {start}",
                circuits.cycles.len()
            );
            self.cycles.extend(circuits.cycles);

            if circuits.truncated {
                self.limit_reached = true;
                warn!(
                    "cycle limit of {} reached; remaining cycles were not enumerated",
                    self.cycles.len()
                );
                break;
            }

            bound = start + 1;
        }

        debug!(
            "detected {} cycles among {node_count} nodes",
            self.cycles.len()
        );
    }
}
