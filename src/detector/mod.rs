//! # Cycle Detection Module
//!
//! This module enumerates every elementary circuit (a cycle visiting no node
//! twice) of a [`Graph`](crate::graph::Graph).
//!
//! ## Algorithm
//!
//! We use Johnson's algorithm. Nodes get dense orders `0..n` in insertion
//! order. With a bound `s` starting at 0, Tarjan's algorithm finds the
//! strongly connected component with the least order in the subgraph induced
//! by orders `>= s`; a blocked depth-first search then enumerates the circuits
//! through that least vertex `v` inside the component, and `s` moves to
//! `v + 1`. Every circuit is found exactly once, from its least vertex,
//! without any global deduplication. Time is O((V + E)(C + 1)) for C circuits.
//!
//! Both searches use explicit stacks, so component size is not limited by
//! the call stack.
//!
//! ## Key Components
//!
//! - **CycleDetector**: The driver, holding the detected cycles
//! - **ComponentFinder**: Tarjan restricted to orders above a bound
//! - **CircuitEnumerator**: Johnson's blocked search within one component
//!
//! ## Example
//!
//! ```
//! use ferris_circuits::detector::CycleDetector;
//! use ferris_circuits::graph::Graph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::new();
//! for node in ["a", "b", "c"] {
//!     graph.add_node(node);
//! }
//!
//! // A 2-cycle nested in a 3-cycle: a <-> b, a -> b -> c -> a
//! graph.add_edge("a", "b", "imports")?;
//! graph.add_edge("b", "a", "imports")?;
//! graph.add_edge("b", "c", "calls")?;
//! graph.add_edge("c", "a", "extends")?;
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph);
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.cycle_count(), 2);
//! # Ok(())
//! # }
//! ```

mod components;
mod detector_impl;
mod indexer;
mod johnson;

pub use detector_impl::*;
