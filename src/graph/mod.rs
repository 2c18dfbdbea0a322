//! # Graph Module
//!
//! The component graph consumed by the cycle detector, plus loading graphs
//! from manifest files.
//!
//! ## Example
//!
//! ```
//! use ferris_circuits::graph::Graph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::new();
//! graph.add_node("core");
//! graph.add_node("app");
//!
//! graph.add_edge("core", "app", "core::Service -> app::Handler")?;
//! graph.add_edge("app", "core", "app::Handler -> core::Service")?;
//!
//! let cycles = graph.find_cycles();
//! assert_eq!(cycles.len(), 1);
//!
//! // Edges must connect nodes already in the graph
//! assert!(graph.add_edge("core", "db", "").is_err());
//! # Ok(())
//! # }
//! ```

mod graph_impl;
mod manifest;

pub use graph_impl::Graph;
pub use manifest::{GraphManifest, ManifestEdge, load_graph};
