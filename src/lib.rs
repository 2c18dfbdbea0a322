//! # Ferris Circuits - Enumerate Every Dependency Cycle in a Component Graph
//!
//! Ferris Circuits finds all elementary cycles (cycles that visit no node
//! twice) of a directed graph whose edges carry an opaque attachment, such as
//! the code-level dependencies that make one component depend on another.
//! It uses Johnson's algorithm, with Tarjan's strongly connected components
//! restricting each search to the part of the graph that can still hold a
//! cycle.
//!
//! ## Main Components
//!
//! - **Core**: Value types: [`Edge`](core::Edge), [`Path`](core::Path) and
//!   [`Cycle`](core::Cycle)
//! - **Graph**: The directed multigraph and graph manifest loading
//! - **Detector**: Johnson's circuit enumeration driven over Tarjan's SCCs
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Example: Finding Cycles Between Components
//!
//! ```
//! use ferris_circuits::detector::CycleDetector;
//! use ferris_circuits::graph::Graph;
//! use ferris_circuits::reports::{JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let mut graph = Graph::new();
//! for component in ["web", "service", "storage"] {
//!     graph.add_node(component);
//! }
//!
//! graph.add_edge("web", "service", "web::Controller -> service::Api")?;
//! graph.add_edge("service", "storage", "service::Api -> storage::Repo")?;
//! graph.add_edge("storage", "web", "storage::Repo -> web::Session")?;
//! graph.add_edge("storage", "service", "storage::Repo -> service::Event")?;
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph);
//!
//! assert_eq!(detector.cycle_count(), 2);
//! for cycle in detector.cycles() {
//!     println!("{cycle}");
//! }
//!
//! let json = JsonReportGenerator::new().generate_report(&detector)?;
//! assert!(json.contains("\"cycle_count\": 2"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Loading Graph Manifests
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use ferris_circuits::detector::CycleDetector;
//! use ferris_circuits::graph::load_graph;
//! use ferris_circuits::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let graph = load_graph(&[
//!     PathBuf::from("architecture/components.toml"),
//!     PathBuf::from("architecture/generated.json"),
//! ])?;
//!
//! // Bound the search; dense graphs can hold exponentially many cycles
//! let mut detector = CycleDetector::with_cycle_limit(10_000);
//! detector.detect_cycles(&graph);
//!
//! if detector.limit_reached() {
//!     eprintln!("more cycles exist than were enumerated");
//! }
//!
//! let report = HumanReportGenerator::new(Some(5)); // show max 5 cycles
//! println!("{}", report.generate_report(&detector)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Cycles Through a Single Node
//!
//! ```
//! use ferris_circuits::graph::Graph;
//!
//! # fn main() -> miette::Result<()> {
//! let mut graph = Graph::new();
//! for node in ["a", "b", "c"] {
//!     graph.add_node(node);
//! }
//! graph.add_edge("a", "b", ())?;
//! graph.add_edge("b", "a", ())?;
//! graph.add_edge("b", "c", ())?;
//! graph.add_edge("c", "b", ())?;
//!
//! let through_c = graph
//!     .find_cycles()
//!     .into_iter()
//!     .filter(|cycle| cycle.contains_node(&"c"))
//!     .count();
//!
//! assert_eq!(through_c, 1);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    // RUST_LOG overrides the default filter
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(constants::logging::DEFAULT_FILTER),
    )
    .try_init();

    let cli = Cli::parse();

    execute_command(cli.command)
}
