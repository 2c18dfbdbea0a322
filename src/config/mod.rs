//! # Configuration Module
//!
//! Configuration structures for the ferris-circuits commands, each with a
//! builder that rejects missing fields.
//!
//! - **CheckCyclesConfig**: Configuration for the `inspect` command
//! - **SpotlightConfig**: Configuration for the `spotlight` command
//!
//! ## Example
//!
//! ```
//! use ferris_circuits::cli::OutputFormat;
//! use ferris_circuits::common::ConfigBuilder;
//! use ferris_circuits::config::CheckCyclesConfig;
//!
//! let config = CheckCyclesConfig::builder()
//!     .with_manifests(vec!["graph.toml".into()])
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true)
//!     .with_max_cycles(None)
//!     .with_cycle_limit(Some(1000))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.cycle_limit, Some(1000));
//! ```

pub mod check;
pub mod spotlight;

pub use check::CheckCyclesConfig;
pub use spotlight::SpotlightConfig;

use crate::error::FerrisCircuitsError;

pub(crate) fn missing_field(field: &str) -> FerrisCircuitsError {
    FerrisCircuitsError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
