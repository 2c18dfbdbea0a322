use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid graph manifest syntax in '{file}'")]
#[diagnostic(
    code(ferris_circuits::manifest_parse_error),
    help("Check the manifest syntax near the highlighted position")
)]
pub struct ManifestParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

#[derive(Error, Debug, Diagnostic)]
pub enum FerrisCircuitsError {
    #[error("Node {node} of edge {edge} is not part of the graph")]
    #[diagnostic(
        code(ferris_circuits::unknown_node),
        help("Add both endpoints with `add_node` before adding the edge")
    )]
    UnknownNode { node: String, edge: String },

    #[error("Invalid path: {message}")]
    #[diagnostic(
        code(ferris_circuits::invalid_path),
        help("Consecutive edges must share a node: edge[i].to == edge[i + 1].from")
    )]
    InvalidPath { message: String },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(ferris_circuits::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestParseError(Box<ManifestParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(ferris_circuits::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(ferris_circuits::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(ferris_circuits::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(ferris_circuits::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
