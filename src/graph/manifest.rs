//! Graph manifest files
//!
//! A manifest lists nodes and attached edges in TOML or JSON. Files ending in
//! `.json` are parsed as JSON, everything else as TOML.

use std::path::{Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use super::Graph;
use crate::error::{FerrisCircuitsError, ManifestParseError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphManifest {
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<ManifestEdge>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEdge {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub attachment: String,
}

impl GraphManifest {
    pub fn parse_file(path: &Path) -> Result<Self, FerrisCircuitsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| FerrisCircuitsError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&path.display().to_string(), &content)
        } else {
            Self::parse_toml(&path.display().to_string(), &content)
        }
    }

    pub fn parse_toml(name: &str, content: &str) -> Result<Self, FerrisCircuitsError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));
            parse_error(name, content, span, Box::new(e))
        })
    }

    pub fn parse_json(name: &str, content: &str) -> Result<Self, FerrisCircuitsError> {
        serde_json::from_str(content).map_err(|e| {
            let span = line_column_offset(content, e.line(), e.column())
                .map(|offset| SourceSpan::new(offset.into(), 1));
            parse_error(name, content, span, Box::new(e))
        })
    }

    /// Add this manifest's nodes and edges to `graph`
    ///
    /// Listed nodes are added first; endpoints only mentioned by edges are
    /// added afterwards in order of appearance.
    pub fn apply_to(self, graph: &mut Graph<String, String>) -> Result<(), FerrisCircuitsError> {
        for node in self.nodes {
            graph.add_node(node);
        }
        for edge in self.edges {
            graph.add_node(edge.from.clone());
            graph.add_node(edge.to.clone());
            graph.add_edge(edge.from, edge.to, edge.attachment)?;
        }
        Ok(())
    }
}

/// Load and merge all manifests into one graph
pub fn load_graph(paths: &[PathBuf]) -> Result<Graph<String, String>, FerrisCircuitsError> {
    let mut graph = Graph::new();
    for path in paths {
        GraphManifest::parse_file(path)?.apply_to(&mut graph)?;
    }
    Ok(graph)
}

fn parse_error(
    name: &str,
    content: &str,
    span: Option<SourceSpan>,
    source: Box<dyn std::error::Error + Send + Sync>,
) -> FerrisCircuitsError {
    FerrisCircuitsError::ManifestParseError(Box::new(ManifestParseError {
        file: name.to_string(),
        source_code: NamedSource::new(name, content.to_string()),
        span,
        source,
    }))
}

// serde_json reports 1-based lines and columns; column 0 means the error is
// positioned before the first character of the line.
fn line_column_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < content.len()).then_some(offset)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_toml_manifest() {
        let manifest = GraphManifest::parse_toml(
            "graph.toml",
            r#"
nodes = ["core", "app"]

[[edges]]
from = "core"
to = "app"
attachment = "core::Foo -> app::Bar"

[[edges]]
from = "app"
to = "core"
"#,
        )
        .unwrap();

        assert_eq!(manifest.nodes, vec!["core", "app"]);
        assert_eq!(manifest.edges.len(), 2);
        assert_eq!(manifest.edges[0].attachment, "core::Foo -> app::Bar");
        assert_eq!(manifest.edges[1].attachment, "");
    }

    #[test]
    fn test_parse_json_manifest() {
        let manifest = GraphManifest::parse_json(
            "graph.json",
            r#"{"nodes": ["a"], "edges": [{"from": "a", "to": "b"}]}"#,
        )
        .unwrap();

        assert_eq!(manifest.nodes, vec!["a"]);
        assert_eq!(manifest.edges[0].to, "b");
    }

    #[test]
    fn test_toml_syntax_error_carries_span() {
        let error = GraphManifest::parse_toml("graph.toml", "nodes = [").unwrap_err();

        match error {
            FerrisCircuitsError::ManifestParseError(inner) => {
                assert_eq!(inner.file, "graph.toml");
                assert!(inner.span.is_some());
            }
            other => panic!("Expected ManifestParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_json_syntax_error_carries_span() {
        let error = GraphManifest::parse_json("graph.json", "{\n  \"nodes\": [1,\n}").unwrap_err();

        match error {
            FerrisCircuitsError::ManifestParseError(inner) => assert!(inner.span.is_some()),
            other => panic!("Expected ManifestParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = GraphManifest::parse_toml("graph.toml", "vertices = [\"a\"]");
        assert!(result.is_err());
    }

    #[test]
    fn test_edge_endpoints_are_added_implicitly() {
        let manifest = GraphManifest::parse_toml(
            "graph.toml",
            r#"
nodes = ["b"]
edges = [{ from = "a", to = "b" }, { from = "b", to = "a" }]
"#,
        )
        .unwrap();

        let mut graph = Graph::new();
        manifest.apply_to(&mut graph).unwrap();

        assert_eq!(
            graph.nodes().cloned().collect::<Vec<_>>(),
            vec!["b".to_string(), "a".to_string()]
        );
        assert_eq!(graph.find_cycles().len(), 1);
    }

    #[test]
    fn test_load_graph_merges_files() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.toml");
        let second = temp_dir.path().join("second.json");
        fs::write(&first, "edges = [{ from = \"a\", to = \"b\" }]").unwrap();
        fs::write(&second, r#"{"edges": [{"from": "b", "to": "a"}]}"#).unwrap();

        let graph = load_graph(&[first, second]).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.find_cycles().len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");

        assert!(matches!(
            GraphManifest::parse_file(&missing),
            Err(FerrisCircuitsError::FileReadError { .. })
        ));
    }

    #[test]
    fn test_line_column_offset() {
        let content = "ab\ncd\nef";
        assert_eq!(line_column_offset(content, 1, 1), Some(0));
        assert_eq!(line_column_offset(content, 2, 2), Some(4));
        assert_eq!(line_column_offset(content, 0, 0), None);
        assert_eq!(line_column_offset(content, 9, 9), None);
    }
}
