use std::fmt;

use serde::Serialize;

use super::path::validate_contiguous;
use super::{Edge, Path};
use crate::error::FerrisCircuitsError;

/// A closed path: an ordered, non-empty edge sequence whose last edge ends
/// where the first one starts
///
/// Two cycles are equal only if their edge sequences are equal. Rotations of
/// the same circuit compare unequal; the detector never produces more than
/// one rotation of any circuit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cycle<N, A> {
    edges: Vec<Edge<N, A>>,
}

impl<N: PartialEq, A> Cycle<N, A> {
    pub fn new(edges: Vec<Edge<N, A>>) -> Result<Self, FerrisCircuitsError> {
        validate_closed(&edges)?;
        Ok(Self { edges })
    }

    /// Build a cycle from edges already known to be closed and contiguous
    pub(crate) fn from_circuit(edges: Vec<Edge<N, A>>) -> Self {
        debug_assert!(
            validate_closed(&edges).is_ok(),
            "circuit edges must form a closed path"
        );
        Self { edges }
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.edges.iter().any(|edge| edge.from() == node)
    }
}

impl<N, A> Cycle<N, A> {
    pub fn edges(&self) -> &[Edge<N, A>] {
        &self.edges
    }

    /// The nodes visited by this cycle, in traversal order, each once
    pub fn nodes(&self) -> Vec<&N> {
        self.edges.iter().map(Edge::from).collect()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always false; a cycle has at least one edge
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub(crate) fn into_edges(self) -> Vec<Edge<N, A>> {
        self.edges
    }
}

fn validate_closed<N: PartialEq, A>(edges: &[Edge<N, A>]) -> Result<(), FerrisCircuitsError> {
    validate_contiguous(edges)?;
    if edges[edges.len() - 1].to() != edges[0].from() {
        return Err(FerrisCircuitsError::InvalidPath {
            message: "a cycle must end where it starts".to_string(),
        });
    }
    Ok(())
}

impl<N: PartialEq, A> TryFrom<Path<N, A>> for Cycle<N, A> {
    type Error = FerrisCircuitsError;

    fn try_from(path: Path<N, A>) -> Result<Self, Self::Error> {
        Cycle::new(path.into_edges())
    }
}

impl<N: fmt::Display, A> fmt::Display for Cycle<N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            write!(f, "{} -> ", edge.from())?;
        }
        write!(f, "{}", self.edges[0].from())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn triangle() -> Cycle<&'static str, &'static str> {
        Cycle::new(vec![
            Edge::new("a", "b", "x"),
            Edge::new("b", "c", "y"),
            Edge::new("c", "a", "z"),
        ])
        .unwrap()
    }

    #[test]
    fn test_display_closes_the_loop() {
        assert_eq!(triangle().to_string(), "a -> b -> c -> a");
    }

    #[test]
    fn test_nodes_in_traversal_order() {
        assert_eq!(triangle().nodes(), vec![&"a", &"b", &"c"]);
        assert!(triangle().contains_node(&"b"));
        assert!(!triangle().contains_node(&"d"));
    }

    #[test]
    fn test_open_path_is_not_a_cycle() {
        let result = Cycle::new(vec![Edge::new("a", "b", ()), Edge::new("b", "c", ())]);
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid path: a cycle must end where it starts"
        );
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let cycle = Cycle::new(vec![Edge::new("a", "a", ())]).unwrap();
        assert_eq!(cycle.len(), 1);
        assert_eq!(cycle.to_string(), "a -> a");
    }

    #[test]
    fn test_rotations_are_not_equal() {
        let rotated = Cycle::new(vec![
            Edge::new("b", "c", "y"),
            Edge::new("c", "a", "z"),
            Edge::new("a", "b", "x"),
        ])
        .unwrap();

        assert_ne!(triangle(), rotated);
    }

    #[test]
    fn test_round_trip_through_path() {
        let path: Path<_, _> = triangle().into();
        assert!(path.is_closed());

        let cycle = Cycle::try_from(path).unwrap();
        assert_eq!(cycle, triangle());
    }
}
