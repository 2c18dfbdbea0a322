use super::{Cycle, Edge};
use crate::error::FerrisCircuitsError;

/// An ordered, non-empty sequence of contiguous edges
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<N, A> {
    edges: Vec<Edge<N, A>>,
}

impl<N: PartialEq, A> Path<N, A> {
    /// Create a path, checking that it is non-empty and that every edge
    /// starts where its predecessor ends
    pub fn new(edges: Vec<Edge<N, A>>) -> Result<Self, FerrisCircuitsError> {
        validate_contiguous(&edges)?;
        Ok(Self { edges })
    }

    /// Extend the path by one edge starting at the current end node
    pub fn append(&mut self, edge: Edge<N, A>) -> Result<&mut Self, FerrisCircuitsError> {
        if edge.from() != self.end() {
            return Err(FerrisCircuitsError::InvalidPath {
                message: format!(
                    "edge {} does not start at the end of the path",
                    self.edges.len()
                ),
            });
        }
        self.edges.push(edge);
        Ok(self)
    }

    pub fn start(&self) -> &N {
        self.edges[0].from()
    }

    pub fn end(&self) -> &N {
        self.edges[self.edges.len() - 1].to()
    }

    pub fn edges(&self) -> &[Edge<N, A>] {
        &self.edges
    }

    /// Whether the path ends where it starts
    pub fn is_closed(&self) -> bool {
        self.start() == self.end()
    }

    pub fn into_cycle(self) -> Result<Cycle<N, A>, FerrisCircuitsError> {
        Cycle::new(self.edges)
    }

    pub(crate) fn into_edges(self) -> Vec<Edge<N, A>> {
        self.edges
    }
}

pub(super) fn validate_contiguous<N: PartialEq, A>(
    edges: &[Edge<N, A>],
) -> Result<(), FerrisCircuitsError> {
    if edges.is_empty() {
        return Err(FerrisCircuitsError::InvalidPath {
            message: "a path needs at least one edge".to_string(),
        });
    }
    for (i, pair) in edges.windows(2).enumerate() {
        if pair[0].to() != pair[1].from() {
            return Err(FerrisCircuitsError::InvalidPath {
                message: format!("edge {} does not start where edge {} ends", i + 1, i),
            });
        }
    }
    Ok(())
}

impl<N, A> From<Cycle<N, A>> for Path<N, A> {
    fn from(cycle: Cycle<N, A>) -> Self {
        Self {
            edges: cycle.into_edges(),
        }
    }
}
