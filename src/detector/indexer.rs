//! Dense vertex indexing
//!
//! Both Tarjan and Johnson work on `usize` vertex orders and flat adjacency
//! lists instead of hashing nodes on every step.

use std::collections::HashMap;
use std::hash::Hash;

use crate::core::Edge;
use crate::graph::Graph;

/// An outgoing edge with its target resolved to a vertex order
pub(crate) struct IndexedEdge<'g, N, A> {
    pub(crate) target: usize,
    pub(crate) edge: &'g Edge<N, A>,
}

/// A read-only view of a [`Graph`] where each node has an order in `0..n`,
/// following insertion order
pub(crate) struct IndexedGraph<'g, N, A> {
    adjacency: Vec<Vec<IndexedEdge<'g, N, A>>>,
}

impl<'g, N, A> IndexedGraph<'g, N, A>
where
    N: Eq + Hash + Clone,
    A: PartialEq,
{
    pub(crate) fn new(graph: &'g Graph<N, A>) -> Self {
        let nodes: Vec<&'g N> = graph.nodes().collect();
        let order: HashMap<&'g N, usize> = nodes
            .iter()
            .enumerate()
            .map(|(order, &node)| (node, order))
            .collect();
        assert_eq!(order.len(), nodes.len(), "graph nodes must be unique");

        let adjacency = nodes
            .iter()
            .map(|&node| {
                graph
                    .outgoing_edges(node)
                    .iter()
                    .map(|edge| IndexedEdge {
                        target: *order
                            .get(edge.to())
                            .expect("edge targets are members of the graph"),
                        edge,
                    })
                    .collect()
            })
            .collect();

        Self { adjacency }
    }
}

impl<'g, N, A> IndexedGraph<'g, N, A> {
    pub(crate) fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn edges_from(&self, order: usize) -> &[IndexedEdge<'g, N, A>] {
        &self.adjacency[order]
    }

    pub(crate) fn has_self_loop(&self, order: usize) -> bool {
        self.adjacency[order].iter().any(|next| next.target == order)
    }
}
