use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

use crate::core::{Cycle, Edge};
use crate::detector::CycleDetector;
use crate::error::FerrisCircuitsError;

/// A directed multigraph of caller-supplied nodes and attached edges
///
/// Nodes are kept in insertion order, which also fixes the order in which the
/// detector enumerates them. Every edge endpoint must be added as a node
/// before the edge itself.
#[derive(Debug, Clone)]
pub struct Graph<N, A> {
    nodes: Vec<N>,
    outgoing: HashMap<N, Vec<Edge<N, A>>>,
    edge_count: usize,
}

impl<N, A> Default for Graph<N, A> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            outgoing: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<N, A> Graph<N, A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N, A> Graph<N, A>
where
    N: Eq + Hash + Clone,
    A: PartialEq,
{
    /// Add a node, returning whether it was not present before
    pub fn add_node(&mut self, node: N) -> bool {
        if self.outgoing.contains_key(&node) {
            return false;
        }
        self.outgoing.insert(node.clone(), Vec::new());
        self.nodes.push(node);
        true
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.outgoing.contains_key(node)
    }

    /// Outgoing edges of `node`, in insertion order
    pub fn outgoing_edges(&self, node: &N) -> &[Edge<N, A>] {
        self.outgoing.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All edges, grouped by source node in node insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N, A>> {
        self.nodes
            .iter()
            .flat_map(|node| self.outgoing_edges(node).iter())
    }

    /// Add an edge between two nodes already in the graph
    ///
    /// Returns `Ok(false)` if a structurally identical edge already exists.
    pub fn add_edge(&mut self, from: N, to: N, attachment: A) -> Result<bool, FerrisCircuitsError>
    where
        N: fmt::Debug,
    {
        self.insert_edge(Edge::new(from, to, attachment))
    }

    pub fn insert_edge(&mut self, edge: Edge<N, A>) -> Result<bool, FerrisCircuitsError>
    where
        N: fmt::Debug,
    {
        for endpoint in [edge.from(), edge.to()] {
            if !self.contains_node(endpoint) {
                return Err(FerrisCircuitsError::UnknownNode {
                    node: format!("{endpoint:?}"),
                    edge: format!("{:?} -> {:?}", edge.from(), edge.to()),
                });
            }
        }
        Ok(self.push_edge(edge))
    }

    /// Add `node` together with edges connecting it to the graph
    ///
    /// Edges are checked in order; the first one referencing an unknown node
    /// aborts the insertion of the remaining ones.
    pub fn add(
        &mut self,
        node: N,
        connecting_edges: impl IntoIterator<Item = Edge<N, A>>,
    ) -> Result<(), FerrisCircuitsError>
    where
        N: fmt::Debug,
    {
        self.add_node(node);
        for edge in connecting_edges {
            self.insert_edge(edge)?;
        }
        Ok(())
    }

    fn push_edge(&mut self, edge: Edge<N, A>) -> bool {
        let Some(edges) = self.outgoing.get_mut(edge.from()) else {
            unreachable!("edge endpoints are checked before insertion");
        };
        if edges.contains(&edge) {
            return false;
        }
        edges.push(edge);
        self.edge_count += 1;
        true
    }
}

impl<N, A> Graph<N, A>
where
    N: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
{
    /// Find every elementary circuit of the graph
    ///
    /// Each circuit is reported exactly once, as the rotation starting at its
    /// earliest-inserted node.
    pub fn find_cycles(&self) -> HashSet<Cycle<N, A>> {
        let mut detector = CycleDetector::new();
        detector.detect_cycles(self);
        detector.into_cycles().into_iter().collect()
    }
}

impl<N, A> From<&DiGraph<N, A>> for Graph<N, A>
where
    N: Eq + Hash + Clone,
    A: PartialEq + Clone,
{
    /// Node weights that compare equal collapse into a single node
    fn from(source: &DiGraph<N, A>) -> Self {
        let mut graph = Graph::new();
        for index in source.node_indices() {
            graph.add_node(source[index].clone());
        }
        for edge in source.edge_references() {
            graph.push_edge(Edge::new(
                source[edge.source()].clone(),
                source[edge.target()].clone(),
                edge.weight().clone(),
            ));
        }
        graph
    }
}
