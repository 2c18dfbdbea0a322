//! Elementary circuit enumeration within one component (Johnson)
//!
//! A vertex is blocked while it is on the current path or while no circuit
//! back to the start has been found through it. When a search from `v` finds
//! no circuit, `v` is recorded as dependently blocked by each of its
//! successors, so it becomes available again as soon as any of them is
//! unblocked.

use std::hash::Hash;

use super::components::Component;
use super::indexer::IndexedGraph;
use crate::core::{Cycle, Edge};

/// Circuits found through the start vertex of one component
pub(crate) struct Circuits<N, A> {
    pub(crate) cycles: Vec<Cycle<N, A>>,
    /// The cycle budget ran out before the search completed
    pub(crate) truncated: bool,
}

struct Frame {
    vertex: usize,
    next_edge: usize,
    found: bool,
}

impl Frame {
    fn new(vertex: usize) -> Self {
        Self {
            vertex,
            next_edge: 0,
            found: false,
        }
    }
}

pub(crate) struct CircuitEnumerator<'a, 'g, N, A> {
    graph: &'a IndexedGraph<'g, N, A>,
    in_component: Vec<bool>,
    blocked: Vec<bool>,
    blocked_by: Vec<Vec<usize>>,
    members: Vec<usize>,
}

impl<'a, 'g, N, A> CircuitEnumerator<'a, 'g, N, A>
where
    N: Eq + Hash + Clone,
    A: Clone,
{
    pub(crate) fn new(graph: &'a IndexedGraph<'g, N, A>) -> Self {
        let n = graph.len();
        Self {
            graph,
            in_component: vec![false; n],
            blocked: vec![false; n],
            blocked_by: vec![Vec::new(); n],
            members: Vec::new(),
        }
    }

    /// Enumerate every elementary circuit through the least vertex of
    /// `component` that stays inside `component`
    ///
    /// At most `budget` circuits are returned; if more exist the result is
    /// marked truncated.
    pub(crate) fn enumerate_circuits(
        &mut self,
        component: &Component,
        budget: Option<usize>,
    ) -> Circuits<N, A> {
        self.init(component);

        let graph = self.graph;
        let start = component.min();
        let mut circuits = Circuits {
            cycles: Vec::new(),
            truncated: false,
        };
        let mut path: Vec<&'g Edge<N, A>> = Vec::new();
        let mut frames = vec![Frame::new(start)];
        self.blocked[start] = true;

        while let Some(frame) = frames.last_mut() {
            let v = frame.vertex;
            if let Some(next) = graph.edges_from(v).get(frame.next_edge) {
                frame.next_edge += 1;
                let w = next.target;
                if !self.in_component[w] {
                    continue;
                }
                if w == start {
                    if budget.is_some_and(|limit| circuits.cycles.len() >= limit) {
                        circuits.truncated = true;
                        break;
                    }
                    frame.found = true;
                    let edges = path
                        .iter()
                        .copied()
                        .chain(std::iter::once(next.edge))
                        .cloned()
                        .collect();
                    circuits.cycles.push(Cycle::from_circuit(edges));
                } else if !self.blocked[w] {
                    path.push(next.edge);
                    self.blocked[w] = true;
                    frames.push(Frame::new(w));
                }
            } else {
                let found = frame.found;
                frames.pop();
                if found {
                    self.unblock(v);
                } else {
                    self.block_on_successors(v);
                }
                if let Some(parent) = frames.last_mut() {
                    path.pop();
                    parent.found |= found;
                }
            }
        }

        circuits
    }

    // Clear all state left by the previous component before marking the new
    // one; stale dependent blocks would hide circuits.
    fn init(&mut self, component: &Component) {
        for &member in &self.members {
            self.in_component[member] = false;
            self.blocked[member] = false;
            self.blocked_by[member].clear();
        }
        self.members.clear();
        self.members.extend_from_slice(component.members());
        for &member in &self.members {
            self.in_component[member] = true;
        }
    }

    fn unblock(&mut self, vertex: usize) {
        let mut pending = vec![vertex];
        while let Some(u) = pending.pop() {
            if !self.blocked[u] {
                continue;
            }
            self.blocked[u] = false;
            pending.append(&mut self.blocked_by[u]);
        }
    }

    fn block_on_successors(&mut self, v: usize) {
        for next in self.graph.edges_from(v) {
            let w = next.target;
            if self.in_component[w] && !self.blocked_by[w].contains(&v) {
                self.blocked_by[w].push(v);
            }
        }
    }
}
