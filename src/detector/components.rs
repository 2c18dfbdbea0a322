//! Bounded strongly connected components (Tarjan)
//!
//! Johnson's algorithm repeatedly needs the strongly connected component with
//! the least vertex order in the subgraph induced by the vertices with order
//! `>= s`. [`ComponentFinder`] runs Tarjan over exactly that subgraph: edges
//! into vertices below the bound are skipped, not traversed.

use std::hash::Hash;

use super::indexer::IndexedGraph;

/// A strongly connected component, as vertex orders sorted ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Component {
    members: Vec<usize>,
}

impl Component {
    fn new(mut members: Vec<usize>) -> Self {
        assert!(
            !members.is_empty(),
            "strongly connected components are never empty"
        );
        members.sort_unstable();
        Self { members }
    }

    /// The least vertex order in this component
    pub(crate) fn min(&self) -> usize {
        self.members[0]
    }

    pub(crate) fn members(&self) -> &[usize] {
        &self.members
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    /// A single vertex without a self-loop; no circuit can pass through it
    fn is_trivial<N: Eq + Hash, A>(&self, graph: &IndexedGraph<'_, N, A>) -> bool {
        self.members.len() == 1 && !graph.has_self_loop(self.members[0])
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct VertexState {
    index: Option<usize>,
    low_link: usize,
    on_stack: bool,
}

pub(crate) struct ComponentFinder<'a, 'g, N, A> {
    graph: &'a IndexedGraph<'g, N, A>,
    states: Vec<VertexState>,
    stack: Vec<usize>,
    next_index: usize,
}

impl<'a, 'g, N, A> ComponentFinder<'a, 'g, N, A>
where
    N: Eq + Hash,
{
    pub(crate) fn new(graph: &'a IndexedGraph<'g, N, A>) -> Self {
        Self {
            graph,
            states: vec![VertexState::default(); graph.len()],
            stack: Vec::new(),
            next_index: 0,
        }
    }

    /// Find the component with the least minimum vertex order among the
    /// components of the subgraph induced by orders `>= lower_bound` that can
    /// contain a circuit
    ///
    /// Returns `None` when that subgraph is empty or holds only trivial
    /// components, i.e. when no circuit is left to enumerate.
    pub(crate) fn find_least_scc(&mut self, lower_bound: usize) -> Option<Component> {
        if lower_bound >= self.graph.len() {
            return None;
        }

        let components = self.strongly_connected_components(lower_bound);
        assert!(
            !components.is_empty(),
            "the subgraph induced by orders >= {lower_bound} is non-empty and must have a \
             strongly connected component"
        );

        let graph = self.graph;
        components
            .into_iter()
            .filter(|component| !component.is_trivial(graph))
            .min_by_key(Component::min)
    }

    /// All strongly connected components of the subgraph induced by orders
    /// `>= lower_bound`, trivial ones included, in Tarjan completion order
    pub(crate) fn strongly_connected_components(&mut self, lower_bound: usize) -> Vec<Component> {
        self.reset();

        let mut components = Vec::new();
        for root in lower_bound..self.graph.len() {
            if self.states[root].index.is_none() {
                self.visit(root, lower_bound, &mut components);
            }
        }
        components
    }

    fn reset(&mut self) {
        self.states.fill(VertexState::default());
        self.stack.clear();
        self.next_index = 0;
    }

    // Depth-first search with an explicit stack of (vertex, next edge position)
    // frames in place of recursion.
    fn visit(&mut self, root: usize, lower_bound: usize, components: &mut Vec<Component>) {
        let graph = self.graph;
        let mut call_stack = vec![(root, 0)];
        self.discover(root);

        while let Some(frame) = call_stack.last_mut() {
            let v = frame.0;
            if let Some(next) = graph.edges_from(v).get(frame.1) {
                frame.1 += 1;
                let w = next.target;
                if w < lower_bound {
                    continue;
                }
                let w_state = self.states[w];
                match w_state.index {
                    None => {
                        self.discover(w);
                        call_stack.push((w, 0));
                    }
                    Some(w_index) if w_state.on_stack => {
                        self.states[v].low_link = self.states[v].low_link.min(w_index);
                    }
                    Some(_) => {}
                }
            } else {
                call_stack.pop();
                let v_state = self.states[v];
                if let Some(&(parent, _)) = call_stack.last() {
                    let parent_state = &mut self.states[parent];
                    parent_state.low_link = parent_state.low_link.min(v_state.low_link);
                }
                if v_state.index == Some(v_state.low_link) {
                    components.push(self.pop_component(v));
                }
            }
        }
    }

    fn discover(&mut self, v: usize) {
        self.states[v] = VertexState {
            index: Some(self.next_index),
            low_link: self.next_index,
            on_stack: true,
        };
        self.next_index += 1;
        self.stack.push(v);
    }

    fn pop_component(&mut self, root: usize) -> Component {
        let mut members = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.states[w].on_stack = false;
            members.push(w);
            if w == root {
                break;
            }
        }
        Component::new(members)
    }
}
