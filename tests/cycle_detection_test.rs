//! Integration tests for cycle detection using the library interface

use std::collections::HashSet;

use ferris_circuits::core::{Cycle, Edge};
use ferris_circuits::detector::CycleDetector;
use ferris_circuits::graph::Graph;
use pretty_assertions::assert_eq;

fn graph_with_nodes(nodes: &[&'static str]) -> Graph<&'static str, String> {
    let mut graph = Graph::new();
    for &node in nodes {
        graph.add_node(node);
    }
    graph
}

fn connect(graph: &mut Graph<&'static str, String>, from: &'static str, to: &'static str) {
    graph
        .add_edge(from, to, format!("{from}.{to}"))
        .expect("both endpoints were added up front");
}

fn edge_pairs(cycle: &Cycle<&'static str, String>) -> Vec<(&'static str, &'static str)> {
    cycle
        .edges()
        .iter()
        .map(|edge| (*edge.from(), *edge.to()))
        .collect()
}

#[test]
fn test_acyclic_graph_has_no_cycles() {
    let mut graph = graph_with_nodes(&["a", "b", "c", "d", "e"]);
    connect(&mut graph, "a", "b");
    connect(&mut graph, "a", "c");
    connect(&mut graph, "b", "d");
    connect(&mut graph, "c", "d");
    connect(&mut graph, "d", "e");

    assert!(graph.find_cycles().is_empty());
}

#[test]
fn test_degenerate_graphs_have_no_cycles() {
    let empty: Graph<&str, String> = Graph::new();
    assert!(empty.find_cycles().is_empty());

    let edgeless = graph_with_nodes(&["a", "b"]);
    assert!(edgeless.find_cycles().is_empty());
}

#[test]
fn test_simple_three_cycle() {
    let mut graph = graph_with_nodes(&["a", "b", "c"]);
    connect(&mut graph, "a", "b");
    connect(&mut graph, "b", "c");
    connect(&mut graph, "c", "a");

    let cycles: Vec<_> = graph.find_cycles().into_iter().collect();

    assert_eq!(cycles.len(), 1);
    assert_eq!(
        edge_pairs(&cycles[0]),
        vec![("a", "b"), ("b", "c"), ("c", "a")]
    );
}

#[test]
fn test_sub_cycle_is_isolated_from_unrelated_node() {
    let mut graph = graph_with_nodes(&["a", "b", "c"]);
    connect(&mut graph, "b", "a");
    connect(&mut graph, "a", "b");

    let cycles: Vec<_> = graph.find_cycles().into_iter().collect();

    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].len(), 2);
    assert!(!cycles[0].contains_node(&"c"));
}

#[test]
fn test_nested_cycles_are_counted_separately() {
    let mut graph = graph_with_nodes(&["a", "b", "c"]);
    connect(&mut graph, "b", "a");
    connect(&mut graph, "a", "b");
    connect(&mut graph, "c", "a");
    connect(&mut graph, "b", "c");

    let cycles = graph.find_cycles();
    let lengths: HashSet<usize> = cycles.iter().map(Cycle::len).collect();

    assert_eq!(cycles.len(), 2);
    assert_eq!(lengths, HashSet::from([2, 3]));
}

#[test]
fn test_double_linked_triangle_has_five_cycles() {
    let mut graph = graph_with_nodes(&["a", "b", "c"]);
    connect(&mut graph, "a", "b");
    connect(&mut graph, "b", "c");
    connect(&mut graph, "c", "a");
    connect(&mut graph, "b", "a");
    connect(&mut graph, "c", "b");
    connect(&mut graph, "a", "c");

    let cycles = graph.find_cycles();
    let two_cycles = cycles.iter().filter(|cycle| cycle.len() == 2).count();
    let three_cycles = cycles.iter().filter(|cycle| cycle.len() == 3).count();

    assert_eq!(cycles.len(), 5);
    assert_eq!(two_cycles, 3);
    assert_eq!(three_cycles, 2);
}

#[test]
fn test_find_cycles_is_idempotent() {
    let mut graph = graph_with_nodes(&["a", "b", "c", "d"]);
    connect(&mut graph, "a", "b");
    connect(&mut graph, "b", "c");
    connect(&mut graph, "c", "a");
    connect(&mut graph, "c", "d");
    connect(&mut graph, "d", "b");

    let first = graph.find_cycles();
    let second = graph.find_cycles();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[test]
fn test_state_is_not_carried_between_components() {
    // Two components, {0, 1, 2} and {3, 4, 5}, sharing a one-way bridge.
    // Blocked state left over from the first must not hide circuits in the
    // second.
    let mut graph = graph_with_nodes(&["n0", "n1", "n2", "n3", "n4", "n5"]);
    connect(&mut graph, "n0", "n1");
    connect(&mut graph, "n1", "n2");
    connect(&mut graph, "n2", "n0");
    connect(&mut graph, "n2", "n1");
    connect(&mut graph, "n1", "n3");
    connect(&mut graph, "n3", "n4");
    connect(&mut graph, "n4", "n5");
    connect(&mut graph, "n5", "n3");
    connect(&mut graph, "n4", "n3");

    let cycles = graph.find_cycles();

    assert_eq!(cycles.len(), 4);
    assert_eq!(
        cycles
            .iter()
            .filter(|cycle| cycle.contains_node(&"n3"))
            .count(),
        2
    );
}

#[test]
fn test_parallel_edges_yield_distinct_cycles() {
    let mut graph = graph_with_nodes(&["app", "core"]);
    graph
        .add_edge("app", "core", "app::Service -> core::Repo".to_string())
        .unwrap();
    graph
        .add_edge("app", "core", "app::Handler -> core::Event".to_string())
        .unwrap();
    graph
        .add_edge("core", "app", "core::Repo -> app::Config".to_string())
        .unwrap();

    let cycles = graph.find_cycles();
    let attachments: HashSet<&str> = cycles
        .iter()
        .map(|cycle| cycle.edges()[0].attachment().as_str())
        .collect();

    assert_eq!(cycles.len(), 2);
    assert_eq!(
        attachments,
        HashSet::from(["app::Service -> core::Repo", "app::Handler -> core::Event"])
    );
}

#[test]
fn test_cycles_start_at_earliest_inserted_node() {
    let mut graph = graph_with_nodes(&["c", "a", "b"]);
    connect(&mut graph, "a", "b");
    connect(&mut graph, "b", "c");
    connect(&mut graph, "c", "a");

    let mut detector = CycleDetector::new();
    detector.detect_cycles(&graph);

    assert_eq!(detector.cycles()[0].to_string(), "c -> a -> b -> c");
}

/// Deterministic pseudo-random sequence so the test is reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) % bound as u64) as usize
    }
}

#[test]
fn test_random_cycles_joined_by_one_way_links() {
    // Several disjoint simple cycles, linked only from lower to higher
    // cycles, so no link can close a new circuit.
    let mut rng = Lcg(42);
    let mut graph: Graph<usize, usize> = Graph::new();
    let mut rings: Vec<Vec<usize>> = Vec::new();
    let mut next_node = 0;

    for _ in 0..12 {
        let size = 2 + rng.next(6);
        let ring: Vec<usize> = (next_node..next_node + size).collect();
        next_node += size;
        for &node in &ring {
            graph.add_node(node);
        }
        for (i, &node) in ring.iter().enumerate() {
            graph.add_edge(node, ring[(i + 1) % size], 0).unwrap();
        }
        rings.push(ring);
    }

    for _ in 0..30 {
        let low = rng.next(rings.len() - 1);
        let high = low + 1 + rng.next(rings.len() - low - 1);
        let from = rings[low][rng.next(rings[low].len())];
        let to = rings[high][rng.next(rings[high].len())];
        graph.add_edge(from, to, 1).unwrap();
    }

    let cycles = graph.find_cycles();

    assert_eq!(cycles.len(), rings.len());
    for ring in &rings {
        let expected: Vec<Edge<usize, usize>> = ring
            .iter()
            .enumerate()
            .map(|(i, &node)| Edge::new(node, ring[(i + 1) % ring.len()], 0))
            .collect();
        assert!(cycles.contains(&Cycle::new(expected).unwrap()));
    }
}

#[test]
fn test_cycle_limit_truncates_detection() {
    let nodes = ["a", "b", "c", "d"];
    let mut graph = graph_with_nodes(&nodes);
    for from in nodes {
        for to in nodes {
            if from != to {
                connect(&mut graph, from, to);
            }
        }
    }

    let mut unbounded = CycleDetector::new();
    unbounded.detect_cycles(&graph);
    assert_eq!(unbounded.cycle_count(), 20);
    assert!(!unbounded.limit_reached());

    let mut bounded = CycleDetector::with_cycle_limit(5);
    bounded.detect_cycles(&graph);
    assert_eq!(bounded.cycle_count(), 5);
    assert!(bounded.limit_reached());
}
