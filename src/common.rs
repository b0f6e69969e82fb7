//!
//! Common definition and utility functions for graphs
//!

use super::error::Result;
use super::graph::Graph;

///
/// FloatWeight is generalized type of f64.
///
/// It represents a type that is f64 convertable.
///
/// Edge weights of a petgraph graph must implement this to be converted by
/// `Graph::from_digraph`.
///
pub trait FloatWeight {
    fn float_weight(&self) -> f64;
}

impl FloatWeight for f64 {
    fn float_weight(&self) -> f64 {
        *self
    }
}

impl FloatWeight for f32 {
    fn float_weight(&self) -> f64 {
        *self as f64
    }
}

impl FloatWeight for i64 {
    fn float_weight(&self) -> f64 {
        *self as f64
    }
}

impl FloatWeight for i32 {
    fn float_weight(&self) -> f64 {
        *self as f64
    }
}

///
/// Result of a single-source shortest path computation
///
/// Both vectors are indexed by vertex. Unreachable vertices have distance
/// `f64::INFINITY`. The source and unreachable vertices have no predecessor.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Paths {
    pub distances: Vec<f64>,
    pub predecessors: Vec<Option<usize>>,
}

impl Paths {
    ///
    /// Vertices of a shortest path ending at `target`, following `predecessors` back
    ///
    /// `None` if `target` is unreachable.
    ///
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.distances.get(target)?.is_finite() {
            return None;
        }
        let mut path = vec![target];
        let mut node = target;
        while let Some(pred) = self.predecessors[node] {
            // a predecessor cycle only exists if a negative cycle was relaxed
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(pred);
            node = pred;
        }
        path.reverse();
        Some(path)
    }
}

///
/// Calculate total weight of a path given as a list of vertices `[v0, v1, ..., vk]`
///
/// Fails with `UnknownEdge` if two consecutive vertices are not connected.
///
pub fn total_weight(graph: &Graph, nodes: &[usize]) -> Result<f64> {
    nodes
        .windows(2)
        .map(|pair| graph.weight_of(pair[0], pair[1]))
        .sum()
}

///
/// Calculate total weight of a cycle given as a list of vertices
///
/// The closing edge `(last, first)` is included.
///
pub fn cycle_weight(graph: &Graph, nodes: &[usize]) -> Result<f64> {
    let n = nodes.len();
    (0..n)
        .map(|i| graph.weight_of(nodes[i], nodes[(i + 1) % n]))
        .sum()
}

///
/// Determine if a cycle given by vertices is a negative cycle or not.
///
pub fn is_negative_cycle(graph: &Graph, nodes: &[usize]) -> bool {
    !nodes.is_empty() && matches!(cycle_weight(graph, nodes), Ok(w) if w < 0.0)
}

///
/// determine if the path (= a list of nodes) is node-simple
///
#[cfg(test)]
pub(crate) fn is_node_simple(nodes: &[usize]) -> bool {
    let mut used: fnv::FnvHashSet<usize> = fnv::FnvHashSet::default();
    nodes.iter().all(|&node| used.insert(node))
}

//
// tests
//
