//!
//! Directed weighted graph on vertices `0..vertex_count`
//!
//! * adjacency keeps successors in insertion order (repeated `add_edge` keeps duplicates)
//! * one weight per ordered pair, the latest `add_edge` wins
//!
use super::common::FloatWeight;
use super::error::{Error, Result};
use super::iterators::EdgesIterator;
use fnv::FnvHashMap as HashMap;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

///
/// Directed graph with `f64` edge weights
///
/// Built once by repeated `add_edge`, then only read by the solvers.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<Vec<usize>>,
    weights: HashMap<(usize, usize), f64>,
}

impl Graph {
    ///
    /// Create an edgeless graph with `vertex_count` vertices
    ///
    pub fn new(vertex_count: usize) -> Self {
        Graph {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
            weights: HashMap::default(),
        }
    }

    ///
    /// Add a directed edge `u -> v` with weight `w`
    ///
    /// Adding the same ordered pair again overwrites the weight, while `v` is
    /// appended to the successors of `u` once more.
    ///
    /// `w` must be finite: NaN and infinite weights fail with `InvalidWeight`.
    ///
    pub fn add_edge(&mut self, u: usize, v: usize, w: f64) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if !w.is_finite() {
            return Err(Error::InvalidWeight { from: u, to: v });
        }
        self.adjacency[u].push(v);
        self.weights.insert((u, v), w);
        Ok(())
    }

    ///
    /// Successors of `u` in insertion order
    ///
    pub fn neighbors(&self, u: usize) -> Result<&[usize]> {
        self.check_vertex(u)?;
        Ok(&self.adjacency[u])
    }

    ///
    /// Weight of the most recent `add_edge(u, v, _)`
    ///
    pub fn weight_of(&self, u: usize, v: usize) -> Result<f64> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.weights
            .get(&(u, v))
            .copied()
            .ok_or(Error::UnknownEdge { from: u, to: v })
    }

    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.weights.contains_key(&(u, v))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    ///
    /// Number of distinct ordered pairs `(u, v)` with an edge
    ///
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    ///
    /// Iterate over all edges `(u, v, w)`, by ascending `u` then adjacency order
    ///
    pub fn edges(&self) -> EdgesIterator<'_> {
        EdgesIterator::new(self)
    }

    ///
    /// Ensure `vertex` is in `0..vertex_count`
    ///
    pub fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    ///
    /// Successors of `u` without bounds check, for solvers that already validated `u`
    ///
    pub(crate) fn successors(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    ///
    /// Stored weight of an edge known to exist, i.e. `v` was taken from `successors(u)`
    ///
    pub(crate) fn edge_weight(&self, u: usize, v: usize) -> f64 {
        self.weights[&(u, v)]
    }

    ///
    /// Convert a petgraph `DiGraph` into `Graph`
    ///
    /// Node indices are kept. Parallel edges collapse into one ordered pair,
    /// the weight of the edge with the largest `EdgeIndex` wins.
    ///
    pub fn from_digraph<N, E: FloatWeight>(graph: &DiGraph<N, E>) -> Result<Self> {
        let mut g = Graph::new(graph.node_count());
        for edge in graph.edge_references() {
            g.add_edge(
                edge.source().index(),
                edge.target().index(),
                edge.weight().float_weight(),
            )?;
        }
        Ok(g)
    }
}

//
// tests
//
