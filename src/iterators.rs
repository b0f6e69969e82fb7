//!
//! Iterators over `Graph`
//!
//! * edges()
//!
use super::graph::Graph;

///
/// Iterator struct for `edges()`
///
/// implements Iterator whose item is
/// `(source: usize, target: usize, weight: f64)`
///
/// Edges are visited by ascending source vertex, then in adjacency (insertion) order.
/// This is the relaxation order of Bellman-Ford. A pair added twice is visited twice.
///
pub struct EdgesIterator<'a> {
    graph: &'a Graph,
    source: usize,
    position: usize,
}

impl<'a> EdgesIterator<'a> {
    ///
    /// Create EdgesIterator from the reference of Graph
    ///
    pub fn new(graph: &'a Graph) -> Self {
        EdgesIterator {
            graph,
            source: 0,
            position: 0,
        }
    }
}

impl<'a> Iterator for EdgesIterator<'a> {
    type Item = (usize, usize, f64);
    fn next(&mut self) -> Option<Self::Item> {
        while self.source < self.graph.vertex_count() {
            let u = self.source;
            let successors = self.graph.successors(u);
            match successors.get(self.position) {
                Some(&v) => {
                    self.position += 1;
                    return Some((u, v, self.graph.edge_weight(u, v)));
                }
                None => {
                    // move on to the next source vertex
                    self.source += 1;
                    self.position = 0;
                }
            }
        }
        None
    }
}
