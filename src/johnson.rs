//!
//! Johnson's algorithm for all pairs shortest paths
//!
//! 1. add a super-source with zero edges to every vertex
//! 2. Bellman-Ford from the super-source gives potentials `h`
//! 3. reweight `w'(u, v) = w(u, v) + h[u] - h[v]`, which is non-negative
//! 4. Dijkstra from every vertex with `w'`
//! 5. correct back `d(u, v) = d'(u, v) - h[u] + h[v]`
//!
//! O(V E log V) with the pairing heap, against O(V^2 E) for Bellman-Ford from every vertex.
//!
use super::bellman_ford::bellman_ford;
use super::common::Paths;
use super::dijkstra::dijkstra;
use super::error::Result;
use super::graph::Graph;
use itertools::{iproduct, Itertools};
use std::ops::Index;
use tracing::{debug, trace};

///
/// Vertex potentials `h`: shortest distances from the super-source of the augmented graph
///
#[derive(Debug, Clone, PartialEq)]
pub struct Potentials(Vec<f64>);

impl Potentials {
    ///
    /// `h[v]` of every original vertex
    ///
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    ///
    /// Reweighted cost `w + h[u] - h[v]` of an edge `u -> v` of weight `w`
    ///
    /// Non-negative for every edge of the graph the potentials were computed on.
    /// Rounding may leave it a few ulps below zero, which is clamped to `0.0`.
    ///
    pub fn reweighted(&self, u: usize, v: usize, w: f64) -> f64 {
        (w + self.0[u] - self.0[v]).max(0.0)
    }
}

///
/// Build `graph` plus a super-source (index `vertex_count`) with a zero edge to every vertex
///
fn augment(graph: &Graph) -> Result<Graph> {
    let n = graph.vertex_count();
    let mut augmented = Graph::new(n + 1);
    for (u, v, w) in graph.edges() {
        augmented.add_edge(u, v, w)?;
    }
    for v in 0..n {
        augmented.add_edge(n, v, 0.0)?;
    }
    Ok(augmented)
}

///
/// Compute the potentials of `graph` (steps 1 and 2)
///
/// Fails with `NegativeCycleDetected` if `graph` has a negative cycle anywhere.
///
pub fn potentials(graph: &Graph) -> Result<Potentials> {
    let n = graph.vertex_count();
    let augmented = augment(graph)?;
    let mut h = bellman_ford(&augmented, n)?.distances;
    // drop the super-source
    h.truncate(n);
    Ok(Potentials(h))
}

///
/// Shortest path distances between all pairs of vertices
///
/// `f64::INFINITY` marks an unreachable pair.
///
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: Vec<Paths>,
}

impl DistanceMatrix {
    ///
    /// Number of vertices (rows and columns)
    ///
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    ///
    /// Distance from `u` to `v`, `None` if `v` is unreachable from `u` or out of range
    ///
    pub fn distance(&self, u: usize, v: usize) -> Option<f64> {
        self.rows
            .get(u)
            .and_then(|row| row.distances.get(v))
            .copied()
            .filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, u: usize, v: usize) -> bool {
        self.distance(u, v).is_some()
    }

    ///
    /// Distances from `u` to every vertex
    ///
    pub fn row(&self, u: usize) -> Option<&[f64]> {
        self.rows.get(u).map(|row| row.distances.as_slice())
    }

    ///
    /// Iterate over all `(u, v, distance)`, row by row
    ///
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let n = self.len();
        iproduct!(0..n, 0..n).map(move |(u, v)| (u, v, self[(u, v)]))
    }

    ///
    /// Vertices of a shortest path from `u` to `v`, `None` if unreachable
    ///
    pub fn path(&self, u: usize, v: usize) -> Option<Vec<usize>> {
        self.rows.get(u)?.path_to(v)
    }

    ///
    /// Convert into `Vec` of rows
    ///
    pub fn into_inner(self) -> Vec<Vec<f64>> {
        self.rows.into_iter().map(|row| row.distances).collect()
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f64;
    fn index(&self, (u, v): (usize, usize)) -> &f64 {
        &self.rows[u].distances[v]
    }
}

///
/// All pairs shortest paths by Johnson's algorithm
///
/// Negative edge weights are allowed. If the graph has a negative cycle,
/// returns `Error::NegativeCycleDetected` and no distances at all.
///
/// # Example
/// ```rust
/// use johnson_apsp::{johnsons_algorithm, Graph};
///
/// let mut g = Graph::new(3);
/// g.add_edge(0, 1, 4.0).unwrap();
/// g.add_edge(1, 2, -2.0).unwrap();
/// g.add_edge(0, 2, 3.0).unwrap();
///
/// let d = johnsons_algorithm(&g).unwrap();
/// assert_eq!(d.distance(0, 2), Some(2.0));
/// assert_eq!(d.distance(2, 0), None);
/// assert_eq!(d.path(0, 2), Some(vec![0, 1, 2]));
/// ```
pub fn johnsons_algorithm(graph: &Graph) -> Result<DistanceMatrix> {
    let n = graph.vertex_count();
    debug!(
        vertices = n,
        edges = graph.edge_count(),
        "computing potentials"
    );

    let h = match potentials(graph) {
        Ok(h) => h,
        Err(e) => {
            debug!(error = %e, "no potentials, aborting");
            return Err(e);
        }
    };
    trace!(potentials = %h.values().iter().join(" "), "potentials computed");

    let mut rows = Vec::with_capacity(n);
    for u in 0..n {
        let mut row = dijkstra(graph, u, |a, b| h.reweighted(a, b, graph.edge_weight(a, b)))?;
        correct(&mut row, &h, u);
        rows.push(row);
    }

    debug!(vertices = n, "all pairs shortest paths done");
    Ok(DistanceMatrix { rows })
}

///
/// Turn reweighted distances from `u` back into original ones
///
fn correct(row: &mut Paths, h: &Potentials, u: usize) {
    let h = h.values();
    for (v, d) in row.distances.iter_mut().enumerate() {
        if d.is_finite() {
            *d = *d - h[u] + h[v];
        }
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::total_weight;
    use crate::error::Error;
    use petgraph::graph::{DiGraph, NodeIndex};
    use proptest::prelude::*;

    fn graph_from_edges(n: usize, edges: &[(usize, usize, f64)]) -> Graph {
        let mut g = Graph::new(n);
        for &(u, v, w) in edges {
            g.add_edge(u, v, w).unwrap();
        }
        g
    }

    fn example_graph() -> Graph {
        graph_from_edges(
            5,
            &[
                (0, 1, -1.0),
                (0, 2, 4.0),
                (1, 2, 3.0),
                (1, 3, 2.0),
                (1, 4, 2.0),
                (3, 2, 5.0),
                (3, 1, 1.0),
                (4, 3, -3.0),
            ],
        )
    }

    fn assert_shortest_path_properties(d: &DistanceMatrix) {
        let n = d.len();
        for v in 0..n {
            assert_eq!(d[(v, v)], 0.0);
        }
        for (u, w, v) in iproduct!(0..n, 0..n, 0..n) {
            assert!(d[(u, v)] <= d[(u, w)] + d[(w, v)]);
        }
    }

    #[test]
    fn johnson_example() {
        let g = example_graph();
        let d = johnsons_algorithm(&g).unwrap();
        println!("{:?}", d);
        assert_eq!(d.distance(0, 4), Some(1.0));

        let inf = f64::INFINITY;
        assert_eq!(
            d.clone().into_inner(),
            vec![
                vec![0.0, -1.0, 2.0, -2.0, 1.0],
                vec![inf, 0.0, 3.0, -1.0, 2.0],
                vec![inf, inf, 0.0, inf, inf],
                vec![inf, 1.0, 4.0, 0.0, 3.0],
                vec![inf, -2.0, 1.0, -3.0, 0.0],
            ]
        );
        assert_shortest_path_properties(&d);
    }

    #[test]
    fn johnson_example_paths() {
        let g = example_graph();
        let d = johnsons_algorithm(&g).unwrap();
        assert_eq!(d.path(0, 2), Some(vec![0, 1, 2]));
        assert_eq!(d.path(0, 3), Some(vec![0, 1, 4, 3]));
        assert_eq!(d.path(2, 2), Some(vec![2]));
        assert_eq!(d.path(1, 0), None);
        for (u, v, dist) in d.iter() {
            if let Some(path) = d.path(u, v) {
                assert_eq!(total_weight(&g, &path), Ok(dist));
            }
        }
    }

    #[test]
    fn johnson_example_potentials() {
        let g = example_graph();
        let h = potentials(&g).unwrap();
        assert_eq!(h.values(), &[0.0, -2.0, 0.0, -3.0, 0.0]);
        for (u, v, w) in g.edges() {
            assert!(w + h.values()[u] - h.values()[v] >= 0.0);
            assert!(h.reweighted(u, v, w) >= 0.0);
        }
        assert_eq!(h.reweighted(0, 1, -1.0), 1.0);
        assert_eq!(h.reweighted(4, 3, -3.0), 0.0);
    }

    #[test]
    fn johnson_negative_cycle() {
        let g = graph_from_edges(3, &[(0, 1, -1.0), (1, 2, -1.0), (2, 0, -1.0)]);
        assert_eq!(johnsons_algorithm(&g), Err(Error::NegativeCycleDetected));
        assert_eq!(potentials(&g), Err(Error::NegativeCycleDetected));
    }

    #[test]
    fn johnson_negative_self_loop() {
        let g = graph_from_edges(2, &[(0, 1, 1.0), (1, 1, -0.5)]);
        assert_eq!(johnsons_algorithm(&g), Err(Error::NegativeCycleDetected));
    }

    #[test]
    fn johnson_negative_cycle_not_reachable_from_zero() {
        // vertex 0 cannot reach the cycle, the graph is still rejected
        let g = graph_from_edges(4, &[(0, 1, 1.0), (2, 3, 1.0), (3, 2, -2.0)]);
        assert_eq!(johnsons_algorithm(&g), Err(Error::NegativeCycleDetected));
    }

    #[test]
    fn johnson_no_edges() {
        let g = Graph::new(2);
        let d = johnsons_algorithm(&g).unwrap();
        assert_eq!(d.distance(0, 1), None);
        assert_eq!(d.distance(1, 0), None);
        assert_eq!(d[(0, 1)], f64::INFINITY);
        assert_eq!(d.distance(0, 0), Some(0.0));
        assert_eq!(d.distance(1, 1), Some(0.0));
        assert!(!d.is_reachable(0, 1));
    }

    #[test]
    fn johnson_empty_graph() {
        let d = johnsons_algorithm(&Graph::new(0)).unwrap();
        assert!(d.is_empty());
        assert_eq!(d.iter().count(), 0);
        assert_eq!(d.row(0), None);
    }

    #[test]
    fn johnson_is_idempotent() {
        let g = example_graph();
        assert_eq!(johnsons_algorithm(&g), johnsons_algorithm(&g));
    }

    #[test]
    fn johnson_last_write_wins() {
        // with the first weight 1 -> 0 the cycle would be negative
        let g = graph_from_edges(2, &[(0, 1, -4.0), (1, 0, 3.0), (1, 0, 4.5)]);
        let d = johnsons_algorithm(&g).unwrap();
        assert_eq!(d.row(0), Some(&[0.0, -4.0][..]));
        assert_eq!(d.row(1), Some(&[4.5, 0.0][..]));
    }

    #[test]
    fn johnson_from_petgraph() {
        // graph used as an example of petgraph floydWarshall
        let mut pg: DiGraph<(), f64> = DiGraph::new();
        pg.extend_with_edges(&[
            (0, 1, 1.0),
            (0, 2, 4.0),
            (0, 3, 10.0),
            (1, 2, 2.0),
            (1, 3, 2.0),
            (2, 3, 2.0),
        ]);
        let g = Graph::from_digraph(&pg).unwrap();
        let d = johnsons_algorithm(&g).unwrap();
        let inf = f64::INFINITY;
        assert_eq!(
            d.into_inner(),
            vec![
                vec![0.0, 1.0, 3.0, 3.0],
                vec![inf, 0.0, 2.0, 2.0],
                vec![inf, inf, 0.0, 2.0],
                vec![inf, inf, inf, 0.0],
            ]
        );
    }

    fn arb_graph() -> impl Strategy<Value = Graph> {
        (1usize..8)
            .prop_flat_map(|n| {
                (
                    Just(n),
                    prop::collection::vec((0..n, 0..n, -5i32..20), 0..24),
                )
            })
            .prop_map(|(n, edges)| {
                let mut g = Graph::new(n);
                for (u, v, w) in edges {
                    g.add_edge(u, v, w as f64).unwrap();
                }
                g
            })
    }

    fn to_petgraph(g: &Graph) -> DiGraph<(), f64> {
        let mut pg = DiGraph::new();
        for _ in 0..g.vertex_count() {
            pg.add_node(());
        }
        for (u, v, w) in g.edges() {
            pg.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
        }
        pg
    }

    proptest! {
        #[test]
        fn johnson_agrees_with_petgraph_bellman_ford(g in arb_graph()) {
            let pg = to_petgraph(&g);
            let expected: std::result::Result<Vec<Vec<f64>>, _> = (0..g.vertex_count())
                .map(|s| petgraph::algo::bellman_ford(&pg, NodeIndex::new(s)).map(|p| p.distances))
                .collect();

            match (johnsons_algorithm(&g), expected) {
                (Ok(d), Ok(rows)) => {
                    prop_assert_eq!(d.into_inner(), rows);
                }
                (Err(e), Err(_)) => prop_assert_eq!(e, Error::NegativeCycleDetected),
                (got, expected) => {
                    prop_assert!(false, "johnson {:?} but petgraph {:?}", got, expected);
                }
            }
        }

        #[test]
        fn johnson_reweighting_is_non_negative(g in arb_graph()) {
            if let Ok(h) = potentials(&g) {
                let h = h.values();
                for (u, v, w) in g.edges() {
                    prop_assert!(w + h[u] - h[v] >= 0.0);
                }
            }
        }

        #[test]
        fn johnson_matrix_properties(g in arb_graph()) {
            if let Ok(d) = johnsons_algorithm(&g) {
                let n = d.len();
                for v in 0..n {
                    prop_assert_eq!(d[(v, v)], 0.0);
                }
                for (u, w, v) in iproduct!(0..n, 0..n, 0..n) {
                    prop_assert!(d[(u, v)] <= d[(u, w)] + d[(w, v)]);
                }
            }
        }
    }
}
