//! Bellman-Ford algorithm
//!
//! Computes shortest path distances from a source on a graph with possibly negative
//! edge weights. Used to derive the vertex potentials of Johnson's algorithm.
//!
//! Edges are relaxed by ascending source vertex, then in adjacency order
//! (the order of `Graph::edges`).

use super::common::Paths;
use super::error::{Error, Result};
use super::graph::Graph;
use tracing::debug;

/// Compute shortest paths from vertex `source` to all other.
///
/// Using the [Bellman–Ford algorithm][bf]; negative edge costs are
/// permitted, but no cycle of negative weight may be reachable from `source`
/// (in that case it returns `Error::NegativeCycleDetected` and no distances).
///
/// On success, return one vec with path costs, and another one which points
/// out the predecessor of a node along a shortest path.
///
/// [bf]: https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm
///
/// # Example
/// ```rust
/// use johnson_apsp::bellman_ford::bellman_ford;
/// use johnson_apsp::graph::Graph;
///
/// let mut g = Graph::new(4);
/// g.add_edge(0, 1, 2.0).unwrap();
/// g.add_edge(1, 2, -1.0).unwrap();
/// g.add_edge(0, 2, 4.0).unwrap();
///
/// let paths = bellman_ford(&g, 0).unwrap();
/// assert_eq!(paths.distances, vec![0.0, 2.0, 1.0, f64::INFINITY]);
/// assert_eq!(paths.predecessors, vec![None, Some(0), Some(1), None]);
///
/// g.add_edge(2, 0, -1.5).unwrap();
/// assert!(bellman_ford(&g, 0).is_err());
/// ```
pub fn bellman_ford(graph: &Graph, source: usize) -> Result<Paths> {
    graph.check_vertex(source)?;

    // Step 1 and Step 2: initialize and relax
    let paths = bellman_ford_initialize_relax(graph, source);

    // Step 3: check for negative weight cycle
    if graph
        .edges()
        .any(|(u, v, w)| is_relaxable(&paths.distances, u, v, w))
    {
        debug!(source, "negative cycle reachable from source");
        return Err(Error::NegativeCycleDetected);
    }

    Ok(paths)
}

/// Find a negative cycle reachable from vertex `source`.
///
/// Runs the relaxation of Bellman-Ford plus one more pass. A vertex still
/// improved in that pass lies on, or behind, a negative cycle of the predecessor
/// graph; walking `|V|` predecessors back from it lands on the cycle.
///
/// Returns the vertices of the cycle in edge direction, `None` if there is none.
///
/// # Example
/// ```rust
/// use johnson_apsp::bellman_ford::find_negative_cycle;
/// use johnson_apsp::graph::Graph;
///
/// let mut g = Graph::new(3);
/// g.add_edge(0, 1, -9.0).unwrap();
/// g.add_edge(1, 2, -9.0).unwrap();
/// g.add_edge(2, 0, -9.0).unwrap();
///
/// assert_eq!(find_negative_cycle(&g, 0), Ok(Some(vec![1, 2, 0])));
/// ```
pub fn find_negative_cycle(graph: &Graph, source: usize) -> Result<Option<Vec<usize>>> {
    graph.check_vertex(source)?;

    let Paths {
        mut distances,
        mut predecessors,
    } = bellman_ford_initialize_relax(graph, source);

    // one more pass, remembering the last improved vertex
    let mut last_updated = None;
    for (u, v, w) in graph.edges() {
        if is_relaxable(&distances, u, v, w) {
            distances[v] = distances[u] + w;
            predecessors[v] = Some(u);
            last_updated = Some(v);
        }
    }

    Ok(last_updated.and_then(|v| traceback(&predecessors, v)))
}

///
/// Extract the cycle of the predecessor graph that lies behind `start`
///
fn traceback(predecessors: &[Option<usize>], start: usize) -> Option<Vec<usize>> {
    let mut node = start;
    for _ in 0..predecessors.len() {
        node = predecessors[node]?;
    }

    let mut cycle = vec![node];
    let mut current = predecessors[node]?;
    while current != node {
        cycle.push(current);
        current = predecessors[current]?;
    }

    // collected against the edges, so reverse
    cycle.reverse();
    Some(cycle)
}

///
/// "dist[u] + w(u, v) improves dist[v]?", only from a reached `u`
///
#[inline]
fn is_relaxable(distances: &[f64], u: usize, v: usize, w: f64) -> bool {
    distances[u] < f64::INFINITY && distances[u] + w < distances[v]
}

// Perform Step 1 and Step 2 of the Bellman-Ford algorithm.
fn bellman_ford_initialize_relax(graph: &Graph, source: usize) -> Paths {
    // Step 1: initialize graph
    let n = graph.vertex_count();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![None; n];
    distances[source] = 0.0;

    // Step 2: relax edges repeatedly
    for _ in 1..n {
        let mut did_update = false;
        for (u, v, w) in graph.edges() {
            if is_relaxable(&distances, u, v, w) {
                distances[v] = distances[u] + w;
                predecessors[v] = Some(u);
                did_update = true;
            }
        }
        if !did_update {
            break;
        }
    }

    Paths {
        distances,
        predecessors,
    }
}

//
// tests
//
