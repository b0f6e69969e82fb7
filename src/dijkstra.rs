//!
//! Dijkstra algorithm driven by the pairing heap
//!
use super::common::Paths;
use super::error::Result;
use super::graph::Graph;
use super::pairing_heap::PairingHeap;
use tracing::trace;

///
/// Compute shortest paths from `source` using edge costs given by `weight_fn`
///
/// `weight_fn(u, v)` is called for every edge `u -> v` of `graph` that is scanned,
/// and must return a non-negative cost. The stored weights of `graph` are not read;
/// only its structure is used. This lets Johnson's algorithm pass reweighted costs.
///
/// Vertices are tracked in a `PairingHeap` addressed by vertex id: an improved
/// vertex already in the heap gets `decrease_key`, otherwise it is inserted.
///
/// Fails only if `source` is not a vertex of `graph`.
///
/// # Example
/// ```rust
/// use johnson_apsp::dijkstra::dijkstra;
/// use johnson_apsp::graph::Graph;
///
/// let mut g = Graph::new(3);
/// g.add_edge(0, 1, 10.0).unwrap();
/// g.add_edge(0, 2, 1.0).unwrap();
/// g.add_edge(2, 1, 1.0).unwrap();
///
/// let paths = dijkstra(&g, 0, |u, v| g.weight_of(u, v).unwrap()).unwrap();
/// assert_eq!(paths.distances, vec![0.0, 2.0, 1.0]);
/// assert_eq!(paths.path_to(1), Some(vec![0, 2, 1]));
/// ```
pub fn dijkstra<F>(graph: &Graph, source: usize, mut weight_fn: F) -> Result<Paths>
where
    F: FnMut(usize, usize) -> f64,
{
    graph.check_vertex(source)?;

    let n = graph.vertex_count();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![None; n];
    distances[source] = 0.0;

    let mut heap = PairingHeap::with_capacity(n);
    heap.insert(0.0, source)?;

    while !heap.is_empty() {
        let (d, u) = heap.delete_min()?;

        // stale entry
        if d > distances[u] {
            continue;
        }

        for &v in graph.successors(u) {
            let candidate = distances[u] + weight_fn(u, v);
            if candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
                if heap.contains(&v) {
                    heap.decrease_key(&v, candidate)?;
                } else {
                    heap.insert(candidate, v)?;
                }
            }
        }
    }

    trace!(
        source,
        reached = distances.iter().filter(|d| d.is_finite()).count(),
        "dijkstra finished"
    );

    Ok(Paths {
        distances,
        predecessors,
    })
}

//
// tests
//
