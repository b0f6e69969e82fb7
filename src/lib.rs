//!
//! All pairs shortest paths on directed graphs with negative edge weights
//!
//! # Algorithms
//!
//! * johnson: Johnson's algorithm (Bellman-Ford potentials + Dijkstra from every vertex)
//! * bellman_ford: Bellman-Ford and negative cycle extraction
//! * dijkstra: Dijkstra with a caller supplied non-negative weight function
//!
//! # Data structures
//!
//! * graph: directed graph with one weight per ordered pair
//! * pairing_heap: addressable pairing heap with decrease_key
//!
//! # Example
//! ```rust
//! use johnson_apsp::{johnsons_algorithm, Error, Graph};
//!
//! let mut g = Graph::new(3);
//! g.add_edge(0, 1, -1.0).unwrap();
//! g.add_edge(1, 2, 2.0).unwrap();
//! let d = johnsons_algorithm(&g).unwrap();
//! assert_eq!(d.distance(0, 2), Some(1.0));
//!
//! g.add_edge(2, 0, -1.5).unwrap();
//! assert_eq!(johnsons_algorithm(&g), Err(Error::NegativeCycleDetected));
//! ```
//!
pub mod bellman_ford;
pub mod common;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod iterators;
pub mod johnson;
pub mod pairing_heap;

pub use error::{Error, Result};
pub use graph::Graph;
pub use johnson::{johnsons_algorithm, DistanceMatrix};
