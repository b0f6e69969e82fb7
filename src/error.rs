//!
//! Error type shared by every algorithm in this crate
//!

///
/// Errors reported by graph construction, the pairing heap and the shortest path solvers.
///
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A cycle of negative total weight is reachable, so shortest paths are undefined.
    #[error("negative cycle detected")]
    NegativeCycleDetected,

    /// `decrease_key` on a payload that is not in the heap, or with a larger key.
    #[error("decrease_key requires a present payload and a key not greater than the current one")]
    InvalidKeyOrder,

    /// `delete_min` on an empty heap.
    #[error("heap is empty")]
    EmptyHeap,

    #[error("invalid vertex {vertex} (vertex count is {vertex_count})")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("no edge from {from} to {to}")]
    UnknownEdge { from: usize, to: usize },

    /// `insert` of a payload that already has a live node in the heap.
    #[error("payload is already in the heap")]
    DuplicateEntry,

    /// NaN or infinite edge weight.
    #[error("weight of edge {from}->{to} is not finite")]
    InvalidWeight { from: usize, to: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
