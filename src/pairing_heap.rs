//!
//! Addressable pairing heap
//!
//! A min-priority queue of `(key, payload)` entries with
//! * O(1) insert and meld
//! * O(log n) amortized delete_min (two-pass pairing)
//! * decrease_key by payload, found through an index in O(1)
//!
//! Nodes live in an arena (`Vec`) and refer to each other by `NodeId`.
//! Each node knows its parent and owns an ordered list of children.
//! Slots of deleted nodes are recycled through a free list.
//!
use super::error::{Error, Result};
use fnv::FnvHashMap as HashMap;
use std::cmp::Ordering;
use std::hash::Hash;

///
/// Position of a node in the arena of a `PairingHeap`
///
/// Only meaningful for the heap that returned it, and only while the entry is alive.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node<K, P> {
    key: K,
    payload: P,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

///
/// Pairing heap keyed by `K`, addressed by payload `P`
///
/// Every payload has at most one live entry: inserting a payload that is
/// already present fails with `DuplicateEntry`.
///
/// # Example
/// ```rust
/// use johnson_apsp::pairing_heap::PairingHeap;
///
/// let mut heap = PairingHeap::new();
/// heap.insert(5.0, "a").unwrap();
/// heap.insert(3.0, "b").unwrap();
/// heap.insert(7.0, "c").unwrap();
/// heap.decrease_key(&"c", 1.0).unwrap();
/// assert_eq!(heap.delete_min(), Ok((1.0, "c")));
/// assert_eq!(heap.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PairingHeap<K, P>
where
    P: Eq + Hash,
{
    nodes: Vec<Option<Node<K, P>>>,
    free: Vec<usize>,
    root: Option<NodeId>,
    len: usize,
    index: HashMap<P, NodeId>,
}

impl<K, P> Default for PairingHeap<K, P>
where
    K: PartialOrd,
    P: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> PairingHeap<K, P>
where
    K: PartialOrd,
    P: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    ///
    /// Create an empty heap with room for `capacity` entries
    ///
    pub fn with_capacity(capacity: usize) -> Self {
        PairingHeap {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            root: None,
            len: 0,
            index: HashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, payload: &P) -> bool {
        self.index.contains_key(payload)
    }

    ///
    /// Current key of `payload`, if it is in the heap
    ///
    pub fn key_of(&self, payload: &P) -> Option<&K> {
        self.index.get(payload).map(|&id| &self.node(id).key)
    }

    ///
    /// Minimum entry without removing it
    ///
    pub fn peek(&self) -> Option<(&K, &P)> {
        self.root.map(|id| {
            let node = self.node(id);
            (&node.key, &node.payload)
        })
    }

    ///
    /// Insert a new entry and return the id of its node
    ///
    /// Fails with `DuplicateEntry` (heap unchanged) if `payload` is already present.
    ///
    pub fn insert(&mut self, key: K, payload: P) -> Result<NodeId> {
        if self.index.contains_key(&payload) {
            return Err(Error::DuplicateEntry);
        }
        let id = self.allocate(Node {
            key,
            payload: payload.clone(),
            parent: None,
            children: Vec::new(),
        });
        self.index.insert(payload, id);
        self.root = Some(match self.root {
            Some(root) => self.meld(root, id),
            None => id,
        });
        self.len += 1;
        Ok(id)
    }

    ///
    /// Remove the entry with the minimum key
    ///
    /// The children of the removed root are combined by two-pass pairing.
    ///
    pub fn delete_min(&mut self) -> Result<(K, P)> {
        let root = self.root.ok_or(Error::EmptyHeap)?;
        let node = self.nodes[root.0]
            .take()
            .expect("root of the heap should be a live node");
        self.free.push(root.0);
        self.index.remove(&node.payload);
        self.root = self.combine_pairs(node.children);
        self.len -= 1;
        Ok((node.key, node.payload))
    }

    ///
    /// Lower the key of `payload` to `new_key`
    ///
    /// Fails with `InvalidKeyOrder` (heap unchanged) if `payload` is not in the heap
    /// or `new_key` is greater than its current key. A non-root node is cut from
    /// its parent together with its whole subtree and melded with the root.
    ///
    pub fn decrease_key(&mut self, payload: &P, new_key: K) -> Result<()> {
        let id = *self.index.get(payload).ok_or(Error::InvalidKeyOrder)?;
        match new_key.partial_cmp(&self.node(id).key) {
            Some(Ordering::Less) | Some(Ordering::Equal) => {}
            _ => return Err(Error::InvalidKeyOrder),
        }
        self.node_mut(id).key = new_key;

        if self.root == Some(id) {
            return Ok(());
        }

        // cut the subtree rooted at id
        if let Some(parent) = self.node_mut(id).parent.take() {
            let siblings = &mut self.node_mut(parent).children;
            let pos = siblings
                .iter()
                .position(|&c| c == id)
                .expect("child should be listed by its parent");
            siblings.remove(pos);
        }

        let root = self.root.expect("non-empty heap should have a root");
        self.root = Some(self.meld(root, id));
        Ok(())
    }

    //
    // internals
    //

    fn node(&self, id: NodeId) -> &Node<K, P> {
        self.nodes[id.0]
            .as_ref()
            .expect("node id should point to a live node")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, P> {
        self.nodes[id.0]
            .as_mut()
            .expect("node id should point to a live node")
    }

    fn allocate(&mut self, node: Node<K, P>) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    ///
    /// Link two trees: the smaller key becomes the root and the other tree
    /// its last child. On equal keys `a` stays the root.
    ///
    fn meld(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let (root, child) = if self.node(b).key < self.node(a).key {
            (b, a)
        } else {
            (a, b)
        };
        self.node_mut(child).parent = Some(root);
        self.node_mut(root).children.push(child);
        root
    }

    ///
    /// Two-pass pairing of the children of a removed root
    ///
    /// 1. meld children pairwise from left to right
    /// 2. fold the melded pairs from right to left
    ///
    fn combine_pairs(&mut self, children: Vec<NodeId>) -> Option<NodeId> {
        for &child in &children {
            self.node_mut(child).parent = None;
        }

        let pairs: Vec<NodeId> = children
            .chunks(2)
            .map(|chunk| match *chunk {
                [a, b] => self.meld(a, b),
                [a] => a,
                _ => unreachable!("chunks(2) yields one or two elements"),
            })
            .collect();

        pairs
            .into_iter()
            .rev()
            .reduce(|acc, pair| self.meld(acc, pair))
    }
}

//
// tests
//
