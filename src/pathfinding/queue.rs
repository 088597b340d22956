use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::NodeId;

/// Frontier entry
/// - for ordering we only need the sort key and a way to identify the node
/// - the sequence number makes equal keys extract in insertion order
#[derive(Debug)]
struct Entry<K> {
    key: K,
    seq: u64,
    node: NodeId,
}

impl<K: Ord> Ord for Entry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the BinaryHeap (a max-heap) pops the minimum.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<K: Ord> PartialOrd for Entry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<K: PartialEq> PartialEq for Entry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}
impl<K: Eq> Eq for Entry<K> {}

/// Min-extraction frontier queue shared by both search algorithms.
///
/// Keys are generic: Dijkstra uses the cumulative cost, A* the (f, h) pair
/// compared lexicographically. Ties on the full key extract in insertion
/// order, so a node enqueued later at an equal key comes out after every
/// node already queued at that key.
///
/// The same node id may sit in the queue at several costs at once; stale
/// entries are skipped by the caller's visited check, not by the queue.
#[derive(Debug)]
pub(crate) struct SearchQueue<K> {
    heap: BinaryHeap<Entry<K>>,
    next_seq: u64,
}

impl<K: Ord> SearchQueue<K> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, node: NodeId, key: K) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { key, seq, node });
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
