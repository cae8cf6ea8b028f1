//! Indexed binary min-heap keyed by an external per-vertex cost slice.
//!
//! Alongside the usual slot array the heap tracks the inverse mapping
//! (vertex → slot), so decrease-key after a relaxation is an O(log n)
//! sift-up from a known slot instead of a linear search. Invariant for
//! every active vertex v: `slots[position[v]] == v`.

use crate::graph::{Cost, VertexId};

#[derive(Debug)]
pub(crate) struct CostHeap {
    /// heap-slot -> vertex, active region is `slots[..len]`.
    slots: Vec<VertexId>,
    /// vertex -> heap-slot, inverse of `slots`. Stale for settled vertices.
    position: Vec<usize>,
    len: usize,
}

impl CostHeap {
    /// Build the initial heap as the identity permutation of all vertex
    /// indices, with `source` swapped into the root slot so it is extracted
    /// first even when other vertices tie on cost.
    pub(crate) fn with_source(vertex_count: usize, source: VertexId) -> Self {
        let mut slots: Vec<VertexId> = (0..vertex_count).collect();
        let mut position: Vec<usize> = (0..vertex_count).collect();
        slots.swap(0, source);
        position.swap(0, source);
        Self {
            slots,
            position,
            len: vertex_count,
        }
    }

    /// Minimum-cost active vertex, without removing it.
    pub(crate) fn peek(&self) -> Option<VertexId> {
        if self.len == 0 {
            None
        } else {
            Some(self.slots[0])
        }
    }

    /// Remove and return the root: the last active element takes its place
    /// and sifts down to restore heap order.
    pub(crate) fn pop(&mut self, cost: &[Cost]) -> Option<VertexId> {
        if self.len == 0 {
            return None;
        }
        let top = self.slots[0];
        self.len -= 1;
        if self.len > 0 {
            let displaced = self.slots[self.len];
            self.sift_down(displaced, 0, cost);
        }
        Some(top)
    }

    /// Restore heap order after `vertex`'s cost decreased.
    pub(crate) fn decrease(&mut self, vertex: VertexId, cost: &[Cost]) {
        self.sift_up(self.position[vertex], cost);
    }

    fn sift_up(&mut self, slot: usize, cost: &[Cost]) {
        let item = self.slots[slot];
        let mut child = slot;
        while child > 0 {
            let parent = (child - 1) / 2;
            if cost[item] >= cost[self.slots[parent]] {
                break;
            }
            self.slots[child] = self.slots[parent];
            self.position[self.slots[child]] = child;
            child = parent;
        }
        self.slots[child] = item;
        self.position[item] = child;
    }

    /// Place `key` starting at `root`, descending toward the smaller child
    /// (left preferred on ties) while a child beats it.
    fn sift_down(&mut self, key: VertexId, mut root: usize, cost: &[Cost]) {
        let mut child = 2 * root + 1;
        while child < self.len {
            if child + 1 < self.len && cost[self.slots[child + 1]] < cost[self.slots[child]] {
                child += 1;
            }
            if cost[key] <= cost[self.slots[child]] {
                break;
            }
            self.slots[root] = self.slots[child];
            self.position[self.slots[root]] = root;
            root = child;
            child = 2 * root + 1;
        }
        self.slots[root] = key;
        self.position[key] = root;
    }
}
