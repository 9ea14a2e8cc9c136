//! Chain: doubly linked working set of surviving indices, stored as an arena.
//!
//! Purpose
//! -------
//! Hold the mutable state of one p-variation computation: which sample
//! indices still survive and the cached cost of the link ending at each of
//! them. Links are plain `usize` indices into a pre-sized `Vec`, so pruning a
//! point is a constant-time relink and no node is ever allocated or freed
//! after construction.
//!
//! Invariants & assumptions
//! ------------------------
//! - Index 0 is always the head: `prev(0) == 0` and `edge_cost(0) == 0.0`.
//! - `next` of the last surviving index is the sentinel `n`; following `next`
//!   from the head visits strictly increasing indices and ends at `n - 1`
//!   once the extrema pass has run.
//! - `edge_cost(i)` caches `|x[i] - x[prev(i)]|^p` for every surviving `i`
//!   other than the head. Records of pruned indices are stale and never read.
//! - [`Chain::total_cost`] is a lower bound on the p-variation of the full
//!   sequence at every stage, and equal to it when the algorithm finishes.
//!
//! Performance
//! -----------
//! - One allocation of `n` records per computation; all updates are O(1).

/// Per-index record of the arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub prev: usize,
    pub next: usize,
    /// Cost of the link arriving at this index from `prev`.
    pub edge_cost: f64,
}

#[derive(Debug, Clone)]
pub struct Chain {
    links: Vec<Link>,
}

impl Chain {
    /// Build an arena over `n` indices. Every record points to the sentinel,
    /// so the fresh chain holds only the head until points are linked.
    pub fn new(n: usize) -> Self {
        Chain { links: vec![Link { prev: 0, next: n, edge_cost: 0.0 }; n] }
    }

    /// Sentinel index marking "no successor" (equal to the sequence length).
    #[inline]
    pub fn sentinel(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn next(&self, i: usize) -> usize {
        self.links[i].next
    }

    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        self.links[i].prev
    }

    #[inline]
    pub fn edge_cost(&self, i: usize) -> f64 {
        self.links[i].edge_cost
    }

    /// Connect `from` directly to `to` with the given link cost, dropping
    /// every index that previously sat between them.
    ///
    /// Requires `from < to`, both surviving (or `to` about to become the new
    /// tail during the extrema pass).
    #[inline]
    pub fn link(&mut self, from: usize, to: usize, cost: f64) {
        debug_assert!(from < to, "links must point forward: {from} -> {to}");
        self.links[from].next = to;
        self.links[to].prev = from;
        self.links[to].edge_cost = cost;
    }

    /// Surviving indices in increasing order, starting at the head.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter { chain: self, cursor: 0 }
    }

    /// Number of surviving indices.
    pub fn surviving(&self) -> usize {
        self.iter().count()
    }

    /// Sum of the cached link costs along the chain.
    pub fn total_cost(&self) -> f64 {
        self.iter().map(|i| self.links[i].edge_cost).sum()
    }
}

/// Forward iterator over surviving indices.
pub struct ChainIter<'a> {
    chain: &'a Chain,
    cursor: usize,
}

impl Iterator for ChainIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cursor >= self.chain.sentinel() {
            return None;
        }
        let current = self.cursor;
        self.cursor = self.chain.next(current);
        Some(current)
    }
}
