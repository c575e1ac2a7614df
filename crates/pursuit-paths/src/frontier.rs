//! Open-set strategies for A*.
//!
//! The frontier stores cell indices; `f` scores live in the per-request
//! search state and are passed in when the minimum is taken.
//!
//! Two implementations are provided:
//!
//! - [`LinearFrontier`]: a plain list scanned for the minimum. Among equal
//!   `f` scores the member that entered the list first wins, and a member
//!   whose score improves keeps its original position.
//! - [`HeapFrontier`]: a binary heap keyed by `(f, insertion sequence)` with
//!   lazy deletion. Ties also go to the earliest insertion, but an improved
//!   member is re-inserted with a fresh sequence number, so it ranks behind
//!   older members of the same `f`. Paths have the same length as with the
//!   linear frontier but may take a different route among equal-cost ones.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Which frontier implementation a search uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FrontierKind {
    /// Linear scan, first-inserted wins ties.
    #[default]
    Linear,
    /// Binary heap, `O(log n)` extraction.
    Heap,
}

/// Collection of cells awaiting expansion.
pub trait Frontier {
    /// Add a cell that is not currently in the frontier.
    fn insert(&mut self, idx: usize, f: i32);

    /// Record that a cell already in the frontier has a lower `f`.
    fn decrease(&mut self, idx: usize, f: i32);

    /// Remove and return the member with the lowest current `f`.
    fn pop_min(&mut self, f_scores: &[i32]) -> Option<usize>;

    /// Number of live members.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// LinearFrontier
// ---------------------------------------------------------------------------

/// Growable list with a linear minimum scan.
#[derive(Debug, Default)]
pub struct LinearFrontier {
    items: Vec<usize>,
}

impl LinearFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LinearFrontier {
    fn insert(&mut self, idx: usize, _f: i32) {
        self.items.push(idx);
    }

    fn decrease(&mut self, _idx: usize, _f: i32) {
        // Scores are read at scan time; position is kept.
    }

    fn pop_min(&mut self, f_scores: &[i32]) -> Option<usize> {
        let (&first, rest) = self.items.split_first()?;
        let mut best = 0;
        let mut best_f = f_scores[first];
        for (i, &idx) in rest.iter().enumerate() {
            // Strict `<`: the earliest member wins ties.
            if f_scores[idx] < best_f {
                best = i + 1;
                best_f = f_scores[idx];
            }
        }
        // `remove` keeps the remaining members in insertion order.
        Some(self.items.remove(best))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

// ---------------------------------------------------------------------------
// HeapFrontier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    f: i32,
    seq: u64,
    idx: usize,
}

/// Min-heap keyed by `(f, seq)`; stale entries are skipped on pop.
#[derive(Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
    live: usize,
}

impl HeapFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, idx: usize, f: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { f, seq, idx }));
    }
}

impl Frontier for HeapFrontier {
    fn insert(&mut self, idx: usize, f: i32) {
        self.push(idx, f);
        self.live += 1;
    }

    fn decrease(&mut self, idx: usize, f: i32) {
        self.push(idx, f);
    }

    fn pop_min(&mut self, f_scores: &[i32]) -> Option<usize> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            // An improved cell leaves its older, higher-f entry behind.
            if entry.f != f_scores[entry.idx] {
                continue;
            }
            self.live -= 1;
            return Some(entry.idx);
        }
        None
    }

    fn len(&self) -> usize {
        self.live
    }
}
