//! Bounded worst-first candidate set for k-NN queries.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use auriga_dataset::Sample;

/// One candidate neighbor: its distance to the query and the indexed sample.
#[derive(Debug)]
pub(crate) struct Candidate<'a> {
    pub(crate) dist: f64,
    pub(crate) sample: &'a Sample,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.dist.total_cmp(&other.dist) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist.total_cmp(&other.dist)
    }
}

/// At most `k` candidates ordered worst-first.
///
/// A max-heap keyed on distance keeps the current worst candidate on top,
/// so the pruning bound is inspectable in O(1) and eviction is O(log k).
#[derive(Debug)]
pub(crate) struct CandidateSet<'a> {
    k: usize,
    heap: BinaryHeap<Candidate<'a>>,
}

impl<'a> CandidateSet<'a> {
    pub(crate) fn new(k: usize) -> Self {
        debug_assert!(k >= 1);
        Self {
            k,
            heap: BinaryHeap::with_capacity(k + 1),
        }
    }

    /// Whether the set holds k candidates.
    pub(crate) fn is_full(&self) -> bool {
        self.heap.len() == self.k
    }

    /// Distance of the current worst candidate, if any.
    pub(crate) fn worst(&self) -> Option<f64> {
        self.heap.peek().map(|c| c.dist)
    }

    /// Offers a candidate: inserted unconditionally while the set is not
    /// full, otherwise it evicts the worst entry only when strictly closer.
    pub(crate) fn consider(&mut self, dist: f64, sample: &'a Sample) {
        if !self.is_full() {
            self.heap.push(Candidate { dist, sample });
            return;
        }
        // Unwrap is safe: a full set is non-empty (k >= 1).
        if dist < self.worst().unwrap_or(f64::INFINITY) {
            self.heap.pop();
            self.heap.push(Candidate { dist, sample });
        }
    }

    /// Consumes the set, returning candidates sorted by ascending distance.
    pub(crate) fn into_sorted(self) -> Vec<Candidate<'a>> {
        self.heap.into_sorted_vec()
    }
}
