//! Tree construction and exact k-nearest-neighbor search.

use auriga_dataset::Sample;
use tracing::debug;

use crate::candidates::CandidateSet;
use crate::distance::euclidean;
use crate::error::KdTreeError;

/// One query result: a borrowed indexed sample and its Euclidean distance
/// to the query point.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'a> {
    /// The indexed (normalized) sample.
    pub sample: &'a Sample,
    /// Euclidean distance from the query to this sample's features.
    pub distance: f64,
}

/// A node owns its partitioning sample and its two subtrees.
#[derive(Debug)]
struct Node {
    sample: Sample,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

/// A balanced k-d tree over normalized samples.
///
/// Built once from the full training set; immutable afterward. Queries are
/// read-only, so a built tree can be shared across threads without locking.
#[derive(Debug)]
pub struct KdTree {
    root: Option<Box<Node>>,
    dims: usize,
    len: usize,
}

impl KdTree {
    /// Builds a balanced tree by recursive median partitioning.
    ///
    /// At depth `d` the slice is stable-sorted on axis `d % dims` and the
    /// median element becomes the node; the halves recurse one level down.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::EmptySamples`] for an empty input and
    /// [`KdTreeError::DimensionMismatch`] if samples disagree on feature
    /// length.
    pub fn build(samples: Vec<Sample>) -> Result<Self, KdTreeError> {
        let first = samples.first().ok_or(KdTreeError::EmptySamples)?;
        let dims = first.n_features();

        for (index, s) in samples.iter().enumerate() {
            if s.n_features() != dims {
                return Err(KdTreeError::DimensionMismatch {
                    index,
                    got: s.n_features(),
                    expected: dims,
                });
            }
        }

        let len = samples.len();
        let root = build_node(samples, 0, dims);
        debug!(len, dims, "built k-d tree");

        Ok(Self { root, dims, len })
    }

    /// Number of indexed samples.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no samples (never true for a built tree).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indexed feature dimensionality.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Finds the exact k nearest neighbors of `query`, sorted by ascending
    /// distance.
    ///
    /// Descends into the query's side of each splitting hyperplane first,
    /// then visits the far side only while the candidate set is not full or
    /// the perpendicular hyperplane distance is strictly below the current
    /// worst candidate — the far subtree provably cannot improve the result
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::QueryDimensionMismatch`] for a wrong-length
    /// query and [`KdTreeError::InvalidK`] when `k` is zero or exceeds the
    /// number of indexed samples; k is never silently capped.
    pub fn k_nearest(&self, query: &[f64], k: usize) -> Result<Vec<Neighbor<'_>>, KdTreeError> {
        if query.len() != self.dims {
            return Err(KdTreeError::QueryDimensionMismatch {
                got: query.len(),
                expected: self.dims,
            });
        }
        if k < 1 || k > self.len {
            return Err(KdTreeError::InvalidK { k, len: self.len });
        }

        let mut found = CandidateSet::new(k);
        if let Some(root) = &self.root {
            search(root, query, 0, self.dims, &mut found);
        }

        Ok(found
            .into_sorted()
            .into_iter()
            .map(|c| Neighbor {
                sample: c.sample,
                distance: c.dist,
            })
            .collect())
    }
}

/// Recursively builds a subtree from `points` at the given depth.
fn build_node(mut points: Vec<Sample>, depth: usize, dims: usize) -> Option<Box<Node>> {
    if points.is_empty() {
        return None;
    }

    let axis = depth % dims;
    points.sort_by(|a, b| a.features[axis].total_cmp(&b.features[axis]));

    let median = points.len() / 2;
    let right = points.split_off(median + 1);
    // `points` now holds [0..=median]; the last element is the median.
    let sample = points.pop()?;
    let left = points;

    Some(Box::new(Node {
        sample,
        left: build_node(left, depth + 1, dims),
        right: build_node(right, depth + 1, dims),
    }))
}

/// Recursive descent: near child first, far child only when it can still
/// contain a closer point.
fn search<'a>(
    node: &'a Node,
    query: &[f64],
    depth: usize,
    dims: usize,
    found: &mut CandidateSet<'a>,
) {
    found.consider(euclidean(query, &node.sample.features), &node.sample);

    let axis = depth % dims;
    let split = node.sample.features[axis];
    let (near, far) = if query[axis] < split {
        (&node.left, &node.right)
    } else {
        (&node.right, &node.left)
    };

    if let Some(child) = near {
        search(child, query, depth + 1, dims, found);
    }

    let plane_dist = (query[axis] - split).abs();
    if let Some(child) = far
        && (!found.is_full() || plane_dist < found.worst().unwrap_or(f64::INFINITY))
    {
        search(child, query, depth + 1, dims, found);
    }
}
