//! All-pairs shortest paths (Floyd 1962, Warshall 1962) with per-pivot
//! snapshots of the distance and path matrices.
//!
//! Each pivot layer computes a complete new distance matrix from the
//! previous one, records it, and only then commits it. Every candidate of
//! one layer therefore reads pre-layer distances, and each recorded step is
//! exactly the matrix the next layer starts from.
//!
//! The path matrix holds next hops: `path[i][j]` is the first vertex after
//! `i` on the best known route to `j`, or `None` while `j` is unreachable.

use log::debug;
use serde::{Deserialize, Serialize};

use super::cost_serde::cost_matrix;
use super::{AdjacencyMatrix, VertexId};
use crate::error::{GraphstepError, Result};

/// Next-hop matrix.
pub type PathMatrix = Vec<Vec<Option<VertexId>>>;

/// Snapshot after one pivot layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloydStep {
    /// Distances after allowing `pivot` as an intermediate vertex
    #[serde(with = "cost_matrix")]
    pub distances: Vec<Vec<f64>>,
    /// Intermediate vertex of this layer
    pub pivot: VertexId,
    /// Next-hop matrix after this layer
    pub path_matrix: PathMatrix,
}

/// Result of [`all_pairs_path`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllPairsResult {
    /// Distance matrix before the first pivot
    #[serde(with = "cost_matrix")]
    pub initial_distances: Vec<Vec<f64>>,
    /// Next-hop matrix before the first pivot
    pub initial_path_matrix: PathMatrix,
    /// One snapshot per pivot `0..n`
    pub steps: Vec<FloydStep>,
    /// Distances after the last pivot
    #[serde(with = "cost_matrix")]
    pub final_distances: Vec<Vec<f64>>,
}

impl AllPairsResult {
    /// Number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.final_distances.len()
    }

    /// Next-hop matrix after the last pivot.
    #[must_use]
    pub fn final_path_matrix(&self) -> &PathMatrix {
        self.steps
            .last()
            .map_or(&self.initial_path_matrix, |step| &step.path_matrix)
    }

    /// Final distance from `u` to `v` (`inf` if unreachable).
    ///
    /// # Errors
    /// Returns [`GraphstepError::VertexOutOfBounds`] for an invalid vertex.
    pub fn distance(&self, u: VertexId, v: VertexId) -> Result<f64> {
        GraphstepError::check_vertex(u, self.order())?;
        GraphstepError::check_vertex(v, self.order())?;
        Ok(self.final_distances[u][v])
    }

    /// Route from `u` to `v`, `None` when `v` is unreachable from `u`.
    ///
    /// # Errors
    /// Returns [`GraphstepError::VertexOutOfBounds`] for an invalid vertex.
    pub fn path(&self, u: VertexId, v: VertexId) -> Result<Option<Vec<VertexId>>> {
        let distance = self.distance(u, v)?;
        if u != v && distance.is_infinite() {
            return Ok(None);
        }
        Ok(Some(path_lookup(self.final_path_matrix(), u, v)))
    }

    /// Largest finite final distance, `None` if there is none.
    ///
    /// Unreachable pairs are ignored rather than making the diameter infinite.
    #[must_use]
    pub fn diameter(&self) -> Option<f64> {
        self.final_distances
            .iter()
            .flatten()
            .copied()
            .filter(|d| d.is_finite())
            .fold(None, |best, d| match best {
                Some(b) if b >= d => Some(b),
                _ => Some(d),
            })
    }
}

/// Expand a route from a next-hop matrix.
///
/// `u == v` gives `[u]`. When the entry for `(u, v)` is missing or points at
/// `u` or `v` the route is the direct hop `[u, v]`. Otherwise the route is
/// split at `m = path[u][v]` into `u..m` and `m..v`, joined without
/// repeating `m`. The split is unrolled onto an explicit stack, so deep
/// routes cannot exhaust the call stack.
///
/// # Examples
/// ```
/// use graphstep::graph::path_lookup;
///
/// let next = vec![
///     vec![Some(0), Some(1), Some(1)],
///     vec![Some(0), Some(1), Some(2)],
///     vec![Some(1), Some(1), Some(2)],
/// ];
/// assert_eq!(path_lookup(&next, 0, 2), vec![0, 1, 2]);
/// assert_eq!(path_lookup(&next, 1, 1), vec![1]);
/// ```
#[must_use]
pub fn path_lookup(
    path_matrix: &[Vec<Option<VertexId>>],
    u: VertexId,
    v: VertexId,
) -> Vec<VertexId> {
    let mut route = vec![u];
    if u == v {
        return route;
    }

    // Pending segments, leftmost on top; each appends its own end vertex.
    let mut pending = vec![(u, v)];
    while let Some((a, b)) = pending.pop() {
        let hop = path_matrix.get(a).and_then(|row| row.get(b)).copied().flatten();
        match hop {
            Some(m) if m != a && m != b => {
                pending.push((m, b));
                pending.push((a, m));
            }
            _ => route.push(b),
        }
    }
    route
}

/// Initial distances: present weights, except off-diagonal zeros which
/// mean "no edge". An absent diagonal entry starts at infinity.
fn initial_distances(matrix: &AdjacencyMatrix) -> Vec<Vec<f64>> {
    let n = matrix.order();
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| match matrix.edge_weight(i, j) {
                    Some(w) if w != 0.0 || i == j => w,
                    _ => f64::INFINITY,
                })
                .collect()
        })
        .collect()
}

/// Floyd-Warshall over the matrix with one snapshot per pivot.
///
/// # Examples
/// ```
/// use graphstep::graph::{all_pairs_path, AdjacencyMatrix};
///
/// let m = AdjacencyMatrix::from_weights(&[
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ])
/// .unwrap();
///
/// let result = all_pairs_path(&m);
/// assert_eq!(result.steps.len(), 3);
/// assert_eq!(result.final_distances[0][2], 3.0);
/// assert_eq!(result.path(0, 2).unwrap(), Some(vec![0, 1, 2]));
/// assert_eq!(result.diameter(), Some(3.0));
/// ```
#[must_use]
pub fn all_pairs_path(matrix: &AdjacencyMatrix) -> AllPairsResult {
    let n = matrix.order();
    let mut distances = initial_distances(matrix);
    let mut path_matrix: PathMatrix = distances
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(j, d)| d.is_finite().then_some(j))
                .collect()
        })
        .collect();

    let initial_distances = distances.clone();
    let initial_path_matrix = path_matrix.clone();
    let mut steps = Vec::with_capacity(n);

    for k in 0..n {
        let mut next_distances = distances.clone();
        let mut next_paths = path_matrix.clone();
        let mut improved = 0usize;

        for i in 0..n {
            for j in 0..n {
                let through_pivot = distances[i][k] + distances[k][j];
                if through_pivot < distances[i][j] {
                    next_distances[i][j] = through_pivot;
                    next_paths[i][j] = path_matrix[i][k];
                    improved += 1;
                }
            }
        }

        debug!("floyd: pivot {k} improved {improved} entries");
        steps.push(FloydStep {
            distances: next_distances.clone(),
            pivot: k,
            path_matrix: next_paths.clone(),
        });
        distances = next_distances;
        path_matrix = next_paths;
    }

    AllPairsResult {
        initial_distances,
        initial_path_matrix,
        steps,
        final_distances: distances,
    }
}
