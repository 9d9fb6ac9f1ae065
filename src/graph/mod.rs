//! Graph algorithms over small weighted adjacency matrices.
//!
//! Every algorithm in this module is a pure function: it takes an
//! [`AdjacencyMatrix`] snapshot, builds its own working arrays, and returns
//! a plain result value holding the final answer together with a step
//! trace that records the algorithm's intermediate state.
//!
//! - [`shortest_path`]: Dijkstra, single source, one step per settled pivot
//! - [`all_pairs_path`]: Floyd-Warshall, one distance/path snapshot per pivot
//! - [`spanning_tree`]: Kruskal with union-find, accepted/rejected edge log
//! - [`GraphAnalysis`]: order, size, degrees, components, complement
//! - [`operations`]: vertex removal, edge contraction, unions and products
//!
//! # Examples
//!
//! ```
//! use graphstep::graph::{shortest_path, AdjacencyMatrix};
//!
//! // Triangle A-B (1), B-C (2), C-A (4)
//! let m = AdjacencyMatrix::new(vec![
//!     vec![Some(0.0), Some(1.0), Some(4.0)],
//!     vec![Some(1.0), Some(0.0), Some(2.0)],
//!     vec![Some(4.0), Some(2.0), Some(0.0)],
//! ])
//! .unwrap();
//!
//! let result = shortest_path(&m, 0, 2).unwrap();
//! assert_eq!(result.min_cost, 3.0);
//! assert_eq!(result.min_path, Some(vec![0, 1, 2]));
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{GraphstepError, Result};

mod analysis;
mod cost_serde;
mod dijkstra;
mod floyd;
mod kruskal;
pub mod operations;

pub use analysis::{ComponentSummary, GraphAnalysis, COLOR_CLASSES};
pub use dijkstra::{shortest_path, DijkstraStep, ShortestPathResult};
pub use floyd::{all_pairs_path, path_lookup, AllPairsResult, FloydStep, PathMatrix};
pub use kruskal::{
    spanning_tree, Edge, EdgeDecision, KruskalIteration, SpanningTreeResult, UnionFind,
};

/// Vertex identifier (0-based row/column index).
pub type VertexId = usize;

/// Raw matrix cell as supplied by the caller: `None` means no edge.
pub type RawWeight = Option<f64>;

/// Normalize a raw cell: present only when finite and non-negative.
///
/// `None`, `NaN`, infinities and negative values all mean "no edge".
///
/// # Examples
/// ```
/// use graphstep::graph::normalize_weight;
///
/// assert_eq!(normalize_weight(Some(0.0)), Some(0.0));
/// assert_eq!(normalize_weight(Some(-1.0)), None);
/// assert_eq!(normalize_weight(Some(f64::NAN)), None);
/// ```
#[must_use]
pub fn normalize_weight(raw: RawWeight) -> Option<f64> {
    raw.filter(|w| w.is_finite() && *w >= 0.0)
}

/// Square adjacency matrix of optional weights.
///
/// Rows and columns are vertices `0..order`. Construction validates the
/// shape; the two normalized views ([`cost_matrix`](Self::cost_matrix) for
/// path algorithms and [`structure_matrix`](Self::structure_matrix) for
/// structural analysis) interpret missing edges differently and are
/// produced on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<RawWeight>>", into = "Vec<Vec<RawWeight>>")]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<RawWeight>>,
}

impl AdjacencyMatrix {
    /// Build a matrix whose order is the number of rows.
    ///
    /// # Errors
    /// Returns [`GraphstepError::Shape`] if any row length differs from the
    /// row count.
    pub fn new(rows: Vec<Vec<RawWeight>>) -> Result<Self> {
        let order = rows.len();
        Self::with_order(rows, order)
    }

    /// Build a matrix and check it against an expected order.
    ///
    /// # Errors
    /// Returns [`GraphstepError::Shape`] if the row count or any row length
    /// differs from `order`.
    ///
    /// # Examples
    /// ```
    /// use graphstep::graph::AdjacencyMatrix;
    ///
    /// let ragged = vec![vec![Some(0.0), None], vec![None]];
    /// assert!(AdjacencyMatrix::with_order(ragged, 2).is_err());
    /// ```
    pub fn with_order(rows: Vec<Vec<RawWeight>>, order: usize) -> Result<Self> {
        if rows.len() != order {
            return Err(GraphstepError::Shape {
                expected: order,
                actual: rows.len(),
                row: None,
            });
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != order) {
            return Err(GraphstepError::ragged_row(i, order, row.len()));
        }
        Ok(Self { rows })
    }

    /// Build from plain weights; `NaN` or negative cells become "no edge".
    ///
    /// # Errors
    /// Returns [`GraphstepError::Shape`] for non-square input.
    pub fn from_weights(rows: &[Vec<f64>]) -> Result<Self> {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|&w| Some(w)).collect())
                .collect(),
        )
    }

    /// Matrix with a zero diagonal and no edges.
    #[must_use]
    pub fn empty(order: usize) -> Self {
        let rows = (0..order)
            .map(|i| (0..order).map(|j| if i == j { Some(0.0) } else { None }).collect())
            .collect();
        Self { rows }
    }

    /// Number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Raw rows exactly as supplied.
    #[must_use]
    pub fn rows(&self) -> &[Vec<RawWeight>] {
        &self.rows
    }

    /// Raw cell `(i, j)`; `None` outside the matrix as well.
    #[must_use]
    pub fn raw(&self, i: VertexId, j: VertexId) -> RawWeight {
        self.rows.get(i).and_then(|row| row.get(j)).copied().flatten()
    }

    /// Normalized edge weight, see [`normalize_weight`].
    #[must_use]
    pub fn edge_weight(&self, i: VertexId, j: VertexId) -> Option<f64> {
        normalize_weight(self.raw(i, j))
    }

    /// Overwrite cell `(i, j)`.
    ///
    /// # Errors
    /// Returns [`GraphstepError::VertexOutOfBounds`] for an invalid index.
    pub fn set(&mut self, i: VertexId, j: VertexId, weight: RawWeight) -> Result<()> {
        let order = self.order();
        GraphstepError::check_vertex(i, order)?;
        GraphstepError::check_vertex(j, order)?;
        self.rows[i][j] = weight;
        Ok(())
    }

    /// Cost view for path algorithms: missing edges are `+inf`.
    #[must_use]
    pub fn cost_matrix(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&w| normalize_weight(w).unwrap_or(f64::INFINITY))
                    .collect()
            })
            .collect()
    }

    /// Structural view for analysis: missing edges are `0`.
    #[must_use]
    pub fn structure_matrix(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&w| normalize_weight(w).unwrap_or(0.0)).collect())
            .collect()
    }

    /// Whether every normalized `(i, j)` equals `(j, i)`.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let n = self.order();
        (0..n).all(|i| (i + 1..n).all(|j| self.edge_weight(i, j) == self.edge_weight(j, i)))
    }
}

impl TryFrom<Vec<Vec<RawWeight>>> for AdjacencyMatrix {
    type Error = GraphstepError;

    fn try_from(rows: Vec<Vec<RawWeight>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<RawWeight>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.rows
    }
}

/// Dijkstra from every vertex; row `s` holds the distances from `s`.
///
/// Runs the sources in parallel when the `parallel` feature is enabled.
/// The output is identical either way.
///
/// # Examples
/// ```
/// use graphstep::graph::{all_sources_distances, AdjacencyMatrix};
///
/// let m = AdjacencyMatrix::from_weights(&[vec![0.0, 2.0], vec![2.0, 0.0]]).unwrap();
/// assert_eq!(all_sources_distances(&m), vec![vec![0.0, 2.0], vec![2.0, 0.0]]);
/// ```
#[must_use]
pub fn all_sources_distances(matrix: &AdjacencyMatrix) -> Vec<Vec<f64>> {
    let n = matrix.order();

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|source| dijkstra::distances_from(matrix, source))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|source| dijkstra::distances_from(matrix, source))
        .collect();

    rows
}

#[cfg(test)]
mod tests;
