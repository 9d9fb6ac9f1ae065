//! Structural measures of an undirected graph.
//!
//! Works on the structural view of the matrix, where a missing edge is `0`
//! and any positive entry is an edge. Weights only matter for
//! [`GraphAnalysis::degree_totals`], which sums raw values.

use serde::{Deserialize, Serialize};

use super::{AdjacencyMatrix, VertexId};
use crate::error::{GraphstepError, Result};

/// Number of color classes cycled through by [`GraphAnalysis::component_colors`].
pub const COLOR_CLASSES: usize = 10;

/// Everything the analysis view reports, in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSummary {
    /// Vertex count
    pub order: usize,
    /// Edge count (positive entries / 2)
    pub size: f64,
    /// Degrees, largest first
    pub degree_sequence: Vec<usize>,
    /// Vertices whose row sums to zero
    pub isolated_vertices: Vec<VertexId>,
    /// Connected components in discovery order
    pub components: Vec<Vec<VertexId>>,
    /// Edge count of the complement graph
    pub complement_size: f64,
    /// Connected components of the complement graph
    pub complement_components: Vec<Vec<VertexId>>,
}

/// Structural analysis over a `0 = no edge` matrix.
///
/// # Examples
/// ```
/// use graphstep::graph::{AdjacencyMatrix, GraphAnalysis};
///
/// // Path A-B-C plus isolated D
/// let m = AdjacencyMatrix::from_weights(&[
///     vec![0.0, 1.0, 0.0, 0.0],
///     vec![1.0, 0.0, 1.0, 0.0],
///     vec![0.0, 1.0, 0.0, 0.0],
///     vec![0.0, 0.0, 0.0, 0.0],
/// ])
/// .unwrap();
///
/// let g = GraphAnalysis::new(&m);
/// assert_eq!(g.size(), 2.0);
/// assert_eq!(g.degree_sequence(), vec![2, 1, 1, 0]);
/// assert_eq!(g.connected_components(), vec![vec![0, 1, 2], vec![3]]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphAnalysis {
    matrix: Vec<Vec<f64>>,
}

impl GraphAnalysis {
    /// Analyse the structural view of an adjacency matrix.
    #[must_use]
    pub fn new(matrix: &AdjacencyMatrix) -> Self {
        Self {
            matrix: matrix.structure_matrix(),
        }
    }

    /// Analyse an already normalized matrix.
    ///
    /// # Errors
    /// Returns [`GraphstepError::Shape`] if the matrix is not square.
    pub fn from_structure(matrix: Vec<Vec<f64>>) -> Result<Self> {
        let n = matrix.len();
        if let Some((i, row)) = matrix.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(GraphstepError::ragged_row(i, n, row.len()));
        }
        Ok(Self { matrix })
    }

    /// The normalized matrix.
    #[must_use]
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    /// Number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.matrix.len()
    }

    /// Number of edges: positive entries over the whole matrix, halved.
    ///
    /// Assumes symmetry; an asymmetric matrix can give a half-integer.
    #[must_use]
    pub fn size(&self) -> f64 {
        let positive = self.matrix.iter().flatten().filter(|&&w| w > 0.0).count();
        positive as f64 / 2.0
    }

    /// Neighbors of `vertex`, highest index first.
    ///
    /// # Errors
    /// Returns [`GraphstepError::VertexOutOfBounds`] for an invalid vertex.
    pub fn neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        GraphstepError::check_vertex(vertex, self.order())?;
        Ok(self.matrix[vertex]
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, &w)| w > 0.0)
            .map(|(i, _)| i)
            .collect())
    }

    /// Degree of each vertex in index order.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|&&w| w > 0.0).count())
            .collect()
    }

    /// Degrees sorted from largest to smallest.
    #[must_use]
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees = self.degrees();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        degrees
    }

    /// Vertices whose whole row sums to zero.
    #[must_use]
    pub fn isolated_vertices(&self) -> Vec<VertexId> {
        self.matrix
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().sum::<f64>() == 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Partition of the vertices by depth-first search.
    ///
    /// Components appear in order of their lowest vertex; vertices inside a
    /// component appear in visit order, exploring neighbors by ascending
    /// index as a recursive search would.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let n = self.order();
        let mut visited = vec![false; n];
        let mut components = Vec::new();

        for root in 0..n {
            if !visited[root] {
                components.push(self.collect_component(root, &mut visited));
            }
        }
        components
    }

    fn collect_component(&self, root: VertexId, visited: &mut [bool]) -> Vec<VertexId> {
        let n = self.order();
        let mut component = vec![root];
        visited[root] = true;

        // (vertex, next neighbor index to try)
        let mut stack = vec![(root, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let (vertex, from) = *frame;
            let next = (from..n).find(|&i| self.matrix[vertex][i] > 0.0 && !visited[i]);
            match next {
                Some(i) => {
                    frame.1 = i + 1;
                    visited[i] = true;
                    component.push(i);
                    stack.push((i, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }
        component
    }

    /// Complement graph: `1` where there is no edge off the diagonal.
    ///
    /// # Examples
    /// ```
    /// use graphstep::graph::{AdjacencyMatrix, GraphAnalysis};
    ///
    /// let m = AdjacencyMatrix::from_weights(&[vec![0.0, 3.0], vec![3.0, 0.0]]).unwrap();
    /// let c = GraphAnalysis::new(&m).complement();
    /// assert_eq!(c.matrix(), &[vec![0.0, 0.0], vec![0.0, 0.0]]);
    /// ```
    #[must_use]
    pub fn complement(&self) -> Self {
        let matrix = self
            .matrix
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, &w)| if i != j && w == 0.0 { 1.0 } else { 0.0 })
                    .collect()
            })
            .collect();
        Self { matrix }
    }

    /// Color class per cell for rendering components.
    ///
    /// Component `k` gets class `k % COLOR_CLASSES`. For each of its
    /// vertices `v`, every cell `(v, i)` and `(i, v)` holding an edge in
    /// either direction is tagged, as is the diagonal cell `(v, v)`. Cells
    /// never tagged stay `None`. Vertices outside the matrix are skipped.
    #[must_use]
    pub fn component_colors(&self, components: &[Vec<VertexId>]) -> Vec<Vec<Option<usize>>> {
        let n = self.order();
        let mut colors = vec![vec![None; n]; n];

        for (index, component) in components.iter().enumerate() {
            let class = Some(index % COLOR_CLASSES);
            for &v in component.iter().filter(|&&v| v < n) {
                for i in 0..n {
                    if self.matrix[v][i] > 0.0 || self.matrix[i][v] > 0.0 {
                        colors[v][i] = class;
                        colors[i][v] = class;
                    } else if v == i {
                        colors[v][i] = class;
                    }
                }
            }
        }
        colors
    }

    /// Matrix bordered with its row sums (last column) and column sums
    /// (last row); the corner is `0`.
    #[must_use]
    pub fn degree_totals(&self) -> Vec<Vec<f64>> {
        let n = self.order();
        let mut column_sums = vec![0.0; n + 1];
        let mut table: Vec<Vec<f64>> = Vec::with_capacity(n + 1);

        for row in &self.matrix {
            let mut extended = row.clone();
            extended.push(row.iter().sum());
            for (j, &w) in row.iter().enumerate() {
                column_sums[j] += w;
            }
            table.push(extended);
        }
        table.push(column_sums);
        table
    }

    /// Order, size, degrees, components, and the same for the complement.
    #[must_use]
    pub fn summary(&self) -> ComponentSummary {
        let complement = self.complement();
        ComponentSummary {
            order: self.order(),
            size: self.size(),
            degree_sequence: self.degree_sequence(),
            isolated_vertices: self.isolated_vertices(),
            components: self.connected_components(),
            complement_size: complement.size(),
            complement_components: complement.connected_components(),
        }
    }
}
