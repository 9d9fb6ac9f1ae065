//! Constructions that derive a new graph from an existing one.
//!
//! Every operation returns a fresh [`AdjacencyMatrix`]; the input is left
//! untouched. Cells the construction fills in are explicit `0` (no edge in
//! the structural view) rather than absent.

use log::debug;

use super::{normalize_weight, AdjacencyMatrix, RawWeight, VertexId};
use crate::error::{GraphstepError, Result};

/// Drop row and column `vertex`.
///
/// # Errors
/// Returns [`GraphstepError::VertexOutOfBounds`] for an invalid vertex.
///
/// # Examples
/// ```
/// use graphstep::graph::{operations, AdjacencyMatrix};
///
/// let m = AdjacencyMatrix::from_weights(&[
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// let smaller = operations::remove_vertex(&m, 1).unwrap();
/// assert_eq!(smaller.order(), 2);
/// assert_eq!(smaller.edge_weight(0, 1), Some(2.0));
/// ```
pub fn remove_vertex(matrix: &AdjacencyMatrix, vertex: VertexId) -> Result<AdjacencyMatrix> {
    GraphstepError::check_vertex(vertex, matrix.order())?;
    Ok(without_vertex(matrix.rows(), vertex))
}

fn without_vertex(rows: &[Vec<RawWeight>], vertex: VertexId) -> AdjacencyMatrix {
    let rows = rows
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != vertex)
        .map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(|&(j, _)| j != vertex)
                .map(|(_, &w)| w)
                .collect()
        })
        .collect();
    AdjacencyMatrix { rows }
}

/// Merge `b` into `a` and drop `b`.
///
/// For every other vertex `i`, the merged weight to `i` is the sum of the
/// two original weights (a missing edge counts as 0), written
/// symmetrically. The merged vertex gets a `0` self-loop. Vertex indices
/// above `b` shift down by one.
///
/// # Errors
/// Returns [`GraphstepError::VertexOutOfBounds`] for an invalid vertex and
/// [`GraphstepError::InvalidParameter`] when `a == b`.
pub fn contract_edge(
    matrix: &AdjacencyMatrix,
    a: VertexId,
    b: VertexId,
) -> Result<AdjacencyMatrix> {
    let n = matrix.order();
    GraphstepError::check_vertex(a, n)?;
    GraphstepError::check_vertex(b, n)?;
    if a == b {
        return Err(GraphstepError::InvalidParameter {
            param: "edge".to_string(),
            value: format!("({a},{b})"),
            constraint: "two distinct vertices".to_string(),
        });
    }

    let mut rows = matrix.rows().to_vec();
    for i in (0..n).filter(|&i| i != a && i != b) {
        let merged = normalize_weight(rows[a][i]).unwrap_or(0.0)
            + normalize_weight(rows[b][i]).unwrap_or(0.0);
        rows[a][i] = Some(merged);
        rows[i][a] = Some(merged);
    }
    rows[a][a] = Some(0.0);

    debug!("contract_edge: merged {b} into {a}");
    Ok(without_vertex(&rows, b))
}

/// Disjoint union with the complete graph `K_k`.
///
/// The original matrix occupies the top-left block unchanged; the new
/// block has weight 1 between every pair of distinct new vertices.
#[must_use]
pub fn union_with_complete(matrix: &AdjacencyMatrix, k: usize) -> AdjacencyMatrix {
    let n = matrix.order();
    let total = n + k;
    let rows = (0..total)
        .map(|i| {
            (0..total)
                .map(|j| {
                    if i < n && j < n {
                        matrix.raw(i, j)
                    } else if i >= n && j >= n && i != j {
                        Some(1.0)
                    } else {
                        Some(0.0)
                    }
                })
                .collect()
        })
        .collect();
    AdjacencyMatrix { rows }
}

/// Cartesian product with the path graph `P_t`.
///
/// Vertex `i` of layer `l` becomes `l * order + i`. Each layer copies the
/// positive edges of the input symmetrically, and consecutive layers are
/// joined vertex-to-vertex with weight 1. `t == 0` yields the empty graph.
///
/// # Examples
/// ```
/// use graphstep::graph::{operations, AdjacencyMatrix};
///
/// // K2 x P2 is the 4-cycle
/// let k2 = AdjacencyMatrix::from_weights(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
/// let square = operations::cartesian_product_with_path(&k2, 2);
/// assert_eq!(square.order(), 4);
/// assert_eq!(operations::graph_size(&square), 4.0);
/// ```
#[must_use]
pub fn cartesian_product_with_path(matrix: &AdjacencyMatrix, t: usize) -> AdjacencyMatrix {
    let n = matrix.order();
    let total = n * t;
    let mut rows = vec![vec![Some(0.0); total]; total];

    for i in 0..n {
        for j in 0..n {
            let Some(weight) = matrix.edge_weight(i, j).filter(|&w| w > 0.0) else {
                continue;
            };
            for layer in 0..t {
                let offset = layer * n;
                rows[i + offset][j + offset] = Some(weight);
                rows[j + offset][i + offset] = Some(weight);
            }
        }
    }

    for layer in 0..t.saturating_sub(1) {
        for i in 0..n {
            let here = i + layer * n;
            let next = here + n;
            rows[here][next] = Some(1.0);
            rows[next][here] = Some(1.0);
        }
    }

    AdjacencyMatrix { rows }
}

/// Number of edges: present positive entries over the whole matrix, halved.
#[must_use]
pub fn graph_size(matrix: &AdjacencyMatrix) -> f64 {
    let positive = matrix
        .rows()
        .iter()
        .flatten()
        .filter(|&&w| normalize_weight(w).is_some_and(|w| w > 0.0))
        .count();
    positive as f64 / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path3() -> AdjacencyMatrix {
        // 0-1 (2), 1-2 (5)
        AdjacencyMatrix::new(vec![
            vec![Some(0.0), Some(2.0), None],
            vec![Some(2.0), Some(0.0), Some(5.0)],
            vec![None, Some(5.0), Some(0.0)],
        ])
        .expect("square")
    }

    #[test]
    fn test_remove_vertex() {
        let m = remove_vertex(&path3(), 1).expect("in bounds");
        assert_eq!(m.order(), 2);
        assert_eq!(m.rows(), &[vec![Some(0.0), None], vec![None, Some(0.0)]]);
        assert_eq!(graph_size(&m), 0.0);
    }

    #[test]
    fn test_remove_vertex_out_of_bounds() {
        assert!(matches!(
            remove_vertex(&path3(), 3),
            Err(GraphstepError::VertexOutOfBounds { vertex: 3, order: 3 })
        ));
    }

    #[test]
    fn test_contract_edge_sums_weights() {
        // Merge 1 into 0: 0 inherits 1's edge to 2
        let m = contract_edge(&path3(), 0, 1).expect("valid edge");
        assert_eq!(m.order(), 2);
        assert_eq!(m.edge_weight(0, 1), Some(5.0));
        assert_eq!(m.edge_weight(1, 0), Some(5.0));
        assert_eq!(m.edge_weight(0, 0), Some(0.0));
    }

    #[test]
    fn test_contract_edge_shared_neighbor() {
        let triangle = AdjacencyMatrix::from_weights(&[
            vec![0.0, 1.0, 4.0],
            vec![1.0, 0.0, 2.0],
            vec![4.0, 2.0, 0.0],
        ])
        .expect("square");
        let m = contract_edge(&triangle, 2, 0).expect("valid edge");
        // Vertex 2 shifts down to index 1 after removing 0
        assert_eq!(m.order(), 2);
        assert_eq!(m.edge_weight(0, 1), Some(3.0));
        assert_eq!(m.edge_weight(1, 1), Some(0.0));
    }

    #[test]
    fn test_contract_edge_rejects_loop() {
        assert!(matches!(
            contract_edge(&path3(), 1, 1),
            Err(GraphstepError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_union_with_complete() {
        let m = union_with_complete(&path3(), 3);
        assert_eq!(m.order(), 6);
        // Original block untouched, including absent cells
        assert_eq!(m.raw(0, 2), None);
        assert_eq!(m.raw(1, 2), Some(5.0));
        // K3 block
        assert_eq!(m.raw(3, 4), Some(1.0));
        assert_eq!(m.raw(5, 5), Some(0.0));
        // No edges between the blocks
        assert_eq!(m.raw(0, 3), Some(0.0));
        assert_eq!(graph_size(&m), 2.0 + 3.0);
    }

    #[test]
    fn test_union_with_empty_complete() {
        assert_eq!(union_with_complete(&path3(), 0), path3());
    }

    #[test]
    fn test_cartesian_product_with_path() {
        let m = cartesian_product_with_path(&path3(), 3);
        assert_eq!(m.order(), 9);
        // Layer 2 copy of edge 1-2
        assert_eq!(m.raw(7, 8), Some(5.0));
        // Rungs between consecutive layers only
        assert_eq!(m.raw(1, 4), Some(1.0));
        assert_eq!(m.raw(4, 7), Some(1.0));
        assert_eq!(m.raw(1, 7), Some(0.0));
        // 3 layers * 2 edges + 2 * 3 rungs
        assert_eq!(graph_size(&m), 12.0);
    }

    #[test]
    fn test_cartesian_product_degenerate() {
        assert_eq!(cartesian_product_with_path(&path3(), 0).order(), 0);
        let single = cartesian_product_with_path(&path3(), 1);
        assert_eq!(graph_size(&single), 2.0);
    }

    #[test]
    fn test_graph_size_ignores_non_edges() {
        let m = AdjacencyMatrix::new(vec![
            vec![Some(0.0), Some(-1.0)],
            vec![Some(f64::NAN), Some(3.0)],
        ])
        .expect("square");
        // Only the positive diagonal entry counts
        assert_eq!(graph_size(&m), 0.5);
    }
}
