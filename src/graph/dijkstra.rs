//! Single-source shortest paths (Dijkstra 1959) with a pivot trace.
//!
//! This is the array-scan variant: each iteration settles the unvisited
//! vertex with the smallest tentative distance, scanning in index order so
//! the lowest index wins ties. The trace records the distance vector as it
//! stood when each pivot was settled, before its edges were relaxed.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::cost_serde::{cost, costs};
use super::{AdjacencyMatrix, VertexId};
use crate::error::{GraphstepError, Result};

/// Snapshot taken when a pivot is settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DijkstraStep {
    /// Tentative distances at selection time (`inf` = not reached yet)
    #[serde(with = "costs")]
    pub distances: Vec<f64>,
    /// Vertex settled in this step
    pub pivot: VertexId,
}

/// Result of [`shortest_path`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathResult {
    /// One entry per settled vertex, in settlement order
    pub steps: Vec<DijkstraStep>,
    /// Final distance from the start to every vertex
    #[serde(with = "costs")]
    pub distances: Vec<f64>,
    /// Previous vertex on the best known path, `None` for start/unreached
    pub predecessors: Vec<Option<VertexId>>,
    /// Distance to the end vertex, `inf` if unreachable
    #[serde(with = "cost")]
    pub min_cost: f64,
    /// Start-to-end vertex sequence, `None` if unreachable
    pub min_path: Option<Vec<VertexId>>,
}

impl ShortestPathResult {
    /// Whether the end vertex was reached.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.min_cost.is_finite()
    }

    /// Follow predecessor links back from `vertex` and reverse.
    ///
    /// For an unreachable vertex this is only the unresolved chain
    /// (usually just `[vertex]`); check [`is_reachable`](Self::is_reachable)
    /// before presenting it as a path.
    #[must_use]
    pub fn predecessor_chain(&self, vertex: VertexId) -> Vec<VertexId> {
        let mut chain = Vec::new();
        let mut current = Some(vertex).filter(|&v| v < self.predecessors.len());
        while let Some(v) = current {
            chain.push(v);
            current = self.predecessors[v];
        }
        chain.reverse();
        chain
    }
}

/// Working state of one run.
struct Run {
    distances: Vec<f64>,
    previous: Vec<Option<VertexId>>,
    steps: Vec<DijkstraStep>,
}

/// Unvisited vertex with the smallest finite distance; lowest index on ties.
fn next_pivot(distances: &[f64], visited: &[bool]) -> Option<VertexId> {
    let mut best = None;
    let mut min_dist = f64::INFINITY;
    for (j, &dist) in distances.iter().enumerate() {
        if !visited[j] && dist < min_dist {
            min_dist = dist;
            best = Some(j);
        }
    }
    best
}

fn run(matrix: &AdjacencyMatrix, start: VertexId) -> Run {
    let n = matrix.order();
    let mut distances = vec![f64::INFINITY; n];
    let mut previous = vec![None; n];
    let mut visited = vec![false; n];
    let mut steps = Vec::with_capacity(n);

    distances[start] = 0.0;

    for _ in 0..n.saturating_sub(1) {
        let Some(pivot) = next_pivot(&distances, &visited) else {
            break;
        };

        visited[pivot] = true;
        debug!("dijkstra: settle {pivot} at distance {}", distances[pivot]);
        steps.push(DijkstraStep {
            distances: distances.clone(),
            pivot,
        });

        for j in 0..n {
            if visited[j] {
                continue;
            }
            let Some(weight) = matrix.edge_weight(pivot, j) else {
                continue;
            };
            let candidate = distances[pivot] + weight;
            if candidate < distances[j] {
                trace!("dijkstra: relax {j} via {pivot}: {} -> {candidate}", distances[j]);
                distances[j] = candidate;
                previous[j] = Some(pivot);
            }
        }
    }

    // Terminal pivot: the loop bound leaves the last reachable vertex unsettled.
    if let Some(pivot) = next_pivot(&distances, &visited) {
        steps.push(DijkstraStep {
            distances: distances.clone(),
            pivot,
        });
    }

    Run {
        distances,
        previous,
        steps,
    }
}

/// Distances only, for multi-source sweeps. `source` must be in bounds.
pub(super) fn distances_from(matrix: &AdjacencyMatrix, source: VertexId) -> Vec<f64> {
    run(matrix, source).distances
}

/// Shortest path from `start` to `end` with the full pivot trace.
///
/// Entries that are absent, negative or `NaN` are not edges; a weight of
/// `0` is an edge of cost 0. The matrix may be asymmetric: row `i` holds
/// the edges leaving `i`.
///
/// # Errors
/// Returns [`GraphstepError::VertexOutOfBounds`] if `start` or `end` is not
/// a vertex of the matrix.
///
/// # Examples
/// ```
/// use graphstep::graph::{shortest_path, AdjacencyMatrix};
///
/// let m = AdjacencyMatrix::new(vec![
///     vec![Some(0.0), Some(1.0), None],
///     vec![Some(1.0), Some(0.0), None],
///     vec![None, None, Some(0.0)],
/// ])
/// .unwrap();
///
/// let result = shortest_path(&m, 0, 2).unwrap();
/// assert!(!result.is_reachable());
/// assert_eq!(result.min_path, None);
/// ```
pub fn shortest_path(
    matrix: &AdjacencyMatrix,
    start: VertexId,
    end: VertexId,
) -> Result<ShortestPathResult> {
    let n = matrix.order();
    GraphstepError::check_vertex(start, n)?;
    GraphstepError::check_vertex(end, n)?;

    let Run {
        distances,
        previous,
        steps,
    } = run(matrix, start);

    let min_cost = distances[end];
    let mut result = ShortestPathResult {
        steps,
        distances,
        predecessors: previous,
        min_cost,
        min_path: None,
    };
    if result.is_reachable() {
        result.min_path = Some(result.predecessor_chain(end));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    fn triangle() -> AdjacencyMatrix {
        // A-B (1), B-C (2), C-A (4)
        AdjacencyMatrix::from_weights(&[
            vec![0.0, 1.0, 4.0],
            vec![1.0, 0.0, 2.0],
            vec![4.0, 2.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_triangle_cost_and_path() {
        let result = shortest_path(&triangle(), 0, 2).expect("valid vertices");
        assert_eq!(result.min_cost, 3.0);
        assert_eq!(result.min_path, Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_triangle_trace() {
        let result = shortest_path(&triangle(), 0, 2).expect("valid vertices");
        let pivots: Vec<_> = result.steps.iter().map(|s| s.pivot).collect();
        assert_eq!(pivots, vec![0, 1, 2]);

        // Snapshots are taken before relaxation from the pivot
        assert_eq!(result.steps[0].distances, vec![0.0, INF, INF]);
        assert_eq!(result.steps[1].distances, vec![0.0, 1.0, 4.0]);
        assert_eq!(result.steps[2].distances, vec![0.0, 1.0, 3.0]);
    }

    #[test]
    fn test_start_equals_end() {
        let result = shortest_path(&triangle(), 1, 1).expect("valid vertices");
        assert_eq!(result.min_cost, 0.0);
        assert_eq!(result.min_path, Some(vec![1]));
    }

    #[test]
    fn test_tie_break_lowest_index() {
        // Star: 0 joined to 1 and 2 with equal weight
        let m = AdjacencyMatrix::from_weights(&[
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, -1.0],
            vec![1.0, -1.0, 0.0],
        ])
        .expect("square");
        let result = shortest_path(&m, 0, 2).expect("valid vertices");
        let pivots: Vec<_> = result.steps.iter().map(|s| s.pivot).collect();
        assert_eq!(pivots, vec![0, 1, 2]);
    }

    #[test]
    fn test_disconnected_stops_early() {
        let mut m = AdjacencyMatrix::empty(4);
        m.set(0, 1, Some(2.0)).expect("in bounds");
        m.set(1, 0, Some(2.0)).expect("in bounds");
        m.set(2, 3, Some(1.0)).expect("in bounds");
        m.set(3, 2, Some(1.0)).expect("in bounds");

        let result = shortest_path(&m, 0, 3).expect("valid vertices");
        let pivots: Vec<_> = result.steps.iter().map(|s| s.pivot).collect();
        assert_eq!(pivots, vec![0, 1]);
        assert!(result.min_cost.is_infinite());
        assert_eq!(result.min_path, None);
        assert_eq!(result.predecessor_chain(3), vec![3]);
        assert!(result.distances[2].is_infinite());
    }

    #[test]
    fn test_zero_weight_is_an_edge() {
        let m = AdjacencyMatrix::new(vec![
            vec![Some(0.0), Some(0.0), None],
            vec![Some(0.0), Some(0.0), Some(5.0)],
            vec![None, Some(5.0), Some(0.0)],
        ])
        .expect("square");
        let result = shortest_path(&m, 0, 2).expect("valid vertices");
        assert_eq!(result.min_cost, 5.0);
        assert_eq!(result.min_path, Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_asymmetric_matrix_uses_rows_as_outgoing() {
        // 0 -> 1 only
        let m = AdjacencyMatrix::new(vec![
            vec![Some(0.0), Some(3.0)],
            vec![None, Some(0.0)],
        ])
        .expect("square");
        assert_eq!(shortest_path(&m, 0, 1).expect("valid").min_cost, 3.0);
        assert!(!shortest_path(&m, 1, 0).expect("valid").is_reachable());
    }

    #[test]
    fn test_out_of_bounds() {
        let err = shortest_path(&triangle(), 0, 3).unwrap_err();
        assert_eq!(
            err,
            GraphstepError::VertexOutOfBounds {
                vertex: 3,
                order: 3
            }
        );
    }

    #[test]
    fn test_single_vertex() {
        let m = AdjacencyMatrix::empty(1);
        let result = shortest_path(&m, 0, 0).expect("valid vertices");
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].pivot, 0);
        assert_eq!(result.min_path, Some(vec![0]));
    }

    #[test]
    fn test_longer_detour_wins() {
        // 0-3 direct costs 10, 0-1-2-3 costs 3
        let m = AdjacencyMatrix::from_weights(&[
            vec![0.0, 1.0, -1.0, 10.0],
            vec![1.0, 0.0, 1.0, -1.0],
            vec![-1.0, 1.0, 0.0, 1.0],
            vec![10.0, -1.0, 1.0, 0.0],
        ])
        .expect("square");
        let result = shortest_path(&m, 0, 3).expect("valid vertices");
        assert_eq!(result.min_cost, 3.0);
        assert_eq!(result.min_path, Some(vec![0, 1, 2, 3]));
        assert_eq!(result.predecessors, vec![None, Some(0), Some(1), Some(2)]);
    }
}
