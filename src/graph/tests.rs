//! Tests for the adjacency matrix and cross-algorithm agreement.

use super::*;

const INF: f64 = f64::INFINITY;

fn triangle() -> AdjacencyMatrix {
    AdjacencyMatrix::from_weights(&[
        vec![0.0, 1.0, 4.0],
        vec![1.0, 0.0, 2.0],
        vec![4.0, 2.0, 0.0],
    ])
    .expect("square")
}

/// Five vertices, positive weights, one unreachable vertex (4).
fn sparse() -> AdjacencyMatrix {
    let mut m = AdjacencyMatrix::empty(5);
    for &(u, v, w) in &[(0, 1, 7.0), (0, 2, 9.0), (1, 2, 10.0), (1, 3, 15.0), (2, 3, 11.0)] {
        m.set(u, v, Some(w)).expect("in bounds");
        m.set(v, u, Some(w)).expect("in bounds");
    }
    m
}

#[test]
fn test_new_rejects_wrong_row_count() {
    let err = AdjacencyMatrix::with_order(vec![vec![None, None]], 2).unwrap_err();
    assert_eq!(
        err,
        GraphstepError::Shape {
            expected: 2,
            actual: 1,
            row: None
        }
    );
}

#[test]
fn test_new_rejects_ragged_row() {
    let err = AdjacencyMatrix::new(vec![vec![Some(0.0), None], vec![None]]).unwrap_err();
    assert_eq!(err, GraphstepError::ragged_row(1, 2, 1));
}

#[test]
fn test_empty_matrix() {
    let m = AdjacencyMatrix::new(Vec::new()).expect("0x0 is square");
    assert_eq!(m.order(), 0);
    assert!(m.cost_matrix().is_empty());
    assert!(m.is_symmetric());
}

#[test]
fn test_empty_has_zero_diagonal() {
    let m = AdjacencyMatrix::empty(3);
    assert_eq!(m.raw(1, 1), Some(0.0));
    assert_eq!(m.raw(0, 1), None);
}

#[test]
fn test_normalization_rules() {
    assert_eq!(normalize_weight(None), None);
    assert_eq!(normalize_weight(Some(2.5)), Some(2.5));
    assert_eq!(normalize_weight(Some(0.0)), Some(0.0));
    assert_eq!(normalize_weight(Some(-0.5)), None);
    assert_eq!(normalize_weight(Some(f64::NAN)), None);
    assert_eq!(normalize_weight(Some(INF)), None);
}

#[test]
fn test_views_differ_only_for_missing_edges() {
    let m = AdjacencyMatrix::new(vec![
        vec![Some(0.0), Some(-3.0)],
        vec![None, Some(0.0)],
    ])
    .expect("square");
    assert_eq!(m.cost_matrix(), vec![vec![0.0, INF], vec![INF, 0.0]]);
    assert_eq!(m.structure_matrix(), vec![vec![0.0, 0.0], vec![0.0, 0.0]]);
}

#[test]
fn test_raw_out_of_range_is_none() {
    let m = triangle();
    assert_eq!(m.raw(0, 3), None);
    assert_eq!(m.raw(7, 0), None);
    assert_eq!(m.edge_weight(2, 1), Some(2.0));
}

#[test]
fn test_set_checks_bounds() {
    let mut m = AdjacencyMatrix::empty(2);
    assert!(m.set(0, 1, Some(3.0)).is_ok());
    assert!(m.set(2, 0, Some(3.0)).is_err());
    assert!(!m.is_symmetric());
    m.set(1, 0, Some(3.0)).expect("in bounds");
    assert!(m.is_symmetric());
}

#[test]
fn test_serde_round_trip_with_absent_cells() {
    let m = AdjacencyMatrix::new(vec![
        vec![Some(0.0), None],
        vec![Some(1.5), Some(0.0)],
    ])
    .expect("square");
    let json = serde_json::to_string(&m).expect("serialize");
    assert_eq!(json, "[[0.0,null],[1.5,0.0]]");
    let back: AdjacencyMatrix = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, m);
}

#[test]
fn test_deserialize_rejects_ragged() {
    let result: std::result::Result<AdjacencyMatrix, _> = serde_json::from_str("[[0.0],[1.0,0.0]]");
    assert!(result.is_err());
}

#[test]
fn test_unreachable_results_survive_json() {
    let m = sparse();

    let floyd = all_pairs_path(&m);
    let json = serde_json::to_string(&floyd).expect("serialize");
    let back: AllPairsResult = serde_json::from_str(&json).expect("deserialize");
    assert!(back.final_distances[0][4].is_infinite());
    assert_eq!(back, floyd);

    let dijkstra = shortest_path(&m, 0, 4).expect("valid");
    let json = serde_json::to_string(&dijkstra).expect("serialize");
    assert!(json.contains("\"min_cost\":null"));
    let back: ShortestPathResult = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.min_cost, INF);
    assert_eq!(back, dijkstra);
}

#[test]
fn test_isolated_pair_round_trip() {
    let floyd = all_pairs_path(&AdjacencyMatrix::empty(2));
    let json = serde_json::to_string(&floyd).expect("serialize");
    let back: AllPairsResult = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.final_distances, vec![vec![0.0, INF], vec![INF, 0.0]]);
}

#[test]
fn test_all_sources_distances_matches_single_runs() {
    let m = sparse();
    let table = all_sources_distances(&m);
    for (source, row) in table.iter().enumerate() {
        assert_eq!(row, &shortest_path(&m, source, 0).expect("valid").distances);
    }
    assert_eq!(table[0][3], 20.0);
    assert!(table[0][4].is_infinite());
}

#[test]
fn test_floyd_agrees_with_dijkstra_on_positive_weights() {
    let m = sparse();
    let floyd = all_pairs_path(&m);
    let table = all_sources_distances(&m);
    for (u, row) in table.iter().enumerate() {
        for (v, &expected) in row.iter().enumerate() {
            assert_eq!(floyd.distance(u, v).expect("in bounds"), expected);
        }
    }
}

#[test]
fn test_floyd_and_dijkstra_paths_have_same_cost() {
    let m = sparse();
    let floyd = all_pairs_path(&m);
    let dijkstra = shortest_path(&m, 0, 3).expect("valid");
    let path = floyd.path(0, 3).expect("in bounds").expect("reachable");
    let cost: f64 = path
        .windows(2)
        .map(|pair| m.edge_weight(pair[0], pair[1]).expect("edge on path"))
        .sum();
    assert_eq!(cost, dijkstra.min_cost);
}

#[test]
fn test_spanning_tree_and_analysis_agree_on_components() {
    let m = sparse();
    let tree = spanning_tree(&m);
    let components = GraphAnalysis::new(&m).connected_components().len();
    // A spanning forest has order - components edges
    assert_eq!(tree.mst_edges.len(), m.order() - components);
    assert_eq!(tree.total_cost, 7.0 + 9.0 + 11.0);
}
