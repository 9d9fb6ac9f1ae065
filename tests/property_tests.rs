//! Property-based tests using proptest.
//!
//! These tests verify invariants of the graph and knapsack algorithms on
//! random classroom-sized inputs, cross-checking independent algorithms
//! against each other and against brute force.

use graphstep::graph::{operations, UnionFind};
use graphstep::knapsack::optimal_selection;
use graphstep::prelude::*;
use proptest::prelude::*;

/// Symmetric matrix from upper-triangle cells; diagonal is 0.
fn build_symmetric(n: usize, upper: &[Option<u32>]) -> AdjacencyMatrix {
    let mut rows = vec![vec![None; n]; n];
    let mut cells = upper.iter();
    for (i, row) in rows.iter_mut().enumerate() {
        row[i] = Some(0.0);
    }
    for i in 0..n {
        for j in (i + 1)..n {
            let w = cells.next().copied().flatten().map(f64::from);
            rows[i][j] = w;
            rows[j][i] = w;
        }
    }
    AdjacencyMatrix::new(rows).expect("Test data should be square")
}

// Symmetric matrices with positive integer weights, up to 8 vertices
fn symmetric_matrix_strategy() -> impl Strategy<Value = AdjacencyMatrix> {
    (1usize..=8).prop_flat_map(|n| {
        proptest::collection::vec(proptest::option::of(1u32..=20), n * (n - 1) / 2)
            .prop_map(move |upper| build_symmetric(n, &upper))
    })
}

// 0/1 symmetric matrices with zero diagonal
fn unit_matrix_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..=8).prop_flat_map(|n| {
        proptest::collection::vec(any::<bool>(), n * n).prop_map(move |bits| {
            let mut rows = vec![vec![0.0; n]; n];
            for i in 0..n {
                for j in (i + 1)..n {
                    let w = if bits[i * n + j] { 1.0 } else { 0.0 };
                    rows[i][j] = w;
                    rows[j][i] = w;
                }
            }
            rows
        })
    })
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    proptest::collection::vec((1usize..=10, 0u64..=20), 0..=8).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (weight, value))| Item::new(format!("I{i}"), weight, value))
            .collect()
    })
}

fn brute_force_best(capacity: usize, items: &[Item]) -> u64 {
    (0u32..1 << items.len())
        .filter_map(|mask| {
            let (weight, value) = items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .fold((0, 0), |(w, v), (_, item)| (w + item.weight, v + item.value));
            (weight <= capacity).then_some(value)
        })
        .max()
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn dijkstra_start_to_itself_is_free(m in symmetric_matrix_strategy(), s in 0usize..8) {
        let s = s % m.order();
        let result = shortest_path(&m, s, s).expect("in bounds");
        prop_assert_eq!(result.min_cost, 0.0);
        prop_assert_eq!(result.min_path, Some(vec![s]));
    }

    #[test]
    fn floyd_matches_dijkstra(m in symmetric_matrix_strategy()) {
        let floyd = all_pairs_path(&m);
        for s in 0..m.order() {
            let dijkstra = shortest_path(&m, s, 0).expect("in bounds");
            prop_assert_eq!(&dijkstra.distances, &floyd.final_distances[s]);
        }
    }

    #[test]
    fn parallel_sweep_matches_floyd(m in symmetric_matrix_strategy()) {
        prop_assert_eq!(all_sources_distances(&m), all_pairs_path(&m).final_distances);
    }

    #[test]
    fn floyd_is_symmetric_and_metric(m in symmetric_matrix_strategy()) {
        let d = all_pairs_path(&m).final_distances;
        let n = d.len();
        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(d[i][j], d[j][i]);
                for k in 0..n {
                    prop_assert!(d[i][j] <= d[i][k] + d[k][j]);
                }
            }
        }
    }

    #[test]
    fn floyd_paths_realize_distances(m in symmetric_matrix_strategy()) {
        let result = all_pairs_path(&m);
        let n = m.order();
        for u in 0..n {
            for v in 0..n {
                let distance = result.distance(u, v).expect("in bounds");
                match result.path(u, v).expect("in bounds") {
                    Some(path) => {
                        prop_assert_eq!(path.first(), Some(&u));
                        prop_assert_eq!(path.last(), Some(&v));
                        let cost: f64 = path
                            .windows(2)
                            .map(|p| m.edge_weight(p[0], p[1]).unwrap_or(f64::INFINITY))
                            .sum();
                        prop_assert_eq!(cost, distance);
                    }
                    None => prop_assert!(distance.is_infinite()),
                }
            }
        }
    }

    #[test]
    fn kruskal_builds_a_spanning_forest(m in symmetric_matrix_strategy()) {
        let tree = spanning_tree(&m);
        let components = GraphAnalysis::new(&m).connected_components().len();
        prop_assert_eq!(tree.mst_edges.len(), m.order() - components);

        let total: f64 = tree.mst_edges.iter().map(|e| e.weight).sum();
        prop_assert_eq!(total, tree.total_cost);

        // Replaying the accepted edges never closes a cycle
        let mut uf = UnionFind::new(m.order());
        for edge in &tree.mst_edges {
            prop_assert!(uf.union(edge.u, edge.v));
        }
    }

    #[test]
    fn kruskal_alternative_needs_shared_weight(m in symmetric_matrix_strategy()) {
        let tree = spanning_tree(&m);
        if tree.has_alternative_tree() {
            prop_assert!(tree.has_multiple_mst);
        }
    }

    #[test]
    fn components_partition_vertices(m in symmetric_matrix_strategy()) {
        let g = GraphAnalysis::new(&m);
        let components = g.connected_components();
        let mut all: Vec<usize> = components.iter().flatten().copied().collect();
        all.sort_unstable();
        prop_assert_eq!(all, (0..m.order()).collect::<Vec<_>>());

        for v in g.isolated_vertices() {
            prop_assert!(components.contains(&vec![v]));
        }
    }

    #[test]
    fn size_agrees_with_operations(m in symmetric_matrix_strategy()) {
        prop_assert_eq!(GraphAnalysis::new(&m).size(), operations::graph_size(&m));
    }

    #[test]
    fn complement_round_trips(rows in unit_matrix_strategy()) {
        let g = GraphAnalysis::from_structure(rows).expect("square");
        prop_assert_eq!(g.complement().complement(), g.clone());

        let n = g.order() as f64;
        prop_assert_eq!(g.size() + g.complement().size(), n * (n - 1.0) / 2.0);
    }

    #[test]
    fn knapsack_optimal_is_feasible_and_best(items in items_strategy(), capacity in 0usize..=30) {
        let result = KnapsackSolver::new().solve(capacity, &items).expect("within ceiling");
        prop_assert!(result.optimal.total_weight <= capacity);
        if capacity == 0 || items.is_empty() {
            prop_assert!(result.optimal.is_empty());
            prop_assert!(result.alternatives.is_empty());
        } else {
            prop_assert_eq!(result.optimal.total_value, brute_force_best(capacity, &items));
        }
    }

    #[test]
    fn knapsack_alternatives_are_ranked(items in items_strategy(), capacity in 1usize..=30) {
        let result = KnapsackSolver::new()
            .with_exclusion(AlternativeExclusion::ExactSet)
            .solve(capacity, &items)
            .expect("within ceiling");
        prop_assert!(result.alternatives.len() <= 3);
        for alt in &result.alternatives {
            prop_assert!(alt.total_weight <= capacity);
            prop_assert!(alt.total_value <= result.optimal.total_value);
            prop_assert!(!alt.same_items(&result.optimal));
        }
        prop_assert!(result
            .alternatives
            .windows(2)
            .all(|pair| pair[0].total_value >= pair[1].total_value));
    }
}

#[test]
fn triangle_example() {
    let m = AdjacencyMatrix::from_weights(&[
        vec![0.0, 1.0, 4.0],
        vec![1.0, 0.0, 2.0],
        vec![4.0, 2.0, 0.0],
    ])
    .expect("square");

    let path = shortest_path(&m, 0, 2).expect("in bounds");
    assert_eq!(path.min_cost, 3.0);
    let letters: String = path
        .min_path
        .expect("reachable")
        .iter()
        .map(|&v| char::from(b'A' + v as u8))
        .collect();
    assert_eq!(letters, "ABC");

    let tree = spanning_tree(&m);
    assert_eq!(tree.total_cost, 3.0);
    let edges: Vec<_> = tree.mst_edges.iter().map(|e| (e.u, e.v)).collect();
    assert_eq!(edges, vec![(0, 1), (1, 2)]);
}

#[test]
fn knapsack_example_matches_brute_force() {
    let items = vec![Item::new("A", 2, 3), Item::new("B", 3, 4), Item::new("C", 4, 5)];
    let optimal = optimal_selection(5, &items).expect("small input");
    assert_eq!(optimal.total_value, brute_force_best(5, &items));
    assert_eq!(optimal.total_value, 7);
    assert!(optimal.total_weight <= 5);
}
