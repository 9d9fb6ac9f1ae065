//! Minimum spanning tree via Kruskal's algorithm (1956).
//!
//! Edges are read from the upper triangle only, so the matrix is treated
//! as undirected. A disconnected graph yields a minimum spanning forest.

use std::cmp::Ordering;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{AdjacencyMatrix, VertexId};

/// Disjoint-set forest over vertex indices, union by rank.
///
/// # Examples
/// ```
/// use graphstep::graph::UnionFind;
///
/// let mut uf = UnionFind::new(3);
/// assert!(uf.union(0, 1));
/// assert!(!uf.union(1, 0));
/// assert_eq!(uf.find(1), 0);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    /// One singleton set per element.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `x` (with path halving).
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merge the sets of `x` and `y`; `false` if already merged.
    ///
    /// The lower-rank root is attached below the higher-rank one. On equal
    /// rank the root of `x` becomes the parent.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Undirected weighted edge with `u < v`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Lower endpoint
    pub u: VertexId,
    /// Higher endpoint
    pub v: VertexId,
    /// Edge cost
    pub weight: f64,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.u, self.v)
    }
}

/// What Kruskal did with one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeDecision {
    /// Joined two components and entered the tree
    Accepted,
    /// Endpoints already connected; discarded
    FormsCycle,
}

/// One processed edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KruskalIteration {
    /// 1-based iteration number
    pub iteration: usize,
    /// Edge examined
    pub edge: Edge,
    /// Outcome
    pub decision: EdgeDecision,
    /// Tree cost after this iteration
    pub cost_so_far: f64,
}

impl fmt::Display for KruskalIteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decision {
            EdgeDecision::Accepted => write!(
                f,
                "it {} accept {} (cost {})",
                self.iteration, self.edge, self.cost_so_far
            ),
            EdgeDecision::FormsCycle => write!(
                f,
                "it {} discard {}: forms a cycle",
                self.iteration, self.edge
            ),
        }
    }
}

/// Result of [`spanning_tree`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTreeResult {
    /// Number of vertices
    pub order: usize,
    /// Candidate edges in processing order
    pub sorted_edges: Vec<Edge>,
    /// Accepted edges in acceptance order
    pub mst_edges: Vec<Edge>,
    /// Sum of accepted weights
    pub total_cost: f64,
    /// One record per examined edge
    pub iterations: Vec<KruskalIteration>,
    /// Some weight is shared by two or more candidate edges
    ///
    /// Necessary but not sufficient for a second minimum tree; see
    /// [`has_alternative_tree`](Self::has_alternative_tree) for the exact test.
    pub has_multiple_mst: bool,
}

impl SpanningTreeResult {
    /// Whether the accepted edges connect every vertex.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.mst_edges.len() + 1 == self.order.max(1)
    }

    /// Exact multiplicity test.
    ///
    /// Another minimum spanning tree (or forest) exists iff some edge
    /// outside the tree weighs exactly as much as the heaviest tree edge on
    /// the path joining its endpoints.
    #[must_use]
    pub fn has_alternative_tree(&self) -> bool {
        let mut adjacency: Vec<Vec<(VertexId, f64)>> = vec![Vec::new(); self.order];
        for edge in &self.mst_edges {
            adjacency[edge.u].push((edge.v, edge.weight));
            adjacency[edge.v].push((edge.u, edge.weight));
        }

        self.sorted_edges
            .iter()
            .filter(|edge| !self.mst_edges.contains(edge))
            .any(|edge| heaviest_on_tree_path(&adjacency, edge.u, edge.v) == Some(edge.weight))
    }

    /// Iteration log as text, starting with `it 0 T = {∅}`.
    ///
    /// Accepted edges print the whole tree so far, rejected ones the
    /// discarded edge. `label` maps vertex indices to display names.
    #[must_use]
    pub fn trace_lines<F>(&self, label: F) -> Vec<String>
    where
        F: Fn(VertexId) -> String,
    {
        let show = |edge: &Edge| format!("({},{})", label(edge.u), label(edge.v));
        let mut lines = Vec::with_capacity(self.iterations.len() + 1);
        let mut tree: Vec<String> = Vec::new();
        lines.push("it 0 T = {∅}".to_string());

        for it in &self.iterations {
            match it.decision {
                EdgeDecision::Accepted => {
                    tree.push(show(&it.edge));
                    lines.push(format!("it {} T = {{{}}}", it.iteration, tree.join(",")));
                }
                EdgeDecision::FormsCycle => {
                    lines.push(format!(
                        "it {} discard {}: forms a cycle",
                        it.iteration,
                        show(&it.edge)
                    ));
                }
            }
        }
        lines
    }
}

/// Heaviest edge weight on the tree path from `from` to `to`.
fn heaviest_on_tree_path(
    adjacency: &[Vec<(VertexId, f64)>],
    from: VertexId,
    to: VertexId,
) -> Option<f64> {
    let mut seen = vec![false; adjacency.len()];
    let mut stack = vec![(from, f64::NEG_INFINITY)];
    seen[from] = true;

    while let Some((vertex, heaviest)) = stack.pop() {
        if vertex == to {
            return Some(heaviest);
        }
        for &(next, weight) in &adjacency[vertex] {
            if !seen[next] {
                seen[next] = true;
                stack.push((next, heaviest.max(weight)));
            }
        }
    }
    None
}

/// Candidate edges: upper triangle, present and nonzero, in scan order.
fn candidate_edges(matrix: &AdjacencyMatrix) -> Vec<Edge> {
    let n = matrix.order();
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            if let Some(weight) = matrix.edge_weight(u, v).filter(|&w| w != 0.0) {
                edges.push(Edge { u, v, weight });
            }
        }
    }
    edges
}

/// Kruskal's algorithm with a full decision log.
///
/// Candidate edges are stably sorted by weight, so equal weights keep
/// their upper-triangle scan order. Processing stops after `n - 1`
/// acceptances or when the candidates run out.
///
/// # Examples
/// ```
/// use graphstep::graph::{spanning_tree, AdjacencyMatrix};
///
/// let m = AdjacencyMatrix::from_weights(&[
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ])
/// .unwrap();
///
/// let result = spanning_tree(&m);
/// assert_eq!(result.total_cost, 3.0);
/// assert_eq!(result.mst_edges.len(), 2);
/// assert!(!result.has_multiple_mst);
/// ```
#[must_use]
pub fn spanning_tree(matrix: &AdjacencyMatrix) -> SpanningTreeResult {
    let n = matrix.order();
    let mut sorted_edges = candidate_edges(matrix);
    sorted_edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let target = n.saturating_sub(1);
    let mut uf = UnionFind::new(n);
    let mut mst_edges = Vec::with_capacity(target);
    let mut iterations = Vec::new();
    let mut total_cost = 0.0;

    for (i, &edge) in sorted_edges.iter().enumerate() {
        if mst_edges.len() >= target {
            break;
        }

        let decision = if uf.union(edge.u, edge.v) {
            mst_edges.push(edge);
            total_cost += edge.weight;
            EdgeDecision::Accepted
        } else {
            EdgeDecision::FormsCycle
        };
        debug!("kruskal: {decision:?} {edge} weight {}", edge.weight);

        iterations.push(KruskalIteration {
            iteration: i + 1,
            edge,
            decision,
            cost_so_far: total_cost,
        });
    }

    let has_multiple_mst = sorted_edges.windows(2).any(|pair| pair[0].weight == pair[1].weight);

    SpanningTreeResult {
        order: n,
        sorted_edges,
        mst_edges,
        total_cost,
        iterations,
        has_multiple_mst,
    }
}
