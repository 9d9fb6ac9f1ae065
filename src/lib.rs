//! Graphstep: classic graph and knapsack algorithms with step traces.
//!
//! Every algorithm returns its final answer together with the
//! intermediate state an instructor would draw on the board: the pivot and
//! distance vector of each Dijkstra iteration, the distance and path
//! matrices after each Floyd-Warshall pivot, the accept/reject log of
//! Kruskal, and a ranked list of near-optimal knapsack fillings.
//!
//! # Quick Start
//!
//! ```
//! use graphstep::prelude::*;
//!
//! // Triangle A-B (1), B-C (2), C-A (4)
//! let m = AdjacencyMatrix::from_weights(&[
//!     vec![0.0, 1.0, 4.0],
//!     vec![1.0, 0.0, 2.0],
//!     vec![4.0, 2.0, 0.0],
//! ]).unwrap();
//!
//! let dijkstra = shortest_path(&m, 0, 2).unwrap();
//! assert_eq!(dijkstra.min_path, Some(vec![0, 1, 2]));
//!
//! let floyd = all_pairs_path(&m);
//! assert_eq!(floyd.path(2, 0).unwrap(), Some(vec![2, 1, 0]));
//!
//! let mst = spanning_tree(&m);
//! assert_eq!(mst.total_cost, 3.0);
//! ```
//!
//! # Modules
//!
//! - [`graph`]: Adjacency matrix, Dijkstra, Floyd-Warshall, Kruskal,
//!   structural analysis and graph operations
//! - [`knapsack`]: 0/1 knapsack with ranked alternatives
//! - [`error`]: Error type shared by all modules

pub mod error;
pub mod graph;
pub mod knapsack;
pub mod prelude;

pub use error::{GraphstepError, Result};
pub use graph::AdjacencyMatrix;
