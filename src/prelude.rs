//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use graphstep::prelude::*;
//! ```

pub use crate::error::{GraphstepError, Result};
pub use crate::graph::{
    all_pairs_path, all_sources_distances, shortest_path, spanning_tree, AdjacencyMatrix,
    AllPairsResult, GraphAnalysis, ShortestPathResult, SpanningTreeResult,
};
pub use crate::knapsack::{AlternativeExclusion, Item, KnapsackResult, KnapsackSolver};
