//! 0/1 knapsack with ranked alternatives.
//!
//! [`optimal_selection`] runs the classic dynamic program and backtracks one
//! optimal subset. [`KnapsackSolver::solve`] adds the best few other
//! feasible subsets, found by exhaustive enumeration. Enumeration is
//! exponential, so the solver refuses inputs above a configurable item
//! ceiling.
//!
//! # Examples
//!
//! ```
//! use graphstep::knapsack::{Item, KnapsackSolver};
//!
//! let items = vec![
//!     Item::new("A", 1, 1),
//!     Item::new("B", 3, 4),
//!     Item::new("C", 4, 5),
//!     Item::new("D", 5, 7),
//! ];
//!
//! let result = KnapsackSolver::new().solve(7, &items).unwrap();
//! assert_eq!(result.optimal.total_value, 9);
//! assert_eq!(result.optimal.total_weight, 7);
//! assert!(result.alternatives.len() <= 3);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{GraphstepError, Result};

mod alternatives;
mod dp;

pub use dp::{optimal_selection, MAX_TABLE_CELLS};

/// Default ceiling on the number of items accepted by [`KnapsackSolver`].
pub const DEFAULT_MAX_ITEMS: usize = 20;

/// Default number of alternatives reported.
pub const DEFAULT_MAX_ALTERNATIVES: usize = 3;

/// A candidate item. Identity is its position in the input list; names
/// may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Display name
    pub name: String,
    /// Weight consumed from the capacity
    pub weight: usize,
    /// Value gained when selected
    pub value: u64,
}

impl Item {
    /// Create an item.
    #[must_use]
    pub fn new(name: impl Into<String>, weight: usize, value: u64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }
}

/// A subset of the input items with its totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Positions in the input list
    pub indices: Vec<usize>,
    /// The selected items, parallel to `indices`
    pub items: Vec<Item>,
    /// Sum of weights
    pub total_weight: usize,
    /// Sum of values
    pub total_value: u64,
}

impl Selection {
    /// Build a selection from input positions, in the order given.
    ///
    /// Positions outside `items` are ignored. Totals saturate instead of
    /// overflowing.
    #[must_use]
    pub fn from_indices(items: &[Item], indices: Vec<usize>) -> Self {
        let indices: Vec<usize> = indices.into_iter().filter(|&i| i < items.len()).collect();
        let picked: Vec<Item> = indices.iter().map(|&i| items[i].clone()).collect();
        Self {
            total_weight: picked
                .iter()
                .fold(0usize, |acc, item| acc.saturating_add(item.weight)),
            total_value: picked
                .iter()
                .fold(0u64, |acc, item| acc.saturating_add(item.value)),
            indices,
            items: picked,
        }
    }

    /// Whether nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Item names joined with `", "`.
    #[must_use]
    pub fn names(&self) -> String {
        self.items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Same positions regardless of order.
    #[must_use]
    pub fn same_items(&self, other: &Selection) -> bool {
        let mut mine = self.indices.clone();
        let mut theirs = other.indices.clone();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }
}

/// Result of [`KnapsackSolver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KnapsackResult {
    /// One optimal subset, in backtracking order (highest position first)
    pub optimal: Selection,
    /// Other feasible subsets, best value first
    pub alternatives: Vec<Selection>,
}

/// Which enumerated subsets count as "the optimal one" and are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlternativeExclusion {
    /// Skip every subset containing the first item of the optimal
    /// selection. Cheap, but also hides distinct subsets that share it.
    #[default]
    FirstItem,
    /// Skip only the subset with exactly the optimal positions.
    ExactSet,
}

/// Knapsack solver configuration.
///
/// # Examples
/// ```
/// use graphstep::knapsack::{AlternativeExclusion, Item, KnapsackSolver};
///
/// let solver = KnapsackSolver::new()
///     .with_max_items(10)
///     .with_max_alternatives(2)
///     .with_exclusion(AlternativeExclusion::ExactSet);
///
/// let items = vec![Item::new("A", 2, 3), Item::new("B", 2, 3)];
/// let result = solver.solve(2, &items).unwrap();
/// assert_eq!(result.optimal.total_value, 3);
/// // The other single item ties the optimum
/// assert_eq!(result.alternatives[0].total_value, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackSolver {
    max_items: usize,
    max_alternatives: usize,
    exclusion: AlternativeExclusion,
}

impl Default for KnapsackSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl KnapsackSolver {
    /// Solver with the default ceiling, alternative count and exclusion.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
            exclusion: AlternativeExclusion::default(),
        }
    }

    /// Set the item-count ceiling.
    #[must_use]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Set how many alternatives to report.
    #[must_use]
    pub fn with_max_alternatives(mut self, max_alternatives: usize) -> Self {
        self.max_alternatives = max_alternatives;
        self
    }

    /// Set the exclusion rule for alternatives.
    #[must_use]
    pub fn with_exclusion(mut self, exclusion: AlternativeExclusion) -> Self {
        self.exclusion = exclusion;
        self
    }

    /// Item-count ceiling.
    #[must_use]
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Number of alternatives reported.
    #[must_use]
    pub fn max_alternatives(&self) -> usize {
        self.max_alternatives
    }

    /// Exclusion rule for alternatives.
    #[must_use]
    pub fn exclusion(&self) -> AlternativeExclusion {
        self.exclusion
    }

    /// Optimal subset plus up to `max_alternatives` other feasible subsets.
    ///
    /// Capacity 0 or an empty item list returns an empty result.
    ///
    /// # Errors
    /// Returns [`GraphstepError::InputTooLarge`] when there are more items
    /// than the configured ceiling, plus the errors of [`optimal_selection`].
    pub fn solve(&self, capacity: usize, items: &[Item]) -> Result<KnapsackResult> {
        if items.len() > self.max_items {
            return Err(GraphstepError::InputTooLarge {
                what: "items",
                limit: self.max_items,
                actual: items.len(),
            });
        }
        if capacity == 0 || items.is_empty() {
            return Ok(KnapsackResult::default());
        }

        let optimal = optimal_selection(capacity, items)?;
        let alternatives = alternatives::ranked(
            capacity,
            items,
            &optimal,
            self.exclusion,
            self.max_alternatives,
        );

        debug!(
            "knapsack: capacity {capacity}, {} items, optimal value {} ({}), {} alternatives",
            items.len(),
            optimal.total_value,
            optimal.names(),
            alternatives.len()
        );

        Ok(KnapsackResult {
            optimal,
            alternatives,
        })
    }
}
