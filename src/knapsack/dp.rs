//! Dynamic-programming table and backtracking.

use log::trace;

use super::{Item, Selection};
use crate::error::{GraphstepError, Result};

/// Largest DP table [`optimal_selection`] will allocate, in cells.
pub const MAX_TABLE_CELLS: usize = 1 << 24;

/// Best value table: `table[i][w]` uses the first `i` items within weight `w`.
///
/// Callers guarantee that the sum of all item values fits in `u64`, so no
/// entry can overflow.
fn value_table(capacity: usize, items: &[Item]) -> Vec<Vec<u64>> {
    let mut table = vec![vec![0u64; capacity + 1]; items.len() + 1];

    for (i, item) in items.iter().enumerate() {
        for w in 0..=capacity {
            let skip = table[i][w];
            table[i + 1][w] = if item.weight <= w {
                skip.max(table[i][w - item.weight] + item.value)
            } else {
                skip
            };
        }
    }
    table
}

/// Capacity actually worth tabulating: never more than all items together.
fn table_capacity(capacity: usize, items: &[Item]) -> usize {
    let total_weight = items
        .iter()
        .fold(0usize, |acc, item| acc.saturating_add(item.weight));
    capacity.min(total_weight)
}

fn check_inputs(capacity: usize, items: &[Item]) -> Result<()> {
    if items
        .iter()
        .try_fold(0u64, |acc, item| acc.checked_add(item.value))
        .is_none()
    {
        return Err(GraphstepError::InvalidParameter {
            param: "items".to_string(),
            value: format!("{} values", items.len()),
            constraint: format!("a total value of at most {}", u64::MAX),
        });
    }

    let cells = capacity
        .checked_add(1)
        .and_then(|columns| columns.checked_mul(items.len() + 1));
    match cells {
        Some(cells) if cells <= MAX_TABLE_CELLS => Ok(()),
        _ => Err(GraphstepError::InputTooLarge {
            what: "table cells",
            limit: MAX_TABLE_CELLS,
            actual: cells.unwrap_or(usize::MAX),
        }),
    }
}

/// One optimal subset by dynamic programming.
///
/// Backtracks from the last item, taking item `i` whenever the table value
/// changes between rows `i` and `i + 1`; among equally good subsets this
/// prefers later items. The returned positions are in that backtracking
/// order. Zero-value items are never taken. Capacity 0 returns an empty
/// selection.
///
/// # Errors
/// Returns [`GraphstepError::InvalidParameter`] when the item values sum
/// past `u64::MAX`, and [`GraphstepError::InputTooLarge`] when the table
/// would exceed [`MAX_TABLE_CELLS`]. Capacity beyond the total item weight
/// does not count towards the table size.
///
/// # Examples
/// ```
/// use graphstep::knapsack::{optimal_selection, Item};
///
/// let items = vec![Item::new("A", 2, 3), Item::new("B", 3, 4), Item::new("C", 4, 5)];
/// let best = optimal_selection(5, &items).unwrap();
/// assert_eq!(best.indices, vec![1, 0]);
/// assert_eq!(best.total_value, 7);
/// ```
pub fn optimal_selection(capacity: usize, items: &[Item]) -> Result<Selection> {
    if capacity == 0 || items.is_empty() {
        return Ok(Selection::default());
    }

    let capacity = table_capacity(capacity, items);
    check_inputs(capacity, items)?;

    let table = value_table(capacity, items);
    let mut remaining = table[items.len()][capacity];
    let mut w = capacity;
    let mut chosen = Vec::new();

    for i in (0..items.len()).rev() {
        if remaining == 0 {
            break;
        }
        if table[i + 1][w] != table[i][w] {
            trace!("knapsack: take {} at weight {w}", items[i].name);
            chosen.push(i);
            remaining -= items[i].value;
            w -= items[i].weight;
        }
    }

    Ok(Selection::from_indices(items, chosen))
}
