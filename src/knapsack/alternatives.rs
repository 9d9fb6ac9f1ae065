//! Exhaustive enumeration of feasible subsets.

use super::{AlternativeExclusion, Item, Selection};

/// Visit every non-empty subset within `capacity`, include-first, with its
/// total value.
///
/// Positions inside each subset are ascending. Branches that already
/// exceed the capacity are cut, which does not change the order of the
/// subsets that remain.
fn for_each_feasible<F: FnMut(&[usize], u64)>(capacity: usize, items: &[Item], visit: &mut F) {
    fn walk<F: FnMut(&[usize], u64)>(
        index: usize,
        weight: usize,
        value: u64,
        capacity: usize,
        items: &[Item],
        current: &mut Vec<usize>,
        visit: &mut F,
    ) {
        if index == items.len() {
            if !current.is_empty() {
                visit(current.as_slice(), value);
            }
            return;
        }

        let item = &items[index];
        if let Some(with) = weight.checked_add(item.weight).filter(|&w| w <= capacity) {
            current.push(index);
            walk(
                index + 1,
                with,
                value.saturating_add(item.value),
                capacity,
                items,
                current,
                visit,
            );
            current.pop();
        }
        walk(index + 1, weight, value, capacity, items, current, visit);
    }

    walk(0, 0, 0, capacity, items, &mut Vec::new(), visit);
}

fn is_excluded(subset: &[usize], optimal: &Selection, exclusion: AlternativeExclusion) -> bool {
    match exclusion {
        AlternativeExclusion::FirstItem => optimal
            .indices
            .first()
            .is_some_and(|first| subset.contains(first)),
        // Both sides hold distinct positions
        AlternativeExclusion::ExactSet => {
            subset.len() == optimal.indices.len()
                && optimal.indices.iter().all(|i| subset.contains(i))
        }
    }
}

/// Best `limit` feasible subsets other than `optimal`, by descending value.
///
/// Equal values keep enumeration order. Only the current best `limit`
/// subsets are held during the walk.
pub(super) fn ranked(
    capacity: usize,
    items: &[Item],
    optimal: &Selection,
    exclusion: AlternativeExclusion,
    limit: usize,
) -> Vec<Selection> {
    if limit == 0 {
        return Vec::new();
    }

    // Sorted by descending value, ties in enumeration order
    let mut best: Vec<(u64, Vec<usize>)> = Vec::with_capacity(limit + 1);
    for_each_feasible(capacity, items, &mut |subset, value| {
        if is_excluded(subset, optimal, exclusion) {
            return;
        }
        let slot = best.partition_point(|(kept, _)| *kept >= value);
        if slot < limit {
            best.insert(slot, (value, subset.to_vec()));
            best.truncate(limit);
        }
    });

    best.into_iter()
        .map(|(_, indices)| Selection::from_indices(items, indices))
        .collect()
}
