use tracing::debug;

use crate::error::{Result, SortError};

pub fn three_way_sort<T: Ord + Clone>(v: &mut [T]) -> Result<()> {
    three_way_sort_by(v, T::lt)
}

/// Bucket quicksort: every element goes to a "smaller", "equal" or "larger"
/// bucket around a copy of the middle element, and only the outer buckets
/// recurse. A run of equal keys is finished in a single pass.
///
/// Works on owned buckets; `v` is only written once the whole sort has
/// succeeded.
pub fn three_way_sort_by<T, F>(v: &mut [T], mut is_less: F) -> Result<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return Ok(());
    }

    let sorted = sort_buckets(v.to_vec(), &mut is_less)?;
    for (slot, item) in v.iter_mut().zip(sorted) {
        *slot = item;
    }
    Ok(())
}

fn sort_buckets<T, F>(items: Vec<T>, is_less: &mut F) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if items.len() < 2 {
        return Ok(items);
    }

    let pivot = items[items.len() / 2].clone();

    let mut smaller = Vec::new();
    let mut same = Vec::new();
    let mut larger = Vec::new();
    for item in items {
        if is_less(&item, &pivot) {
            smaller.push(item);
        } else if is_less(&pivot, &item) {
            larger.push(item);
        } else {
            same.push(item);
        }
    }

    // The pivot's own source element must land in `same`.
    if same.is_empty() {
        debug!(
            smaller = smaller.len(),
            larger = larger.len(),
            "no element classified equal to the pivot"
        );
        return Err(SortError::OrderingViolation(
            "pivot is not equivalent to itself",
        ));
    }

    let mut sorted = sort_buckets(smaller, is_less)?;
    sorted.append(&mut same);
    sorted.append(&mut sort_buckets(larger, is_less)?);
    Ok(sorted)
}
