use tracing::debug;

use crate::error::{Result, SortError};

pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    insertion_sort_by(v, T::lt);
}

/// Stable shift-insert sort.
///
/// Each element is held out, every preceding element strictly greater than
/// it moves one slot right, and the held element drops into the gap. Ties
/// never move, which keeps equal elements in input order.
pub fn insertion_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for p in 1..len {
        let mut j = p;
        while j > 0 && is_less(&v[p], &v[j - 1]) {
            j -= 1;
        }
        if j != p {
            v[j..=p].rotate_right(1);
        }
    }
}

/// Sorts the inclusive subrange `v[left..=right]`.
///
/// `left > right` names an empty range and leaves `v` untouched.
pub fn insertion_sort_range_by<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    is_less: F,
) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    if left > right {
        return Ok(());
    }
    if right >= v.len() {
        debug!(left, right, len = v.len(), "insertion sort range out of bounds");
        return Err(SortError::RangeOutOfBounds {
            left,
            right,
            len: v.len(),
        });
    }

    insertion_sort_by(&mut v[left..=right], is_less);
    Ok(())
}
