use tracing::{debug, trace};

use crate::error::{Result, SortError};
use crate::{PivotRule, TUNED_PARAMS};

use super::{common, insertion_sort};

pub fn quick_select<T: Ord>(v: &mut [T], rank: usize) -> Result<&T> {
    quick_select_by(v, rank, T::lt)
}

/// Places the `rank`-th smallest element (1 is the minimum) at
/// `v[rank - 1]` and returns it.
///
/// Everything before that slot is not greater than it and everything after
/// is not less; neither side is sorted. Only the side of each partition that
/// holds the target slot is processed further.
pub fn quick_select_by<T, F>(v: &mut [T], rank: usize, mut is_less: F) -> Result<&T>
where
    F: FnMut(&T, &T) -> bool,
{
    trace!(len = v.len(), rank, "quick select");

    if rank == 0 || rank > v.len() {
        debug!(len = v.len(), rank, "selection rank out of range");
        return Err(SortError::RankOutOfRange {
            rank,
            len: v.len(),
        });
    }

    let target = rank - 1;
    let mut lo = 0;
    let mut hi = v.len();
    loop {
        let window = &mut v[lo..hi];
        if window.len() <= TUNED_PARAMS.quick_select_cutoff {
            insertion_sort::insertion_sort_by(window, &mut is_less);
            break;
        }

        let split =
            lo + common::partition_with_rule(window, PivotRule::MedianOfThree, &mut is_less)?;
        if target < split {
            hi = split;
        } else if target > split {
            lo = split + 1;
        } else {
            break;
        }
    }

    Ok(&v[target])
}
