use crate::error::Result;
use crate::{PivotRule, TUNED_PARAMS};

use super::{common, insertion_sort};

pub fn quick_sort<T: Ord>(v: &mut [T]) -> Result<()> {
    quick_sort_by(v, T::lt)
}

/// Median-of-three quicksort with an insertion sort cutoff.
pub fn quick_sort_by<T, F>(v: &mut [T], is_less: F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    quick_sort_with_pivot_by(v, PivotRule::MedianOfThree, is_less)
}

pub fn quick_sort_middle_pivot_by<T, F>(v: &mut [T], is_less: F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    quick_sort_with_pivot_by(v, PivotRule::Middle, is_less)
}

/// Degrades to quadratic time on sorted and reverse-sorted input.
pub fn quick_sort_first_pivot_by<T, F>(v: &mut [T], is_less: F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    quick_sort_with_pivot_by(v, PivotRule::First, is_less)
}

/// Quicksort choosing every pivot by `rule`.
///
/// Ranges of at most `TUNED_PARAMS.quick_sort_cutoff` elements are finished
/// by insertion sort. The smaller side of each partition is sorted
/// recursively and the larger side in the loop, which keeps the stack
/// logarithmic even when the pivots are poor.
pub fn quick_sort_with_pivot_by<T, F>(v: &mut [T], rule: PivotRule, mut is_less: F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return Ok(());
    }
    quick_sort_recursive(v, rule, &mut is_less)
}

fn quick_sort_recursive<T, F>(mut v: &mut [T], rule: PivotRule, is_less: &mut F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > TUNED_PARAMS.quick_sort_cutoff {
        let split = common::partition_with_rule(v, rule, is_less)?;

        let (left, rest) = v.split_at_mut(split);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort_recursive(left, rule, is_less)?;
            v = right;
        } else {
            quick_sort_recursive(right, rule, is_less)?;
            v = left;
        }
    }

    insertion_sort::insertion_sort_by(v, is_less);
    Ok(())
}
