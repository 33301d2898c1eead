use tracing::debug;

use crate::PivotRule;
use crate::error::{Result, SortError};

#[inline]
pub fn is_sorted_by<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}

/// Orders `v[0]`, `v[mid]` and `v[last]` and hides their median at
/// `v[last - 1]`.
///
/// Afterwards `v[0]` is not greater than the pivot and `v[last]` is not less
/// than it. Requires `v.len() >= 3`.
pub fn median3<T, F>(v: &mut [T], is_less: &mut F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(v.len() >= 3);

    let last = v.len() - 1;
    let mid = last / 2;

    if is_less(&v[mid], &v[0]) {
        v.swap(0, mid);
    }
    if is_less(&v[last], &v[0]) {
        v.swap(0, last);
    }
    if is_less(&v[last], &v[mid]) {
        v.swap(mid, last);
    }

    // A strict weak ordering cannot leave the samples out of order here.
    if is_less(&v[mid], &v[0]) || is_less(&v[last], &v[mid]) {
        debug!(len = v.len(), "median-of-three samples out of order");
        return Err(SortError::OrderingViolation(
            "median-of-three samples are out of order after exchange",
        ));
    }

    v.swap(mid, last - 1);
    Ok(())
}

/// Two-cursor partition around the pivot stored in the last slot of `v`.
///
/// Only `v[lo..last]` is scanned; slots before `lo` are already known to be
/// on the small side. Both cursors are bounded, so a broken comparator can at
/// worst produce a wrong permutation. Returns the pivot's final index.
pub fn partition<T, F>(v: &mut [T], lo: usize, is_less: &mut F) -> Result<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(!v.is_empty() && lo < v.len());

    let last = v.len() - 1;
    if is_less(&v[last], &v[last]) {
        debug!(len = v.len(), "pivot compares less than itself");
        return Err(SortError::OrderingViolation(
            "pivot compares less than itself",
        ));
    }

    let mut i = lo;
    let mut j = last;
    loop {
        while i < last && is_less(&v[i], &v[last]) {
            i += 1;
        }
        while j > lo && is_less(&v[last], &v[j - 1]) {
            j -= 1;
        }

        // `v[..i]` is not greater than the pivot and `v[j..last]` is not less.
        if i + 1 < j {
            v.swap(i, j - 1);
            i += 1;
            j -= 1;
        } else {
            break;
        }
    }

    v.swap(i, last);
    Ok(i)
}

/// Picks a pivot by `rule`, partitions `v` around it and returns the pivot's
/// final index. Requires `v.len() >= 3`.
pub fn partition_with_rule<T, F>(v: &mut [T], rule: PivotRule, is_less: &mut F) -> Result<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let last = v.len() - 1;
    match rule {
        PivotRule::MedianOfThree => {
            median3(v, is_less)?;
            partition(&mut v[..last], 1, is_less)
        }
        PivotRule::Middle => {
            v.swap(v.len() / 2, last);
            partition(v, 0, is_less)
        }
        PivotRule::First => {
            v.swap(0, last);
            partition(v, 0, is_less)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn median3_hides_pivot() {
        let mut v = [9, 4, 7, 1, 5];
        median3(&mut v, &mut lt).unwrap();
        // samples 9, 7, 5 -> 5 7 9 with 7 hidden before the last slot
        assert_eq!(v[0], 5);
        assert_eq!(v[3], 7);
        assert_eq!(v[4], 9);
    }

    #[test]
    fn partition_places_pivot() {
        for rule in [PivotRule::MedianOfThree, PivotRule::Middle, PivotRule::First] {
            let mut v = vec![8, 3, 5, 3, 9, 1, 5, 7, 2, 6, 5, 0];
            let p = partition_with_rule(&mut v, rule, &mut lt).unwrap();
            assert!(v[..p].iter().all(|x| *x <= v[p]), "rule={rule:?} v={v:?}");
            assert!(v[p + 1..].iter().all(|x| *x >= v[p]), "rule={rule:?} v={v:?}");
        }
    }

    #[test]
    fn partition_all_equal_splits_in_the_middle() {
        let mut v = vec![4; 21];
        let p = partition_with_rule(&mut v, PivotRule::MedianOfThree, &mut lt).unwrap();
        assert!(p > 5 && p < 15, "p={p}");
    }

    #[test]
    fn partition_rejects_reflexive_comparator() {
        let mut v = vec![3, 1, 2, 5, 4];
        let err = partition_with_rule(&mut v, PivotRule::First, &mut |a: &i32, b: &i32| a <= b)
            .unwrap_err();
        assert!(matches!(err, SortError::OrderingViolation(_)));
    }

    #[test]
    fn sortedness_check() {
        assert!(is_sorted_by::<i32, _>(&[], lt));
        assert!(is_sorted_by(&[1, 1, 2], lt));
        assert!(!is_sorted_by(&[2, 1], lt));
    }
}
