use crate::SortContext;

use super::common;

pub fn merge_sort<T: Ord + Clone>(v: &mut [T]) {
    merge_sort_by(v, T::lt);
}

pub fn merge_sort_by<T, F>(v: &mut [T], is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut ctx = SortContext::default();
    merge_sort_with_ctx_by(v, &mut ctx, is_less);
}

/// Top-down merge sort reusing the scratch buffer held by `ctx`.
///
/// The scratch starts as a copy of `v` and the two buffers trade roles on
/// every level, so each merge writes straight into the buffer its parent
/// reads from and nothing is copied back. Ties take the left run first.
pub fn merge_sort_with_ctx_by<T, F>(v: &mut [T], ctx: &mut SortContext<T>, mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    if common::is_sorted_by(v, &mut is_less) {
        return;
    }

    let buf = ctx.load_scratch(v);
    merge_sort_recursive(buf, v, 0, len, &mut is_less);
}

/// Sorts `src[left..right]` into `dst[left..right]`. Both buffers hold the
/// same elements in that range on entry.
fn merge_sort_recursive<T, F>(
    src: &mut [T],
    dst: &mut [T],
    left: usize,
    right: usize,
    is_less: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = right - left;
    if len < 2 {
        return;
    }

    let mid = left + (len >> 1);

    merge_sort_recursive(dst, src, left, mid, is_less);
    merge_sort_recursive(dst, src, mid, right, is_less);

    if !is_less(&src[mid], &src[mid - 1]) {
        dst[left..right].clone_from_slice(&src[left..right]);
        return;
    }

    merge(src, dst, left, mid, right, is_less);
}

#[inline]
fn merge<T, F>(src: &[T], dst: &mut [T], left: usize, mid: usize, right: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut i = left;
    let mut j = mid;
    let mut k = left;

    while i < mid && j < right {
        if is_less(&src[j], &src[i]) {
            dst[k].clone_from(&src[j]);
            j += 1;
        } else {
            dst[k].clone_from(&src[i]);
            i += 1;
        }
        k += 1;
    }

    let rest = mid - i;
    dst[k..k + rest].clone_from_slice(&src[i..mid]);
    k += rest;
    dst[k..right].clone_from_slice(&src[j..right]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_reused_across_calls() {
        let mut ctx = SortContext::default();

        let mut a = vec![5, 1, 4, 2, 3];
        merge_sort_with_ctx_by(&mut a, &mut ctx, |x, y| x < y);
        assert_eq!(a, [1, 2, 3, 4, 5]);

        let mut b = vec![9, 8, 7];
        merge_sort_with_ctx_by(&mut b, &mut ctx, |x, y| x < y);
        assert_eq!(b, [7, 8, 9]);
        assert!(ctx.scratch_capacity() >= 5);
    }

    #[test]
    fn merges_ties_from_the_left_run() {
        let mut v = vec![(1, 0), (0, 1), (1, 2), (0, 3), (1, 4), (0, 5), (1, 6)];
        merge_sort_by(&mut v, |a, b| a.0 < b.0);
        assert_eq!(
            v,
            [(0, 1), (0, 3), (0, 5), (1, 0), (1, 2), (1, 4), (1, 6)]
        );
    }
}
