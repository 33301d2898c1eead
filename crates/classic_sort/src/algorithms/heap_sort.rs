pub fn heap_sort<T: Ord>(v: &mut [T]) {
    heap_sort_by(v, T::lt);
}

pub fn heap_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // build heap
    let mut start = (len - 2) / 2;
    loop {
        sift_down(v, start, len, &mut is_less);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    // delete max
    let mut end = len - 1;
    while end > 0 {
        v.swap(0, end);
        sift_down(v, 0, end, &mut is_less);
        end -= 1;
    }
}

/// Restores the max-heap property below `root` within `v[..end]`.
#[inline]
fn sift_down<T, F>(v: &mut [T], mut root: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }

        if child + 1 < end && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        if !is_less(&v[root], &v[child]) {
            break;
        }

        v.swap(root, child);
        root = child;
    }
}
