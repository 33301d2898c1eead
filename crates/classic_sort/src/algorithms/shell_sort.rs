pub fn shell_sort<T: Ord>(v: &mut [T]) {
    shell_sort_by(v, T::lt);
}

/// Shell's original halving increments `len / 2, len / 4, ..., 1`.
///
/// A weak gap sequence (quadratic worst case), kept for comparison with the
/// other routines. Not stable.
pub fn shell_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut gap = len / 2;
    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap && is_less(&v[j], &v[j - gap]) {
                v.swap(j, j - gap);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_with_natural_order() {
        let mut v = [12, 34, 54, 2, 3, 8, 1, 0, 34];
        shell_sort(&mut v);
        assert_eq!(v, [0, 1, 2, 3, 8, 12, 34, 34, 54]);
    }

    #[test]
    fn accepts_a_comparator() {
        let mut v = ["pear", "fig", "banana", "kiwi"];
        shell_sort_by(&mut v, |a, b| a.len() < b.len());
        assert_eq!(v.map(str::len), [3, 4, 4, 6]);
    }
}
