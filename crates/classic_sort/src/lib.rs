//! Classical comparison sorts over slices, parameterized by a strict weak
//! ordering `is_less(a, b)`.
//!
//! Every `*_by` routine takes the comparator; the plain names sort by `Ord`.

mod algorithms;
mod error;

use tracing::trace;

pub use algorithms::common::is_sorted_by;
pub use algorithms::heap_sort::{heap_sort, heap_sort_by};
pub use algorithms::insertion_sort::{insertion_sort, insertion_sort_by, insertion_sort_range_by};
pub use algorithms::merge_sort::{merge_sort, merge_sort_by, merge_sort_with_ctx_by};
pub use algorithms::quick_select::{quick_select, quick_select_by};
pub use algorithms::quick_sort::{
    quick_sort, quick_sort_by, quick_sort_first_pivot_by, quick_sort_middle_pivot_by,
    quick_sort_with_pivot_by,
};
pub use algorithms::shell_sort::{shell_sort, shell_sort_by};
pub use algorithms::three_way_partition_sort::{three_way_sort, three_way_sort_by};
pub use error::{Result, SortError};

/// How the partition-based routines pick their pivot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PivotRule {
    /// Median of the first, middle and last elements.
    MedianOfThree,
    /// Element at `len / 2`.
    Middle,
    /// Element at index 0.
    First,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    ShellSort,
    HeapSort,
    MergeSort,
    QuickSortMedian3,
    QuickSortMiddlePivot,
    QuickSortFirstPivot,
    ThreeWayPartitionSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 8] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::ShellSort,
    SortAlgorithm::HeapSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::QuickSortMedian3,
    SortAlgorithm::QuickSortMiddlePivot,
    SortAlgorithm::QuickSortFirstPivot,
    SortAlgorithm::ThreeWayPartitionSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::ShellSort => "shell_sort",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::QuickSortMedian3 => "quick_sort_median3",
        SortAlgorithm::QuickSortMiddlePivot => "quick_sort_middle_pivot",
        SortAlgorithm::QuickSortFirstPivot => "quick_sort_first_pivot",
        SortAlgorithm::ThreeWayPartitionSort => "three_way_partition_sort",
    }
}

/// Whether `algo` keeps elements that compare equal in input order.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(algo, SortAlgorithm::InsertionSort | SortAlgorithm::MergeSort)
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub quick_sort_cutoff: usize,
    pub quick_select_cutoff: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    quick_sort_cutoff: 10,
    quick_select_cutoff: 10,
};

// median-of-three needs three elements to sample
const _: () = assert!(
    TUNED_PARAMS.quick_sort_cutoff >= 3 && TUNED_PARAMS.quick_select_cutoff >= 3
);

/// Scratch memory for merge sort, reusable across calls.
#[derive(Clone, Debug)]
pub struct SortContext<T> {
    scratch: Vec<T>,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }
}

impl<T> SortContext<T> {
    pub fn scratch_capacity(&self) -> usize {
        self.scratch.capacity()
    }
}

impl<T: Clone> SortContext<T> {
    #[inline]
    pub(crate) fn load_scratch(&mut self, v: &[T]) -> &mut [T] {
        self.scratch.clear();
        self.scratch.extend_from_slice(v);
        &mut self.scratch
    }
}

pub fn sort<T: Ord + Clone>(algo: SortAlgorithm, v: &mut [T]) -> Result<()> {
    sort_by(algo, v, T::lt)
}

pub fn sort_by<T, F>(algo: SortAlgorithm, v: &mut [T], is_less: F) -> Result<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut ctx = SortContext::default();
    sort_with_ctx_by(algo, v, &mut ctx, is_less)
}

pub fn sort_with_ctx_by<T, F>(
    algo: SortAlgorithm,
    v: &mut [T],
    ctx: &mut SortContext<T>,
    is_less: F,
) -> Result<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    trace!(algorithm = algorithm_name(algo), len = v.len(), "sort");

    match algo {
        SortAlgorithm::InsertionSort => insertion_sort_by(v, is_less),
        SortAlgorithm::ShellSort => shell_sort_by(v, is_less),
        SortAlgorithm::HeapSort => heap_sort_by(v, is_less),
        SortAlgorithm::MergeSort => merge_sort_with_ctx_by(v, ctx, is_less),
        SortAlgorithm::QuickSortMedian3 => quick_sort_by(v, is_less)?,
        SortAlgorithm::QuickSortMiddlePivot => quick_sort_middle_pivot_by(v, is_less)?,
        SortAlgorithm::QuickSortFirstPivot => quick_sort_first_pivot_by(v, is_less)?,
        SortAlgorithm::ThreeWayPartitionSort => three_way_sort_by(v, is_less)?,
    }
    Ok(())
}
