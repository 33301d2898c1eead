pub mod common;
pub mod heap_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_select;
pub mod quick_sort;
pub mod shell_sort;
pub mod three_way_partition_sort;
