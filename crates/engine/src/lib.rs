//! Recursive top-down merge sort over an inclusive index range.

pub mod merge_sort;

pub use merge_sort::{MergeSorter, merge_sort, merge_sort_range};
