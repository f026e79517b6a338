/// Stable top-down merge sorter.
///
/// Holds the scratch buffer used by the merge step so that one top-level
/// call allocates at most once. The buffer is emptied after every call, the
/// sorter never keeps values from a previous input.
#[derive(Debug)]
pub struct MergeSorter<T> {
    scratch: Vec<T>,
}

impl<T> Default for MergeSorter<T> {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }
}

impl<T: Ord + Clone> MergeSorter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the scratch buffer. A merge needs at most half of the
    /// sorted range (rounded up).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scratch: Vec::with_capacity(capacity),
        }
    }

    /// Sorts the whole slice. Empty slices are left alone.
    pub fn sort(&mut self, items: &mut [T]) {
        if let Some(high) = items.len().checked_sub(1) {
            self.sort_range(items, 0, high);
        }
    }

    /// Sorts `items[low..=high]` in place into non-decreasing order.
    ///
    /// Equal elements keep their relative order. Elements outside the range
    /// are not touched.
    ///
    /// # Panics
    ///
    /// Panics if `low > high` or `high >= items.len()`.
    pub fn sort_range(&mut self, items: &mut [T], low: usize, high: usize) {
        assert!(low <= high, "empty sort range: low {low} > high {high}");
        assert!(
            high < items.len(),
            "sort range end {high} out of bounds for length {}",
            items.len()
        );

        self.split(items, low, high);
        self.scratch.clear();
    }

    fn split(&mut self, items: &mut [T], low: usize, high: usize) {
        if low == high {
            return;
        }

        let mid = low + (high - low) / 2;
        self.split(items, low, mid);
        self.split(items, mid + 1, high);
        self.merge(items, low, mid, high);
    }

    /// Merges the sorted runs `[low, mid]` and `[mid + 1, high]`.
    ///
    /// The left run is copied out; right elements are swapped down into
    /// place. A right element is taken only while it is strictly less than
    /// the current left element, so ties resolve to the left run.
    fn merge(&mut self, items: &mut [T], low: usize, mid: usize, high: usize) {
        self.scratch.clear();
        self.scratch.extend_from_slice(&items[low..=mid]);

        let mut right = mid + 1;
        let mut write = low;

        // Invariant: write < right while left elements remain, and every
        // slot in [write, right) holds a value that was already copied out.
        for left in &self.scratch {
            while right <= high && items[right] < *left {
                items.swap(write, right);
                right += 1;
                write += 1;
            }
            items[write].clone_from(left);
            write += 1;
        }

        // Right elements not consumed above already sit in [right, high].
        debug_assert_eq!(write, right);
    }
}

/// Sorts the whole slice with a one-shot [`MergeSorter`].
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    MergeSorter::new().sort(items);
}

/// Sorts `items[low..=high]` with a one-shot [`MergeSorter`].
///
/// # Panics
///
/// Panics if `low > high` or `high >= items.len()`.
pub fn merge_sort_range<T: Ord + Clone>(items: &mut [T], low: usize, high: usize) {
    MergeSorter::new().sort_range(items, low, high);
}
