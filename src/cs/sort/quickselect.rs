use crate::error::{Result, SelectError};

/// Finds the k-th smallest element (1-based rank) within `arr[low..=high]`
/// by repeatedly partitioning the window around its last element.
///
/// The window is narrowed on each recursion instead of fully sorted, giving
/// O(n) expected time. The pivot is always taken from index `high`, so
/// already-sorted or adversarial input takes O(n²) time.
///
/// Elements inside the window are permuted as a side effect; elements outside
/// it are never touched.
///
/// # Arguments
/// * `arr` - The sequence to select from, mutated in place
/// * `low`, `high` - Inclusive bounds of the window under consideration
/// * `k` - 1-based rank relative to the window (`k = 1` is the minimum)
///
/// # Returns
/// * `Ok(value)` - The element that would sit at position `k` were the window
///   sorted ascending
/// * `Err(SelectError::RankOutOfRange)` - If `k` is 0 or exceeds the window
///   size (an inverted window has size 0, so every rank fails)
///
/// # Panics
/// Panics if `high >= arr.len()` for a non-empty window.
///
/// # Examples
/// ```
/// use quickrank::sort::kth_smallest;
///
/// let mut arr = [5, 3, 8, 4, 2];
/// let third = kth_smallest(&mut arr, 0, 4, 3).unwrap();
/// assert_eq!(third, 4); // sorted: [2, 3, 4, 5, 8]
/// ```
pub fn kth_smallest<T: Ord + Copy>(arr: &mut [T], low: usize, high: usize, k: usize) -> Result<T> {
    let size = if high < low { 0 } else { high - low + 1 };
    if k == 0 || k > size {
        return Err(SelectError::rank_out_of_range(k, size));
    }

    let p = partition(arr, low, high);
    let offset = p - low;
    if offset == k - 1 {
        Ok(arr[p])
    } else if offset > k - 1 {
        kth_smallest(arr, low, p - 1, k)
    } else {
        // offset + 1 elements now sit at or before the pivot; the rank in
        // the right window shrinks by exactly that many.
        kth_smallest(arr, p + 1, high, k - offset - 1)
    }
}

/// Lomuto partition of `arr[low..=high]` around the element at `high`.
/// Elements `<=` the pivot end up left of the returned index, the pivot
/// lands on it, everything greater ends up to its right.
fn partition<T: Ord + Copy>(arr: &mut [T], low: usize, high: usize) -> usize {
    let pivot = arr[high];
    let mut i = low;
    for j in low..high {
        if arr[j] <= pivot {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, high);
    i
}
