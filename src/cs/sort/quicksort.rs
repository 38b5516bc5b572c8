/// Sorts `arr[low..=high]` ascending in place by recursive partitioning.
///
/// The pivot is always the window's last element, so the expected O(n log n)
/// running time becomes O(n²), with O(n) recursion depth, on already-sorted
/// or adversarial input. Callers sorting very large sequences should be
/// aware of the stack depth.
///
/// Elements outside `[low, high]` are never touched. A window of size 0 or 1
/// (`low >= high`) is already sorted and left as-is.
///
/// # Examples
/// ```
/// use quickrank::sort::quicksort;
///
/// let mut arr = [3, 6, 2, 7, 1, 8, 5, 4];
/// quicksort(&mut arr, 0, 7);
/// assert_eq!(arr, [1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
pub fn quicksort<T: Ord + Clone>(arr: &mut [T], low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pi = partition(arr, low, high);
    if pi > low {
        quicksort(arr, low, pi - 1);
    }
    quicksort(arr, pi + 1, high);
}

/// Lomuto partition of `arr[low..=high]` around the element at `high`,
/// using a strict `<` comparison so equal elements stay right of the pivot.
fn partition<T: Ord + Clone>(arr: &mut [T], low: usize, high: usize) -> usize {
    let pivot = arr[high].clone();
    let mut i = low;
    for j in low..high {
        if arr[j] < pivot {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, high);
    i
}
