pub mod quickselect;
pub mod quicksort;

pub use quickselect::kth_smallest;
pub use quicksort::quicksort;
