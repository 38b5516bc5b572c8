pub mod randomized_bst;
pub mod skip_list;

pub use randomized_bst::RandomizedBst;
pub use skip_list::SkipList;
