mod bucket_sort;
mod insertion_sort;
mod merge_sort;
mod quick_sort;

pub use bucket_sort::*;
pub use insertion_sort::*;
pub use merge_sort::*;
pub use quick_sort::*;
