//! # seqsort
//!
//! seqsort is a small set of iterative, generic sorting primitives for mutable sequences:
//!
//!  * `merge_sort`: stable, bottom-up, double-buffered. `O(n log n)`, `O(n)` scratch.
//!  * `quick_sort`: unstable, in-place, driven by an explicit stack of ranges rather than
//!    recursion. `O(n log n)` on average, `O(n²)` on sorted or heavily duplicated input.
//!  * `insertion_sort`: binary-search insertion of new elements into an already sorted
//!    destination.
//!  * `bucket_sort`: counting sort for values known to lie in a small, inclusive range.
//!  * `is_sorted`: the `O(n)` check the others are tested against.
//!
//! Elements only need `PartialOrd`. The caller is responsible for that ordering being a strict
//! weak ordering; types such as `f64` sort fine as long as they contain no `NaN`.
//!
//! ## Usage
//!
//! In the simplest case, call `my_vec.merge_sort()` or `my_vec.quick_sort()`. To let seqsort
//! pick an algorithm for you, use the builder:
//!
//! ```ignore
//! use seqsort::SeqSort;
//!
//! let mut data = vec![5, 3, 9, 1];
//! data.sort_builder().with_stability(true).sort();
//! ```
//!
//! Bounded integer data can be counted into place:
//!
//! ```ignore
//! use seqsort::BucketSort;
//!
//! let mut data = vec![4u8, 2, 2, 5, 3];
//! data.bucket_sort(2, 5);
//! assert_eq!(data, vec![2, 2, 3, 4, 5]);
//! ```
//!
//! ## Sequences
//!
//! The free functions with a `_sequence` suffix accept anything implementing `Sequence`, which is
//! implemented out-of-the-box for:
//!
//!  * `[T]`
//!  * `Vec<T>`
//!  * `VecDeque<T>`
//!
//! `insertion_sort` additionally requires `InsertSequence`, implemented for `Vec<T>` and
//! `VecDeque<T>`.
//!
//! ## Contract violations
//!
//! Passing an empty range to `is_sorted`, an empty or unsorted destination to `insertion_sort`,
//! or a value outside of `[min, max]` (or `max <= min`) to `bucket_sort` panics. These checks are
//! always on, including in release builds.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.
//!
//! ### Contribution
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.


mod bucket_key;
mod sequence;
mod sort_builder;
mod sorter;
mod sorts;
pub mod tuner;
pub mod tuners;
mod utils;

#[cfg(test)]
pub(crate) use utils::test_utils;

pub use bucket_key::BucketKey;
pub use sequence::{InsertSequence, Sequence};
pub use sort_builder::SortBuilder;
pub use sorts::*;
pub use utils::{is_sorted, is_sorted_sequence};

use std::collections::VecDeque;

/// Comparison sorts on a whole container, in ascending order per `PartialOrd`.
pub trait SeqSort<T> {
    /// Stable, iterative bottom-up merge sort. See `seqsort::merge_sort`.
    fn merge_sort(&mut self);

    /// Unstable, in-place quick sort. See `seqsort::quick_sort`.
    fn quick_sort(&mut self);

    /// Configure and run a sort where seqsort picks the algorithm via a `Tuner`.
    fn sort_builder(&mut self) -> SortBuilder<'_, T>;
}

impl<T> SeqSort<T> for Vec<T>
where
    T: PartialOrd + Clone,
{
    fn merge_sort(&mut self) {
        sorts::merge_sort(self);
    }

    fn quick_sort(&mut self) {
        sorts::quick_sort(self);
    }

    fn sort_builder(&mut self) -> SortBuilder<'_, T> {
        SortBuilder::new(self)
    }
}

impl<T> SeqSort<T> for [T]
where
    T: PartialOrd + Clone,
{
    fn merge_sort(&mut self) {
        sorts::merge_sort(self);
    }

    fn quick_sort(&mut self) {
        sorts::quick_sort(self);
    }

    fn sort_builder(&mut self) -> SortBuilder<'_, T> {
        SortBuilder::new(self)
    }
}

impl<T> SeqSort<T> for VecDeque<T>
where
    T: PartialOrd + Clone,
{
    fn merge_sort(&mut self) {
        sorts::merge_sort_sequence(self);
    }

    fn quick_sort(&mut self) {
        sorts::quick_sort_sequence(self);
    }

    fn sort_builder(&mut self) -> SortBuilder<'_, T> {
        SortBuilder::new(self.make_contiguous())
    }
}

/// Counting sort on a whole container of integers drawn from a known, bounded range.
pub trait BucketSort<T> {
    /// Counting sort for values all within the inclusive range `[min, max]`. See
    /// `seqsort::bucket_sort`.
    fn bucket_sort(&mut self, min: T, max: T);
}

impl<T> BucketSort<T> for Vec<T>
where
    T: BucketKey,
{
    fn bucket_sort(&mut self, min: T, max: T) {
        sorts::bucket_sort(self, min, max);
    }
}

impl<T> BucketSort<T> for [T]
where
    T: BucketKey,
{
    fn bucket_sort(&mut self, min: T, max: T) {
        sorts::bucket_sort(self, min, max);
    }
}

impl<T> BucketSort<T> for VecDeque<T>
where
    T: BucketKey,
{
    fn bucket_sort(&mut self, min: T, max: T) {
        sorts::bucket_sort_sequence(self, min, max);
    }
}
