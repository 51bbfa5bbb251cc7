use crate::{BucketKey, Sequence};

/// Returns `true` if no element of `bucket` compares less than the one before it.
///
/// Panics if `bucket` is empty.
#[inline]
pub fn is_sorted<T>(bucket: &[T]) -> bool
where
    T: PartialOrd,
{
    assert!(!bucket.is_empty(), "cannot check the order of an empty range");

    bucket.windows(2).all(|w| !(w[1] < w[0]))
}

/// `is_sorted` for any `Sequence`, walking it by index.
///
/// Panics if `seq` is empty.
#[inline]
pub fn is_sorted_sequence<S>(seq: &S) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    assert!(!seq.is_empty(), "cannot check the order of an empty sequence");

    for i in 1..seq.len() {
        if seq.at(i) < seq.at(i - 1) {
            return false;
        }
    }

    true
}

/// Clone `seq` into a fresh scratch buffer of the same length.
#[inline]
pub fn get_scratch_buffer<S>(seq: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    (0..seq.len()).map(|i| seq.at(i).clone()).collect()
}

/// Count every value in `seq` into one bucket per value of the inclusive range `[min, max]`.
///
/// Panics if `max <= min`, if the range has more values than a `usize` can count, or if any
/// value lies outside of `[min, max]`.
pub fn get_bucket_counts<S>(seq: &S, min: S::Item, max: S::Item) -> Vec<usize>
where
    S: Sequence + ?Sized,
    S::Item: BucketKey,
{
    assert!(max > min, "bucket range max must be greater than min");

    let span = match max.offset_from(min) {
        Some(span) if span < usize::MAX => span,
        _ => panic!("bucket range is too wide to count"),
    };

    let mut counts = vec![0usize; span + 1];

    for i in 0..seq.len() {
        let value = *seq.at(i);
        let offset = if value >= min && value <= max {
            value.offset_from(min)
        } else {
            None
        };

        match offset {
            Some(offset) => counts[offset] += 1,
            None => panic!("value at index {} is outside of the bucket range", i),
        }
    }

    counts
}
