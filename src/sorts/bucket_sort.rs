use crate::utils::get_bucket_counts;
use crate::{BucketKey, Sequence};
use arbitrary_chunks::ArbitraryChunks;

/// Counting sort of a slice whose values all lie within the inclusive range `[min, max]`.
///
/// Runs in `O(n + (max - min))` time and allocates one counter per value in the range.
///
/// Panics if `max <= min`, if the range has more values than a `usize` can count, or if any
/// value lies outside of `[min, max]`.
pub fn bucket_sort<T>(bucket: &mut [T], min: T, max: T)
where
    T: BucketKey,
{
    let counts = get_bucket_counts(&*bucket, min, max);

    #[cfg(feature = "work_profiles")]
    println!("(bucket) REWRITE: len={} buckets={}", bucket.len(), counts.len());

    // Each count is exactly the length of the run its value occupies in the output
    bucket
        .arbitrary_chunks_mut(&counts)
        .enumerate()
        .for_each(|(offset, chunk)| chunk.fill(T::from_offset(min, offset)));
}

/// Counting sort of any `Sequence` whose values all lie within the inclusive range `[min, max]`.
///
/// Panics if `max <= min`, if the range has more values than a `usize` can count, or if any
/// value lies outside of `[min, max]`.
pub fn bucket_sort_sequence<S>(seq: &mut S, min: S::Item, max: S::Item)
where
    S: Sequence + ?Sized,
    S::Item: BucketKey,
{
    let mut counts = get_bucket_counts(&*seq, min, max);

    #[cfg(feature = "work_profiles")]
    println!("(bucket) REWRITE: len={} buckets={}", seq.len(), counts.len());

    let mut offset = 0;
    for i in 0..seq.len() {
        while counts[offset] == 0 {
            offset += 1;
        }

        seq.set(i, <S::Item as BucketKey>::from_offset(min, offset));
        counts[offset] -= 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::sorts::bucket_sort::{bucket_sort, bucket_sort_sequence};
    use block_pseudorand::block_rand;
    use std::collections::VecDeque;

    #[test]
    pub fn test_offset_values_are_restored() {
        let mut inputs = vec![4u32, 2, 2, 5, 3];
        bucket_sort(&mut inputs, 2, 5);

        assert_eq!(inputs, vec![2, 2, 3, 4, 5]);
    }

    #[test]
    pub fn test_sequence_offset_values_are_restored() {
        let mut inputs: VecDeque<u32> = vec![4, 2, 2, 5, 3].into();
        bucket_sort_sequence(&mut inputs, 2, 5);

        assert_eq!(inputs.into_iter().collect::<Vec<u32>>(), vec![2, 2, 3, 4, 5]);
    }

    #[test]
    pub fn test_max_is_inclusive() {
        let mut inputs = vec![9u8, 0, 9, 9];
        bucket_sort(&mut inputs, 0, 9);

        assert_eq!(inputs, vec![0, 9, 9, 9]);
    }

    #[test]
    pub fn test_signed() {
        let mut inputs = vec![3i32, -2, 0, -7, 3, 1];
        let mut seq_inputs = inputs.clone();

        bucket_sort(&mut inputs, -7, 3);
        bucket_sort_sequence(&mut seq_inputs, -7, 3);

        assert_eq!(inputs, vec![-7, -2, 0, 1, 3, 3]);
        assert_eq!(seq_inputs, inputs);
    }

    #[test]
    pub fn test_full_i8_range() {
        let mut inputs: Vec<i8> = (i8::MIN..=i8::MAX).rev().collect();
        bucket_sort(&mut inputs, i8::MIN, i8::MAX);

        assert_eq!(inputs, (i8::MIN..=i8::MAX).collect::<Vec<i8>>());
    }

    #[test]
    pub fn test_random_u16() {
        let inputs: Vec<u16> = block_rand(100_000);
        let mut expected = inputs.clone();
        expected.sort_unstable();

        let mut slice_inputs = inputs.clone();
        let mut seq_inputs: VecDeque<u16> = inputs.into_iter().collect();

        bucket_sort(&mut slice_inputs, 0, u16::MAX);
        bucket_sort_sequence(&mut seq_inputs, 0, u16::MAX);

        assert_eq!(slice_inputs, expected);
        assert_eq!(seq_inputs.into_iter().collect::<Vec<u16>>(), expected);
    }

    #[test]
    pub fn test_already_sorted_is_untouched() {
        let sorted: Vec<u64> = (100..400).map(|v| v / 2).collect();
        let mut inputs = sorted.clone();

        bucket_sort(&mut inputs, 50, 199);

        assert_eq!(inputs, sorted);
    }

    #[test]
    pub fn test_empty() {
        // This is expected not to panic
        bucket_sort::<u32>(&mut [], 0, 10);
        bucket_sort_sequence(&mut VecDeque::<u32>::new(), 0, 10);
    }

    #[test]
    #[should_panic(expected = "outside of the bucket range")]
    pub fn test_below_min_panics() {
        bucket_sort(&mut [4u32, 1, 5], 2, 5);
    }

    #[test]
    #[should_panic(expected = "outside of the bucket range")]
    pub fn test_above_max_panics() {
        bucket_sort_sequence(&mut vec![4u32, 6, 5], 2, 5);
    }

    #[test]
    #[should_panic(expected = "too wide to count")]
    pub fn test_wide_u128_range_panics() {
        let wide = 1u128 << usize::BITS;
        bucket_sort(&mut [wide + 3, 3, wide], 0, wide + 5);
    }

    #[test]
    #[should_panic(expected = "too wide to count")]
    pub fn test_wide_i128_sequence_range_panics() {
        let wide = 1i128 << usize::BITS;
        bucket_sort_sequence(&mut vec![wide, 0], 0, wide);
    }

    #[test]
    pub fn test_narrow_u128_range_far_from_zero() {
        let base = 1u128 << 100;
        let mut inputs = vec![base + 7, base, base + 3, base + 7];
        bucket_sort(&mut inputs, base, base + 8);

        assert_eq!(inputs, vec![base, base + 3, base + 7, base + 7]);
    }

    #[test]
    #[should_panic(expected = "greater than min")]
    pub fn test_inverted_range_panics() {
        bucket_sort(&mut [1u32], 5, 2);
    }
}
