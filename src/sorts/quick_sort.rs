use crate::Sequence;
use std::ops::Range;

/// Partition `range` of `seq` around its last element and return the pivot's final index.
///
/// Afterwards everything in `range.start..pivot` compares `<=` the pivot and everything in
/// `pivot + 1..range.end` compares `>` it. Elements equal to the pivot always end up on the left.
#[inline]
fn partition<S>(seq: &mut S, range: &Range<usize>) -> usize
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    let pivot = range.end - 1;

    // While `boundary == pivot` nothing larger than the pivot has been seen yet. Once it moves,
    // `boundary..i` holds only elements larger than the pivot.
    let mut boundary = pivot;

    for i in range.clone() {
        if seq.at(i) <= seq.at(pivot) && boundary != pivot && i != pivot {
            seq.swap(i, boundary);
            boundary += 1;
        } else if seq.at(i) > seq.at(pivot) && boundary == pivot {
            boundary = i;
        }
    }

    seq.swap(boundary, pivot);

    boundary
}

/// In-place, unstable quick sort of any `Sequence`.
///
/// Recursion is replaced by an explicit stack of pending ranges, so very large or adversarial
/// inputs can't overflow the call stack. The pivot is always the last element of a range, which
/// makes already sorted, reverse sorted and all-equal inputs quadratic.
pub fn quick_sort_sequence<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    if seq.len() < 2 {
        return;
    }

    let mut ranges: Vec<Range<usize>> = vec![0..seq.len()];

    while let Some(range) = ranges.pop() {
        let pivot = partition(seq, &range);

        #[cfg(feature = "work_profiles")]
        println!("(quick) PARTITION: {:?} pivot={}", range, pivot);

        // The left side is pushed last so it is processed first
        if range.end - (pivot + 1) > 1 {
            ranges.push((pivot + 1)..range.end);
        }

        if pivot - range.start > 1 {
            ranges.push(range.start..pivot);
        }
    }
}

/// In-place, unstable quick sort of a contiguous slice.
#[inline]
pub fn quick_sort<T>(bucket: &mut [T])
where
    T: PartialOrd,
{
    quick_sort_sequence(bucket);
}
