use crate::utils::*;
use crate::Sequence;
use std::cmp::min;

/// Merge each adjacent pair of `block_size` runs of `read` into the same positions of `write`.
///
/// On a tie the left run wins, which is what keeps the sort stable. A trailing run without a
/// partner is copied across as-is.
#[inline]
fn merge_pass<R, W, T>(read: &R, write: &mut W, block_size: usize)
where
    R: Sequence<Item = T> + ?Sized,
    W: Sequence<Item = T> + ?Sized,
    T: PartialOrd + Clone,
{
    let len = read.len();
    let mut write_head = 0;
    let mut block_start = 0;

    while block_start < len {
        let mut first = block_start;
        let last = min(block_start + block_size, len);
        let mut first_next = last;
        let last_next = min(last + block_size, len);

        while first != last || first_next != last_next {
            let take_next = if first_next == last_next {
                false
            } else if first == last {
                true
            } else {
                read.at(first_next) < read.at(first)
            };

            let source = if take_next {
                first_next += 1;
                first_next - 1
            } else {
                first += 1;
                first - 1
            };

            write.set(write_head, read.at(source).clone());
            write_head += 1;
        }

        block_start = last_next;
    }
}

/// Ping-pong merge passes between `seq` and `scratch`, doubling the block size each time.
/// Returns `true` if the fully sorted output was left in `scratch`.
fn merge_sort_passes<S>(seq: &mut S, scratch: &mut [S::Item]) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd + Clone,
{
    let len = seq.len();
    let mut block_size = 1;
    let mut in_scratch = false;

    while block_size < len {
        #[cfg(feature = "work_profiles")]
        println!("(merge) PASS: len={} block_size={}", len, block_size);

        if in_scratch {
            merge_pass(&*scratch, seq, block_size);
        } else {
            merge_pass(&*seq, scratch, block_size);
        }

        in_scratch = !in_scratch;
        block_size += block_size;
    }

    in_scratch
}

/// Stable, iterative bottom-up merge sort of a contiguous slice. Uses a scratch buffer the same
/// length as `bucket`.
pub fn merge_sort<T>(bucket: &mut [T])
where
    T: PartialOrd + Clone,
{
    if bucket.len() < 2 {
        return;
    }

    let mut scratch = bucket.to_vec();

    if merge_sort_passes(bucket, &mut scratch[..]) {
        bucket.clone_from_slice(&scratch);
    }
}

/// Stable, iterative bottom-up merge sort of any `Sequence`. Identical to `merge_sort`, other
/// than writing the result back one index at a time.
pub fn merge_sort_sequence<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd + Clone,
{
    if seq.len() < 2 {
        return;
    }

    let mut scratch = get_scratch_buffer(&*seq);

    if merge_sort_passes(seq, &mut scratch[..]) {
        for (i, v) in scratch.into_iter().enumerate() {
            seq.set(i, v);
        }
    }
}
