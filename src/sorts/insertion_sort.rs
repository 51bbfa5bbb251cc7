use crate::utils::is_sorted_sequence;
use crate::InsertSequence;

/// Binary search for where `element` should be inserted into the sorted `seq`.
///
/// The search window never shrinks below one element. An element equal to existing values is
/// placed before all of them.
#[inline]
fn find_insert_position<S>(seq: &S, element: &S::Item) -> usize
where
    S: InsertSequence + ?Sized,
    S::Item: PartialOrd,
{
    let mut start = 0;
    let mut end = seq.len();

    while end - start > 1 {
        // Biased low so that a window of two always shrinks
        let mid = start + (end - 1 - start) / 2;

        if element > seq.at(mid) {
            start = mid + 1;
        } else {
            end = mid + 1;
        }
    }

    if element > seq.at(start) {
        start + 1
    } else {
        start
    }
}

/// Insert every element of `source`, one at a time, into the already sorted `destination`,
/// keeping it sorted.
///
/// Each insertion costs a binary search plus the shift done by `InsertSequence::insert`, so
/// this is `O(m log n + m * n)` for `m` new elements.
///
/// Panics if `destination` is empty or not sorted in ascending order.
pub fn insertion_sort<I, D>(source: I, destination: &mut D)
where
    I: IntoIterator<Item = D::Item>,
    D: InsertSequence + ?Sized,
    D::Item: PartialOrd,
{
    assert!(
        !destination.is_empty(),
        "insertion sort destination must not be empty"
    );
    assert!(
        is_sorted_sequence(&*destination),
        "insertion sort destination must already be sorted"
    );

    for element in source {
        let position = find_insert_position(&*destination, &element);
        destination.insert(position, element);
    }
}
