use std::collections::VecDeque;

/// A randomly indexable, mutable run of elements.
///
/// This is the only thing the comparison sorts in this crate need from a container: a length,
/// indexed reads, and indexed writes / swaps. Iteration is always done by index, from `0` up to
/// `len()`.
///
/// Implemented out-of-the-box for `[T]`, `Vec<T>` and `VecDeque<T>`.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the element at `index`. Panics if `index >= len()`.
    fn at(&self, index: usize) -> &Self::Item;

    /// Overwrite the element at `index`. Panics if `index >= len()`.
    fn set(&mut self, index: usize, value: Self::Item);

    fn swap(&mut self, a: usize, b: usize);
}

/// A `Sequence` that can grow by inserting at an arbitrary position.
///
/// `[T]` cannot implement this, so insertion sort only accepts owned containers as its
/// destination.
pub trait InsertSequence: Sequence {
    /// Insert `value` at `index`, shifting everything at and after `index` to the right.
    fn insert(&mut self, index: usize, value: Self::Item);
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T> InsertSequence for Vec<T> {
    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        Vec::insert(self, index, value);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

impl<T> InsertSequence for VecDeque<T> {
    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        VecDeque::insert(self, index, value);
    }
}
