use block_pseudorand::block_rand;
use rayon::prelude::*;
use std::fmt::Debug;
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

pub trait NumericTest<T>:
    Sized
    + Copy
    + Debug
    + PartialEq
    + Ord
    + Send
    + Sync
    + Shl<Output = T>
    + Shr<Output = T>
    + ShrAssign
    + ShlAssign
{
}

impl<T> NumericTest<T> for T where
    T: Sized
        + Copy
        + Debug
        + PartialEq
        + Ord
        + Send
        + Sync
        + Shl<Output = T>
        + Shr<Output = T>
        + ShrAssign
        + ShlAssign
{
}

pub fn gen_inputs<T>(n: usize, shift: T) -> Vec<T>
where
    T: NumericTest<T>,
{
    let mut inputs: Vec<T> = block_rand(n);

    inputs[0..(n / 2)].par_iter_mut().for_each(|v| *v >>= shift);
    inputs[(n / 2)..n].par_iter_mut().for_each(|v| *v <<= shift);

    inputs
}

pub fn gen_input_set<T>(shift: T) -> Vec<Vec<T>>
where
    T: NumericTest<T>,
{
    let n = 200_000;
    let half = n / 2;
    let inputs = gen_inputs(n, shift);

    // Middle values are used for the case where shift is provided
    let mut out = vec![
        vec![],
        inputs[..1].to_vec(),
        inputs[..2].to_vec(),
        inputs[..3].to_vec(),
        inputs[(half - 5)..(half + 5)].to_vec(),
        inputs[(half - 50)..(half + 50)].to_vec(),
        inputs[(half - 2_500)..(half + 2_501)].to_vec(),
        inputs[(half - 5_000)..(half + 5_000)].to_vec(),
        inputs[(half - 25_000)..(half + 25_003)].to_vec(),
        inputs,
    ];

    out.reverse();

    out
}

/// Sort `inputs` with `sort_fn` and check the result against `sort_unstable`, which covers both
/// the ordering and that nothing was lost or duplicated along the way.
pub fn validate_sort<T, F>(mut inputs: Vec<T>, sort_fn: F)
where
    T: NumericTest<T>,
    F: Fn(&mut [T]),
{
    let mut expected = inputs.clone();

    sort_fn(&mut inputs);
    expected.sort_unstable();

    assert_eq!(inputs, expected);
}

pub fn sort_comparison_suite<T, F>(shift: T, sort_fn: F)
where
    F: Fn(&mut [T]),
    T: NumericTest<T>,
{
    let input_set = gen_input_set(shift);

    for s in input_set {
        validate_sort(s, &sort_fn);
    }
}

/// Orderings that typically hurt partition based sorts. Kept small, as a last-element pivot is
/// quadratic on several of these.
pub fn validate_u32_patterns<F>(sort_fn: F)
where
    F: Fn(&mut [u32]),
{
    let n = 2_000u32;
    let random: Vec<u32> = block_rand(n as usize);

    let input_sets: Vec<Vec<u32>> = vec![
        // Ascending
        (0..n).collect(),
        // Descending
        (0..n).rev().collect(),
        // All equal
        vec![u32::MAX; n as usize],
        // Few distinct values
        random.iter().map(|v| *v % 4).collect(),
        // Two values
        random.iter().map(|v| *v & 1).collect(),
        // Organ pipe
        (0..n / 2).chain((0..n / 2).rev()).collect(),
        // Sawtooth
        (0..n).map(|v| v % 37).collect(),
        // Ascending with a single out of place value at the end
        (1..n).chain(0..1).collect(),
        random,
    ];

    for inputs in input_sets {
        validate_sort(inputs, &sort_fn);
    }
}
