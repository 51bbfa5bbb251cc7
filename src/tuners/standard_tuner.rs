//! `StandardTuner` represents the default tuning of algorithm choices offered by seqsort.
//!
//! StandardTuner algorithm choice is:
//!  * stable whenever stability is requested
//!  * quick sort only for small inputs, where a last-element pivot can't go badly quadratic
//!  * merge sort otherwise

use crate::tuner::{Algorithm, Tuner, TuningParams};

pub struct StandardTuner;
impl Tuner for StandardTuner {
    #[inline]
    fn pick_algorithm(&self, p: &TuningParams) -> Algorithm {
        if p.stable {
            return Algorithm::Merge;
        }

        match p.input_len {
            0..=128 => Algorithm::Quick,
            _ => Algorithm::Merge,
        }
    }
}
