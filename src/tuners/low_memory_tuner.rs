//! `LowMemoryTuner` avoids the `O(n)` scratch buffer of merge sort unless stability is
//! requested, at the risk of quadratic behaviour on nearly sorted inputs.

use crate::tuner::{Algorithm, Tuner, TuningParams};

pub struct LowMemoryTuner;
impl Tuner for LowMemoryTuner {
    #[inline]
    fn pick_algorithm(&self, p: &TuningParams) -> Algorithm {
        if p.stable {
            Algorithm::Merge
        } else {
            Algorithm::Quick
        }
    }
}
