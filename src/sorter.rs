use crate::sorts::*;
use crate::tuner::{Algorithm, Tuner, TuningParams};
use crate::utils::is_sorted;

pub struct Sorter<'a> {
    stable: bool,
    pub(crate) tuner: &'a (dyn Tuner + Send + Sync),
}

impl<'a> Sorter<'a> {
    pub fn new(stable: bool, tuner: &'a (dyn Tuner + Send + Sync)) -> Self {
        Self { stable, tuner }
    }

    #[inline]
    fn run_sort<T>(&self, bucket: &mut [T], algorithm: Algorithm)
    where
        T: PartialOrd + Clone,
    {
        match algorithm {
            Algorithm::Merge => merge_sort(bucket),
            Algorithm::Quick => quick_sort(bucket),
        }
    }

    pub fn sort<T>(&self, bucket: &mut [T])
    where
        T: PartialOrd + Clone,
    {
        if bucket.len() <= 1 || is_sorted(bucket) {
            return;
        }

        let tp = TuningParams {
            input_len: bucket.len(),
            stable: self.stable,
        };

        let algorithm = self.tuner.pick_algorithm(&tp);

        #[cfg(feature = "work_profiles")]
        println!("(sorter) {:?}: len={} stable={}", algorithm, tp.input_len, tp.stable);

        self.run_sort(bucket, algorithm);
    }
}
