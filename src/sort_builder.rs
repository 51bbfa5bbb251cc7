use crate::sorter::Sorter;
use crate::tuner::Tuner;
use crate::tuners::{LowMemoryTuner, StandardTuner};

pub struct SortBuilder<'a, T> {
    data: &'a mut [T],
    stable: bool,
    tuner: &'a (dyn Tuner + Send + Sync),
}

impl<'a, T> SortBuilder<'a, T>
where
    T: PartialOrd + Clone,
{
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        Self {
            data,
            stable: false,
            tuner: &StandardTuner,
        }
    }

    /// Require that equal elements keep their relative order. Defaults to `false`.
    pub fn with_stability(mut self, stable: bool) -> Self {
        self.stable = stable;

        self
    }

    pub fn with_low_mem_tuner(mut self) -> Self {
        self.tuner = &LowMemoryTuner;

        self
    }

    pub fn with_tuner(mut self, tuner: &'a (dyn Tuner + Send + Sync)) -> Self {
        self.tuner = tuner;

        self
    }

    pub fn sort(self) {
        // By definition, this is already sorted
        if self.data.len() <= 1 {
            return;
        }

        let sorter = Sorter::new(self.stable, self.tuner);
        sorter.sort(self.data);
    }
}
