mod low_memory_tuner;
mod standard_tuner;

pub use low_memory_tuner::LowMemoryTuner;
pub use standard_tuner::StandardTuner;
