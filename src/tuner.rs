#[derive(Clone)]
pub struct TuningParams {
    pub input_len: usize,
    pub stable: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Algorithm {
    Merge,
    Quick,
}

pub trait Tuner {
    fn pick_algorithm(&self, p: &TuningParams) -> Algorithm;
}
