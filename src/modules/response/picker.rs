use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Chooses which of several interchangeable phrases to use.
///
/// `pick` receives a non-zero `len` and should return an index below it;
/// callers wrap out-of-range indices.
pub trait PhrasePicker {
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: PhrasePicker + ?Sized> PhrasePicker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform choice backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R = ThreadRng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RandomPicker<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PhrasePicker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Always returns the same index. Useful for hosts that want reproducible output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPicker(pub usize);

impl PhrasePicker for FixedPicker {
    fn pick(&mut self, _len: usize) -> usize {
        self.0
    }
}
