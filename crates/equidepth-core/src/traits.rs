//! Collaborator traits

/// A producer of real-valued samples
///
/// Sources are pure data producers: they know nothing about the estimator
/// that consumes them. Implementations are expected to yield finite values.
pub trait SampleSource {
    /// Produce the next sample
    fn next_sample(&mut self) -> f64;

    /// Produce `n` samples in order
    fn take_samples(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_sample()).collect()
    }
}

impl<S: SampleSource + ?Sized> SampleSource for Box<S> {
    fn next_sample(&mut self) -> f64 {
        (**self).next_sample()
    }
}

impl<S: SampleSource + ?Sized> SampleSource for &mut S {
    fn next_sample(&mut self) -> f64 {
        (**self).next_sample()
    }
}
