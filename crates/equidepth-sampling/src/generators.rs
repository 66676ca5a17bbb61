//! Synthetic distributions

use equidepth_core::{Error, Result, SampleSource};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Normal};
use tracing::debug;

/// Uniform samples on `[min, max)`
#[derive(Debug, Clone)]
pub struct UniformSource {
    min: f64,
    max: f64,
    rng: ChaCha8Rng,
}

impl UniformSource {
    /// Create a uniform source; `min` may equal `max`
    pub fn new(min: f64, max: f64, seed: u64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(Error::InvalidParameter(format!(
                "Uniform range [{min}, {max}) must be finite with min <= max"
            )));
        }
        Ok(Self {
            min,
            max,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }
}

impl SampleSource for UniformSource {
    fn next_sample(&mut self) -> f64 {
        let u: f64 = self.rng.gen();
        self.min + u * (self.max - self.min)
    }
}

/// Gaussian samples
#[derive(Debug, Clone)]
pub struct NormalSource {
    normal: Normal<f64>,
    rng: ChaCha8Rng,
}

impl NormalSource {
    /// Create a normal source; `std_dev` must be finite and non-negative
    pub fn new(mean: f64, std_dev: f64, seed: u64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidParameter(format!("Mean {mean} must be finite")));
        }
        let normal = Normal::new(mean, std_dev).map_err(|err| {
            Error::InvalidParameter(format!("Standard deviation {std_dev}: {err}"))
        })?;
        Ok(Self {
            normal,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }
}

impl SampleSource for NormalSource {
    fn next_sample(&mut self) -> f64 {
        self.normal.sample(&mut self.rng)
    }
}

/// Exponential samples with rate `lambda`
#[derive(Debug, Clone)]
pub struct ExponentialSource {
    exp: Exp<f64>,
    rng: ChaCha8Rng,
}

impl ExponentialSource {
    /// Create an exponential source; `lambda` must be finite and positive
    pub fn new(lambda: f64, seed: u64) -> Result<Self> {
        if !(lambda.is_finite() && lambda > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Rate {lambda} must be finite and positive"
            )));
        }
        let exp = Exp::new(lambda)
            .map_err(|err| Error::InvalidParameter(format!("Rate {lambda}: {err}")))?;
        Ok(Self {
            exp,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }
}

impl SampleSource for ExponentialSource {
    fn next_sample(&mut self) -> f64 {
        self.exp.sample(&mut self.rng)
    }
}

/// Parameters of the three-way mix over `[min, max]`
///
/// Uniform on the range, a normal centred on it with a quarter of its width
/// as standard deviation, and an exponential with mean half the width.
fn mixture_parts(min: f64, max: f64) -> (f64, f64, f64) {
    let width = max - min;
    ((min + max) / 2.0, width / 4.0, 2.0 / width)
}

/// Streaming mix of uniform, normal and exponential samples
///
/// Each sample comes from one of the three shapes chosen with equal
/// probability. See [`diverse_batch`] for the exact-thirds batch variant.
#[derive(Debug, Clone)]
pub struct MixtureSource {
    uniform: UniformSource,
    normal: NormalSource,
    exponential: ExponentialSource,
    rng: ChaCha8Rng,
}

impl MixtureSource {
    /// Create a mixture source over `[min, max]`; requires `min < max`
    pub fn new(min: f64, max: f64, seed: u64) -> Result<Self> {
        if !(min < max) {
            return Err(Error::InvalidParameter(format!(
                "Mixture range [{min}, {max}] must have min < max"
            )));
        }
        let (mean, std_dev, lambda) = mixture_parts(min, max);
        let mut seeds = ChaCha8Rng::seed_from_u64(seed);
        Ok(Self {
            uniform: UniformSource::new(min, max, seeds.gen())?,
            normal: NormalSource::new(mean, std_dev, seeds.gen())?,
            exponential: ExponentialSource::new(lambda, seeds.gen())?,
            rng: seeds,
        })
    }
}

impl SampleSource for MixtureSource {
    fn next_sample(&mut self) -> f64 {
        match self.rng.gen_range(0..3) {
            0 => self.uniform.next_sample(),
            1 => self.normal.next_sample(),
            _ => self.exponential.next_sample(),
        }
    }
}

/// Exactly `n / 3` samples from each of the three mixture shapes, shuffled
///
/// The remainder of `n / 3` is dropped, so the result holds `3 * (n / 3)`
/// samples.
pub fn diverse_batch(n: usize, min: f64, max: f64, seed: u64) -> Result<Vec<f64>> {
    if !(min < max) {
        return Err(Error::InvalidParameter(format!(
            "Mixture range [{min}, {max}] must have min < max"
        )));
    }
    let third = n / 3;
    let (mean, std_dev, lambda) = mixture_parts(min, max);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut data = Vec::with_capacity(third * 3);
    data.extend(UniformSource::new(min, max, rng.gen())?.take_samples(third));
    data.extend(NormalSource::new(mean, std_dev, rng.gen())?.take_samples(third));
    data.extend(ExponentialSource::new(lambda, rng.gen())?.take_samples(third));
    data.shuffle(&mut rng);

    debug!(requested = n, generated = data.len(), "generated diverse batch");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mean(data: &[f64]) -> f64 {
        data.iter().sum::<f64>() / data.len() as f64
    }

    #[test]
    fn test_uniform_range() {
        let data = UniformSource::new(-2.0, 3.0, 1).unwrap().take_samples(5000);
        assert!(data.iter().all(|&x| (-2.0..3.0).contains(&x)));
        assert_relative_eq!(mean(&data), 0.5, epsilon = 0.1);
    }

    #[test]
    fn test_uniform_degenerate_range() {
        let data = UniformSource::new(4.0, 4.0, 1).unwrap().take_samples(10);
        assert!(data.iter().all(|&x| x == 4.0));
    }

    #[test]
    fn test_normal_moments() {
        let data = NormalSource::new(10.0, 2.0, 3).unwrap().take_samples(10000);
        let m = mean(&data);
        let var = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64;
        assert_relative_eq!(m, 10.0, epsilon = 0.1);
        assert_relative_eq!(var.sqrt(), 2.0, epsilon = 0.1);
    }

    #[test]
    fn test_exponential_mean() {
        let data = ExponentialSource::new(0.5, 5).unwrap().take_samples(10000);
        assert!(data.iter().all(|&x| x >= 0.0));
        assert_relative_eq!(mean(&data), 2.0, epsilon = 0.1);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(UniformSource::new(2.0, 1.0, 0).is_err());
        assert!(UniformSource::new(f64::NAN, 1.0, 0).is_err());
        assert!(NormalSource::new(0.0, -1.0, 0).is_err());
        assert!(ExponentialSource::new(0.0, 0).is_err());
        assert!(ExponentialSource::new(-1.0, 0).is_err());
        assert!(MixtureSource::new(1.0, 1.0, 0).is_err());
        assert!(diverse_batch(9, 5.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = MixtureSource::new(0.0, 10.0, 99).unwrap().take_samples(100);
        let b = MixtureSource::new(0.0, 10.0, 99).unwrap().take_samples(100);
        let c = MixtureSource::new(0.0, 10.0, 100).unwrap().take_samples(100);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_diverse_batch_drops_remainder() {
        assert_eq!(diverse_batch(10, 0.0, 1.0, 0).unwrap().len(), 9);
        assert_eq!(diverse_batch(2, 0.0, 1.0, 0).unwrap().len(), 0);
    }
}
