//! Sample stream configuration

use crate::generators::{
    diverse_batch, ExponentialSource, MixtureSource, NormalSource, UniformSource,
};
use equidepth_core::{Error, Result, SampleSource};
use std::fmt;
use std::str::FromStr;

/// Shape of a synthetic sample stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleDistribution {
    /// Uniform on `[min, max)`
    Uniform { min: f64, max: f64 },
    /// Gaussian
    Normal { mean: f64, std_dev: f64 },
    /// Exponential with rate `lambda`
    Exponential { lambda: f64 },
    /// Equal parts uniform, normal and exponential over `[min, max]`
    Diverse { min: f64, max: f64 },
}

impl SampleDistribution {
    /// Short lowercase name of the shape
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform { .. } => "uniform",
            Self::Normal { .. } => "normal",
            Self::Exponential { .. } => "exponential",
            Self::Diverse { .. } => "diverse",
        }
    }
}

impl Default for SampleDistribution {
    fn default() -> Self {
        Self::Exponential { lambda: 1.0 }
    }
}

impl fmt::Display for SampleDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform { min, max } => write!(f, "uniform[{min}, {max})"),
            Self::Normal { mean, std_dev } => write!(f, "normal(mean={mean}, sd={std_dev})"),
            Self::Exponential { lambda } => write!(f, "exponential(lambda={lambda})"),
            Self::Diverse { min, max } => write!(f, "diverse[{min}, {max}]"),
        }
    }
}

/// Parses a shape name into that shape with its default parameters
///
/// Defaults: uniform on `[0, 100)`, normal with mean 50 and standard deviation
/// 25, exponential with rate 1, diverse over `[0, 100]`.
impl FromStr for SampleDistribution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform { min: 0.0, max: 100.0 }),
            "normal" => Ok(Self::Normal {
                mean: 50.0,
                std_dev: 25.0,
            }),
            "exponential" => Ok(Self::Exponential { lambda: 1.0 }),
            "diverse" => Ok(Self::Diverse { min: 0.0, max: 100.0 }),
            other => Err(Error::InvalidParameter(format!(
                "Unknown distribution '{other}', expected uniform, normal, exponential or diverse"
            ))),
        }
    }
}

/// Configuration for a reproducible sample stream
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    /// Shape of the stream
    pub distribution: SampleDistribution,
    /// Number of samples produced by [`generate`](Self::generate)
    pub num_samples: usize,
    /// Seed for the stream's random number generator
    pub seed: u64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            distribution: SampleDistribution::default(),
            num_samples: 1000,
            seed: 42,
        }
    }
}

impl SampleConfig {
    /// Create a configuration for `distribution` with default size and seed
    pub fn new(distribution: SampleDistribution) -> Self {
        Self {
            distribution,
            ..Default::default()
        }
    }

    /// Set the number of samples
    pub fn with_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Open an unbounded stream of this shape
    ///
    /// A diverse stream draws each sample's shape at random rather than in
    /// exact thirds.
    pub fn source(&self) -> Result<Box<dyn SampleSource>> {
        let seed = self.seed;
        let source: Box<dyn SampleSource> = match self.distribution {
            SampleDistribution::Uniform { min, max } => Box::new(UniformSource::new(min, max, seed)?),
            SampleDistribution::Normal { mean, std_dev } => {
                Box::new(NormalSource::new(mean, std_dev, seed)?)
            }
            SampleDistribution::Exponential { lambda } => {
                Box::new(ExponentialSource::new(lambda, seed)?)
            }
            SampleDistribution::Diverse { min, max } => Box::new(MixtureSource::new(min, max, seed)?),
        };
        Ok(source)
    }

    /// Generate the configured batch
    ///
    /// A diverse batch holds exactly one third of each shape, shuffled, and so
    /// may be up to two samples short of `num_samples`.
    pub fn generate(&self) -> Result<Vec<f64>> {
        match self.distribution {
            SampleDistribution::Diverse { min, max } => {
                diverse_batch(self.num_samples, min, max, self.seed)
            }
            _ => Ok(self.source()?.take_samples(self.num_samples)),
        }
    }
}
