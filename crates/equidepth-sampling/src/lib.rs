//! Seeded synthetic sample streams
//!
//! Every generator here owns its random number generator, seeded from a `u64`,
//! so a given configuration always reproduces the same sequence. Generators
//! implement [`SampleSource`] and know nothing about the histograms they feed.
//!
//! # Examples
//!
//! ```rust
//! use equidepth_sampling::{SampleConfig, SampleDistribution};
//!
//! let config = SampleConfig::new(SampleDistribution::Exponential { lambda: 1.0 })
//!     .with_samples(500)
//!     .with_seed(7);
//!
//! let first = config.generate().unwrap();
//! let second = config.generate().unwrap();
//! assert_eq!(first.len(), 500);
//! assert_eq!(first, second);
//! ```

pub mod config;
pub mod generators;

pub use config::{SampleConfig, SampleDistribution};
pub use generators::{
    diverse_batch, ExponentialSource, MixtureSource, NormalSource, UniformSource,
};

pub use equidepth_core::{Error, Result, SampleSource};
