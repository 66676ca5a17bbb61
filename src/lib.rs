//! Bounded-memory equi-depth histograms over numeric streams
//!
//! Facade over the workspace crates:
//!
//! - [`histogram`]: the streaming estimator and its read-only views
//! - [`sampling`]: seeded synthetic sample sources
//!
//! The shared [`Error`] type and [`SampleSource`] trait are re-exported at the root.
//!
//! # Example
//!
//! ```rust
//! use equidepth::prelude::*;
//!
//! let mut source = SampleConfig::new(SampleDistribution::Uniform { min: 0.0, max: 1.0 })
//!     .with_seed(1)
//!     .source()
//!     .unwrap();
//!
//! let mut histogram = EquiDepthHistogram::new(8);
//! histogram.feed(source.as_mut(), 1000).unwrap();
//! assert_eq!(histogram.counts().iter().sum::<usize>(), 1000);
//! ```

pub use equidepth_histogram as histogram;
pub use equidepth_sampling as sampling;

pub use equidepth_core::{Error, Result, SampleSource};
pub use equidepth_histogram::{
    EquiDepthHistogram, HistogramBin, HistogramSnapshot, StreamingHistogram,
};
pub use equidepth_sampling::{SampleConfig, SampleDistribution};

/// Common imports
pub mod prelude {
    pub use crate::{
        EquiDepthHistogram, Error, HistogramSnapshot, Result, SampleConfig, SampleDistribution,
        SampleSource, StreamingHistogram,
    };
}
