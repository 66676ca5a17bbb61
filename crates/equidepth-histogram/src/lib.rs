//! Bounded-memory equi-depth histograms over numeric streams
//!
//! This crate maintains an approximate equi-depth histogram over samples that
//! arrive one at a time. Memory stays proportional to the bin count no matter
//! how many samples are seen: the estimator keeps per-bin counts and edges,
//! never the samples themselves.
//!
//! # Key Features
//!
//! - **Fixed memory**: counts, edges and rebalance scratch space are allocated once
//! - **Online**: every insertion leaves the histogram in a readable state
//! - **Typed failures**: degenerate configurations surface as [`Error`] values
//! - **Reporting**: [`HistogramSnapshot`] renders the per-bin state for display
//!
//! # Examples
//!
//! ## Streaming Insertion
//!
//! ```rust
//! use equidepth_histogram::EquiDepthHistogram;
//!
//! let mut histogram = EquiDepthHistogram::new(4);
//! for i in 0..100 {
//!     histogram.add(i as f64).unwrap();
//! }
//!
//! assert_eq!(histogram.total_count(), 100);
//! assert_eq!(histogram.counts().iter().sum::<usize>(), 100);
//! ```
//!
//! ## Reporting Through the Trait
//!
//! ```rust
//! use equidepth_histogram::{EquiDepthHistogram, StreamingHistogram};
//!
//! let mut histogram = EquiDepthHistogram::new(3);
//! histogram.extend_from([2.0, 8.0, 4.0, 6.0, 5.0]).unwrap();
//!
//! let snapshot = histogram.snapshot();
//! for bin in snapshot.bins() {
//!     println!("[{:.2}, {:.2}]: count={}", bin.left, bin.right, bin.count);
//! }
//! print!("{snapshot}");
//! ```

pub mod estimator;
mod lookup;
mod rebalance;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use estimator::EquiDepthHistogram;
pub use traits::StreamingHistogram;
pub use types::{HistogramBin, HistogramSnapshot};

pub use equidepth_core::{Error, Result};
