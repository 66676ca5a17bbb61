//! Core types shared by the equidepth crates
//!
//! This crate holds the pieces every other crate in the workspace agrees on:
//! the unified [`Error`] type and the [`SampleSource`] trait that describes
//! anything able to feed real-valued samples into a streaming estimator.

pub mod error;
pub mod traits;

pub use error::{Error, Result};
pub use traits::SampleSource;
