//! Error types for equi-depth histogram estimation
//!
//! Provides a unified error type for all equidepth crates.

use thiserror::Error;

/// Core error type for histogram and sampling operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a constructor or generator
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Bin lookup produced an index with no backing bin
    #[error("Bin index {index} out of range for histogram with {bins} bins")]
    BinOutOfRange { index: isize, bins: usize },

    /// Sample rejected by a checked insertion
    #[error("Non-finite value: {0}")]
    NonFinite(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a negative bin count
    pub fn negative_bins(n: i64) -> Self {
        Self::InvalidParameter(format!("Number of bins must be non-negative, got {n}"))
    }

    /// Create an error for a lookup with no valid target bin
    ///
    /// The lookup fallback is `bins - 1`, which is `-1` for an empty histogram.
    pub fn no_bin(bins: usize) -> Self {
        Self::BinOutOfRange {
            index: bins as isize - 1,
            bins,
        }
    }

    /// Create an error for a NaN/Inf sample
    pub fn non_finite(value: f64) -> Self {
        Self::NonFinite(format!("sample {value} is NaN or infinite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("lambda must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: lambda must be positive");

        let err = Error::BinOutOfRange { index: 4, bins: 3 };
        assert_eq!(
            err.to_string(),
            "Bin index 4 out of range for histogram with 3 bins"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::negative_bins(-3);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Number of bins must be non-negative, got -3"
        );

        match Error::no_bin(0) {
            Error::BinOutOfRange { index, bins } => {
                assert_eq!(index, -1);
                assert_eq!(bins, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::non_finite(f64::NAN);
        assert_eq!(err.to_string(), "Non-finite value: sample NaN is NaN or infinite");
    }
}
