//! Streaming equi-depth histogram estimator

use crate::lookup::find_bin;
use crate::rebalance::RebalanceWorkspace;
use crate::traits::StreamingHistogram;
use equidepth_core::{Error, Result};
use tracing::{debug, warn};

/// A dynamic equi-depth histogram, rebalanced on every insertion
///
/// Memory is fixed at construction: `max_bins` counts, `max_bins + 1` edges
/// and the scratch space a rebalance needs. Raw samples are never retained.
///
/// Insertion follows a few rules worth knowing before reading the counts:
///
/// - The first sample only seeds the lower edge and is never counted in a bin,
///   so `counts().iter().sum()` trails [`total_count`](Self::total_count) by one
///   until the first rebalance.
/// - The second sample unconditionally becomes the upper edge.
/// - Every later sample widens the outer edges if it falls outside them.
/// - Once more samples than bins have been seen, every insertion triggers a
///   full rebalance that rebuilds the counts from a uniform spread over the
///   observed range. Each insertion therefore costs `O(total_count)`.
///
/// Samples must be finite. [`add`](Self::add) does not check this; a NaN lands
/// in the last bin and corrupts the edges. Use [`try_add`](Self::try_add) for
/// untrusted input.
///
/// # Examples
///
/// ```rust
/// use equidepth_histogram::EquiDepthHistogram;
///
/// let mut histogram = EquiDepthHistogram::new(2);
/// for sample in [5.0, 1.0, 10.0] {
///     histogram.add(sample).unwrap();
/// }
///
/// assert_eq!(histogram.total_count(), 3);
/// assert_eq!(histogram.boundaries(), &[1.0, 5.0, 10.0]);
/// assert_eq!(histogram.counts(), &[1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct EquiDepthHistogram {
    counts: Box<[usize]>,
    boundaries: Box<[f64]>,
    total_count: usize,
    max_bins: usize,
    workspace: RebalanceWorkspace,
}

impl EquiDepthHistogram {
    /// Create an empty histogram with `max_bins` bins
    ///
    /// Zero bins is accepted, but the second insertion into such a histogram
    /// fails with [`Error::BinOutOfRange`].
    pub fn new(max_bins: usize) -> Self {
        debug!(max_bins, "creating equi-depth histogram");
        Self {
            counts: vec![0; max_bins].into_boxed_slice(),
            boundaries: vec![0.0; max_bins + 1].into_boxed_slice(),
            total_count: 0,
            max_bins,
            workspace: RebalanceWorkspace::new(max_bins),
        }
    }

    /// Create a histogram from a signed bin count
    ///
    /// Fails with [`Error::InvalidParameter`] when `n` is negative.
    pub fn with_signed_bins(n: i64) -> Result<Self> {
        let max_bins = usize::try_from(n).map_err(|_| Error::negative_bins(n))?;
        Ok(Self::new(max_bins))
    }

    /// Insert one sample
    ///
    /// On error the histogram should be treated as unusable.
    pub fn add(&mut self, sample: f64) -> Result<()> {
        if self.total_count == 0 {
            self.boundaries[0] = sample;
            self.total_count = 1;
            return Ok(());
        }

        let last = self.max_bins;
        if self.total_count == 1 {
            self.boundaries[last] = sample;
        }

        if sample < self.boundaries[0] {
            self.boundaries[0] = sample;
        }
        if sample > self.boundaries[last] {
            self.boundaries[last] = sample;
        }

        let bin = find_bin(&self.boundaries, sample).inspect_err(|err| {
            warn!(%err, sample, total_count = self.total_count, "no bin for sample");
        })?;
        self.counts[bin] += 1;
        self.total_count += 1;

        self.rebalance();
        Ok(())
    }

    /// Insert one sample, rejecting NaN and infinities before touching any state
    pub fn try_add(&mut self, sample: f64) -> Result<()> {
        if !sample.is_finite() {
            return Err(Error::non_finite(sample));
        }
        self.add(sample)
    }

    fn rebalance(&mut self) {
        if self.total_count <= self.max_bins {
            return;
        }
        self.workspace
            .rebalance(&mut self.counts, &mut self.boundaries, self.total_count);
    }

    /// Per-bin counts after the most recent insertion
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Bin edges after the most recent insertion
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Number of insertions so far, including the seeding first sample
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Fixed number of bins
    pub fn max_bins(&self) -> usize {
        self.max_bins
    }

    /// Check if no sample has been inserted yet
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

impl StreamingHistogram for EquiDepthHistogram {
    fn add(&mut self, sample: f64) -> Result<()> {
        EquiDepthHistogram::add(self, sample)
    }

    fn counts(&self) -> &[usize] {
        EquiDepthHistogram::counts(self)
    }

    fn boundaries(&self) -> &[f64] {
        EquiDepthHistogram::boundaries(self)
    }

    fn total_count(&self) -> usize {
        EquiDepthHistogram::total_count(self)
    }

    fn max_bins(&self) -> usize {
        EquiDepthHistogram::max_bins(self)
    }
}
