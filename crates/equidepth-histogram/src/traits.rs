//! Core traits for streaming histograms

use crate::types::HistogramSnapshot;
use equidepth_core::{Result, SampleSource};

/// A histogram that absorbs samples one at a time
///
/// Presentation code programs against this trait and only ever reads
/// [`counts`](Self::counts) and [`boundaries`](Self::boundaries).
pub trait StreamingHistogram {
    /// Insert one sample
    fn add(&mut self, sample: f64) -> Result<()>;

    /// Per-bin counts, index-aligned with the bin edges
    fn counts(&self) -> &[usize];

    /// Bin edges; bin `i` spans `boundaries[i]..=boundaries[i + 1]`
    fn boundaries(&self) -> &[f64];

    /// Number of successful insertions so far
    fn total_count(&self) -> usize;

    /// Fixed number of bins
    fn max_bins(&self) -> usize {
        self.counts().len()
    }

    /// Insert every sample in order, stopping at the first failure
    fn extend_from<I>(&mut self, samples: I) -> Result<()>
    where
        I: IntoIterator<Item = f64>,
        Self: Sized,
    {
        samples.into_iter().try_for_each(|sample| self.add(sample))
    }

    /// Pull `n` samples from a source and insert them, stopping at the first failure
    fn feed(&mut self, source: &mut dyn SampleSource, n: usize) -> Result<()> {
        for _ in 0..n {
            self.add(source.next_sample())?;
        }
        Ok(())
    }

    /// Owned copy of the current state
    fn snapshot(&self) -> HistogramSnapshot {
        HistogramSnapshot::from_parts(self.counts(), self.boundaries(), self.total_count())
    }
}
