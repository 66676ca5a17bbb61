//! Read-only views of histogram state

use std::fmt;

/// A single bin in a histogram snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (inclusive; a shared edge belongs to the lower bin)
    pub right: f64,
    /// Number of samples attributed to this bin
    pub count: usize,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: usize) -> Self {
        Self { left, right, count }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin's closed interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value <= self.right
    }

    /// Get the relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} - {:.2} | Count: {}",
            self.left, self.right, self.count
        )
    }
}

/// An owned copy of a streaming histogram's state at one point in the stream
///
/// `total_count` is the number of samples inserted, which need not equal the
/// sum of the bin counts: the very first sample only seeds the lower edge.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSnapshot {
    bins: Vec<HistogramBin>,
    total_count: usize,
}

impl HistogramSnapshot {
    /// Build a snapshot from index-aligned counts and edges
    ///
    /// `boundaries` must hold one more element than `counts`.
    pub fn from_parts(counts: &[usize], boundaries: &[f64], total_count: usize) -> Self {
        debug_assert_eq!(boundaries.len(), counts.len() + 1);
        let bins = counts
            .iter()
            .zip(boundaries.windows(2))
            .map(|(&count, edge)| HistogramBin::new(edge[0], edge[1], count))
            .collect();

        Self { bins, total_count }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the snapshot has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Number of samples inserted when the snapshot was taken
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Sum of the bin counts
    pub fn binned_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let Some(last) = self.bins.last() else {
            return vec![];
        };

        let mut edges = Vec::with_capacity(self.bins.len() + 1);
        edges.extend(self.bins.iter().map(|bin| bin.left));
        edges.push(last.right);
        edges
    }

    /// Get relative frequencies against the binned count
    pub fn frequencies(&self) -> Vec<f64> {
        let binned = self.binned_count();
        self.bins.iter().map(|bin| bin.frequency(binned)).collect()
    }
}

impl fmt::Display for HistogramSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current histogram state:")?;
        for (i, bin) in self.bins.iter().enumerate() {
            writeln!(f, "Bin {}: {}", i + 1, bin)?;
        }
        Ok(())
    }
}
