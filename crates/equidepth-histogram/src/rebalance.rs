//! Boundary rebalancing
//!
//! The estimator never keeps raw samples, so a rebalance works purely from the
//! current bin counts:
//!
//! 1. Prefix sums over the counts locate where each target cumulative count
//!    `k * floor(total / bins)` falls.
//! 2. Each new interior edge is linearly interpolated inside the straddled old
//!    bin, in proportion to how far the target reaches into that bin's count.
//! 3. Counts are then rebuilt by spreading `total` evenly spaced synthetic
//!    values over `[min, max]` through the new edges.
//!
//! Step 3 is lossy: the rebuilt counts describe a uniform fill of the observed
//! range, not the mass the old bins actually held.

use crate::lookup::find_bin;
use std::cmp::Ordering;
use tracing::trace;

/// Scratch buffers reused by every rebalance of one estimator
#[derive(Debug, Clone)]
pub(crate) struct RebalanceWorkspace {
    cumulative: Box<[usize]>,
    boundaries: Box<[f64]>,
}

impl RebalanceWorkspace {
    pub(crate) fn new(max_bins: usize) -> Self {
        Self {
            cumulative: vec![0; max_bins].into_boxed_slice(),
            boundaries: vec![0.0; max_bins + 1].into_boxed_slice(),
        }
    }

    /// Recompute `boundaries` and rebuild `counts` for `total_count` samples
    ///
    /// Callers guarantee `total_count > counts.len() > 0`, with
    /// `boundaries.len() == counts.len() + 1`.
    pub(crate) fn rebalance(
        &mut self,
        counts: &mut [usize],
        boundaries: &mut [f64],
        total_count: usize,
    ) {
        let max_bins = counts.len();
        debug_assert!(max_bins > 0 && total_count > max_bins);
        debug_assert_eq!(boundaries.len(), max_bins + 1);

        let target_per_bin = total_count / max_bins;
        prefix_sums(counts, &mut self.cumulative);

        let min_val = boundaries[0];
        let max_val = boundaries[max_bins];
        trace!(total_count, target_per_bin, min_val, max_val, "rebalancing bins");

        self.boundaries[0] = min_val;
        self.boundaries[max_bins] = max_val;
        for k in 0..max_bins - 1 {
            let target = (k + 1) * target_per_bin;
            self.boundaries[k + 1] =
                interpolate_edge(&self.cumulative, boundaries, target, min_val, max_val);
        }

        boundaries.copy_from_slice(&self.boundaries);
        counts.fill(0);
        spread_uniform(counts, boundaries, total_count, min_val, max_val);
    }
}

fn prefix_sums(counts: &[usize], out: &mut [usize]) {
    let mut running = 0;
    for (slot, &count) in out.iter_mut().zip(counts) {
        running += count;
        *slot = running;
    }
}

/// Midpoint search over non-decreasing prefix sums
///
/// Probes `lo + (hi - lo) / 2` over the inclusive range `[lo, hi]` and returns
/// the first probe equal to `target`, so within a run of equal prefix sums the
/// index is fixed by the probe sequence. When `target` is absent, returns the
/// index of the first prefix sum greater than it (`cumulative.len()` if none).
fn search_prefix(cumulative: &[usize], target: usize) -> usize {
    let mut lo = 0;
    // Exclusive upper end: `end == hi + 1`
    let mut end = cumulative.len();
    while lo < end {
        let mid = lo + (end - 1 - lo) / 2;
        match cumulative[mid].cmp(&target) {
            Ordering::Equal => return mid,
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => end = mid,
        }
    }
    lo
}

/// Place one new edge where the cumulative count reaches `target`
fn interpolate_edge(
    cumulative: &[usize],
    boundaries: &[f64],
    target: usize,
    min_val: f64,
    max_val: f64,
) -> f64 {
    let bins = cumulative.len();
    let index = search_prefix(cumulative, target);

    let lower = if index > 0 { boundaries[index] } else { min_val };
    let (upper, upper_index) = if index < bins {
        (boundaries[index + 1], index + 1)
    } else {
        (max_val, bins)
    };

    let previous = if index > 0 { cumulative[index - 1] } else { 0 };
    let straddled = cumulative[upper_index - 1] - previous;

    let fraction = if straddled > 0 {
        (target - previous) as f64 / straddled as f64
    } else {
        0.0
    };

    lower + fraction * (upper - lower)
}

/// Rebuild counts from `total_count` evenly spaced values over `[min_val, max_val]`
fn spread_uniform(
    counts: &mut [usize],
    boundaries: &[f64],
    total_count: usize,
    min_val: f64,
    max_val: f64,
) {
    let step = (max_val - min_val) / (total_count - 1) as f64;
    for j in 0..total_count {
        let value = min_val + j as f64 * step;
        // Out-of-range lookups are dropped
        if let Some(count) = find_bin(boundaries, value)
            .ok()
            .and_then(|bin| counts.get_mut(bin))
        {
            *count += 1;
        }
    }
}
