//! Bin lookup against a boundary array

use equidepth_core::{Error, Result};

/// Find the bin whose closed interval `[boundaries[i], boundaries[i + 1]]` contains `value`
///
/// Bins are scanned in increasing order, so a value sitting exactly on a shared
/// edge belongs to the lower bin. A value matching no interval (rounding past the
/// last edge, a NaN, or an inconsistent boundary array) falls back to the last bin.
/// The fallback is an error when there are no bins at all.
pub(crate) fn find_bin(boundaries: &[f64], value: f64) -> Result<usize> {
    if let Some(bin) = boundaries
        .windows(2)
        .position(|edge| edge[0] <= value && value <= edge[1])
    {
        return Ok(bin);
    }

    let bins = boundaries.len().saturating_sub(1);
    bins.checked_sub(1).ok_or_else(|| Error::no_bin(bins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_value() {
        let edges = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(find_bin(&edges, 1.5).unwrap(), 1);
        assert_eq!(find_bin(&edges, 0.0).unwrap(), 0);
        assert_eq!(find_bin(&edges, 3.0).unwrap(), 2);
    }

    #[test]
    fn test_shared_edge_goes_to_lower_bin() {
        let edges = [0.0, 1.0, 2.0];
        assert_eq!(find_bin(&edges, 1.0).unwrap(), 0);
    }

    #[test]
    fn test_unmatched_value_falls_back_to_last_bin() {
        let edges = [0.0, 1.0, 2.0];
        assert_eq!(find_bin(&edges, 2.5).unwrap(), 1);
        assert_eq!(find_bin(&edges, -1.0).unwrap(), 1);
        assert_eq!(find_bin(&edges, f64::NAN).unwrap(), 1);
    }

    #[test]
    fn test_degenerate_edges() {
        // Collapsed range: every bin claims the value, the first wins
        let edges = [4.0, 4.0, 4.0];
        assert_eq!(find_bin(&edges, 4.0).unwrap(), 0);
    }

    #[test]
    fn test_no_bins() {
        match find_bin(&[7.0], 7.0) {
            Err(Error::BinOutOfRange { index, bins }) => {
                assert_eq!(index, -1);
                assert_eq!(bins, 0);
            }
            other => panic!("expected BinOutOfRange, got {other:?}"),
        }
    }
}
