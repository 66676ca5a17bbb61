//! End-to-end streams through the facade crate

use approx::assert_relative_eq;
use equidepth::prelude::*;

fn run(distribution: SampleDistribution, bins: usize, samples: usize) -> EquiDepthHistogram {
    let data = SampleConfig::new(distribution)
        .with_samples(samples)
        .with_seed(7)
        .generate()
        .unwrap();
    let mut histogram = EquiDepthHistogram::new(bins);
    histogram.extend_from(data).unwrap();
    histogram
}

#[test]
fn test_every_distribution_keeps_all_samples_binned() {
    for distribution in [
        SampleDistribution::Uniform { min: -5.0, max: 5.0 },
        SampleDistribution::Normal { mean: 0.0, std_dev: 2.0 },
        SampleDistribution::Exponential { lambda: 1.0 },
        SampleDistribution::Diverse { min: 0.0, max: 100.0 },
    ] {
        let histogram = run(distribution, 10, 600);
        assert_eq!(histogram.total_count(), 600, "{distribution}");
        assert_eq!(histogram.counts().iter().sum::<usize>(), 600, "{distribution}");
    }
}

#[test]
fn test_outer_edges_match_observed_range() {
    let data = SampleConfig::new(SampleDistribution::Normal { mean: 10.0, std_dev: 3.0 })
        .with_samples(400)
        .with_seed(9)
        .generate()
        .unwrap();
    let mut histogram = EquiDepthHistogram::new(6);
    histogram.extend_from(data.iter().copied()).unwrap();

    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data[1..].iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let edges = histogram.boundaries();
    assert_relative_eq!(edges[0], min);
    assert_relative_eq!(edges[6], max);
}

#[test]
fn test_report_lists_every_bin() {
    let histogram = run(SampleDistribution::Uniform { min: 0.0, max: 1.0 }, 4, 50);
    let report = histogram.snapshot().to_string();

    assert!(report.starts_with("Current histogram state:\n"));
    for i in 1..=4 {
        assert!(report.contains(&format!("Bin {i}: ")), "missing bin {i} in {report}");
    }
    assert_eq!(report.lines().count(), 5);
}
