//! Property tests for seeded sample streams

use equidepth_sampling::{SampleConfig, SampleDistribution, SampleSource, UniformSource};
use proptest::prelude::*;

proptest! {
    // Property: a seed fully determines the stream
    #[test]
    fn prop_seed_reproduces_stream(seed in any::<u64>(), n in 0usize..300) {
        for distribution in [
            SampleDistribution::Uniform { min: -1.0, max: 1.0 },
            SampleDistribution::Normal { mean: 0.0, std_dev: 3.0 },
            SampleDistribution::Exponential { lambda: 2.0 },
            SampleDistribution::Diverse { min: 0.0, max: 50.0 },
        ] {
            let config = SampleConfig::new(distribution).with_samples(n).with_seed(seed);
            prop_assert_eq!(config.generate().unwrap(), config.generate().unwrap());
        }
    }

    // Property: uniform samples never leave their range
    #[test]
    fn prop_uniform_within_range(
        min in -1e6f64..1e6,
        width in 0.0f64..1e6,
        seed in any::<u64>()
    ) {
        let max = min + width;
        let mut source = UniformSource::new(min, max, seed).unwrap();
        for x in source.take_samples(200) {
            prop_assert!(x >= min && x <= max, "{} outside [{}, {}]", x, min, max);
        }
    }

    // Property: every generated sample is finite
    #[test]
    fn prop_samples_are_finite(seed in any::<u64>()) {
        let mut source = SampleConfig::new(SampleDistribution::Diverse { min: 0.0, max: 10.0 })
            .with_seed(seed)
            .source()
            .unwrap();
        prop_assert!(source.take_samples(500).iter().all(|x| x.is_finite()));
    }
}

#[test]
fn test_diverse_batch_mixes_shapes() {
    let data = SampleConfig::new(SampleDistribution::Diverse { min: 0.0, max: 100.0 })
        .with_samples(3000)
        .with_seed(11)
        .generate()
        .unwrap();

    assert_eq!(data.len(), 3000);
    // The normal and exponential thirds spill outside the uniform range
    assert!(data.iter().any(|&x| x < 0.0));
    assert!(data.iter().any(|&x| x > 100.0));
}
