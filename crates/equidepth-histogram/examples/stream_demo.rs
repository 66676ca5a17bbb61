//! Streams synthetic samples into an equi-depth histogram and prints its state
//!
//! ```text
//! cargo run -p equidepth-histogram --example stream_demo -- --bins 10 --samples 1000
//! RUST_LOG=equidepth_histogram=trace cargo run -p equidepth-histogram --example stream_demo
//! ```

use argh::FromArgs;
use equidepth_histogram::{EquiDepthHistogram, StreamingHistogram};
use equidepth_sampling::{SampleConfig, SampleDistribution};
use tracing_subscriber::EnvFilter;

/// Feed a seeded sample stream into an equi-depth histogram.
#[derive(FromArgs)]
struct Args {
    /// number of bins (default 10)
    #[argh(option, default = "10")]
    bins: usize,

    /// number of samples to insert (default 1000)
    #[argh(option, default = "1000")]
    samples: usize,

    /// sample shape: uniform, normal, exponential or diverse (default exponential)
    #[argh(option, default = "SampleDistribution::default()")]
    distribution: SampleDistribution,

    /// random seed (default 42)
    #[argh(option, default = "42")]
    seed: u64,

    /// print the histogram every N insertions; 0 prints only the final state (default 1)
    #[argh(option, default = "1")]
    every: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Args = argh::from_env();

    let config = SampleConfig::new(args.distribution)
        .with_samples(args.samples)
        .with_seed(args.seed);
    let samples = config.generate()?;
    println!(
        "Streaming {} samples from {} into {} bins",
        samples.len(),
        config.distribution,
        args.bins
    );

    let mut histogram = EquiDepthHistogram::new(args.bins);
    for (i, &sample) in samples.iter().enumerate() {
        histogram.add(sample)?;
        if args.every > 0 && (i + 1) % args.every == 0 {
            println!("{}", histogram.snapshot());
        }
    }

    if args.every == 0 || samples.len() % args.every != 0 {
        println!("{}", histogram.snapshot());
    }

    Ok(())
}
