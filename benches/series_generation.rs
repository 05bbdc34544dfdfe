//! Benchmarks for economy series generation.
//!
//! Run:
//! - cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use radix_economy::config::SweepConfig;
use radix_economy::core::radix::DigitCounting;
use radix_economy::core::series::EconomySeries;

const SAMPLE_COUNTS: [usize; 3] = [100, 1000, 10_000];

fn sweep(sample_count: usize, counting: DigitCounting) -> SweepConfig {
    SweepConfig {
        sample_count,
        counting,
        ..SweepConfig::default()
    }
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("economy_series_generate");
    for counting in [DigitCounting::Logarithm, DigitCounting::Exact] {
        for &n in &SAMPLE_COUNTS {
            let cfg = sweep(n, counting);
            group.bench_with_input(BenchmarkId::new(counting.as_str(), n), &cfg, |b, cfg| {
                b.iter(|| EconomySeries::generate(black_box(cfg)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
