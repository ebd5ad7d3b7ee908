use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rayon::ThreadPoolBuilder;

use parafold_core::layout::{Line, Page, ReflowParams, RepeatAnalyzer, remove_repeated_content};

#[derive(Clone)]
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn gen_f64(&mut self, min: f64, max: f64) -> f64 {
        let n = self.next_u64() as f64 / u64::MAX as f64;
        min + (max - min) * n
    }
}

/// A paper-like document: running header, body lines, a margin note on
/// every fourth page and a page number.
fn generate_pages(seed: u64, count: usize) -> Vec<Page> {
    let mut rng = XorShift64::new(seed);
    (0..count)
        .map(|p| {
            let mut lines = vec![Line::new("Proceedings of the Workshop", 72.0, 750.0, 200.0, 10.0)];
            for row in 0..40 {
                let jitter = rng.gen_f64(0.0, 2.0);
                lines.push(Line::new(
                    format!("body {p} {row} {}", rng.next_u64() % 1000),
                    72.0 + jitter,
                    700.0 - 14.0 * row as f64,
                    400.0,
                    10.0,
                ));
            }
            if p % 4 == 0 {
                lines.push(Line::new("Preprint", 20.0, 400.0, 30.0, 10.0));
            }
            lines.push(Line::new(format!("{}", p + 1), 290.0, 30.0, 20.0, 10.0));
            Page::new(p, 612.0, 792.0, lines)
        })
        .collect()
}

fn bench_verdicts(c: &mut Criterion) {
    let params = ReflowParams::default();
    let mut group = c.benchmark_group("repeat_verdicts");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(3));

    for &n in &[16usize, 64, 256] {
        let pages = generate_pages(0x5eed ^ n as u64, n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("sequential", n), &pages, |b, pages| {
            b.iter(|| {
                let analyzer = RepeatAnalyzer::new(pages, &params);
                black_box(analyzer.verdicts().len());
            })
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &pages, |b, pages| {
            b.iter(|| {
                let analyzer = RepeatAnalyzer::new(pages, &params);
                black_box(analyzer.par_verdicts().len());
            })
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let params = ReflowParams::default();
    let pool = ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("bench thread pool");
    let pages = generate_pages(42, 128);

    let mut group = c.benchmark_group("remove_repeated_content");
    group.sample_size(20);
    group.throughput(Throughput::Elements(pages.len() as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(remove_repeated_content(pages.clone(), &params, None).len()))
    });
    group.bench_function("pool4", |b| {
        b.iter(|| black_box(remove_repeated_content(pages.clone(), &params, Some(&pool)).len()))
    });
    group.finish();
}

criterion_group!(
    name = repeat_benches;
    config = Criterion::default();
    targets = bench_verdicts, bench_remove
);
criterion_main!(repeat_benches);
