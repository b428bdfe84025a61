//! Criterion benchmarks for the sweep validator.
//! - simple star rings (full sweep, no early exit) for n in {16, 64, 256, 1024}
//! - random segment soups (usually exit early on the first crossing)

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use warmap::geometry::rand::{draw_star_ring, ReplayToken, StarCfg, VertexCount};
use warmap::geometry::{Point, Segment};
use warmap::sweep::shamos_hoey;

fn random_segments(m: usize, seed: u64) -> Vec<Segment<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| {
            let a = Point::new(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000));
            let b = Point::new(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000));
            Segment::new(a, b)
        })
        .collect()
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    for &n in &[16usize, 64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("simple_ring", n), &n, |b, &n| {
            let cfg = StarCfg {
                vertex_count: VertexCount::Fixed(n),
                ..StarCfg::default()
            };
            b.iter_batched(
                || draw_star_ring(cfg, ReplayToken::new(43, 0)).segments().collect::<Vec<_>>(),
                |segs| {
                    let _ = shamos_hoey(&segs);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("segment_soup", n), &n, |b, &n| {
            b.iter_batched(
                || random_segments(n, 44),
                |segs| {
                    let _ = shamos_hoey(&segs);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
