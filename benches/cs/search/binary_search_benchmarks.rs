use collection_algos::cs::search::{binary_search_first, binary_search_last};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn sorted_with_runs(rng: &mut StdRng, size: usize) -> Vec<u32> {
    let distinct = (size as u32 / 8).max(1);
    let mut data: Vec<u32> = (0..size).map(|_| rng.gen_range(0..distinct)).collect();
    data.sort_unstable();
    data
}

fn bench_binary_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_search");
    let mut rng = StdRng::seed_from_u64(7);

    for &size in &[1_000usize, 100_000, 1_000_000] {
        let data = sorted_with_runs(&mut rng, size);
        let targets: Vec<u32> = (0..256).map(|_| rng.gen_range(0..size as u32 / 8)).collect();

        group.bench_with_input(BenchmarkId::new("first", size), &data, |b, data| {
            b.iter(|| {
                for t in &targets {
                    black_box(binary_search_first(data, t, |x| *x, |x, y| x.cmp(y)).ok());
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("last", size), &data, |b, data| {
            b.iter(|| {
                for t in &targets {
                    black_box(binary_search_last(data, t, |x| *x, |x, y| x.cmp(y)).ok());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_binary_search);
criterion_main!(benches);
