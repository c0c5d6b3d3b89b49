use collection_algos::cs::sort::{collate, CollatingIterator, Duplicates};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn sorted_random(rng: &mut StdRng, size: usize) -> Vec<u64> {
    let mut data: Vec<u64> = (0..size).map(|_| rng.gen_range(0..size as u64)).collect();
    data.sort_unstable();
    data
}

fn bench_collate(c: &mut Criterion) {
    let mut group = c.benchmark_group("collate");
    let mut rng = StdRng::seed_from_u64(1);

    for &size in &[1_000usize, 10_000, 100_000] {
        let a = sorted_random(&mut rng, size);
        let b = sorted_random(&mut rng, size);

        group.bench_with_input(BenchmarkId::new("keep", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(collate(Some(*a), Some(*b), Duplicates::Keep)))
        });
        group.bench_with_input(BenchmarkId::new("drop", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(collate(Some(*a), Some(*b), Duplicates::Drop)))
        });
        group.bench_with_input(
            BenchmarkId::new("iterator_4way", size),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| {
                    let sources = vec![a.iter(), b.iter(), a.iter(), b.iter()];
                    black_box(CollatingIterator::natural(sources).count())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_collate);
criterion_main!(benches);
