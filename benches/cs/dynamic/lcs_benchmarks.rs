use collection_algos::cs::dynamic::{lcs_length, longest_common_subsequence};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn bench_lcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs");
    let mut rng = StdRng::seed_from_u64(42);

    for &len in &[100usize, 500, 1_000] {
        let a = random_dna(&mut rng, len);
        let b = random_dna(&mut rng, len);

        group.bench_with_input(
            BenchmarkId::new("sequence", len),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| {
                    longest_common_subsequence(Some(*a), Some(*b)).map(|v| black_box(v.len()))
                })
            },
        );
        group.bench_with_input(BenchmarkId::new("length", len), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(lcs_length(Some(*a), Some(*b))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lcs);
criterion_main!(benches);
