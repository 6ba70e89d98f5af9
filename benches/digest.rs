// Criterion benchmarks for the digest pipeline and minimum-cost bcrypt
// hashing in the saltbox crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use saltbox::{DigestAlgorithm, MIN_COST, digest_base64, generate_salt_with_cost, hash_password};

/// Benchmark digest-and-encode for both families at several input sizes.
fn bench_digest_base64(c: &mut Criterion) {
    let sizes: &[(&str, usize)] = &[("64 B", 64), ("1 KiB", 1024), ("64 KiB", 64 * 1024)];

    for algorithm in [DigestAlgorithm::Sha512, DigestAlgorithm::Sha3_512] {
        let mut group = c.benchmark_group(format!("digest_base64_{:?}", algorithm));
        for &(label, size) in sizes {
            let data = vec![0xABu8; size];
            group.bench_function(label, |b| {
                b.iter(|| {
                    let encoded = digest_base64(black_box(&data), algorithm);
                    black_box(encoded);
                });
            });
        }
        group.finish();
    }
}

/// Benchmark a bcrypt hash at the minimum cost factor. Higher costs scale
/// by 2^cost and would drown the report.
fn bench_hash_password_min_cost(c: &mut Criterion) {
    let salt = generate_salt_with_cost(MIN_COST).expect("salt generation failed");

    c.bench_function("hash_password (cost 4)", |b| {
        b.iter(|| {
            let stored = hash_password(black_box("correct-horse-battery-staple"), &salt)
                .expect("hashing failed");
            black_box(stored);
        });
    });
}

criterion_group!(benches, bench_digest_base64, bench_hash_password_min_cost);
criterion_main!(benches);
