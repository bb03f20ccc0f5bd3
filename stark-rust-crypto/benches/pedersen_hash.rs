use criterion::{criterion_group, criterion_main, Criterion};
use stark_rust_crypto::{pedersen_hash, Felt};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    let elements = [
        Felt::from_hex_unchecked(
            "0x03d937c035c878245caf64531a5756109c53068da139362728feb561405371cb",
        ),
        Felt::from_hex_unchecked(
            "0x0208a0a10250e382e1e4bbe2880906c2791bf6275695e02fbbc6aeff9cd8b31a",
        ),
    ];

    c.bench_function("pedersen_hash", |b| {
        b.iter(|| {
            pedersen_hash(black_box(&elements)).unwrap();
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
