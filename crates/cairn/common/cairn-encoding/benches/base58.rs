use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use cairn_encoding::{decode, encode};

fn digest_sized() -> Vec<u8> {
    (0u8..32).map(|i| i.wrapping_mul(37).wrapping_add(11)).collect()
}

fn blob_name_sized() -> Vec<u8> {
    (0u8..127).map(|i| i.wrapping_mul(113).wrapping_add(5)).collect()
}

fn bench_encode_digest(c: &mut Criterion) {
    let data = digest_sized();
    c.bench_function("encode_32_bytes", |b| b.iter(|| encode(black_box(&data))));
}

fn bench_decode_digest(c: &mut Criterion) {
    let text = encode(&digest_sized());
    c.bench_function("decode_32_bytes", |b| {
        b.iter(|| decode(black_box(&text)).unwrap())
    });
}

fn bench_encode_max_blob_name(c: &mut Criterion) {
    let data = blob_name_sized();
    c.bench_function("encode_127_bytes", |b| b.iter(|| encode(black_box(&data))));
}

fn bench_decode_max_blob_name(c: &mut Criterion) {
    let text = encode(&blob_name_sized());
    c.bench_function("decode_127_bytes", |b| {
        b.iter(|| decode(black_box(&text)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_encode_digest,
    bench_decode_digest,
    bench_encode_max_blob_name,
    bench_decode_max_blob_name,
);
criterion_main!(benches);
