use athletics_client::{AgeGroup, ResultKind, classify, decode, encode};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_time", |b| {
        b.iter(|| encode(black_box(3_723_450.0), ResultKind::Time).expect("encode"))
    });
    c.bench_function("encode_distance", |b| {
        b.iter(|| encode(black_box(7.456), ResultKind::Distance).expect("encode"))
    });
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_time", |b| {
        b.iter(|| decode(black_box("01:02:03.45"), ResultKind::Time).expect("decode"))
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_ages", |b| {
        b.iter(|| {
            (0..=100u32)
                .filter(|age| classify(black_box(*age)) == AgeGroup::Senior)
                .count()
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_classify);
criterion_main!(benches);
