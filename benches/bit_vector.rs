use bitplane::BitVector;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn random_vector(length: usize) -> BitVector {
    BitVector::random_with(length, &mut ChaCha8Rng::seed_from_u64(length as u64))
}

fn bench_population_count(c: &mut Criterion) {
    let vector = random_vector(1 << 16);
    c.bench_function("population_count_64k", |b| {
        b.iter(|| black_box(&vector).population_count())
    });
}

fn bench_shift_left(c: &mut Criterion) {
    let vector = random_vector(10_000);
    c.bench_function("shift_left_10000_by_77", |b| {
        b.iter(|| {
            let mut v = vector.clone();
            v.shift_left(black_box(77));
            v
        })
    });
}

fn bench_rotate_single_word(c: &mut Criterion) {
    let vector = random_vector(50);
    c.bench_function("rotate_left_50_by_13", |b| {
        b.iter(|| {
            let mut v = vector.clone();
            v.rotate_left(black_box(13));
            v
        })
    });
}

fn bench_rotate_multi_word(c: &mut Criterion) {
    let vector = random_vector(10_000);
    c.bench_function("rotate_left_10000_by_3333", |b| {
        b.iter(|| {
            let mut v = vector.clone();
            v.rotate_left(black_box(3333));
            v
        })
    });
}

fn bench_reverse(c: &mut Criterion) {
    let vector = random_vector(10_001);
    c.bench_function("reverse_10001", |b| {
        b.iter(|| {
            let mut v = vector.clone();
            v.reverse();
            v
        })
    });
}

fn bench_render_hex(c: &mut Criterion) {
    let vector = random_vector(4096);
    c.bench_function("render_hex_4096", |b| {
        b.iter(|| black_box(&vector).to_formatted("X"))
    });
}

fn bench_xor(c: &mut Criterion) {
    let left = random_vector(1 << 16);
    let right = random_vector(1 << 16);
    c.bench_function("xor_64k", |b| {
        b.iter(|| {
            let mut v = left.clone();
            v.xor(black_box(&right))
        })
    });
}

criterion_group!(
    benches,
    bench_population_count,
    bench_shift_left,
    bench_rotate_single_word,
    bench_rotate_multi_word,
    bench_reverse,
    bench_render_hex,
    bench_xor
);
criterion_main!(benches);
