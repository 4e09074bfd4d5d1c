use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use geoblock_core::{adjacent, neighbors, Direction, Geocode};

fn bench_adjacent(c: &mut Criterion) {
    // "zzzzzzzzz" north carries through every position.
    c.bench_function("adjacent_no_carry", |b| {
        b.iter(|| adjacent(black_box("u33dc1v0x"), Direction::East))
    });
    c.bench_function("adjacent_full_carry", |b| {
        b.iter(|| adjacent(black_box("zzzzzzzzz"), Direction::North))
    });
}

fn bench_neighbors(c: &mut Criterion) {
    c.bench_function("neighbors_p5", |b| {
        b.iter(|| neighbors(black_box("u33dc")))
    });
    c.bench_function("neighbors_p9", |b| {
        b.iter(|| neighbors(black_box("u33dc1v0x")))
    });
}

fn bench_validate(c: &mut Criterion) {
    c.bench_function("admit_block", |b| {
        b.iter(|| {
            let g = Geocode::new(black_box("U33DC1V0X"));
            g.is_valid_and_has_precision(4).then(|| g.with_max_precision(5))
        })
    });
}

criterion_group!(benches, bench_adjacent, bench_neighbors, bench_validate);
criterion_main!(benches);
