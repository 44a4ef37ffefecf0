use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bwt_fm::index::{bwt, fm, sa};

fn make_reference(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = 42;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

fn bench_build_sa(c: &mut Criterion) {
    let reference = make_reference(10_000);

    c.bench_function("build_sa_10k", |b| {
        b.iter(|| {
            black_box(sa::build_sa(black_box(&reference)));
        })
    });
}

fn bench_forward(c: &mut Criterion) {
    let reference = make_reference(10_000);

    c.bench_function("bwt_forward_10k", |b| {
        b.iter(|| {
            black_box(bwt::forward(black_box(&reference)));
        })
    });
}

fn bench_inverse(c: &mut Criterion) {
    let reference = make_reference(10_000);
    let column = bwt::forward(&reference);

    c.bench_function("bwt_inverse_10k", |b| {
        b.iter(|| {
            black_box(bwt::inverse_bwt(black_box(&column)).unwrap());
        })
    });
}

fn bench_fm_build(c: &mut Criterion) {
    let reference = make_reference(10_000);
    let column = bwt::forward(&reference);

    c.bench_function("fm_build_10k", |b| {
        b.iter(|| {
            black_box(fm::FMIndex::build(black_box(&column)));
        })
    });
}

criterion_group!(benches, bench_build_sa, bench_forward, bench_inverse, bench_fm_build);
criterion_main!(benches);
