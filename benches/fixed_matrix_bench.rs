use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fixed_matrix::{FixedMatrix, MAX_DIM};

pub fn from_scale(c: &mut Criterion) {
    let this = black_box(FixedMatrix::new(3, MAX_DIM, MAX_DIM).unwrap());

    c.bench_function("from_scale", |b| b.iter(|| this.from_scale(black_box(7))));
}

pub fn scale_this(c: &mut Criterion) {
    let mut this = black_box(FixedMatrix::new(3, MAX_DIM, MAX_DIM).unwrap());

    c.bench_function("scale_this", |b| b.iter(|| this.scale_this(black_box(7))));
}

pub fn render(c: &mut Criterion) {
    let this = black_box(FixedMatrix::new(3, MAX_DIM, MAX_DIM).unwrap());

    c.bench_function("render", |b| {
        b.iter(|| {
            this.render()
                .map(|row| row.iter().copied().sum::<fixed_matrix::Int>())
                .sum::<fixed_matrix::Int>()
        })
    });
}

criterion_group!(benches, from_scale, scale_this, render,);
criterion_main!(benches);
