use criterion::{black_box, Criterion, criterion_group};

use rationals::RationalBig;

fn large() -> (RationalBig, RationalBig) {
    let left = "912016490186296920119201192141970416029/1824032980372593840238402384283940832057"
        .parse().unwrap();
    let right = "-20325830850349869048604856908/9192901948302584358938698".parse().unwrap();
    (left, right)
}

pub fn add_small(c: &mut Criterion) {
    let (left, right) = (RationalBig::new(1, 2).unwrap(), RationalBig::new(1, 3).unwrap());
    c.bench_function("add two small rationals", |b| b.iter(|| {
        black_box(&left) + black_box(&right)
    }));
}

pub fn add_large(c: &mut Criterion) {
    let (left, right) = large();
    c.bench_function("add two large rationals", |b| b.iter(|| {
        black_box(&left) + black_box(&right)
    }));
}

pub fn mul_large(c: &mut Criterion) {
    let (left, right) = large();
    c.bench_function("multiply two large rationals", |b| b.iter(|| {
        black_box(&left) * black_box(&right)
    }));
}

pub fn cmp_large(c: &mut Criterion) {
    let (left, right) = large();
    c.bench_function("compare two large rationals", |b| b.iter(|| {
        black_box(&left).cmp(black_box(&right))
    }));
}

criterion_group!(arithmetic,
    add_small,
    add_large,
    mul_large,
    cmp_large,
);
