use criterion::{black_box, Criterion, criterion_group};

use rationals::RationalBig;

pub fn parse_fraction(c: &mut Criterion) {
    c.bench_function("parse an unreduced fraction", |b| b.iter(|| {
        black_box("117/1098").parse::<RationalBig>()
    }));
}

pub fn parse_large(c: &mut Criterion) {
    c.bench_function("parse a large fraction", |b| b.iter(|| {
        black_box("912016490186296920119201192141970416029/1824032980372593840238402384283940832058")
            .parse::<RationalBig>()
    }));
}

pub fn display_large(c: &mut Criterion) {
    let value: RationalBig = "-20325830850349869048604856908/9192901948302584358938697"
        .parse().unwrap();
    c.bench_function("display a large fraction", |b| b.iter(|| {
        black_box(&value).to_string()
    }));
}

criterion_group!(parse,
    parse_fraction,
    parse_large,
    display_large,
);
