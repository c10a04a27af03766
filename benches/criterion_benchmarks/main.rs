use criterion::criterion_main;

mod arithmetic;
mod parse;

criterion_main!(arithmetic::arithmetic, parse::parse);
