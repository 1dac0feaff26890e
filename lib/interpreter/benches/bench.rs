use criterion::{criterion_group, criterion_main, Criterion};
use interpreter::interpret;
use itertools::Itertools;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("flat sum", |b| {
        let source = (0..100).map(|i| i.to_string()).join("+");
        b.iter(|| interpret(&source).unwrap())
    });

    c.bench_function("nested parens", |b| {
        let source = format!("{}1{}", "(1+".repeat(100), ")".repeat(100));
        b.iter(|| interpret(&source).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
